use crate::cards::Card;
use crate::table::GameState;
use crate::tui::app::AppState;
use crate::view::{SeatView, TableView};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{card_span, cards_line, popup_area};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let view = app.view();
    let size = f.area();
    let status_height: u16 = 3 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // header
            Constraint::Length(5),             // board
            Constraint::Min(3),                // seats
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let to_call = view.to_call.map(|v| v.to_string()).unwrap_or_else(|| "--".to_string());
    let header_lines = vec![
        Line::from(format!("Pot: ${}   Highest bet: {}", view.pot, app.table.highest_bet())),
        Line::from(format!(
            "ToCall: {}   Round complete: {}",
            to_call,
            if view.round_is_complete { "yes" } else { "no" }
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("holdem-table").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Board (5 slots); cards dealt this round are highlighted
    let board_block =
        Block::default().title(format!("Board: {}", view.state.label())).borders(Borders::ALL);
    let board_area = chunks[1];
    let board_inner = board_block.inner(board_area);
    f.render_widget(board_block, board_area);
    let card_width = board_inner.width.saturating_sub(2) / 5;
    let board_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(card_width); 5])
        .split(board_inner);
    let fresh = match view.state {
        GameState::Flop => 0..3,
        GameState::Turn => 3..4,
        GameState::River => 4..5,
        _ => 0..0,
    };
    for (i, slot) in board_chunks.iter().enumerate() {
        let border = fresh.contains(&i).then_some(Color::Yellow);
        render_card_widget(f, *slot, view.community_cards.get(i).copied(), border);
    }

    // Seats in two rows, top left-to-right then bottom right-to-left
    let seats_area = chunks[2];
    let total = view.seats.len();
    let top_cols = total.div_ceil(2) as u16;
    let bottom_cols = (total as u16).saturating_sub(top_cols);
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(seats_area);
    for (r, cols_this) in [top_cols, bottom_cols].into_iter().enumerate() {
        if cols_this == 0 {
            continue;
        }
        let col_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cols_this as u32); cols_this as usize])
            .split(row_chunks[r]);
        for c in 0..cols_this as usize {
            let idx = if r == 0 { c } else { total - 1 - c };
            if let Some(seat) = view.seats.get(idx) {
                render_seat(f, col_chunks[c], &view, idx, seat);
            }
        }
    }

    draw_status(f, chunks[3], app, &view);

    if app.history_open() {
        draw_history(f, app);
    } else if app.amount_entry_active() {
        draw_amount_entry(f, app);
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState, view: &TableView) {
    let block = Block::default().borders(Borders::ALL).title("Status");
    let status_inner = block.inner(area);
    f.render_widget(block, area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(status_inner);

    let mut left_info = match (view.state, view.current_seat()) {
        (GameState::Ended, _) => {
            let winner = view.winner.and_then(|i| view.seats.get(i));
            let name = winner.map(|s| s.name.as_str()).unwrap_or("nobody");
            vec![Line::from(format!("Hand over, {name} wins. Press N for a new table."))]
        }
        (_, Some(current)) => {
            let viewer = view.viewer_seat().map(|s| s.name.as_str()).unwrap_or("--");
            vec![Line::from(format!("Acting: {}   Viewing: {}", current.name, viewer))]
        }
        (_, None) => vec![Line::from("Waiting for the deal.")],
    };

    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    if let Some(owed) = view.to_call {
        let someone_raised = app.table.players().iter().any(|p| p.has_raised());
        left_info.push(Line::from(vec![
            Span::raw("Actions: "),
            Span::styled("K check", action_style(owed == 0)),
            Span::raw(" • "),
            Span::styled("C call", action_style(someone_raised)),
            Span::raw(" • "),
            Span::styled("R raise", action_style(true)),
            Span::raw(" • "),
            Span::styled("F fold", action_style(true)),
        ]));
    } else if view.state.in_hand() {
        left_info.push(Line::from(Span::styled(
            "Not your turn. Press . to view the acting seat.",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    let right_keys = vec![Line::from(""), Line::from("? help • H history • Q quit")];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn render_seat(f: &mut Frame, seat_area: Rect, view: &TableView, idx: usize, seat: &SeatView) {
    let mut title = format!("P{} {}", idx + 1, seat.name);
    if seat.is_viewer {
        title.push_str(" [You]");
    }
    if seat.is_current && view.state.in_hand() {
        title.push_str(" [Act]");
    }
    if seat.is_winner {
        title.push_str(" [WIN]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if seat.is_winner {
        block = block.border_style(Style::default().fg(Color::Green));
    } else if !seat.active && view.state != GameState::Open {
        block = block.border_style(Style::default().fg(Color::DarkGray));
    } else if seat.is_current && seat.is_viewer {
        block = block.border_style(Style::default().fg(Color::Magenta));
    } else if seat.is_current {
        block = block.border_style(Style::default().fg(Color::Yellow));
    } else if seat.is_viewer {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    let status = if seat.active {
        if seat.checked { "Checked" } else { "Active" }
    } else {
        "Out"
    };
    let mut lines = vec![
        Line::from(format!("Cash: ${}", seat.cash)),
        Line::from(format!("Bet: {}", seat.bet)),
        Line::from(format!("Status: {status}")),
    ];
    let shown: &[Card] = if seat.is_viewer {
        &view.own_cards
    } else if seat.is_winner {
        &view.winner_hand
    } else {
        &[]
    };
    if !shown.is_empty() {
        lines.push(cards_line(shown));
    }
    let seat_inner = block.inner(seat_area);
    f.render_widget(block, seat_area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), seat_inner);
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = popup_area(f.area(), 70, 80);
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries =
        app.table.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            let amount = entry.amount.map(|v| format!(" {v}")).unwrap_or_default();
            let name = app.table.player(&entry.player_id).map(|p| p.name()).unwrap_or("?");
            lines.push(Line::from(format!(
                "{} {}{} [{}]",
                name,
                entry.verb.label(),
                amount,
                entry.state.label()
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let inner_area = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner_area);
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = popup_area(f.area(), 70, 80);
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Lobby:", bold)),
        Line::from("- Up / Down: move selection"),
        Line::from("- Space: seat player"),
        Line::from("- Enter: deal"),
        Line::from(""),
        Line::from(Span::styled("Table:", bold)),
        Line::from("- K: check"),
        Line::from("- C: call"),
        Line::from("- R: raise (amount entry)"),
        Line::from("- F: fold"),
        Line::from("- ] / [ or Tab: view next / prev seat"),
        Line::from("- 1-9: view seat"),
        Line::from("- .: view the acting seat"),
        Line::from("- H: history"),
        Line::from("- N: new table once the hand is over"),
        Line::from(""),
        Line::from(Span::styled("Amount Entry:", bold)),
        Line::from("- 0-9: edit amount"),
        Line::from("- Backspace: delete digit"),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let inner_area = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner_area);
}

fn draw_amount_entry(f: &mut Frame, app: &AppState) {
    let area = popup_area(f.area(), 50, 30);
    let current = app.amount_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Current: {current}")),
        Line::from(format!("Min: {}", app.min_raise())),
        Line::from("Digits to edit, Backspace to delete"),
        Line::from("Enter submit, Esc cancel"),
    ];
    let block = Block::default().title("Raise Amount").borders(Borders::ALL);
    let inner_area = block.inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[0]);
    let error = app.amount_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    f.render_widget(Paragraph::new(error_line).alignment(Alignment::Center), chunks[1]);
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = block.inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(card_span(c)),
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
