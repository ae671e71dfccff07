use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::popup_area;

pub(super) fn draw_lobby(f: &mut Frame, app: &AppState) {
    let area = popup_area(f.area(), 60, 80);
    let block = Block::default().title("holdem-table").borders(Borders::ALL);
    let inner_all = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(3)])
        .split(inner_all);

    let cfg = app.table.config();
    let title = vec![
        Line::from(Span::styled("Lobby", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!(
            "Seated: {}   Starting cash: ${}   Min players: {}",
            app.table.players().len(),
            cfg.starting_cash,
            cfg.min_players
        )),
    ];
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), rows[0]);

    let items: Vec<ListItem> = app
        .lobby_items_display()
        .into_iter()
        .enumerate()
        .map(|(i, it)| {
            let style = if i == app.lobby_index {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(it, style)))
        })
        .collect();
    f.render_widget(List::new(items), rows[1]);

    let mut footer: Vec<Line> = Vec::new();
    if let Some(err) = app.action_error() {
        footer.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))));
    } else {
        footer.push(Line::from(""));
    }
    footer.push(Line::from(Span::styled(
        "[↑/↓] Move  [Space] Seat  [Enter] Deal  [?] Help  [Q] Quit",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), rows[2]);
}
