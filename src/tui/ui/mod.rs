mod lobby;
mod table;

use crate::cards::{Card, Suit};
use crate::tui::app::{AppState, Scene};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Frame, Line, Span, Style};

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Lobby => lobby::draw_lobby(f, app),
        Scene::Table => table::draw_table(f, app),
    }
    if app.help_open() {
        table::draw_help(f);
    }
}

/// A box of the given share of `area`, centred in it.
pub(super) fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] =
        Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center).areas(area);
    let [area] =
        Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center).areas(area);
    area
}

pub(super) fn card_span(card: Card) -> Span<'static> {
    let color = match card.suit() {
        Suit::Hearts | Suit::Diamonds => Color::Red,
        Suit::Clubs | Suit::Spades => Color::White,
    };
    Span::styled(format!("{}{}", card.rank(), card.suit().glyph()), Style::default().fg(color))
}

pub(super) fn cards_line(cards: &[Card]) -> Line<'static> {
    let mut spans = Vec::with_capacity(cards.len() * 2);
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(card_span(*c));
    }
    Line::from(spans)
}
