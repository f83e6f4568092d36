//! Overview counter cards
//!
//! Renders the six headline counters from their text targets

use super::super::state::DashboardState;
use crate::ui::targets::ids;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const CARDS: [(&str, &str, Color); 6] = [
    ("Total Users", ids::TOTAL_USERS, Color::Cyan),
    ("Active Users", ids::ACTIVE_USERS, Color::Green),
    ("Active Conversations", ids::ACTIVE_CONVERSATIONS, Color::Yellow),
    ("Messages Today", ids::MESSAGES_TODAY, Color::LightBlue),
    ("AI Response Rate %", ids::AI_RESPONSE_RATE, Color::Magenta),
    ("Satisfaction /5", ids::SATISFACTION_RATING, Color::LightYellow),
];

/// Render the counter card row.
pub fn render_overview_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(area);

    for ((title, id, color), chunk) in CARDS.iter().zip(card_chunks.iter()) {
        render_card(f, *chunk, title, state.targets.text_or(id, "0"), *color);
    }
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: &str, color: Color) {
    let card = Paragraph::new(vec![Line::from(""), Line::from(value.to_string())])
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(card, area);
}
