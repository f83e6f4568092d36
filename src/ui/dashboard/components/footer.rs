//! Dashboard footer component
//!
//! Renders the key hints for the current view

use super::super::state::DashboardState;
use crate::refresher::View;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer with key hints and the active window width.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let view_hint = match state.view {
        View::Overview => "[A] Analytics",
        View::Analytics => "[A] Overview",
    };

    let footer_text = format!(
        "[Q] Quit | [R] Refresh | [E] CSV | {} | [1/2/3] 7/14/30d (now {}d) | [G/C/P/X] Reports",
        view_hint, state.time_range
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
