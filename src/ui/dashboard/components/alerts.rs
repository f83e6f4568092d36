//! Notification overlay
//!
//! Draws auto-dismissing toasts in the top-right corner, above the rest of
//! the dashboard.

use super::super::state::DashboardState;
use crate::ui::notifications::NotificationLevel;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

const ALERT_WIDTH: u16 = 44;

/// Render pending notifications as an overlay. Nothing is drawn while the
/// notification area is empty.
pub fn render_alerts(f: &mut Frame, state: &DashboardState) {
    if state.notifications.is_empty() {
        return;
    }

    let frame_area = f.area();
    let width = ALERT_WIDTH.min(frame_area.width.saturating_sub(2));
    let height = (state.notifications.len() as u16 + 2).min(frame_area.height);
    let area = Rect {
        x: frame_area.right().saturating_sub(width + 1),
        y: frame_area.y + 1,
        width,
        height,
    };

    let lines: Vec<Line> = state
        .notifications
        .iter()
        .map(|notification| {
            let (icon, color) = match notification.level {
                NotificationLevel::Error => ("\u{26a0} ", Color::Red),
                NotificationLevel::Success => ("\u{2713} ", Color::Green),
            };
            Line::styled(
                format!("{}{}", icon, notification.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let alert_box = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, area);
    f.render_widget(alert_box, area);
}
