//! Dashboard header component
//!
//! Renders the title, bot status, and refresh progress gauge

use super::super::state::DashboardState;
use super::super::utils::format_compact_timestamp;
use crate::consts::dashboard_consts::refresh;
use crate::feed::types::BotState;
use crate::ui::targets::ids;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with title, status label, and refresh gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let (status_label, status_color) = match state.bot_state {
        BotState::Online => (state.targets.text_or(ids::BOT_STATUS, "Online"), Color::Green),
        BotState::Offline => (state.targets.text_or(ids::BOT_STATUS, "Offline"), Color::Red),
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("BOTBOARD v{}", version),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", state.environment),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  Bot: "),
        Span::styled(
            status_label,
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    // Gauge: refresh animation while a cycle is in flight, countdown texture
    // otherwise.
    let (progress_text, gauge_color, progress_percent) = if state.refresh_in_flight() {
        // Animated gauge - loops every 20 ticks for smooth animation
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        ("REFRESHING - Loading feeds".to_string(), Color::LightGreen, progress)
    } else {
        let label = match &state.last_update {
            Some(timestamp) => format!(
                "LIVE - every {}s, last update {}",
                refresh::INTERVAL_SECS,
                format_compact_timestamp(timestamp)
            ),
            None => format!("LIVE - refreshing every {}s", refresh::INTERVAL_SECS),
        };
        (label, Color::LightBlue, 100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
