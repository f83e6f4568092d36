//! AI performance card
//!
//! Confidence gauge plus response and escalation counters

use super::super::state::DashboardState;
use crate::ui::targets::ids;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

/// Render the AI performance card on the analytics page.
pub fn render_ai_performance_card(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("AI PERFORMANCE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Fill(1)])
        .split(inner);

    let confidence_text = state.targets.text_or(ids::AI_CONFIDENCE, "0");
    let confidence_percent = confidence_text
        .trim_end_matches('%')
        .parse::<f64>()
        .unwrap_or(0.0);
    // Same thresholds the progress bar used on the web dashboard.
    let confidence_color = if confidence_percent >= 80.0 {
        Color::Green
    } else if confidence_percent >= 60.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(Block::default().title("Average confidence"))
        .gauge_style(
            Style::default()
                .fg(confidence_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent((confidence_percent as u16).min(100))
        .label(confidence_text.to_string());
    f.render_widget(gauge, chunks[0]);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("AI responses: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.targets.text_or(ids::AI_RESPONSES, "0").to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Escalations: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.targets.text_or(ids::ESCALATION_RATE, "0").to_string(),
                Style::default().fg(Color::LightRed),
            ),
        ]),
        Line::from(vec![
            Span::styled("Avg rating: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(
                    "{} / {}",
                    state.targets.text_or(ids::SATISFACTION_AVG, "0"),
                    state.targets.text_or(ids::SATISFACTION_TOTAL, "0")
                ),
                Style::default().fg(Color::LightYellow),
            ),
            Span::styled(" ratings", Style::default().fg(Color::Gray)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), chunks[1]);
}
