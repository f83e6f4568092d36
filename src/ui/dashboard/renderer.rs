//! Dashboard main renderer

use super::components::{alerts, analytics, charts, footer, header, logs, overview, products};
use super::state::DashboardState;
use crate::refresher::View;
use crate::ui::charts::ChartSlot;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match state.view {
        View::Overview => render_overview_content(f, main_chunks[1], state),
        View::Analytics => render_analytics_content(f, main_chunks[1], state),
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);

    // Toasts draw last so they sit above everything else.
    alerts::render_alerts(f, state);
}

/// Overview page: counter cards on top, activity trend beside the product
/// ranking below.
fn render_overview_content(f: &mut Frame, area: Rect, state: &DashboardState) {
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(area);

    overview::render_overview_cards(f, content_chunks[0], state);

    let lower_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(content_chunks[1]);

    charts::render_chart_slot(f, lower_chunks[0], state.charts.get(ChartSlot::Activity));
    products::render_products_list(f, lower_chunks[1], state);
}

/// Analytics page: two chart rows above the product ranking table.
fn render_analytics_content(f: &mut Frame, area: Rect, state: &DashboardState) {
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(38),
            Constraint::Percentage(38),
            Constraint::Fill(1),
        ])
        .split(area);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(content_chunks[0]);

    charts::render_chart_slot(f, top_chunks[0], state.charts.get(ChartSlot::Conversations));
    charts::render_chart_slot(f, top_chunks[1], state.charts.get(ChartSlot::UserActivity));
    analytics::render_ai_performance_card(f, top_chunks[2], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(content_chunks[1]);

    charts::render_chart_slot(f, bottom_chunks[0], state.charts.get(ChartSlot::Interaction));
    charts::render_chart_slot(f, bottom_chunks[1], state.charts.get(ChartSlot::Satisfaction));
    charts::render_chart_slot(
        f,
        bottom_chunks[2],
        state.charts.get(ChartSlot::ConfidenceDistribution),
    );

    products::render_products_table(f, content_chunks[2], state);
}
