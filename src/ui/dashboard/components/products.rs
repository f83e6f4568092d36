//! Popular products components
//!
//! Ranking list on the overview page, full table on the analytics page

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, Wrap};

/// Badge colors by rank, gold first.
const RANK_COLORS: [Color; 5] = [
    Color::Yellow,
    Color::Gray,
    Color::Green,
    Color::Cyan,
    Color::Blue,
];

fn rank_color(rank: usize) -> Color {
    RANK_COLORS
        .get(rank.saturating_sub(1))
        .copied()
        .unwrap_or(Color::Gray)
}

/// Render the top products ranking list.
pub fn render_products_list(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("POPULAR PRODUCTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    if state.product_rows.is_empty() {
        let empty = Paragraph::new("No product data to display")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = state
        .product_rows
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{}. ", row.rank),
                    Style::default()
                        .fg(rank_color(row.rank))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(row.name.clone()),
                Span::styled(
                    format!("  {}", row.category),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {} views", row.views),
                    Style::default().fg(Color::LightBlue),
                ),
            ])
        })
        .collect();

    let list = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(list, area);
}

/// Render the product ranking table on the analytics page.
pub fn render_products_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header = Row::new(["#", "Product", "Category", "Views"])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .product_rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.rank.to_string())
                    .style(Style::default().fg(rank_color(row.rank))),
                Cell::from(row.name.clone()),
                Cell::from(row.category.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(row.views.clone()).style(Style::default().fg(Color::LightBlue)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("PRODUCT RANKING")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(table, area);
}
