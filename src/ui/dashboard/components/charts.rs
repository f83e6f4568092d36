//! Chart widget rendering
//!
//! Maps a chart spec onto the matching ratatui widget. Line and combo
//! encodings draw on a braille canvas; categorical bars use a bar chart;
//! doughnut and pie encodings collapse to a colored percentage breakdown.

use crate::ui::charts::{ChartKind, ChartWidget};
use crate::ui::format::format_count;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, BarChart, Block, BorderType, Borders, Chart, Dataset, GraphType, Padding, Paragraph,
};

/// Render whatever widget currently occupies a slot, or a placeholder while
/// the first batch is still loading.
pub fn render_chart_slot(f: &mut Frame, area: Rect, widget: Option<&ChartWidget>) {
    match widget {
        Some(widget) => render_chart(f, area, widget),
        None => render_placeholder(f, area),
    }
}

fn render_chart(f: &mut Frame, area: Rect, widget: &ChartWidget) {
    let spec = &widget.spec;
    match spec.kind {
        ChartKind::Line | ChartKind::BarLineCombo => render_cartesian(f, area, widget),
        ChartKind::Bar => render_bars(f, area, widget),
        ChartKind::Doughnut | ChartKind::Pie => render_breakdown(f, area, widget),
    }
}

fn chart_block(widget: &ChartWidget) -> Block<'_> {
    let title = if widget.spec.sample_data {
        format!("{} (sample)", widget.spec.title)
    } else {
        widget.spec.title.clone()
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_placeholder(f: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("No data yet")
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(placeholder, area);
}

/// Line and bar+line combos share one braille canvas; the combo's first
/// series draws as bars, everything else as lines.
fn render_cartesian(f: &mut Frame, area: Rect, widget: &ChartWidget) {
    let spec = &widget.spec;

    let points: Vec<Vec<(f64, f64)>> = spec
        .series
        .iter()
        .map(|series| {
            series
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v as f64))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = spec
        .series
        .iter()
        .zip(points.iter())
        .enumerate()
        .map(|(i, (series, data))| {
            let graph_type = if spec.kind == ChartKind::BarLineCombo && i == 0 {
                GraphType::Bar
            } else {
                GraphType::Line
            };
            Dataset::default()
                .name(series.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(graph_type)
                .style(Style::default().fg(series.color))
                .data(data)
        })
        .collect();

    let x_max = (spec.labels.len().saturating_sub(1)).max(1) as f64;
    let y_max = spec
        .series
        .iter()
        .flat_map(|s| s.values.iter())
        .copied()
        .max()
        .unwrap_or(1)
        .max(1) as f64;

    let x_labels = axis_labels(&spec.labels);
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format_count((y_max / 2.0) as u64)),
        Span::raw(format_count(y_max as u64)),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block(widget))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(x_labels)
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(y_labels)
                .bounds([0.0, y_max * 1.1]),
        );

    f.render_widget(chart, area);
}

/// First, middle, and last category labels keep the axis readable.
fn axis_labels(labels: &[String]) -> Vec<Span<'_>> {
    match labels.len() {
        0 => vec![Span::raw("")],
        1 => vec![Span::raw(labels[0].as_str())],
        2 => labels.iter().map(|l| Span::raw(l.as_str())).collect(),
        n => vec![
            Span::raw(labels[0].as_str()),
            Span::raw(labels[n / 2].as_str()),
            Span::raw(labels[n - 1].as_str()),
        ],
    }
}

fn render_bars(f: &mut Frame, area: Rect, widget: &ChartWidget) {
    let spec = &widget.spec;
    let Some(series) = spec.series.first() else {
        render_placeholder(f, area);
        return;
    };

    let data: Vec<(&str, u64)> = spec
        .labels
        .iter()
        .map(String::as_str)
        .zip(series.values.iter().copied())
        .collect();

    let barchart = BarChart::default()
        .block(chart_block(widget))
        .data(&data)
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::default().fg(series.color))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(series.color)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(barchart, area);
}

/// Doughnut and pie encodings become a colored percentage breakdown: one
/// line per segment with a bullet, share, and count.
fn render_breakdown(f: &mut Frame, area: Rect, widget: &ChartWidget) {
    let spec = &widget.spec;
    let total: u64 = spec
        .series
        .iter()
        .map(|s| s.values.iter().sum::<u64>())
        .sum();

    let lines: Vec<Line> = spec
        .series
        .iter()
        .map(|segment| {
            let count: u64 = segment.values.iter().sum();
            let share = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            Line::from(vec![
                Span::styled("\u{25cf} ", Style::default().fg(segment.color)),
                Span::raw(format!("{:<18}", segment.name)),
                Span::styled(
                    format!("{:>5.1}%", share),
                    Style::default()
                        .fg(segment.color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", format_count(count)),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let breakdown = Paragraph::new(lines).block(chart_block(widget).padding(Padding::uniform(1)));
    f.render_widget(breakdown, area);
}
