//! Chart slots and widget lifecycle
//!
//! A slot hosts at most one live chart widget. Replacing a slot disposes the
//! previous occupant before installing the new one, so repeated refreshes
//! never accumulate widgets.

use ratatui::style::Color;
use std::collections::HashMap;

/// Named visual slots the dashboard renders charts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ChartSlot {
    #[strum(to_string = "activity")]
    Activity,
    #[strum(to_string = "conversations")]
    Conversations,
    #[strum(to_string = "user-activity")]
    UserActivity,
    #[strum(to_string = "interaction")]
    Interaction,
    #[strum(to_string = "satisfaction")]
    Satisfaction,
    #[strum(to_string = "confidence-distribution")]
    ConfidenceDistribution,
}

/// Fixed visual encoding per chart. The terminal renderer maps doughnut and
/// pie onto a colored percentage breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    BarLineCombo,
    Doughnut,
    Pie,
}

/// One named, colored series of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: Color,
    pub values: Vec<u64>,
}

/// Declarative description of a chart: encoding, labels, and series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// Set on charts fed by fixed sample series rather than live data; the
    /// renderer marks their titles accordingly.
    pub sample_data: bool,
}

/// A live widget occupying a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartWidget {
    pub spec: ChartSpec,
    generation: u64,
}

impl ChartWidget {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Slot-to-widget mapping with dispose-before-replace semantics.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    widgets: HashMap<ChartSlot, ChartWidget>,
    generations: u64,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new widget in `slot`, disposing the previous occupant
    /// first. The slot holds exactly one live widget afterwards.
    pub fn replace(&mut self, slot: ChartSlot, spec: ChartSpec) {
        if let Some(prev) = self.widgets.remove(&slot) {
            log::debug!(
                "disposing chart widget in slot '{}' (generation {})",
                slot,
                prev.generation
            );
            drop(prev);
        }
        self.generations += 1;
        self.widgets.insert(
            slot,
            ChartWidget {
                spec,
                generation: self.generations,
            },
        );
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&ChartWidget> {
        self.widgets.get(&slot)
    }

    /// Dispose every live widget. Called on teardown.
    pub fn dispose_all(&mut self) {
        self.widgets.clear();
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

/// Fixed chart palette, carried over from the web dashboard's color scheme.
pub mod palette {
    use ratatui::style::Color;

    pub const CONVERSATIONS: Color = Color::Rgb(54, 162, 235);
    pub const MESSAGES: Color = Color::Rgb(75, 192, 192);
    pub const MESSAGES_TREND: Color = Color::Rgb(255, 99, 132);
    pub const ACTIVE_USERS: Color = Color::Rgb(75, 192, 192);
    pub const NEW_USERS: Color = Color::Rgb(255, 205, 86);
    pub const SATISFACTION: Color = Color::Rgb(255, 205, 86);

    pub const INTERACTION: [Color; 5] = [
        Color::Rgb(255, 99, 132),
        Color::Rgb(54, 162, 235),
        Color::Rgb(255, 205, 86),
        Color::Rgb(75, 192, 192),
        Color::Rgb(153, 102, 255),
    ];

    /// Red through green, lowest confidence bucket first.
    pub const CONFIDENCE: [Color; 5] = [
        Color::Rgb(220, 53, 69),
        Color::Rgb(255, 193, 7),
        Color::Rgb(255, 205, 86),
        Color::Rgb(23, 162, 184),
        Color::Rgb(40, 167, 69),
    ];
}
