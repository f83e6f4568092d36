//! Dashboard state update logic
//!
//! Render operations: each takes one snapshot from a refresh batch and
//! pushes formatted values into text targets and chart slots.

use super::state::{DashboardState, ProductRow};
use crate::consts::dashboard_consts::TOP_PRODUCTS_SHOWN;
use crate::feed::types::{
    AiPerformanceSnapshot, BotState, BotStatus, ConversationPoint, OverviewSnapshot,
    PopularProduct,
};
use crate::refresher::{DashboardUpdate, View};
use crate::ui::charts::{ChartKind, ChartSeries, ChartSlot, ChartSpec, palette};
use crate::ui::format::{format_count, format_date_label, format_rate, group_digits, sanitize_label};
use crate::ui::targets::{TextTargets, ids};

use chrono::{Days, Local, NaiveDate};

/// Interaction-type breakdown shown on the analytics page. Sample series
/// until interaction kinds are tracked server-side.
const SAMPLE_INTERACTION_BREAKDOWN: [(&str, u64); 5] = [
    ("Product views", 45),
    ("Order tracking", 23),
    ("AI chat", 67),
    ("Support handoff", 12),
    ("Category browsing", 34),
];

/// Satisfaction histogram shown on the analytics page, counts per star
/// rating from one to five. Sample series until ratings are aggregated
/// server-side.
const SAMPLE_SATISFACTION_COUNTS: [u64; 5] = [2, 3, 8, 15, 25];

/// Write the six overview counters into their targets. Shared with the
/// one-shot CSV export path.
pub fn apply_overview_to_targets(targets: &mut TextTargets, overview: &OverviewSnapshot) {
    targets.set_text(ids::TOTAL_USERS, format_count(overview.total_users));
    targets.set_text(ids::ACTIVE_USERS, format_count(overview.active_users));
    targets.set_text(
        ids::ACTIVE_CONVERSATIONS,
        format_count(overview.active_conversations),
    );
    targets.set_text(ids::MESSAGES_TODAY, format_count(overview.messages_today));
    targets.set_text(ids::AI_RESPONSE_RATE, format_rate(overview.ai_response_rate));
    targets.set_text(
        ids::SATISFACTION_RATING,
        format_rate(overview.avg_satisfaction_rating),
    );
}

impl DashboardState {
    /// Render a fully successful refresh batch. Only called with a complete
    /// batch, so every visible element of the page moves together.
    pub fn apply_update(&mut self, update: DashboardUpdate) {
        self.time_range = update.time_range;

        self.update_overview_cards(&update.overview);
        self.update_bot_status(&update.status);
        self.update_popular_products(&update.products);

        match self.view {
            View::Overview => self.update_activity_chart(&update.conversations),
            View::Analytics => {
                self.update_conversations_chart(&update.conversations);
                self.update_user_activity_chart();
                self.update_interaction_chart();
                self.update_satisfaction_chart();
            }
        }

        if let Some(ai) = &update.ai {
            self.update_ai_performance_card(ai);
            self.update_confidence_distribution_chart(ai);
        }
    }

    fn update_overview_cards(&mut self, overview: &OverviewSnapshot) {
        apply_overview_to_targets(&mut self.targets, overview);
    }

    fn update_bot_status(&mut self, status: &BotStatus) {
        self.bot_state = status.status;
        let label = match status.status {
            BotState::Online => "Online",
            BotState::Offline => "Offline",
        };
        self.targets.set_text(ids::BOT_STATUS, label.to_string());
    }

    /// Activity trend on the overview page: conversations and messages as
    /// two line series over the trailing window.
    fn update_activity_chart(&mut self, points: &[ConversationPoint]) {
        let labels = points.iter().map(|p| format_date_label(p.date)).collect();
        let spec = ChartSpec {
            kind: ChartKind::Line,
            title: format!("Activity over the last {} days", self.time_range),
            labels,
            series: vec![
                ChartSeries {
                    name: "Conversations".to_string(),
                    color: palette::CONVERSATIONS,
                    values: points.iter().map(|p| p.conversations).collect(),
                },
                ChartSeries {
                    name: "Messages".to_string(),
                    color: palette::MESSAGES,
                    values: points.iter().map(|p| p.messages).collect(),
                },
            ],
            sample_data: false,
        };
        self.charts.replace(ChartSlot::Activity, spec);
    }

    /// Conversations on the analytics page: new conversations as bars with a
    /// total-messages line overlaid.
    fn update_conversations_chart(&mut self, points: &[ConversationPoint]) {
        let labels = points.iter().map(|p| format_date_label(p.date)).collect();
        let spec = ChartSpec {
            kind: ChartKind::BarLineCombo,
            title: "Conversations and messages".to_string(),
            labels,
            series: vec![
                ChartSeries {
                    name: "New conversations".to_string(),
                    color: palette::CONVERSATIONS,
                    values: points.iter().map(|p| p.conversations).collect(),
                },
                ChartSeries {
                    name: "Total messages".to_string(),
                    color: palette::MESSAGES_TREND,
                    values: points.iter().map(|p| p.messages).collect(),
                },
            ],
            sample_data: false,
        };
        self.charts.replace(ChartSlot::Conversations, spec);
    }

    fn update_popular_products(&mut self, products: &[PopularProduct]) {
        self.product_rows = products
            .iter()
            .take(TOP_PRODUCTS_SHOWN)
            .enumerate()
            .map(|(i, product)| ProductRow {
                rank: i + 1,
                name: sanitize_label(&product.product_name),
                category: sanitize_label(&product.category_name),
                views: format_count(product.view_count),
            })
            .collect();
    }

    fn update_ai_performance_card(&mut self, ai: &AiPerformanceSnapshot) {
        self.targets.set_text(
            ids::AI_CONFIDENCE,
            format!("{:.1}%", ai.average_confidence * 100.0),
        );
        self.targets
            .set_text(ids::AI_RESPONSES, format_count(ai.total_ai_responses));
        self.targets
            .set_text(ids::ESCALATION_RATE, format_rate(ai.escalation_rate));
    }

    /// Confidence histogram as a pie breakdown, one colored segment per
    /// bucket, lowest confidence first.
    fn update_confidence_distribution_chart(&mut self, ai: &AiPerformanceSnapshot) {
        let series = ai
            .confidence_distribution
            .iter()
            .enumerate()
            .map(|(i, bucket)| ChartSeries {
                name: bucket.range.clone(),
                color: palette::CONFIDENCE[i % palette::CONFIDENCE.len()],
                values: vec![bucket.count],
            })
            .collect();
        let spec = ChartSpec {
            kind: ChartKind::Pie,
            title: "AI confidence distribution".to_string(),
            labels: Vec::new(),
            series,
            sample_data: true,
        };
        self.charts.replace(ChartSlot::ConfidenceDistribution, spec);
    }

    /// Per-day user activity is not exposed by the backend yet; render a
    /// deterministic stand-in series sized to the current window.
    fn update_user_activity_chart(&mut self) {
        let today = Local::now().date_naive();
        let (active, new) = sample_user_activity(self.time_range);
        let spec = ChartSpec {
            kind: ChartKind::Line,
            title: "User activity".to_string(),
            labels: trailing_date_labels(today, self.time_range),
            series: vec![
                ChartSeries {
                    name: "Active users".to_string(),
                    color: palette::ACTIVE_USERS,
                    values: active,
                },
                ChartSeries {
                    name: "New users".to_string(),
                    color: palette::NEW_USERS,
                    values: new,
                },
            ],
            sample_data: true,
        };
        self.charts.replace(ChartSlot::UserActivity, spec);
    }

    fn update_interaction_chart(&mut self) {
        let series = SAMPLE_INTERACTION_BREAKDOWN
            .iter()
            .enumerate()
            .map(|(i, (name, count))| ChartSeries {
                name: (*name).to_string(),
                color: palette::INTERACTION[i % palette::INTERACTION.len()],
                values: vec![*count],
            })
            .collect();
        let spec = ChartSpec {
            kind: ChartKind::Doughnut,
            title: "Interaction types".to_string(),
            labels: Vec::new(),
            series,
            sample_data: true,
        };
        self.charts.replace(ChartSlot::Interaction, spec);
    }

    fn update_satisfaction_chart(&mut self) {
        let labels = (1..=SAMPLE_SATISFACTION_COUNTS.len())
            .map(|stars| format!("{}\u{2605}", stars))
            .collect();
        let spec = ChartSpec {
            kind: ChartKind::Bar,
            title: "Satisfaction ratings".to_string(),
            labels,
            series: vec![ChartSeries {
                name: "Ratings".to_string(),
                color: palette::SATISFACTION,
                values: SAMPLE_SATISFACTION_COUNTS.to_vec(),
            }],
            sample_data: true,
        };
        self.charts.replace(ChartSlot::Satisfaction, spec);

        // Breakdown card next to the histogram: weighted average and total.
        let total: u64 = SAMPLE_SATISFACTION_COUNTS.iter().sum();
        let weighted: u64 = SAMPLE_SATISFACTION_COUNTS
            .iter()
            .enumerate()
            .map(|(i, count)| count * (i as u64 + 1))
            .sum();
        let average = weighted as f64 / total.max(1) as f64;
        self.targets
            .set_text(ids::SATISFACTION_AVG, format_rate(average));
        self.targets
            .set_text(ids::SATISFACTION_TOTAL, group_digits(total));
    }
}

/// Deterministic stand-in user activity series, one value per day.
fn sample_user_activity(days: u32) -> (Vec<u64>, Vec<u64>) {
    let active = (0..days).map(|i| 10 + (i as u64 * 17) % 41).collect();
    let new = (0..days).map(|i| 2 + (i as u64 * 7) % 14).collect();
    (active, new)
}

/// Date labels for the trailing `days`-day window ending today.
fn trailing_date_labels(today: NaiveDate, days: u32) -> Vec<String> {
    (0..days)
        .rev()
        .map(|back| format_date_label(today - Days::new(back as u64)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::feed::types::derive_ai_performance;
    use crate::ui::app::UIConfig;
    use crate::ui::charts::ChartSlot;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Arc::new(AtomicBool::new(false)),
            UIConfig::new(false, 7),
        )
    }

    fn points(days: u32) -> Vec<ConversationPoint> {
        let start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        (0..days)
            .map(|i| ConversationPoint {
                date: start + Days::new(i as u64),
                conversations: i as u64 + 1,
                messages: (i as u64 + 1) * 4,
            })
            .collect()
    }

    fn batch(days: u32) -> DashboardUpdate {
        DashboardUpdate {
            overview: OverviewSnapshot {
                total_users: 1_500_000,
                active_users: 2_500,
                active_conversations: 42,
                escalated_conversations: 3,
                messages_today: 128,
                ai_response_rate: 87.25,
                avg_satisfaction_rating: 4.56,
            },
            conversations: points(days),
            products: vec![
                PopularProduct {
                    product_name: "<b>x</b>".to_string(),
                    category_name: "Gadgets\x1b[31m".to_string(),
                    view_count: 1_200,
                },
                PopularProduct {
                    product_name: "Plain plug".to_string(),
                    category_name: "Home".to_string(),
                    view_count: 64,
                },
            ],
            status: BotStatus {
                status: BotState::Online,
            },
            ai: None,
            time_range: days,
        }
    }

    #[test]
    fn overview_cards_format_their_counters() {
        let mut state = state();
        state.apply_update(batch(7));

        assert_eq!(state.targets.get(ids::TOTAL_USERS), Some("1.5M"));
        assert_eq!(state.targets.get(ids::ACTIVE_USERS), Some("2.5K"));
        assert_eq!(state.targets.get(ids::ACTIVE_CONVERSATIONS), Some("42"));
        assert_eq!(state.targets.get(ids::MESSAGES_TODAY), Some("128"));
        assert_eq!(state.targets.get(ids::AI_RESPONSE_RATE), Some("87.2"));
        assert_eq!(state.targets.get(ids::SATISFACTION_RATING), Some("4.6"));
        assert_eq!(state.targets.get(ids::BOT_STATUS), Some("Online"));
    }

    #[test]
    // Untrusted product fields render literally, with control codes stripped.
    fn product_rows_are_sanitized_but_literal() {
        let mut state = state();
        state.apply_update(batch(7));

        assert_eq!(state.product_rows.len(), 2);
        assert_eq!(state.product_rows[0].name, "<b>x</b>");
        assert_eq!(state.product_rows[0].category, "Gadgets[31m");
        assert_eq!(state.product_rows[0].views, "1.2K");
        assert_eq!(state.product_rows[1].rank, 2);
    }

    #[test]
    fn ranking_shows_at_most_top_five() {
        let mut state = state();
        let mut update = batch(7);
        update.products = (0..9u64)
            .map(|i| PopularProduct {
                product_name: format!("item {}", i),
                category_name: "misc".to_string(),
                view_count: 100 - i,
            })
            .collect();
        state.apply_update(update);
        assert_eq!(state.product_rows.len(), TOP_PRODUCTS_SHOWN);
    }

    #[test]
    // A wider window flows through to the rendered chart point count.
    fn activity_chart_follows_the_time_range() {
        let mut state = state();
        state.apply_update(batch(14));

        let widget = state.charts.get(ChartSlot::Activity).unwrap();
        assert_eq!(widget.spec.labels.len(), 14);
        assert_eq!(widget.spec.series[0].values.len(), 14);
        assert_eq!(state.time_range, 14);
    }

    #[test]
    // Repeated refreshes replace the slot's widget instead of accumulating.
    fn repeated_updates_keep_one_widget_per_slot() {
        let mut state = state();
        state.apply_update(batch(7));
        state.apply_update(batch(7));
        state.apply_update(batch(7));

        assert_eq!(state.charts.len(), 1);
        assert!(state.charts.get(ChartSlot::Activity).is_some());
    }

    #[test]
    fn analytics_view_renders_its_chart_set() {
        let mut state = state();
        state.set_view(View::Analytics);
        let mut update = batch(7);
        update.ai = Some(derive_ai_performance(&update.overview));
        state.apply_update(update);

        for slot in [
            ChartSlot::Conversations,
            ChartSlot::UserActivity,
            ChartSlot::Interaction,
            ChartSlot::Satisfaction,
            ChartSlot::ConfidenceDistribution,
        ] {
            assert!(state.charts.get(slot).is_some(), "missing {}", slot);
        }

        assert_eq!(state.targets.get(ids::AI_CONFIDENCE), Some("75.0%"));
        assert_eq!(state.targets.get(ids::AI_RESPONSES), Some("165"));
        assert_eq!(state.targets.get(ids::ESCALATION_RATE), Some("3.0"));
    }

    #[test]
    fn satisfaction_breakdown_summarizes_the_histogram() {
        let mut state = state();
        state.set_view(View::Analytics);
        state.apply_update(batch(7));

        assert_eq!(state.targets.get(ids::SATISFACTION_AVG), Some("4.1"));
        assert_eq!(state.targets.get(ids::SATISFACTION_TOTAL), Some("53"));

        let widget = state.charts.get(ChartSlot::Satisfaction).unwrap();
        assert!(widget.spec.sample_data);
        assert_eq!(widget.spec.labels.len(), 5);
    }

    #[test]
    fn confidence_segments_follow_their_buckets() {
        let overview = OverviewSnapshot::default();
        let ai = derive_ai_performance(&overview);

        let mut state = state();
        state.set_view(View::Analytics);
        let mut update = batch(7);
        update.ai = Some(ai);
        state.apply_update(update);

        let widget = state.charts.get(ChartSlot::ConfidenceDistribution).unwrap();
        assert_eq!(widget.spec.series.len(), 5);
        assert_eq!(widget.spec.series[0].name, "0.0-0.2");
        assert_eq!(widget.spec.series[4].name, "0.8-1.0");
    }

    #[test]
    fn trailing_labels_cover_the_window() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let labels = trailing_date_labels(today, 3);
        assert_eq!(labels, vec!["Aug 4", "Aug 5", "Aug 6"]);
    }

    #[test]
    fn sample_user_activity_is_deterministic() {
        assert_eq!(sample_user_activity(7), sample_user_activity(7));
        let (active, new) = sample_user_activity(14);
        assert_eq!(active.len(), 14);
        assert_eq!(new.len(), 14);
    }
}
