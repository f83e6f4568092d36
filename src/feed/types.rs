//! Snapshot types returned by the analytics feeds.
//!
//! Every field is defaultable: the backend omits counters that are zero, so
//! each snapshot deserializes from a partial JSON object without error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline counters for the dashboard overview cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewSnapshot {
    pub total_users: u64,
    pub active_users: u64,
    pub active_conversations: u64,
    pub escalated_conversations: u64,
    pub messages_today: u64,
    /// Share of bot replies answered by the AI, as a percentage.
    pub ai_response_rate: f64,
    /// Average user rating on a 1-5 scale.
    pub avg_satisfaction_rating: f64,
}

/// One day of conversation volume inside the trailing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationPoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub conversations: u64,
    #[serde(default)]
    pub messages: u64,
}

/// A product ranked by recent view count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularProduct {
    pub product_name: String,
    pub category_name: String,
    pub view_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotState {
    Online,
    #[default]
    Offline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotStatus {
    pub status: BotState,
}

/// One bucket of the AI confidence histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBucket {
    pub range: String,
    pub count: u64,
}

/// AI answer quality metrics shown on the analytics view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiPerformanceSnapshot {
    /// Mean model confidence over recent responses, in [0, 1].
    pub average_confidence: f64,
    pub confidence_distribution: Vec<ConfidenceBucket>,
    pub escalation_rate: f64,
    pub total_ai_responses: u64,
}

/// Sample confidence histogram used until the backend exposes a dedicated
/// AI-performance endpoint. Clearly demo data; the analytics view labels the
/// derived chart as such.
const SAMPLE_CONFIDENCE_DISTRIBUTION: [(&str, u64); 5] = [
    ("0.0-0.2", 5),
    ("0.2-0.4", 12),
    ("0.4-0.6", 25),
    ("0.6-0.8", 45),
    ("0.8-1.0", 78),
];

const SAMPLE_AVERAGE_CONFIDENCE: f64 = 0.75;

/// Derives the AI-performance snapshot from the overview feed.
///
/// There is no `/api/analytics/ai-performance` endpoint yet; the escalation
/// rate comes from the overview counters and the rest is fixed sample data.
pub fn derive_ai_performance(overview: &OverviewSnapshot) -> AiPerformanceSnapshot {
    let confidence_distribution: Vec<ConfidenceBucket> = SAMPLE_CONFIDENCE_DISTRIBUTION
        .iter()
        .map(|(range, count)| ConfidenceBucket {
            range: (*range).to_string(),
            count: *count,
        })
        .collect();
    let total_ai_responses = confidence_distribution.iter().map(|b| b.count).sum();

    AiPerformanceSnapshot {
        average_confidence: SAMPLE_AVERAGE_CONFIDENCE,
        confidence_distribution,
        escalation_rate: overview.escalated_conversations as f64,
        total_ai_responses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Snapshots must tolerate partial JSON bodies, defaulting counters to zero.
    fn overview_defaults_missing_fields_to_zero() {
        let snapshot: OverviewSnapshot = serde_json::from_str(r#"{"total_users": 42}"#).unwrap();
        assert_eq!(snapshot.total_users, 42);
        assert_eq!(snapshot.active_users, 0);
        assert_eq!(snapshot.messages_today, 0);
        assert_eq!(snapshot.ai_response_rate, 0.0);
    }

    #[test]
    fn bot_status_parses_lowercase_states() {
        let online: BotStatus = serde_json::from_str(r#"{"status": "online"}"#).unwrap();
        assert_eq!(online.status, BotState::Online);

        let offline: BotStatus = serde_json::from_str(r#"{"status": "offline"}"#).unwrap();
        assert_eq!(offline.status, BotState::Offline);

        // A body with no status field defaults to offline.
        let empty: BotStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.status, BotState::Offline);
    }

    #[test]
    fn conversation_points_parse_calendar_dates() {
        let json = r#"[{"date": "2026-07-30", "conversations": 4, "messages": 31}]"#;
        let points: Vec<ConversationPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date.to_string(), "2026-07-30");
        assert_eq!(points[0].conversations, 4);
        assert_eq!(points[0].messages, 31);
    }

    #[test]
    fn derived_ai_performance_totals_its_buckets() {
        let overview = OverviewSnapshot {
            escalated_conversations: 7,
            ..Default::default()
        };
        let ai = derive_ai_performance(&overview);
        assert_eq!(ai.confidence_distribution.len(), 5);
        assert_eq!(
            ai.total_ai_responses,
            ai.confidence_distribution.iter().map(|b| b.count).sum::<u64>()
        );
        assert_eq!(ai.escalation_rate, 7.0);
        assert!(ai.average_confidence > 0.0 && ai.average_confidence <= 1.0);
    }
}
