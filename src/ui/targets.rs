//! Named text targets
//!
//! The presentation surface the refresh cycle writes formatted values into.
//! Each page registers its own fixed set of target ids; writes to an id the
//! current page does not carry are logged and skipped, never fatal.

use crate::refresher::View;
use std::collections::HashMap;

/// Target ids, mirroring the element ids of the web dashboard this client
/// replaces so feeds and exports stay name-compatible.
pub mod ids {
    pub const TOTAL_USERS: &str = "total-users";
    pub const ACTIVE_USERS: &str = "active-users";
    pub const ACTIVE_CONVERSATIONS: &str = "active-conversations";
    pub const MESSAGES_TODAY: &str = "messages-today";
    pub const AI_RESPONSE_RATE: &str = "ai-response-rate";
    pub const SATISFACTION_RATING: &str = "satisfaction-rating";
    pub const BOT_STATUS: &str = "bot-status";

    // Analytics page only
    pub const AI_CONFIDENCE: &str = "ai-confidence";
    pub const AI_RESPONSES: &str = "ai-responses";
    pub const ESCALATION_RATE: &str = "escalation-rate";
    pub const SATISFACTION_AVG: &str = "satisfaction-avg";
    pub const SATISFACTION_TOTAL: &str = "satisfaction-total";
}

/// Placeholder shown in every counter before the first successful refresh.
pub const PLACEHOLDER_COUNTER: &str = "0";

const OVERVIEW_COUNTERS: [&str; 6] = [
    ids::TOTAL_USERS,
    ids::ACTIVE_USERS,
    ids::ACTIVE_CONVERSATIONS,
    ids::MESSAGES_TODAY,
    ids::AI_RESPONSE_RATE,
    ids::SATISFACTION_RATING,
];

const ANALYTICS_TARGETS: [&str; 5] = [
    ids::AI_CONFIDENCE,
    ids::AI_RESPONSES,
    ids::ESCALATION_RATE,
    ids::SATISFACTION_AVG,
    ids::SATISFACTION_TOTAL,
];

#[derive(Debug, Clone, Default)]
pub struct TextTargets {
    values: HashMap<&'static str, String>,
}

impl TextTargets {
    /// Target set for the overview page: the six counters plus the status label.
    pub fn overview_page() -> Self {
        let mut targets = Self::default();
        for id in OVERVIEW_COUNTERS {
            targets.register(id, PLACEHOLDER_COUNTER);
        }
        targets.register(ids::BOT_STATUS, "Unknown");
        targets
    }

    /// Target set for the analytics page.
    pub fn analytics_page() -> Self {
        let mut targets = Self::default();
        for id in ANALYTICS_TARGETS {
            targets.register(id, PLACEHOLDER_COUNTER);
        }
        targets.register(ids::BOT_STATUS, "Unknown");
        targets
    }

    pub fn for_view(view: View) -> Self {
        match view {
            View::Overview => Self::overview_page(),
            View::Analytics => Self::analytics_page(),
        }
    }

    fn register(&mut self, id: &'static str, initial: &str) {
        self.values.insert(id, initial.to_string());
    }

    /// Write a value into a named target. Targets absent from the current
    /// page are expected (pages carry different elements) and skipped.
    pub fn set_text(&mut self, id: &str, value: String) {
        match self.values.get_mut(id) {
            Some(slot) => *slot = value,
            None => log::debug!("ui target '{}' not present on this page, skipping", id),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// The displayed text for a target, or `fallback` when the page lacks it.
    pub fn text_or<'a>(&'a self, id: &str, fallback: &'a str) -> &'a str {
        self.get(id).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_to_registered_targets_stick() {
        let mut targets = TextTargets::overview_page();
        targets.set_text(ids::TOTAL_USERS, "1.5M".to_string());
        assert_eq!(targets.get(ids::TOTAL_USERS), Some("1.5M"));
    }

    #[test]
    // Pages carry different elements; a missing target is skipped, not fatal,
    // and does not grow the target set.
    fn writes_to_missing_targets_are_skipped() {
        let mut targets = TextTargets::analytics_page();
        targets.set_text(ids::TOTAL_USERS, "42".to_string());
        assert_eq!(targets.get(ids::TOTAL_USERS), None);
        assert_eq!(targets.text_or(ids::TOTAL_USERS, "0"), "0");
    }

    #[test]
    fn counters_start_at_their_placeholder() {
        let targets = TextTargets::overview_page();
        assert_eq!(targets.get(ids::TOTAL_USERS), Some("0"));
        assert_eq!(targets.get(ids::AI_RESPONSE_RATE), Some("0"));
        assert_eq!(targets.get(ids::BOT_STATUS), Some("Unknown"));
    }
}
