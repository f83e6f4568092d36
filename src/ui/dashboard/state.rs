//! Dashboard state management
//!
//! Contains the main dashboard state struct and event intake

use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::{Event, EventType, Source};
use crate::feed::types::BotState;
use crate::refresher::View;
use crate::ui::app::UIConfig;
use crate::ui::charts::ChartRegistry;
use crate::ui::notifications::NotificationCenter;
use crate::ui::targets::TextTargets;

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// User-visible message for a failed refresh batch. One batch failure
/// produces exactly one of these.
pub const LOAD_ERROR_NOTIFICATION: &str =
    "Failed to load dashboard data. Please try refreshing.";

/// One display-ready row of the popular products ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub rank: usize,
    pub name: String,
    pub category: String,
    pub views: String,
}

/// Presentation state for the dashboard screens.
#[derive(Debug)]
pub struct DashboardState {
    /// The backend this session points at.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Current trailing window for conversation history, in days.
    pub time_range: u32,
    /// Which page is showing.
    pub view: View,
    /// Named text targets of the current page.
    pub targets: TextTargets,
    /// Live chart widgets keyed by slot.
    pub charts: ChartRegistry,
    /// Auto-dismissing toasts.
    pub notifications: NotificationCenter,
    /// Display-ready popular product ranking (top 5).
    pub product_rows: Vec<ProductRow>,
    /// Last known bot state.
    pub bot_state: BotState,
    /// Timestamp of the last successful refresh.
    pub last_update: Option<String>,
    /// Queue of events waiting to be processed.
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display.
    pub activity_logs: VecDeque<Event>,
    /// Whether a refresh cycle is in flight (shared with the refresher).
    busy: Arc<AtomicBool>,
    /// Animation tick counter.
    pub tick: usize,
    /// Whether to enable background colors.
    pub with_background_color: bool,
}

impl DashboardState {
    pub fn new(environment: Environment, busy: Arc<AtomicBool>, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time: Instant::now(),
            time_range: ui_config.time_range,
            view: View::Overview,
            targets: TextTargets::overview_page(),
            charts: ChartRegistry::new(),
            notifications: NotificationCenter::new(),
            product_rows: Vec::new(),
            bot_state: BotState::Offline,
            last_update: None,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            busy,
            tick: 0,
            with_background_color: ui_config.with_background_color,
        }
    }

    pub fn refresh_in_flight(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Switch pages. The new page brings its own target set; charts are
    /// rebuilt by the next update batch.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.targets = TextTargets::for_view(view);
    }

    /// Advance one UI tick: drain queued events into the activity log and
    /// the notification area, then expire stale notifications.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.react_to_event(&event);
            self.add_to_activity_log(event);
        }

        self.notifications.prune(Instant::now());
    }

    fn react_to_event(&mut self, event: &Event) {
        match (event.source, event.event_type) {
            (Source::Refresher, EventType::Error) => self
                .notifications
                .push_error(LOAD_ERROR_NOTIFICATION.to_string()),
            (Source::Refresher, EventType::Success) => {
                self.last_update = Some(event.timestamp.clone());
            }
            (Source::Exporter, EventType::Success) | (Source::Exporter, EventType::Waiting) => {
                self.notifications.push_success(event.msg.clone());
            }
            (Source::Exporter, EventType::Error) => {
                self.notifications.push_error(event.msg.clone());
            }
            _ => {}
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}

impl Drop for DashboardState {
    fn drop(&mut self) {
        // Teardown disposes every live chart widget.
        self.charts.dispose_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Arc::new(AtomicBool::new(false)),
            UIConfig::new(false, 7),
        )
    }

    #[test]
    // One failed batch event turns into exactly one error notification.
    fn refresher_error_event_raises_one_notification() {
        let mut state = state();
        state.add_event(Event::refresher_with_level(
            "Failed to load dashboard data: HTTP error with status 500".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));

        state.update();

        assert_eq!(state.notifications.len(), 1);
        let toast = state.notifications.iter().next().unwrap();
        assert_eq!(toast.message, LOAD_ERROR_NOTIFICATION);
    }

    #[test]
    fn successful_refresh_records_last_update() {
        let mut state = state();
        let event = Event::refresher_with_level(
            "Dashboard updated (7 day window)".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        let stamp = event.timestamp.clone();
        state.add_event(event);

        state.update();

        assert_eq!(state.last_update, Some(stamp));
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(Event::refresher_with_level(
                format!("event {}", i),
                EventType::Refresh,
                LogLevel::Debug,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 10");
    }

    #[test]
    fn switching_views_swaps_the_target_set() {
        let mut state = state();
        assert!(state.targets.get(crate::ui::targets::ids::TOTAL_USERS).is_some());

        state.set_view(View::Analytics);
        assert!(state.targets.get(crate::ui::targets::ids::TOTAL_USERS).is_none());
        assert!(state.targets.get(crate::ui::targets::ids::AI_CONFIDENCE).is_some());
    }
}
