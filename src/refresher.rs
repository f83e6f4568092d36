//! Refresh cycle coordination
//!
//! Owns the periodic fetch-and-publish loop: every cycle issues the feed
//! batch concurrently, and only a fully successful batch reaches the UI.

use crate::consts::dashboard_consts::{refresh, reports};
use crate::events::{EventSender, EventType};
use crate::feed::AnalyticsFeed;
use crate::feed::error::FeedError;
use crate::feed::types::{
    AiPerformanceSnapshot, BotStatus, ConversationPoint, OverviewSnapshot, PopularProduct,
    derive_ai_performance,
};
use crate::logging::LogLevel;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{broadcast, mpsc};
use tokio::time::MissedTickBehavior;

/// Which page of the dashboard is active. The analytics view widens the
/// refresh batch with the derived AI-performance snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Overview,
    Analytics,
}

/// Report kinds a user can trigger an export for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ReportKind {
    #[strum(to_string = "overview")]
    Overview,
    #[strum(to_string = "conversations")]
    Conversations,
    #[strum(to_string = "products")]
    Products,
    #[strum(to_string = "AI performance")]
    AiPerformance,
}

/// Commands the UI sends to the refresher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Manual refresh request. Dropped by the sender while a cycle is in
    /// flight, and guarded again here.
    Refresh,
    /// Switch the trailing conversation window and refresh immediately.
    SetTimeRange(u32),
    /// Switch pages; the analytics page performs a superset refresh.
    SetView(View),
    /// The terminal gained or lost focus; a hidden view stops the timer.
    VisibilityChanged { hidden: bool },
    /// Trigger a (simulated) report export.
    ExportReport(ReportKind),
}

/// One fully successful refresh batch. Either every snapshot is present or
/// nothing is published, so the UI never renders a partial cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardUpdate {
    pub overview: OverviewSnapshot,
    pub conversations: Vec<ConversationPoint>,
    pub products: Vec<PopularProduct>,
    pub status: BotStatus,
    pub ai: Option<AiPerformanceSnapshot>,
    pub time_range: u32,
}

/// Drives the refresh lifecycle for one dashboard session.
pub struct Refresher {
    feed: Box<dyn AnalyticsFeed>,
    time_range: u32,
    view: View,
    busy: Arc<AtomicBool>,
    update_sender: mpsc::Sender<DashboardUpdate>,
    event_sender: EventSender,
}

impl Refresher {
    pub fn new(
        feed: Box<dyn AnalyticsFeed>,
        time_range: u32,
        busy: Arc<AtomicBool>,
        update_sender: mpsc::Sender<DashboardUpdate>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            feed,
            time_range,
            view: View::Overview,
            busy,
            update_sender,
            event_sender,
        }
    }

    /// Runs until shutdown: an immediate refresh, then one refresh per timer
    /// period while the view is visible, interleaved with UI commands.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<Command>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        let mut timer_active = true;
        let mut interval = tokio::time::interval(refresh::interval());
        // Ticks elapsed while a slow cycle held the loop are dropped rather
        // than replayed in a burst.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = interval.tick(), if timer_active => {
                    self.refresh().await;
                }
                cmd = commands.recv() => match cmd {
                    Some(Command::Refresh) => self.refresh().await,
                    Some(Command::SetTimeRange(days)) => {
                        if days != self.time_range {
                            self.time_range = days;
                            self.refresh().await;
                        }
                    }
                    Some(Command::SetView(view)) => {
                        if view != self.view {
                            self.view = view;
                            self.refresh().await;
                        }
                    }
                    Some(Command::VisibilityChanged { hidden }) => {
                        if hidden {
                            timer_active = false;
                        } else if !timer_active {
                            timer_active = true;
                            interval.reset();
                        }
                    }
                    Some(Command::ExportReport(kind)) => self.export_report(kind).await,
                    None => break,
                }
            }
        }
    }

    /// One refresh cycle. At most one runs at a time; the busy flag is
    /// released on every path out of the match below.
    pub async fn refresh(&mut self) {
        if self.busy.swap(true, Ordering::SeqCst) {
            return;
        }

        match self.fetch_batch().await {
            Ok(update) => {
                self.event_sender
                    .send_refresh_event(
                        format!("Dashboard updated ({} day window)", update.time_range),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                let _ = self.update_sender.send(update).await;
            }
            Err(e) => {
                let log_level = e.log_level();
                self.event_sender
                    .send_refresh_event(
                        format!("Failed to load dashboard data: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }

        self.busy.store(false, Ordering::SeqCst);
    }

    /// Issues the feed batch concurrently and joins all-or-nothing: the first
    /// failure fails the whole cycle and no snapshot reaches the UI.
    async fn fetch_batch(&self) -> Result<DashboardUpdate, FeedError> {
        let (overview, conversations, products, status) = futures::try_join!(
            self.feed.overview(),
            self.feed.conversation_history(self.time_range),
            self.feed.popular_products(),
            self.feed.bot_status(),
        )?;

        let ai = matches!(self.view, View::Analytics).then(|| derive_ai_performance(&overview));

        Ok(DashboardUpdate {
            overview,
            conversations,
            products,
            status,
            ai,
            time_range: self.time_range,
        })
    }

    /// Report preparation is simulated with a fixed delay; the backend has no
    /// export endpoint yet.
    async fn export_report(&self, kind: ReportKind) {
        self.event_sender
            .send_export_event(
                format!("Preparing {} report...", kind),
                EventType::Waiting,
                LogLevel::Info,
            )
            .await;

        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(reports::preparation_delay()).await;
            sender
                .send_export_event(
                    format!("{} report is ready for download", kind),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::{Event, Source};
    use crate::feed::MockAnalyticsFeed;
    use crate::feed::types::BotState;
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn harness(
        feed: MockAnalyticsFeed,
        time_range: u32,
    ) -> (
        Refresher,
        mpsc::Receiver<DashboardUpdate>,
        mpsc::Receiver<Event>,
        Arc<AtomicBool>,
    ) {
        let busy = Arc::new(AtomicBool::new(false));
        let (update_sender, update_receiver) = mpsc::channel(8);
        let (event_sender, event_receiver) = mpsc::channel(8);
        let refresher = Refresher::new(
            Box::new(feed),
            time_range,
            busy.clone(),
            update_sender,
            EventSender::new(event_sender),
        );
        (refresher, update_receiver, event_receiver, busy)
    }

    fn healthy_feed(expected_days: u32) -> MockAnalyticsFeed {
        let mut feed = MockAnalyticsFeed::new();
        feed.expect_environment()
            .return_const(Environment::Local);
        feed.expect_overview()
            .returning(|| Ok(OverviewSnapshot::default()));
        feed.expect_conversation_history()
            .with(eq(expected_days))
            .returning(|days| {
                let start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
                Ok((0..days)
                    .map(|i| ConversationPoint {
                        date: start + chrono::Days::new(i as u64),
                        conversations: i as u64,
                        messages: (i * 3) as u64,
                    })
                    .collect())
            });
        feed.expect_popular_products().returning(|| Ok(Vec::new()));
        feed.expect_bot_status().returning(|| {
            Ok(BotStatus {
                status: BotState::Online,
            })
        });
        feed
    }

    #[tokio::test]
    // A successful cycle publishes exactly one update carrying every snapshot.
    async fn successful_batch_publishes_one_update() {
        let (mut refresher, mut updates, mut events, busy) = harness(healthy_feed(7), 7);

        refresher.refresh().await;

        let update = updates.try_recv().expect("expected a dashboard update");
        assert_eq!(update.conversations.len(), 7);
        assert_eq!(update.status.status, BotState::Online);
        assert_eq!(update.time_range, 7);
        assert!(update.ai.is_none(), "overview view skips the AI feed");
        assert!(updates.try_recv().is_err(), "exactly one update per cycle");

        let event = events.try_recv().unwrap();
        assert_eq!(event.event_type, EventType::Success);
        assert!(!busy.load(Ordering::SeqCst), "busy released after cycle");
    }

    #[tokio::test]
    // Any failing request fails the whole batch: no update, one error event.
    async fn failed_batch_publishes_nothing_and_one_error() {
        let mut feed = MockAnalyticsFeed::new();
        feed.expect_overview()
            .returning(|| Ok(OverviewSnapshot::default()));
        feed.expect_conversation_history()
            .returning(|_| Ok(Vec::new()));
        feed.expect_popular_products().returning(|| {
            Err(FeedError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        feed.expect_bot_status()
            .returning(|| Ok(BotStatus::default()));

        let (mut refresher, mut updates, mut events, busy) = harness(feed, 7);
        refresher.refresh().await;

        assert!(updates.try_recv().is_err(), "no partial update on failure");
        let event = events.try_recv().unwrap();
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.source, Source::Refresher);
        assert!(events.try_recv().is_err(), "exactly one error per batch");
        assert!(!busy.load(Ordering::SeqCst), "busy released after failure");
    }

    #[tokio::test]
    // A refresh while one is in flight is a no-op: no feed call happens.
    async fn refresh_while_busy_is_a_noop() {
        let mut feed = MockAnalyticsFeed::new();
        feed.expect_overview().times(0);
        feed.expect_conversation_history().times(0);
        feed.expect_popular_products().times(0);
        feed.expect_bot_status().times(0);

        let (mut refresher, mut updates, mut events, busy) = harness(feed, 7);
        busy.store(true, Ordering::SeqCst);

        refresher.refresh().await;

        assert!(updates.try_recv().is_err());
        assert!(events.try_recv().is_err());
        assert!(busy.load(Ordering::SeqCst), "in-flight flag left untouched");
    }

    #[tokio::test]
    // Widening the window makes the next history request use the new day count.
    async fn time_range_change_drives_next_history_request() {
        let (mut refresher, mut updates, _events, _busy) = harness(healthy_feed(14), 14);

        refresher.refresh().await;

        let update = updates.try_recv().unwrap();
        assert_eq!(update.time_range, 14);
        assert_eq!(update.conversations.len(), 14);
    }

    #[tokio::test]
    // The analytics view widens the batch with the derived AI snapshot.
    async fn analytics_view_includes_ai_performance() {
        let (mut refresher, mut updates, _events, _busy) = harness(healthy_feed(7), 7);
        refresher.view = View::Analytics;

        refresher.refresh().await;

        let update = updates.try_recv().unwrap();
        let ai = update.ai.expect("analytics batch carries AI performance");
        assert_eq!(ai.confidence_distribution.len(), 5);
    }
}
