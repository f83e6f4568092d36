use crate::environment::Environment;
use crate::feed::error::FeedError;
use crate::feed::types::{BotStatus, ConversationPoint, OverviewSnapshot, PopularProduct};

pub(crate) mod client;
pub mod error;
pub mod types;
pub use client::FeedClient;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// The set of analytics feeds one refresh cycle draws from.
///
/// Each operation issues a single GET against a fixed path and parses the
/// JSON body; a non-2xx status or malformed body surfaces as a `FeedError`.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AnalyticsFeed: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Headline counters for the overview cards.
    async fn overview(&self) -> Result<OverviewSnapshot, FeedError>;

    /// Daily conversation volume over the trailing `days`-day window.
    async fn conversation_history(&self, days: u32)
    -> Result<Vec<ConversationPoint>, FeedError>;

    /// Products ranked by recent view count.
    async fn popular_products(&self) -> Result<Vec<PopularProduct>, FeedError>;

    /// Whether the bot is currently online.
    async fn bot_status(&self) -> Result<BotStatus, FeedError>;
}
