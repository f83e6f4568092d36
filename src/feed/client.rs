//! Analytics Feed Client
//!
//! A client for the bot analytics API, fetching the snapshots one refresh
//! cycle renders from.

use crate::consts::dashboard_consts::http;
use crate::environment::Environment;
use crate::feed::AnalyticsFeed;
use crate::feed::error::FeedError;
use crate::feed::types::{BotStatus, ConversationPoint, OverviewSnapshot, PopularProduct};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with client version
const USER_AGENT: &str = concat!("botboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    environment: Environment,
    base_url: String,
}

impl FeedClient {
    pub fn new(environment: Environment) -> Self {
        let base_url = environment.api_base_url();
        Self::with_base_url(environment, base_url)
    }

    /// Build a client against an explicit base URL, overriding the
    /// environment default. Used by `--base-url` and the config file.
    pub fn with_base_url(environment: Environment, base_url: String) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FeedError> {
        serde_json::from_slice(bytes).map_err(FeedError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, FeedError> {
        if !response.status().is_success() {
            return Err(FeedError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FeedError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl AnalyticsFeed for FeedClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn overview(&self) -> Result<OverviewSnapshot, FeedError> {
        self.get_request("api/analytics/overview")
            .await
            .inspect_err(|e| log::error!("overview feed failed: {}", e))
    }

    async fn conversation_history(
        &self,
        days: u32,
    ) -> Result<Vec<ConversationPoint>, FeedError> {
        self.get_request(&format!("api/analytics/conversations?days={}", days))
            .await
            .inspect_err(|e| log::error!("conversation feed failed: {}", e))
    }

    async fn popular_products(&self) -> Result<Vec<PopularProduct>, FeedError> {
        self.get_request("api/analytics/popular-products")
            .await
            .inspect_err(|e| log::error!("popular products feed failed: {}", e))
    }

    async fn bot_status(&self) -> Result<BotStatus, FeedError> {
        self.get_request("api/bot/status")
            .await
            .inspect_err(|e| log::error!("bot status feed failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_base_and_endpoint() {
        let client = FeedClient::with_base_url(
            Environment::Local,
            "http://localhost:5000/".to_string(),
        );
        assert_eq!(
            client.build_url("/api/analytics/overview"),
            "http://localhost:5000/api/analytics/overview"
        );
        assert_eq!(
            client.build_url("api/bot/status"),
            "http://localhost:5000/api/bot/status"
        );
    }

    #[test]
    fn decode_response_surfaces_malformed_bodies() {
        let result: Result<OverviewSnapshot, FeedError> =
            FeedClient::decode_response(b"<!doctype html>");
        assert!(matches!(result, Err(FeedError::Decode(_))));
    }

    #[test]
    fn decode_response_accepts_partial_overview() {
        let overview: OverviewSnapshot =
            FeedClient::decode_response(br#"{"active_users": 12, "messages_today": 340}"#)
                .unwrap();
        assert_eq!(overview.active_users, 12);
        assert_eq!(overview.messages_today, 340);
        assert_eq!(overview.total_users, 0);
    }
}
