//! HTTP client for the detection backend's four read endpoints.
//!
//! Every public fetch follows the same attempt-then-fallback contract:
//! transport failures, timeouts, and non-2xx statuses are all treated as one
//! "fetch failed" condition, logged, and recovered locally by substituting
//! the endpoint's fixed fallback value. No fetch ever returns an error to
//! the presentation layer, and each fetch decides independently — a failed
//! connectivity probe never gates a later attempt.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::fallback;
use crate::models::{AiTrends, CombinedTrends, DatasetTrends, FiltersData, NewsPost};
use crate::query::PostsQuery;

const POSTS_ENDPOINT: &str = "/get_posts";
const TRENDS_ENDPOINT: &str = "/get_trends";
const AI_TRENDS_ENDPOINT: &str = "/get_ai_trends";
const FILTERS_ENDPOINT: &str = "/get_filters";

/// Stateless client for the detection backend. Owns nothing beyond the
/// connection pool; all returned data is transient and re-fetched on demand.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client with the configured base URL and request timeout.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("FakeNewsDashboard/1.0")
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Posts matching the composed filter query; the fixed 4-post sample on
    /// failure.
    pub async fn fetch_posts(&self, query: &PostsQuery) -> Vec<NewsPost> {
        self.get_or_fallback(POSTS_ENDPOINT, &query.to_pairs(), fallback::sample_posts())
            .await
    }

    /// Dataset label/platform/region breakdowns; a fixed snapshot on failure.
    pub async fn fetch_trends(&self) -> DatasetTrends {
        self.get_or_fallback(TRENDS_ENDPOINT, &[], fallback::sample_trends())
            .await
    }

    /// Model prediction counts; a fixed snapshot on failure.
    pub async fn fetch_ai_trends(&self) -> AiTrends {
        self.get_or_fallback(AI_TRENDS_ENDPOINT, &[], fallback::sample_ai_trends())
            .await
    }

    /// Filter control options; the built-in set on failure.
    pub async fn fetch_filters(&self) -> FiltersData {
        self.get_or_fallback(FILTERS_ENDPOINT, &[], fallback::sample_filters())
            .await
    }

    /// Both trend fetches, concurrently. Each side falls back on its own, so
    /// one degraded endpoint leaves the other's live data intact.
    pub async fn fetch_all_trends(&self) -> CombinedTrends {
        let (dataset, ai) = tokio::join!(self.fetch_trends(), self.fetch_ai_trends());
        CombinedTrends { dataset, ai }
    }

    /// Probes the trends endpoint and reports whether it answered 200.
    ///
    /// Drives only the live/demo indicator. The result must not gate the
    /// data fetches; each of those retries and falls back on its own.
    pub async fn check_connection(&self) -> bool {
        let url = format!("{}{}", self.base_url, TRENDS_ENDPOINT);
        match self.http.get(&url).send().await {
            Ok(response) => {
                let status = response.status();
                let connected = status == StatusCode::OK;
                info!(
                    connected,
                    status = status.as_u16(),
                    "backend connectivity probe"
                );
                connected
            }
            Err(e) => {
                warn!(error = %e, "backend connectivity probe failed");
                false
            }
        }
    }

    /// One typed GET against the backend.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, params = query.len(), "issuing backend request");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }

    /// The attempt-then-fallback wrapper shared by every fetch: on any
    /// failure the error is logged and the caller gets `fallback` instead.
    async fn get_or_fallback<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
        fallback: T,
    ) -> T {
        match self.get_json(endpoint, query).await {
            Ok(value) => value,
            Err(e) => {
                error!(endpoint, error = %e, timeout = e.is_timeout(), "backend fetch failed");
                warn!(endpoint, "substituting built-in fallback data");
                fallback
            }
        }
    }
}
