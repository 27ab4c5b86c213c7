//! HTTP client for the trace-search backend.
//!
//! # Responsibilities
//! - Issue search requests against `/api/traces`
//! - Validate reachability via the `/search` probe
//! - Apply the configured connect and request timeouts
//!
//! # Design Decisions
//! - Status handling stays with the caller; the retry policy lives in
//!   `engine::fetcher`, not here
//! - The client is cheap to clone; the underlying pool is shared

use std::time::Duration;

use reqwest::{Response, StatusCode};

use crate::config::schema::BackendConfig;
use crate::query::types::{QueryError, QueryResult};

/// Client for one trace-search backend.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client from backend configuration.
    pub fn new(config: &BackendConfig) -> QueryResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue one search request with the given query pairs.
    ///
    /// Returns the raw response; a non-200 status is not an error here.
    pub async fn search(
        &self,
        pairs: &[(&'static str, String)],
    ) -> Result<Response, reqwest::Error> {
        self.http
            .get(format!("{}/api/traces", self.base_url))
            .query(pairs)
            .send()
            .await
    }

    /// Check whether the backend is reachable.
    pub async fn probe(&self) -> QueryResult<()> {
        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            tracing::warn!(status = status.as_u16(), "Connectivity probe rejected");
            Err(QueryError::ProbeFailed(status.as_u16()))
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
