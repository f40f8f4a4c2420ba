//! API client for the decision service.
//!
//! Two endpoints make up the whole surface: decision generation (optionally
//! carrying an uploaded CSV as multipart) and summary retrieval. The service
//! base address comes from the caller; the client itself holds no
//! configuration beyond it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use dix_core::client::{ApiClient, DecisionService};
//! use dix_core::types::UploadPayload;
//!
//! #[tokio::main]
//! async fn main() -> dix_core::Result<()> {
//!     let client = ApiClient::new("http://localhost:8000")?;
//!     let decisions = client.generate(UploadPayload::Cached).await?;
//!     println!("{} insights", decisions.insights.len());
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::types::{DecisionResult, SummaryStats, UploadPayload};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Path of the generation endpoint.
pub const GENERATE_PATH: &str = "/api/v1/decisions/generate";
/// Path of the summary endpoint.
pub const SUMMARY_PATH: &str = "/api/v1/decisions/summary";

/// Shown when a failed generation response carries no parseable `detail`.
const GENERATE_FALLBACK_MESSAGE: &str = "Failed to generate decisions";

/// The two calls the workflow orchestrator depends on.
///
/// [`ApiClient`] is the real implementation; tests drive the orchestrator
/// through an in-memory fake instead of a live server.
#[async_trait]
pub trait DecisionService: Send + Sync {
    /// Run decision generation, consuming the payload.
    async fn generate(&self, payload: UploadPayload) -> Result<DecisionResult>;

    /// Fetch the aggregate summary.
    async fn summary(&self) -> Result<SummaryStats>;
}

/// Failed responses may carry a structured message.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// HTTP client for the decision service
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL for HTTP requests, without trailing slash
    base_url: String,
    /// HTTP client
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client with no request timeout.
    ///
    /// A request that never resolves will park the caller indefinitely; use
    /// [`ApiClient::with_timeout`] to bound it.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::from_builder(base_url, reqwest::Client::builder())
    }

    /// Create a client whose requests fail after `timeout`.
    ///
    /// Expiry surfaces as a transport failure, so a timed-out generation call
    /// follows the ordinary error path.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::from_builder(base_url, reqwest::Client::builder().timeout(timeout))
    }

    fn from_builder(base_url: impl Into<String>, builder: reqwest::ClientBuilder) -> Result<Self> {
        let client = builder
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    /// The configured service base address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Extract the error message from a failed generation response.
    ///
    /// Unparseable bodies and bodies without a `detail` field degrade to the
    /// generic fallback; nothing here can panic or propagate a parse error.
    async fn failure_message(resp: reqwest::Response) -> String {
        match resp.json::<ErrorBody>().await {
            Ok(ErrorBody { detail: Some(detail) }) => detail,
            _ => GENERATE_FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[async_trait]
impl DecisionService for ApiClient {
    async fn generate(&self, payload: UploadPayload) -> Result<DecisionResult> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        debug!("API request: POST {}", url);

        let mut req = self.client.post(&url);
        match payload {
            UploadPayload::Csv { filename, bytes } => {
                let part = reqwest::multipart::Part::bytes(bytes)
                    .file_name(filename)
                    .mime_str("text/csv")?;
                req = req.multipart(reqwest::multipart::Form::new().part("file", part));
            }
            // Cache-based regeneration is a bodiless POST.
            UploadPayload::Cached => {}
        }

        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            resp.json()
                .await
                .map_err(|e| Error::InvalidResponse(e.to_string()))
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                message: Self::failure_message(resp).await,
            })
        }
    }

    async fn summary(&self) -> Result<SummaryStats> {
        let url = format!("{}{}", self.base_url, SUMMARY_PATH);
        debug!("API request: GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if status.is_success() {
            resp.json()
                .await
                .map_err(|e| Error::InvalidResponse(e.to_string()))
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                message: format!("Summary request failed with status {status}"),
            })
        }
    }
}
