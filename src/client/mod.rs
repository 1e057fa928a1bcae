use std::time::Duration;

use reqwest::Client as ReqwestClient;

use crate::error::{ProbeError, ProbeResult};
use crate::models::{ScrapeRequest, ScrapeResponse};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const USER_AGENT: &str = concat!("brandprobe/", env!("CARGO_PKG_VERSION"));

/// Thin client for the scrape endpoint. The probe makes exactly one call
/// per process, so there is no pooling or retry machinery here.
pub struct ScrapeClient {
    http: ReqwestClient,
    endpoint: String,
    api_key: String,
}

/// Parsed envelope kept next to the raw body, so the snapshot and error
/// reporting can use the exact bytes the API sent.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub raw: String,
    pub response: ScrapeResponse,
}

impl ScrapeClient {
    pub fn new(endpoint: String, api_key: String) -> ProbeResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(ScrapeClient {
            http,
            endpoint,
            api_key,
        })
    }

    /// POST the payload and map the three failure shapes explicitly:
    /// transport error, non-2xx status, and logical rejection.
    pub async fn scrape(&self, request: &ScrapeRequest) -> ProbeResult<ScrapeOutcome> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(ProbeError::Status { status, body: raw });
        }

        let parsed: ScrapeResponse = serde_json::from_str(&raw)?;
        if !parsed.success {
            // The API's own detail when it gave one, the whole body otherwise.
            let detail = parsed.error.clone().unwrap_or_else(|| raw.clone());
            return Err(ProbeError::Rejected { detail });
        }

        Ok(ScrapeOutcome {
            raw,
            response: parsed,
        })
    }
}
