use std::path::{Path, PathBuf};

use url::Url;

use crate::client::ScrapeClient;
use crate::config::Config;
use crate::error::{ProbeError, ProbeResult};
use crate::models::{BrandReport, ScrapeRequest};

/// What a successful run produced, ready for console rendering.
#[derive(Debug)]
pub struct ProbeSummary {
    pub report: BrandReport,
    pub links_found: usize,
    pub snapshot_path: PathBuf,
}

/// Run the whole probe: validate the target, perform the single scrape
/// call, persist the raw body, and summarize the brand fields.
pub async fn run(config: &Config) -> ProbeResult<ProbeSummary> {
    validate_target(&config.target_url)?;

    let client = ScrapeClient::new(config.scrape_endpoint(), config.api_key.clone())?;
    let request = ScrapeRequest::main_content(config.target_url.clone());

    tracing::debug!(
        target_url = %config.target_url,
        endpoint = %config.scrape_endpoint(),
        "Sending scrape request"
    );
    let outcome = client.scrape(&request).await?;

    write_snapshot(&config.snapshot_path, &outcome.raw).await?;

    let report = outcome.response.data.unwrap_or_default();
    let links_found = report.links.len();

    Ok(ProbeSummary {
        report,
        links_found,
        snapshot_path: config.snapshot_path.clone(),
    })
}

/// Only http/https targets make sense for the scraper; anything else is a
/// configuration mistake worth catching before the network call.
fn validate_target(target: &str) -> ProbeResult<()> {
    let parsed = Url::parse(target).map_err(|e| ProbeError::InvalidTarget {
        url: target.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ProbeError::InvalidTarget {
            url: target.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

/// Overwrite the snapshot with the exact bytes the API returned. The parent
/// directory may not exist on a fresh checkout.
async fn write_snapshot(path: &Path, raw: &str) -> ProbeResult<()> {
    let result = async {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path, raw).await
    }
    .await;

    result.map_err(|source| ProbeError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}
