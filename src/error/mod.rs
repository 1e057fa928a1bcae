use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration failure. Printed and the process exits nonzero
/// before any network activity happens.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "no credential found: set FIRECRAWL_API_KEY (or the legacy FIRECRAWL_KEY) \
         in the environment, .env, or .env.local"
    )]
    MissingCredential,
}

/// Everything that can go wrong after configuration is loaded. These are
/// reported to the console; the process still exits zero.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("invalid target URL {url:?}: {reason}")]
    InvalidTarget { url: String, reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status. The body text is preserved verbatim because the API
    /// puts its diagnostic detail there, not in the status line.
    #[error("API returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The call completed but the API flagged the scrape as failed.
    #[error("scrape rejected by API: {detail}")]
    Rejected { detail: String },

    #[error("failed to write snapshot {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type ProbeResult<T> = Result<T, ProbeError>;
