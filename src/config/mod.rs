use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_TARGET_URL: &str = "https://tayloredpetportraits.com";
pub const DEFAULT_API_BASE: &str = "https://api.firecrawl.dev";
pub const DEFAULT_SNAPSHOT_PATH: &str = ".tmp/firecrawl_sample.json";

/// File scanned by hand when neither dotenv nor the process environment
/// yields a credential. The original deployment kept the key in `.env.local`,
/// which the standard loader does not pick up.
pub const FALLBACK_ENV_FILE: &str = ".env.local";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub target_url: String,
    pub snapshot_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_key = credential_from_env()
            .or_else(|| credential_from_file(Path::new(FALLBACK_ENV_FILE)))
            .ok_or(ConfigError::MissingCredential)?;

        Ok(Config {
            api_key,
            api_base: env::var("FIRECRAWL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            target_url: env::var("TARGET_URL").unwrap_or_else(|_| DEFAULT_TARGET_URL.to_string()),
            snapshot_path: env::var("SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH)),
        })
    }

    /// Full URL of the scrape endpoint.
    pub fn scrape_endpoint(&self) -> String {
        format!("{}/v0/scrape", self.api_base.trim_end_matches('/'))
    }
}

/// `FIRECRAWL_API_KEY` first, then the legacy `FIRECRAWL_KEY` name. A name
/// set to an empty value counts as absent.
fn credential_from_env() -> Option<String> {
    ["FIRECRAWL_API_KEY", "FIRECRAWL_KEY"]
        .iter()
        .find_map(|name| {
            let value = env::var(name).ok()?;
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        })
}

fn credential_from_file(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    parse_credential_line(&contents)
}

/// Minimal `KEY=value` scan. Not a full dotenv parser — it only needs to
/// recognize the credential line.
fn parse_credential_line(contents: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        let (key, value) = line.trim().split_once('=')?;
        match key.trim() {
            "FIRECRAWL_API_KEY" | "FIRECRAWL_KEY" => {
                let value = value.trim().trim_matches('"');
                (!value.is_empty()).then(|| value.to_string())
            }
            _ => None,
        }
    })
}
