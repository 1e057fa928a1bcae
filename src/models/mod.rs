use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Request Models
// ============================================================================

/// Body for `POST /v0/scrape`. Constructed once per run with the fixed
/// content-extraction option.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRequest {
    pub url: String,
    #[serde(rename = "pageOptions")]
    pub page_options: PageOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOptions {
    pub only_main_content: bool,
}

impl ScrapeRequest {
    /// The fixed payload the probe sends: scrape `url`, main content only.
    pub fn main_content(url: impl Into<String>) -> Self {
        ScrapeRequest {
            url: url.into(),
            page_options: PageOptions {
                only_main_content: true,
            },
        }
    }
}

// ============================================================================
// Response Models
// ============================================================================

/// Envelope returned by the scrape endpoint. `data` and `error` are both
/// optional — the API populates one or the other depending on `success`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<BrandReport>,
    pub error: Option<String>,
}

/// Brand fields extracted by the remote analysis.
///
/// The shape is externally defined and every field may be missing — use
/// defensive accesses, never assume a field is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandReport {
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "fontStyle")]
    pub font_style: Option<String>,
    pub bg1: Option<String>,
    pub bg2: Option<String>,
    pub btn: Option<String>,
    /// Social/outbound links. Entry shape varies by site, so entries stay
    /// untyped; the probe only counts them.
    #[serde(default)]
    pub links: Vec<Value>,
    /// Page content; only a short preview is ever printed.
    pub markdown: Option<String>,
}
