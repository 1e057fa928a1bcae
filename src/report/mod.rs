use crate::models::BrandReport;
use crate::probe::ProbeSummary;

/// Characters of page content shown in the preview line.
pub const PREVIEW_CHARS: usize = 50;

/// First 4 + last 4 characters only, never the full value. Credentials too
/// short to mask that way are fully starred instead of echoed.
pub fn mask_credential(credential: &str) -> String {
    let chars: Vec<char> = credential.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len().max(4));
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Human-readable field summary. Missing fields render as placeholders
/// rather than being omitted, so the output shape is stable across sites.
pub fn render_summary(summary: &ProbeSummary) -> String {
    let report = &summary.report;
    let mut lines = vec![
        format!("Name: {}", field(report.name.as_deref())),
        format!("Bio/Slogan: {}", field(report.bio.as_deref())),
        format!(
            "Fonts: {}",
            report.font_style.as_deref().unwrap_or("Not detected")
        ),
        format!(
            "Colors: Bg1={}, Bg2={}, Btn={}",
            field(report.bg1.as_deref()),
            field(report.bg2.as_deref()),
            field(report.btn.as_deref()),
        ),
        format!("Socials/Links Found: {}", summary.links_found),
    ];

    if let Some(preview) = content_preview(report) {
        lines.push(format!("Content preview: {preview}"));
    }

    lines.join("\n")
}

fn field(value: Option<&str>) -> &str {
    value.unwrap_or("n/a")
}

fn content_preview(report: &BrandReport) -> Option<String> {
    let markdown = report.markdown.as_deref()?.trim();
    if markdown.is_empty() {
        return None;
    }
    Some(markdown.chars().take(PREVIEW_CHARS).collect())
}
