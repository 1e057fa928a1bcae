use tracing::info;
use tracing_subscriber::EnvFilter;

use brandprobe::config::Config;
use brandprobe::probe;
use brandprobe::report::{mask_credential, render_summary};

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "brandprobe=info".parse().unwrap());

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Load configuration — fatal if no credential is found anywhere.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🔍 Probing {} with key {}",
        config.target_url,
        mask_credential(&config.api_key)
    );
    info!(endpoint = %config.scrape_endpoint(), "Configuration loaded");

    // Request failures are reported, not propagated — only a missing
    // credential exits nonzero.
    match probe::run(&config).await {
        Ok(summary) => {
            println!("✅ Scrape succeeded");
            println!("{}", render_summary(&summary));
            println!("💾 Snapshot written to {}", summary.snapshot_path.display());
        }
        Err(e) => {
            tracing::warn!(error = %e, "Probe failed");
            println!("❌ Scrape failed: {e}");
        }
    }
}
