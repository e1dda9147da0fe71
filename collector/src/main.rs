//! regwatch-collect entry point
//!
//! Fetches the search feeds once, writes the snapshot, exits.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use regwatch_collector::config::{reference_offset, Cli};
use regwatch_collector::output::write_snapshot;
use regwatch_collector::pipeline::collect;
use regwatch_collector::source::GoogleNewsSource;
use regwatch_collector::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins when set; otherwise -v flags pick the level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(cli);
    tracing::debug!(?config, "collector starting");

    let source = GoogleNewsSource::new(&config).context("failed to build HTTP client")?;
    let now = Utc::now();
    let snapshot = collect(&source, &config, now).await;

    let today = now.with_timezone(&reference_offset()).date_naive();
    write_snapshot(&config.out_dir, &snapshot, today)
        .with_context(|| format!("failed to write snapshot into {}", config.out_dir.display()))?;

    println!("Saved {} items.", snapshot.items.len());
    Ok(())
}
