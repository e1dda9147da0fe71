//! Collector Configuration
//!
//! Defaults reproduce the scheduled job: five Korean search queries against
//! Google News, output into `data/`.

use chrono::FixedOffset;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Korean-language searches for approval news
pub const DEFAULT_QUERIES: &[&str] = &[
    "FDA 승인 한국 기업",
    "FDA 허가 한국 기업",
    "FDA 품목허가 한국",
    "EMA 승인 한국 기업",
    "EMA 허가 한국 기업",
];

/// Korean edition of the Google News search feed
pub const DEFAULT_FEED_BASE: &str = "https://news.google.com/rss/search?hl=ko&gl=KR&ceid=KR:ko&q=";

pub const DEFAULT_SUMMARY_LIMIT: usize = 280;

/// Asia/Seoul, UTC+09:00 with no DST
const REFERENCE_OFFSET_SECS: i32 = 9 * 3600;

pub fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_OFFSET_SECS).expect("valid reference offset")
}

/// Collect FDA/EMA approval news into data/latest.json
#[derive(Parser, Debug)]
#[command(name = "regwatch-collect", version, about, long_about = None)]
pub struct Cli {
    /// Directory receiving latest.json and the dated copy
    #[arg(long, env = "REGWATCH_OUT_DIR", default_value = "data")]
    pub out_dir: PathBuf,

    /// Search query; repeat to replace the built-in list
    #[arg(long = "query")]
    pub queries: Vec<String>,

    /// Maximum summary length in characters
    #[arg(long, default_value_t = DEFAULT_SUMMARY_LIMIT)]
    pub summary_limit: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 20)]
    pub timeout_secs: u64,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub queries: Vec<String>,
    pub feed_base: String,
    pub out_dir: PathBuf,
    pub summary_limit: usize,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queries: DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect(),
            feed_base: DEFAULT_FEED_BASE.to_string(),
            out_dir: PathBuf::from("data"),
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            timeout: Duration::from_secs(20),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let defaults = Config::default();
        Self {
            queries: if cli.queries.is_empty() { defaults.queries } else { cli.queries },
            feed_base: defaults.feed_base,
            out_dir: cli.out_dir,
            summary_limit: cli.summary_limit,
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }
}
