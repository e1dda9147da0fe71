//! Frontend Models
//!
//! Data structures matching the snapshot written by the collector.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Issuing authority of an announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "FDA")]
    Fda,
    #[serde(rename = "EMA")]
    Ema,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fda => "FDA",
            Label::Ema => "EMA",
        }
    }
}

/// Announcement item (matches collector output)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub label: Label,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub link: String,
    pub published: String,
    /// Parsed `published`, filled in by [`Snapshot::prepared`]
    #[serde(skip)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Calendar date prefix of `published` (already in the reference timezone)
    pub fn published_date(&self) -> Option<&str> {
        self.published.get(..10)
    }
}

/// One collector run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generated_at: String,
    pub items: Vec<Item>,
}

impl Snapshot {
    /// Parse every item's timestamp once so sorting never re-parses
    pub fn prepared(mut self) -> Self {
        for item in &mut self.items {
            item.published_at = parse_published(&item.published);
        }
        self
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Offset-less forms are read as UTC. Returns None for anything else.
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
