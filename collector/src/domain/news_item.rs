//! Snapshot Entities
//!
//! Serialized shape read by the frontend's `Snapshot` model.

use serde::{Deserialize, Serialize};

use super::label::Label;

/// One labeled news item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub summary: String,
    /// RFC 3339 in the reference timezone, so the date prefix is the Seoul date
    pub published: String,
    pub label: Label,
    pub source: Option<String>,
}

/// Output of one collector run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generated_at: String,
    pub items: Vec<NewsItem>,
}
