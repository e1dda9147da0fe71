//! Card Rendering
//!
//! Turns an item into the text slots of a result card.
//! Components only copy these strings into the DOM.

use chrono::{DateTime, Datelike, Timelike, Utc};
use url::Url;

use crate::config::reference_offset;
use crate::models::{Item, Label};

/// Display fragment for one item
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub badge: &'static str,
    /// Badge gets the `EMA` class
    pub badge_is_ema: bool,
    pub title: String,
    pub href: String,
    pub meta: String,
    pub source: String,
}

impl Card {
    pub fn from_item(item: &Item) -> Self {
        let when = item
            .published_at
            .map(format_local_timestamp)
            .unwrap_or_else(|| item.published.clone());

        Self {
            badge: item.label.as_str(),
            badge_is_ema: item.label == Label::Ema,
            title: item.title.clone(),
            href: item.link.clone(),
            meta: format!("{} · {}", when, link_hostname(&item.link)),
            source: item.source.clone().unwrap_or_default(),
        }
    }
}

/// Korean locale layout in the reference timezone, e.g. `2025. 3. 1. 오후 2:05:09`
pub fn format_local_timestamp(at: DateTime<Utc>) -> String {
    let local = at.with_timezone(&reference_offset());
    let (is_pm, hour12) = local.hour12();
    format!(
        "{}. {}. {}. {} {}:{:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        if is_pm { "오후" } else { "오전" },
        hour12,
        local.minute(),
        local.second()
    )
}

/// Host part of `link`, empty when the link does not parse
pub fn link_hostname(link: &str) -> String {
    Url::parse(link)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default()
}
