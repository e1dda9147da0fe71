//! Collection Pipeline
//!
//! Runs every query, keeps the first occurrence of each link, labels and
//! normalizes entries, and orders the result newest first.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use std::collections::HashSet;

use crate::config::{reference_offset, Config};
use crate::domain::{classify, is_korean_source, NewsItem, Snapshot};
use crate::source::{FeedEntry, FeedSource};
use crate::text::{clean_text, truncate_chars};

/// Feed date in the reference timezone; unparseable dates become `now`
pub fn normalize_published(raw: &str, now: DateTime<Utc>) -> DateTime<FixedOffset> {
    let raw = raw.trim();
    let parsed = DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| {
            if !raw.is_empty() {
                tracing::debug!(raw, "unparseable publish date, using collection time");
            }
            now
        });
    parsed.with_timezone(&reference_offset())
}

fn format_timestamp(at: DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Labeled item for `entry`, or None when it is not approval news
fn build_item(
    entry: FeedEntry,
    link: String,
    config: &Config,
    now: DateTime<Utc>,
) -> Option<(DateTime<FixedOffset>, NewsItem)> {
    let title = clean_text(&entry.title);
    let summary = clean_text(&entry.summary);
    let label = classify(&title, &summary)?;

    if !is_korean_source(&link) {
        tracing::trace!(%link, "kept item from non-Korean host");
    }

    let published = normalize_published(&entry.published, now);
    let item = NewsItem {
        title,
        link,
        summary: truncate_chars(&summary, config.summary_limit),
        published: format_timestamp(published),
        label,
        source: entry.source.map(|s| clean_text(&s)).filter(|s| !s.is_empty()),
    };
    Some((published, item))
}

/// Build a snapshot from every configured query.
///
/// A failing query is logged and skipped so one bad feed does not empty the snapshot.
pub async fn collect(source: &dyn FeedSource, config: &Config, now: DateTime<Utc>) -> Snapshot {
    let mut seen: HashSet<String> = HashSet::new();
    let mut items: Vec<(DateTime<FixedOffset>, NewsItem)> = Vec::new();

    for query in &config.queries {
        let entries = match source.fetch(query).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "feed fetch failed, skipping query");
                continue;
            }
        };

        let total = entries.len();
        let mut kept = 0usize;
        for entry in entries {
            let link = entry.link.trim().to_string();
            if link.is_empty() || !seen.insert(link.clone()) {
                continue;
            }
            if let Some(labeled) = build_item(entry, link, config, now) {
                items.push(labeled);
                kept += 1;
            }
        }
        tracing::info!(query = %query, total, kept, "query collected");
    }

    // Stable, so same-instant items keep feed order
    items.sort_by(|a, b| b.0.cmp(&a.0));

    Snapshot {
        generated_at: format_timestamp(now.with_timezone(&reference_offset())),
        items: items.into_iter().map(|(_, item)| item).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Label;
    use crate::error::{CollectError, CollectResult};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::collections::HashMap;

    /// Canned feeds keyed by query; unknown queries fail
    struct StubSource {
        feeds: HashMap<String, Vec<FeedEntry>>,
    }

    #[async_trait]
    impl FeedSource for StubSource {
        async fn fetch(&self, query: &str) -> CollectResult<Vec<FeedEntry>> {
            self.feeds.get(query).cloned().ok_or_else(|| CollectError::Status {
                url: query.to_string(),
                status: 503,
            })
        }
    }

    fn entry(title: &str, link: &str, published: &str) -> FeedEntry {
        FeedEntry {
            title: title.to_string(),
            link: link.to_string(),
            summary: String::new(),
            published: published.to_string(),
            source: Some("연합뉴스".to_string()),
        }
    }

    fn config(queries: &[&str]) -> Config {
        Config {
            queries: queries.iter().map(|q| q.to_string()).collect(),
            ..Config::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_normalize_published_to_seoul() {
        let at = normalize_published("Mon, 03 Mar 2025 16:30:00 GMT", now());
        assert_eq!(format_timestamp(at), "2025-03-04T01:30:00+09:00");

        let at = normalize_published("2025-03-01T00:00:00Z", now());
        assert_eq!(format_timestamp(at), "2025-03-01T09:00:00+09:00");

        let at = normalize_published("garbage", now());
        assert_eq!(format_timestamp(at), "2025-03-03T21:00:00+09:00");
    }

    #[tokio::test]
    async fn test_collect_dedupes_labels_and_sorts() {
        let mut feeds = HashMap::new();
        feeds.insert(
            "fda".to_string(),
            vec![
                entry("A사 FDA 승인", "https://a.kr/1", "Sat, 01 Mar 2025 00:00:00 GMT"),
                entry("주가 급등", "https://a.kr/2", "Sun, 02 Mar 2025 00:00:00 GMT"),
                entry("B사 EMA 허가", "https://b.kr/3", "Mon, 03 Mar 2025 00:00:00 GMT"),
                entry("링크 없음 FDA", "  ", "Mon, 03 Mar 2025 00:00:00 GMT"),
            ],
        );
        feeds.insert(
            "ema".to_string(),
            vec![
                // Same link as an earlier entry: first occurrence wins
                entry("B사 EMA 허가 (재게재)", "https://b.kr/3", "Mon, 03 Mar 2025 05:00:00 GMT"),
                entry("C사 유럽의약품청 승인", "https://c.kr/4", "Sun, 02 Mar 2025 12:00:00 GMT"),
            ],
        );
        let source = StubSource { feeds };

        let snapshot = collect(&source, &config(&["fda", "ema"]), now()).await;

        let titles: Vec<_> = snapshot.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["B사 EMA 허가", "C사 유럽의약품청 승인", "A사 FDA 승인"]);
        assert_eq!(snapshot.items[0].label, Label::Ema);
        assert_eq!(snapshot.items[2].label, Label::Fda);
        assert_eq!(snapshot.items[0].published, "2025-03-03T09:00:00+09:00");
        assert_eq!(snapshot.generated_at, "2025-03-03T21:00:00+09:00");
    }

    #[tokio::test]
    async fn test_failing_query_is_skipped() {
        let mut feeds = HashMap::new();
        feeds.insert(
            "ok".to_string(),
            vec![entry("FDA 승인", "https://a.kr/1", "Sat, 01 Mar 2025 00:00:00 GMT")],
        );
        let source = StubSource { feeds };

        let snapshot = collect(&source, &config(&["broken", "ok"]), now()).await;
        assert_eq!(snapshot.items.len(), 1);
    }

    #[tokio::test]
    async fn test_summary_is_cleaned_and_truncated() {
        let mut e = entry("FDA 승인", "https://a.kr/1", "");
        e.summary = format!("<b>{}</b>&amp;", "가".repeat(300));
        let mut feeds = HashMap::new();
        feeds.insert("q".to_string(), vec![e]);
        let source = StubSource { feeds };

        let cfg = Config {
            summary_limit: 280,
            ..config(&["q"])
        };
        let snapshot = collect(&source, &cfg, now()).await;
        let item = &snapshot.items[0];
        assert_eq!(item.summary.chars().count(), 280);
        assert!(item.summary.chars().all(|c| c == '가'));
        assert_eq!(item.source.as_deref(), Some("연합뉴스"));
    }
}
