//! Label Classification
//!
//! Decides whether a headline is FDA or EMA news from Korean and English keywords.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use url::Url;

/// Issuing authority of an announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "FDA")]
    Fda,
    #[serde(rename = "EMA")]
    Ema,
}

struct Patterns {
    fda: Regex,
    ema: Regex,
    approval: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        fda: Regex::new(r"(?i)\bFDA\b|식품의약국|미국\s*식품의약국|품목허가").expect("valid FDA pattern"),
        ema: Regex::new(r"(?i)\bEMA\b|유럽\s*의약품청|유럽의약품청").expect("valid EMA pattern"),
        approval: Regex::new(r"승인|허가|품목허가").expect("valid approval pattern"),
    })
}

/// Label for a headline, or None when it is not approval news.
///
/// EMA wins only when no FDA keyword is present. Approval news naming
/// neither agency defaults to FDA.
pub fn classify(title: &str, summary: &str) -> Option<Label> {
    let text = format!("{} {}", title, summary);
    let p = patterns();
    let fda = p.fda.is_match(&text);

    if p.ema.is_match(&text) && !fda {
        Some(Label::Ema)
    } else if fda || p.approval.is_match(&text) {
        Some(Label::Fda)
    } else {
        None
    }
}

/// Domestic outlets, matched as host suffixes
const KOREAN_HOSTS: &[&str] = &[
    ".kr",
    "naver.com",
    "daum.net",
    "chosun.com",
    "hankyung.com",
    "mk.co.kr",
    "donga.com",
    "joongang.co.kr",
    "sedaily.com",
    "etnews.com",
    "hankyoreh.com",
    "edaily.co.kr",
    "yna.co.kr",
];

/// Whether `link` points at a Korean outlet
pub fn is_korean_source(link: &str) -> bool {
    Url::parse(link)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .map(|host| KOREAN_HOSTS.iter().any(|suffix| host.ends_with(suffix)))
        .unwrap_or(false)
}
