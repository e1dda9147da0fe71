//! Domain Layer
//!
//! Snapshot entities and the label classification rules.

mod label;
mod news_item;

pub use label::{classify, is_korean_source, Label};
pub use news_item::{NewsItem, Snapshot};
