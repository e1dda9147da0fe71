//! Feed Source Layer
//!
//! Feed access abstractions and implementations.

mod google_news;
mod rss;
mod traits;

pub use google_news::{feed_url, GoogleNewsSource};
pub use rss::{parse_feed, FeedEntry};
pub use traits::FeedSource;
