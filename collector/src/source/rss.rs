//! RSS Parsing
//!
//! Reads `<item>` elements of an RSS 2.0 channel. Text is returned as
//! found after XML unescaping; cleanup happens in the pipeline.

use roxmltree::{Document, Node};

/// Raw fields of one feed entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub published: String,
    pub source: Option<String>,
}

fn child_text(node: Node, name: &str) -> Option<String> {
    node.children()
        .find(|c| c.is_element() && c.has_tag_name(name))
        .map(|c| c.text().unwrap_or("").trim().to_string())
}

pub fn parse_feed(xml: &str) -> Result<Vec<FeedEntry>, roxmltree::Error> {
    let doc = Document::parse(xml)?;

    let entries = doc
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name("item"))
        .map(|item| FeedEntry {
            title: child_text(item, "title").unwrap_or_default(),
            link: child_text(item, "link").unwrap_or_default(),
            summary: child_text(item, "description").unwrap_or_default(),
            published: child_text(item, "pubDate")
                .filter(|s| !s.is_empty())
                .or_else(|| child_text(item, "updated"))
                .unwrap_or_default(),
            source: child_text(item, "source").filter(|s| !s.is_empty()),
        })
        .collect();

    Ok(entries)
}
