use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Untitled";
pub const MISSING_LINK: &str = "#";

/// The client-facing news item served by `/api/news`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub summary: String,
    /// Publish date exactly as the feed stated it
    pub published: String,
    /// Epoch seconds parsed from `published`, 0 when unparseable
    pub timestamp: i64,
    pub source: String,
    pub category: String,
    pub image: Option<String>,
}

/// Newest first. Ties keep no particular order.
pub fn sort_by_recency(items: &mut [NewsItem]) {
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
