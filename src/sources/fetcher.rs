use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::{NewsItem, RawEntry, SourceDescriptor};
use crate::errors::{NewsError, NewsResult};
use crate::extract::ItemExtractor;
use crate::sources::health::SourceHealth;
use crate::sources::rss_atom::RssAtomParser;
use crate::sources::traits::{FeedFetcher, FeedParser};

pub const DEFAULT_ITEMS_PER_SOURCE: usize = 5;
const USER_AGENT: &str = concat!("newsroom/", env!("CARGO_PKG_VERSION"));

/// Fetches feeds over HTTP and normalizes the newest entries.
pub struct HttpFeedFetcher {
    client: Client,
    parser: Arc<dyn FeedParser>,
    extractor: Arc<ItemExtractor>,
    health: Arc<SourceHealth>,
    max_items: usize,
}

impl HttpFeedFetcher {
    pub fn new(extractor: Arc<ItemExtractor>, health: Arc<SourceHealth>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            parser: Arc::new(RssAtomParser::new()),
            extractor,
            health,
            max_items: DEFAULT_ITEMS_PER_SOURCE,
        }
    }

    pub fn with_parser(mut self, parser: Arc<dyn FeedParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    async fn retrieve(&self, source: &SourceDescriptor) -> NewsResult<Vec<RawEntry>> {
        let response = self.client.get(&source.url).send().await?;

        if !response.status().is_success() {
            return Err(NewsError::HttpStatus {
                url: source.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        self.parser.parse(&bytes)
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, source: &SourceDescriptor) -> Vec<NewsItem> {
        let entries = match self.retrieve(source).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(source = %source.name, url = %source.url, error = %e, "Feed fetch failed");
                self.health.record_failure(&source.url, &e.to_string());
                return Vec::new();
            }
        };

        // Feeds list newest first
        let mut items = Vec::with_capacity(entries.len().min(self.max_items));
        for entry in entries.into_iter().take(self.max_items) {
            items.push(self.extractor.extract(entry, source).await);
        }

        debug!(source = %source.name, items = items.len(), "Feed fetched");
        self.health.record_success(&source.url, items.len());

        items
    }
}
