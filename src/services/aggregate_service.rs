use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::info;

use crate::domain::{sort_by_recency, NewsItem, SourceDescriptor};
use crate::sources::FeedFetcher;

pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

/// Fans a fetcher out over every source and merges the results newest first.
pub struct AggregateService {
    fetcher: Arc<dyn FeedFetcher>,
    max_concurrency: usize,
}

impl AggregateService {
    pub fn new(fetcher: Arc<dyn FeedFetcher>, max_concurrency: usize) -> Self {
        Self {
            fetcher,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Waits for every source. Failed sources contribute nothing.
    pub async fn aggregate(&self, sources: &[SourceDescriptor]) -> Vec<NewsItem> {
        // Collect first: a lazy map over `sources` makes this future too narrow for axum handlers
        let fetches: Vec<_> = sources.iter().map(|source| self.fetcher.fetch(source)).collect();

        let batches: Vec<Vec<NewsItem>> = stream::iter(fetches)
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        let mut items: Vec<NewsItem> = batches.into_iter().flatten().collect();
        sort_by_recency(&mut items);

        info!(sources = sources.len(), items = items.len(), "Aggregation complete");
        items
    }
}
