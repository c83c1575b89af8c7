use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::extract::ItemExtractor;
use crate::services::{AggregateService, NewsCache};
use crate::sources::{FeedFetcher, HttpFeedFetcher, SourceHealth, SourceRegistry};
use crate::translate::{CachingTranslator, GoogleTranslator, NoopTranslator, Translator};

/// Everything the server and the CLI share, wired from configuration.
pub struct App {
    pub registry: Arc<SourceRegistry>,
    pub health: Arc<SourceHealth>,
    pub cache: Arc<NewsCache>,
}

impl App {
    pub fn from_config(config: &Config, registry: SourceRegistry) -> Self {
        let translator: Arc<dyn Translator> = if config.translate {
            let google = GoogleTranslator::new(&config.translate_url, Duration::from_secs(10));
            Arc::new(CachingTranslator::new(google, config.translation_cache_size))
        } else {
            Arc::new(NoopTranslator)
        };

        let health = Arc::new(SourceHealth::new());
        let extractor = Arc::new(ItemExtractor::new(translator, &config.target_language));
        let fetcher = HttpFeedFetcher::new(extractor, Arc::clone(&health), config.fetch_timeout)
            .with_max_items(config.items_per_source);

        Self::with_fetcher(config, registry, Arc::new(fetcher), health)
    }

    /// Wire around any fetcher
    pub fn with_fetcher(
        config: &Config,
        registry: SourceRegistry,
        fetcher: Arc<dyn FeedFetcher>,
        health: Arc<SourceHealth>,
    ) -> Self {
        let registry = Arc::new(registry);
        let aggregator = AggregateService::new(fetcher, config.max_concurrency);
        let cache = NewsCache::new(aggregator, Arc::clone(&registry), config.cache_ttl_secs);

        Self {
            registry,
            health,
            cache: Arc::new(cache),
        }
    }
}
