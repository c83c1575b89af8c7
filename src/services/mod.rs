pub mod aggregate_service;
pub mod news_cache;

pub use aggregate_service::{AggregateService, DEFAULT_MAX_CONCURRENCY};
pub use news_cache::{CacheState, Clock, NewsCache, SystemClock, DEFAULT_WINDOW_SECS};
