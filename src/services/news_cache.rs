use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::NewsItem;
use crate::services::aggregate_service::AggregateService;
use crate::sources::SourceRegistry;

pub const DEFAULT_WINDOW_SECS: i64 = 300;

/// Wall-clock source in epoch seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Fresh,
    Stale,
}

struct CacheEntry {
    items: Arc<Vec<NewsItem>>,
    computed_at: i64,
    /// Bumped on every store
    generation: u64,
}

enum Lookup {
    Fresh(Arc<Vec<NewsItem>>),
    Stale { generation: u64 },
}

/// Read-through cache over the aggregator.
///
/// Fresh means the last computation is younger than the window and produced
/// at least one item. Stale readers are serialized on `refresh`: the first one
/// aggregates, the rest pick up what it stored instead of aggregating again.
pub struct NewsCache {
    aggregator: AggregateService,
    registry: Arc<SourceRegistry>,
    window_secs: i64,
    clock: Arc<dyn Clock>,
    entry: RwLock<Option<CacheEntry>>,
    refresh: Mutex<()>,
}

impl NewsCache {
    pub fn new(aggregator: AggregateService, registry: Arc<SourceRegistry>, window_secs: i64) -> Self {
        Self {
            aggregator,
            registry,
            window_secs,
            clock: Arc::new(SystemClock),
            entry: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn get_news(&self) -> Arc<Vec<NewsItem>> {
        let observed = match self.lookup(self.clock.now()) {
            Lookup::Fresh(items) => {
                debug!(items = items.len(), "Serving news from cache");
                return items;
            }
            Lookup::Stale { generation } => generation,
        };

        let _guard = self.refresh.lock().await;

        if let Some((items, generation)) = self.snapshot() {
            if generation != observed {
                debug!("Refresh finished while waiting, reusing its result");
                return items;
            }
        }

        let started_at = self.clock.now();
        info!(sources = self.registry.len(), "News cache stale, aggregating");

        let items = Arc::new(self.aggregator.aggregate(self.registry.sources()).await);
        self.store(Arc::clone(&items), started_at);

        items
    }

    pub fn state(&self) -> CacheState {
        match self.lookup(self.clock.now()) {
            Lookup::Fresh(_) => CacheState::Fresh,
            Lookup::Stale { .. } => CacheState::Stale,
        }
    }

    /// Epoch seconds of the last completed aggregation
    pub fn last_updated(&self) -> Option<i64> {
        self.read_entry().as_ref().map(|e| e.computed_at)
    }

    fn lookup(&self, now: i64) -> Lookup {
        let entry = self.read_entry();
        match entry.as_ref() {
            Some(e) if now - e.computed_at < self.window_secs && !e.items.is_empty() => {
                Lookup::Fresh(Arc::clone(&e.items))
            }
            Some(e) => Lookup::Stale {
                generation: e.generation,
            },
            None => Lookup::Stale { generation: 0 },
        }
    }

    fn snapshot(&self) -> Option<(Arc<Vec<NewsItem>>, u64)> {
        self.read_entry()
            .as_ref()
            .map(|e| (Arc::clone(&e.items), e.generation))
    }

    /// Replaces the previous entry wholesale, even with an empty result.
    fn store(&self, items: Arc<Vec<NewsItem>>, computed_at: i64) {
        let mut entry = self.entry.write().unwrap_or_else(|e| e.into_inner());
        let generation = entry.as_ref().map_or(0, |e| e.generation) + 1;

        *entry = Some(CacheEntry {
            items,
            computed_at,
            generation,
        });
    }

    fn read_entry(&self) -> std::sync::RwLockReadGuard<'_, Option<CacheEntry>> {
        self.entry.read().unwrap_or_else(|e| e.into_inner())
    }
}
