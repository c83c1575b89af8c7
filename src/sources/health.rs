use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;

/// Last known fetch outcome for one source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceStatus {
    pub last_fetched: Option<i64>,
    pub last_success: Option<i64>,
    /// Consecutive failures since the last success
    pub error_count: u32,
    pub last_error: Option<String>,
    pub item_count: usize,
}

/// In-memory fetch status per source URL. Lost on restart.
#[derive(Default)]
pub struct SourceHealth {
    statuses: Mutex<HashMap<String, SourceStatus>>,
}

impl SourceHealth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self, url: &str, item_count: usize) {
        let now = chrono::Utc::now().timestamp();
        let mut statuses = self.lock();
        let status = statuses.entry(url.to_string()).or_default();

        status.last_fetched = Some(now);
        status.last_success = Some(now);
        status.error_count = 0;
        status.last_error = None;
        status.item_count = item_count;
    }

    pub fn record_failure(&self, url: &str, error: &str) {
        let now = chrono::Utc::now().timestamp();
        let mut statuses = self.lock();
        let status = statuses.entry(url.to_string()).or_default();

        status.last_fetched = Some(now);
        status.error_count += 1;
        status.last_error = Some(error.to_string());
        status.item_count = 0;
    }

    /// Status for `url`; never-fetched sources report the default
    pub fn status(&self, url: &str) -> SourceStatus {
        self.lock().get(url).cloned().unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, SourceStatus>> {
        self.statuses.lock().unwrap_or_else(|e| e.into_inner())
    }
}
