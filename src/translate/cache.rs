use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::NewsResult;
use crate::translate::Translator;

pub const DEFAULT_CAPACITY: usize = 1000;

type CacheKey = (String, String);

#[derive(Default)]
struct Entries {
    map: HashMap<CacheKey, String>,
    order: VecDeque<CacheKey>,
}

/// Memoizes successful translations. Oldest insertion is evicted first.
pub struct CachingTranslator<T: Translator> {
    inner: T,
    capacity: usize,
    entries: Mutex<Entries>,
}

impl<T: Translator> CachingTranslator<T> {
    pub fn new(inner: T, capacity: usize) -> Self {
        Self {
            inner,
            capacity,
            entries: Mutex::new(Entries::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
        // A panic elsewhere cannot leave the map half-written
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn get(&self, key: &CacheKey) -> Option<String> {
        self.lock().map.get(key).cloned()
    }

    fn insert(&self, key: CacheKey, value: String) {
        if self.capacity == 0 {
            return;
        }

        let mut entries = self.lock();
        if entries.map.insert(key.clone(), value).is_none() {
            entries.order.push_back(key);
        }

        while entries.map.len() > self.capacity {
            match entries.order.pop_front() {
                Some(oldest) => {
                    entries.map.remove(&oldest);
                }
                None => break,
            }
        }
    }
}

#[async_trait]
impl<T: Translator> Translator for CachingTranslator<T> {
    async fn translate(&self, text: &str, target_language: &str) -> NewsResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let key = (target_language.to_string(), text.to_string());
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }

        let translated = self.inner.translate(text, target_language).await?;
        self.insert(key, translated.clone());
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NewsError;
    use crate::translate::MockTranslator;

    #[tokio::test]
    async fn test_hit_skips_inner() {
        let mut inner = MockTranslator::new();
        inner
            .expect_translate()
            .times(1)
            .returning(|text, _| Ok(text.to_uppercase()));

        let cache = CachingTranslator::new(inner, 10);

        assert_eq!(cache.translate("hello", "tr").await.unwrap(), "HELLO");
        assert_eq!(cache.translate("hello", "tr").await.unwrap(), "HELLO");
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_target_language_is_part_of_key() {
        let mut inner = MockTranslator::new();
        inner
            .expect_translate()
            .times(2)
            .returning(|text, lang| Ok(format!("{}:{}", lang, text)));

        let cache = CachingTranslator::new(inner, 10);

        assert_eq!(cache.translate("hi", "tr").await.unwrap(), "tr:hi");
        assert_eq!(cache.translate("hi", "de").await.unwrap(), "de:hi");
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let mut inner = MockTranslator::new();
        inner
            .expect_translate()
            .times(2)
            .returning(|_, _| Err(NewsError::Translation("offline".to_string())));

        let cache = CachingTranslator::new(inner, 10);

        assert!(cache.translate("hello", "tr").await.is_err());
        assert!(cache.translate("hello", "tr").await.is_err());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_evicts_oldest_first() {
        let mut inner = MockTranslator::new();
        inner
            .expect_translate()
            .times(4)
            .returning(|text, _| Ok(format!("t-{}", text)));

        let cache = CachingTranslator::new(inner, 2);

        cache.translate("a", "tr").await.unwrap();
        cache.translate("b", "tr").await.unwrap();
        cache.translate("c", "tr").await.unwrap();
        assert_eq!(cache.len(), 2);

        // "b" and "c" are still cached, "a" was evicted and costs a fourth call
        cache.translate("b", "tr").await.unwrap();
        cache.translate("c", "tr").await.unwrap();
        cache.translate("a", "tr").await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_text_never_reaches_inner() {
        let mut inner = MockTranslator::new();
        inner.expect_translate().never();

        let cache = CachingTranslator::new(inner, 10);
        assert_eq!(cache.translate("", "tr").await.unwrap(), "");
    }
}
