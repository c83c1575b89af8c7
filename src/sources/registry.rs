use std::path::Path;

use url::Url;

use crate::domain::SourceDescriptor;
use crate::errors::{NewsError, NewsResult};

/// (url, category, name, language)
const BUILTIN_SOURCES: &[(&str, &str, &str, &str)] = &[
    // Turkish sources
    ("https://feeds.bbci.co.uk/turkce/rss.xml", "Dünya", "BBC Türkçe", "tr"),
    ("https://www.aa.com.tr/tr/rss/default?cat=guncel", "Gündem", "Anadolu Ajansı", "tr"),
    ("https://webrazzi.com/feed", "Teknoloji", "Webrazzi", "tr"),
    ("https://shiftdelete.net/feed", "Teknoloji", "ShiftDelete", "tr"),
    ("https://www.bloomberght.com/rss", "Ekonomi", "Bloomberg HT", "tr"),
    ("https://evrimagaci.org/rss.xml", "Bilim", "Evrim Ağacı", "tr"),
    // International sources, translated for display
    ("http://feeds.bbci.co.uk/news/world/rss.xml", "Dünya", "BBC World", "en"),
    ("https://rss.nytimes.com/services/xml/rss/nyt/HomePage.xml", "Dünya", "NYT", "en"),
    ("http://rss.cnn.com/rss/edition.rss", "Dünya", "CNN", "en"),
    ("https://www.aljazeera.com/xml/rss/all.xml", "Dünya", "Al Jazeera", "en"),
    ("https://techcrunch.com/feed/", "Teknoloji", "TechCrunch", "en"),
    ("https://www.theverge.com/rss/index.xml", "Teknoloji", "The Verge", "en"),
    ("https://feeds.bloomberg.com/markets/news.rss", "Ekonomi", "Bloomberg", "en"),
    ("https://www.wired.com/feed/rss", "Bilim", "Wired", "en"),
];

/// The ordered, fixed set of sources to aggregate.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: Vec<SourceDescriptor>,
}

impl SourceRegistry {
    pub fn new(sources: Vec<SourceDescriptor>) -> Self {
        Self { sources }
    }

    pub fn builtin() -> Self {
        let sources = BUILTIN_SOURCES
            .iter()
            .map(|(url, category, name, language)| {
                SourceDescriptor::new(url, category, name, language)
            })
            .collect();

        Self::new(sources)
    }

    /// Load a JSON array of source descriptors
    pub fn from_json(json: &str) -> NewsResult<Self> {
        let sources: Vec<SourceDescriptor> = serde_json::from_str(json)?;

        for source in &sources {
            Self::validate(source)?;
        }

        Ok(Self::new(sources))
    }

    pub fn from_path(path: impl AsRef<Path>) -> NewsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn sources(&self) -> &[SourceDescriptor] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn validate(source: &SourceDescriptor) -> NewsResult<()> {
        let parsed = Url::parse(&source.url)
            .map_err(|e| NewsError::InvalidUrl(format!("{}: {}", source.url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(NewsError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                source.url,
                parsed.scheme()
            )));
        }

        if source.name.trim().is_empty() {
            return Err(NewsError::InvalidSource(format!(
                "{}: name is empty",
                source.url
            )));
        }

        if source.language.trim().is_empty() {
            return Err(NewsError::InvalidSource(format!(
                "{}: language is empty",
                source.url
            )));
        }

        Ok(())
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
