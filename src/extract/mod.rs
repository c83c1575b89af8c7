pub mod date;
pub mod image;
pub mod text;

use std::sync::Arc;

use crate::domain::{NewsItem, RawEntry, SourceDescriptor, MISSING_LINK, UNTITLED};
use crate::translate::{translate_or_original, Translator};

pub use image::{ImageChain, ImageResolver};

/// Turns raw feed entries into `NewsItem`s. Never fails: every field has a default.
pub struct ItemExtractor {
    images: ImageChain,
    translator: Arc<dyn Translator>,
    display_language: String,
}

impl ItemExtractor {
    pub fn new(translator: Arc<dyn Translator>, display_language: &str) -> Self {
        Self {
            images: ImageChain::new(),
            translator,
            display_language: display_language.to_string(),
        }
    }

    pub async fn extract(&self, entry: RawEntry, source: &SourceDescriptor) -> NewsItem {
        let image = self.images.resolve(&entry);

        let published = entry.published.unwrap_or_default();
        let timestamp = date::timestamp_or_zero(&published);

        let title = text::title_or_placeholder(entry.title.as_deref());
        let summary = text::truncate_chars(
            entry.summary.as_deref().unwrap_or_default(),
            text::SUMMARY_BUDGET,
        );

        let (title, summary) = if source.needs_translation(&self.display_language) {
            self.translate_pair(title, summary).await
        } else {
            (title, summary)
        };

        let link = entry
            .link
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| MISSING_LINK.to_string());

        NewsItem {
            title,
            link,
            summary: text::with_ellipsis(summary),
            published,
            timestamp,
            source: source.name.clone(),
            category: source.category.clone(),
            image,
        }
    }

    async fn translate_pair(&self, title: String, summary: String) -> (String, String) {
        let translator = self.translator.as_ref();
        let lang = self.display_language.as_str();

        let title_fut = async {
            if title == UNTITLED {
                title.clone()
            } else {
                translate_or_original(translator, &title, lang).await.into_text()
            }
        };
        let summary_fut = async {
            if summary.is_empty() {
                summary.clone()
            } else {
                translate_or_original(translator, &summary, lang).await.into_text()
            }
        };

        futures::join!(title_fut, summary_fut)
    }
}
