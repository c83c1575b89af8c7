pub mod cache;
pub mod google;

use async_trait::async_trait;

use crate::errors::NewsResult;

pub use cache::CachingTranslator;
pub use google::GoogleTranslator;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_language`
    async fn translate(&self, text: &str, target_language: &str) -> NewsResult<String>;
}

/// Passes text through untouched. Used when translation is disabled.
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, _target_language: &str) -> NewsResult<String> {
        Ok(text.to_string())
    }
}

/// Result of a best-effort translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated(String),
    Fallback { original: String, reason: String },
}

impl TranslationOutcome {
    pub fn into_text(self) -> String {
        match self {
            TranslationOutcome::Translated(text) => text,
            TranslationOutcome::Fallback { original, .. } => original,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TranslationOutcome::Fallback { .. })
    }
}

/// Translate, keeping the original text on any failure.
pub async fn translate_or_original(
    translator: &dyn Translator,
    text: &str,
    target_language: &str,
) -> TranslationOutcome {
    match translator.translate(text, target_language).await {
        Ok(translated) => TranslationOutcome::Translated(translated),
        Err(e) => {
            tracing::warn!(target_language, error = %e, "Translation failed, keeping original text");
            TranslationOutcome::Fallback {
                original: text.to_string(),
                reason: e.to_string(),
            }
        }
    }
}
