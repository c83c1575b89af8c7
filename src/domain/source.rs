use serde::{Deserialize, Serialize};

/// A syndicated feed the aggregator pulls from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub url: String,
    pub category: String,
    pub name: String,
    /// Content language tag, e.g. "en" or "tr"
    pub language: String,
}

impl SourceDescriptor {
    pub fn new(url: &str, category: &str, name: &str, language: &str) -> Self {
        Self {
            url: url.to_string(),
            category: category.to_string(),
            name: name.to_string(),
            language: language.to_string(),
        }
    }

    /// True when items from this source must be translated for `display_language`
    pub fn needs_translation(&self, display_language: &str) -> bool {
        !self.language.eq_ignore_ascii_case(display_language)
    }
}

impl std::fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}
