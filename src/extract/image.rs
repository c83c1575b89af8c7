use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::RawEntry;

static IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).expect("Invalid img src regex")
});

/// One strategy for finding an entry's image.
pub trait ImageResolver: Send + Sync {
    fn name(&self) -> &'static str;

    fn resolve(&self, entry: &RawEntry) -> Option<String>;
}

fn non_empty(url: &str) -> Option<String> {
    let url = url.trim();
    (!url.is_empty()).then(|| url.to_string())
}

/// `media:content`, preferring a record that declares itself an image
pub struct MediaContentResolver;

impl ImageResolver for MediaContentResolver {
    fn name(&self) -> &'static str {
        "media_content"
    }

    fn resolve(&self, entry: &RawEntry) -> Option<String> {
        let with_url = || {
            entry
                .media_content
                .iter()
                .filter_map(|m| m.url.as_deref().and_then(non_empty).map(|url| (m, url)))
        };

        with_url()
            .find(|(m, _)| m.is_image())
            .or_else(|| with_url().next())
            .map(|(_, url)| url)
    }
}

/// First `media:thumbnail`
pub struct MediaThumbnailResolver;

impl ImageResolver for MediaThumbnailResolver {
    fn name(&self) -> &'static str {
        "media_thumbnail"
    }

    fn resolve(&self, entry: &RawEntry) -> Option<String> {
        entry.media_thumbnails.iter().find_map(|t| non_empty(t))
    }
}

/// `<link rel="enclosure">` with an image media type
pub struct EnclosureResolver;

impl ImageResolver for EnclosureResolver {
    fn name(&self) -> &'static str {
        "enclosure"
    }

    fn resolve(&self, entry: &RawEntry) -> Option<String> {
        entry
            .links
            .iter()
            .filter(|l| l.rel.as_deref() == Some("enclosure"))
            .filter(|l| {
                l.media_type
                    .as_deref()
                    .is_some_and(|t| t.starts_with("image/"))
            })
            .find_map(|l| non_empty(&l.href))
    }
}

/// First `<img src>` inside the full content, or the summary when there is none
pub struct InlineImageResolver;

impl ImageResolver for InlineImageResolver {
    fn name(&self) -> &'static str {
        "inline_img"
    }

    fn resolve(&self, entry: &RawEntry) -> Option<String> {
        let html = entry.content.as_deref().or(entry.summary.as_deref())?;

        IMG_SRC
            .captures(html)
            .and_then(|caps| caps.get(1))
            .and_then(|m| non_empty(m.as_str()))
    }
}

/// Resolvers tried in order; the first hit wins.
pub struct ImageChain {
    resolvers: Vec<Box<dyn ImageResolver>>,
}

impl ImageChain {
    pub fn new() -> Self {
        let mut chain = Self {
            resolvers: Vec::new(),
        };

        // Order is priority
        chain.register(Box::new(MediaContentResolver));
        chain.register(Box::new(MediaThumbnailResolver));
        chain.register(Box::new(EnclosureResolver));
        chain.register(Box::new(InlineImageResolver));

        chain
    }

    pub fn register(&mut self, resolver: Box<dyn ImageResolver>) {
        self.resolvers.push(resolver);
    }

    pub fn resolve(&self, entry: &RawEntry) -> Option<String> {
        self.resolvers.iter().find_map(|r| {
            let found = r.resolve(entry);
            if found.is_some() {
                tracing::trace!(resolver = r.name(), "image resolved");
            }
            found
        })
    }
}

impl Default for ImageChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryLink, MediaContent};

    #[test]
    fn test_no_signal_is_none() {
        let entry = RawEntry::new()
            .with_title("Plain")
            .with_summary("<p>No pictures here</p>");

        assert_eq!(ImageChain::new().resolve(&entry), None);
    }

    #[test]
    fn test_media_content_first_entry_by_default() {
        let entry = RawEntry::new()
            .with_media_content(MediaContent::new("https://cdn.example.com/a.mp4").with_medium("video"))
            .with_media_content(MediaContent::new("https://cdn.example.com/b.jpg"));

        assert_eq!(
            MediaContentResolver.resolve(&entry).as_deref(),
            Some("https://cdn.example.com/a.mp4")
        );
    }

    #[test]
    fn test_media_content_prefers_image_medium() {
        let entry = RawEntry::new()
            .with_media_content(MediaContent::new("https://cdn.example.com/a.mp4").with_medium("video"))
            .with_media_content(MediaContent::new("https://cdn.example.com/b.jpg").with_medium("Image"));

        assert_eq!(
            MediaContentResolver.resolve(&entry).as_deref(),
            Some("https://cdn.example.com/b.jpg")
        );
    }

    #[test]
    fn test_media_content_skips_missing_urls() {
        let entry = RawEntry::new()
            .with_media_content(MediaContent::default())
            .with_media_content(MediaContent::new("https://cdn.example.com/c.png"));

        assert_eq!(
            MediaContentResolver.resolve(&entry).as_deref(),
            Some("https://cdn.example.com/c.png")
        );
    }

    #[test]
    fn test_thumbnail_only() {
        let entry = RawEntry::new().with_thumbnail("https://cdn.example.com/thumb.jpg");

        assert_eq!(
            ImageChain::new().resolve(&entry).as_deref(),
            Some("https://cdn.example.com/thumb.jpg")
        );
    }

    #[test]
    fn test_media_content_beats_enclosure() {
        let entry = RawEntry::new()
            .with_entry_link(EntryLink::enclosure("https://cdn.example.com/enc.jpg", "image/jpeg"))
            .with_media_content(MediaContent::new("https://cdn.example.com/media.jpg"));

        assert_eq!(
            ImageChain::new().resolve(&entry).as_deref(),
            Some("https://cdn.example.com/media.jpg")
        );
    }

    #[test]
    fn test_enclosure_requires_image_type() {
        let entry = RawEntry::new()
            .with_entry_link(EntryLink::enclosure("https://cdn.example.com/ep.mp3", "audio/mpeg"))
            .with_entry_link(EntryLink::new("https://example.com/story"))
            .with_entry_link(EntryLink::enclosure("https://cdn.example.com/cover.png", "image/png"));

        assert_eq!(
            EnclosureResolver.resolve(&entry).as_deref(),
            Some("https://cdn.example.com/cover.png")
        );
    }

    #[test]
    fn test_inline_image_prefers_content_over_summary() {
        let entry = RawEntry::new()
            .with_summary(r#"<img src="https://cdn.example.com/summary.jpg">"#)
            .with_content(r#"<p>Body</p><IMG class="hero" src='https://cdn.example.com/body.jpg' />"#);

        assert_eq!(
            ImageChain::new().resolve(&entry).as_deref(),
            Some("https://cdn.example.com/body.jpg")
        );
    }

    #[test]
    fn test_inline_image_from_summary() {
        let entry = RawEntry::new()
            .with_summary(r#"Lead <img alt="x" src="https://cdn.example.com/s.jpg"> more"#);

        assert_eq!(
            ImageChain::new().resolve(&entry).as_deref(),
            Some("https://cdn.example.com/s.jpg")
        );
    }
}
