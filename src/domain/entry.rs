/// One `media:content` record attached to an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaContent {
    pub url: Option<String>,
    /// Declared medium ("image", "video", ...) if the feed states one
    pub medium: Option<String>,
}

impl MediaContent {
    pub fn new(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            medium: None,
        }
    }

    pub fn with_medium(mut self, medium: &str) -> Self {
        self.medium = Some(medium.to_string());
        self
    }

    pub fn is_image(&self) -> bool {
        self.medium
            .as_deref()
            .is_some_and(|m| m.eq_ignore_ascii_case("image"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryLink {
    pub href: String,
    pub rel: Option<String>,
    pub media_type: Option<String>,
}

impl EntryLink {
    pub fn new(href: &str) -> Self {
        Self {
            href: href.to_string(),
            rel: None,
            media_type: None,
        }
    }

    pub fn enclosure(href: &str, media_type: &str) -> Self {
        Self {
            href: href.to_string(),
            rel: Some("enclosure".to_string()),
            media_type: Some(media_type.to_string()),
        }
    }
}

/// A feed entry as parsed, before normalization.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub published: Option<String>,
    pub media_content: Vec<MediaContent>,
    pub media_thumbnails: Vec<String>,
    pub links: Vec<EntryLink>,
}

impl RawEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_string());
        self
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn with_published(mut self, published: &str) -> Self {
        self.published = Some(published.to_string());
        self
    }

    pub fn with_media_content(mut self, media: MediaContent) -> Self {
        self.media_content.push(media);
        self
    }

    pub fn with_thumbnail(mut self, url: &str) -> Self {
        self.media_thumbnails.push(url.to_string());
        self
    }

    pub fn with_entry_link(mut self, link: EntryLink) -> Self {
        self.links.push(link);
        self
    }
}
