use feed_rs::parser;
use url::Url;

use crate::domain::{EntryLink, MediaContent, RawEntry};
use crate::errors::{NewsError, NewsResult};
use crate::sources::traits::FeedParser;
use crate::sources::verbatim::{self, VerbatimEntry};

/// RSS 0.9x/1.0/2.0, Atom and JSON Feed via `feed-rs`.
pub struct RssAtomParser;

impl RssAtomParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_bytes(bytes: &[u8]) -> NewsResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| NewsError::FeedParse(e.to_string()))
    }

    fn to_raw_entry(entry: feed_rs::model::Entry, verbatim: VerbatimEntry) -> RawEntry {
        let link = Self::select_link(&entry.links);

        // feed-rs reports RSS enclosures as media objects; they are links here
        let enclosure_urls: Vec<String> = verbatim
            .enclosures
            .iter()
            .map(|(url, _)| Url::parse(url).map_or_else(|_| url.clone(), |u| u.to_string()))
            .collect();
        let is_enclosure = |url: &Option<String>| {
            url.as_ref().is_some_and(|u| enclosure_urls.contains(u))
        };

        let media_content = entry
            .media
            .iter()
            .flat_map(|m| m.content.iter())
            .map(|c| MediaContent {
                url: c.url.as_ref().map(|u| u.to_string()),
                // feed-rs keeps the MIME type, not the `medium` attribute
                medium: c
                    .content_type
                    .as_ref()
                    .and_then(|m| m.to_string().split('/').next().map(str::to_string)),
            })
            .filter(|m| !is_enclosure(&m.url))
            .collect();

        let media_thumbnails = entry
            .media
            .iter()
            .flat_map(|m| m.thumbnails.iter())
            .map(|t| t.image.uri.clone())
            .collect();

        let links = entry
            .links
            .into_iter()
            .map(|l| EntryLink {
                href: l.href,
                rel: l.rel,
                media_type: l.media_type,
            })
            .chain(verbatim.enclosures.into_iter().map(|(href, media_type)| EntryLink {
                href,
                rel: Some("enclosure".to_string()),
                media_type,
            }))
            .collect();

        // Keep the date text as written; feed-rs only has the parsed value
        let published = verbatim.published.or_else(|| {
            entry
                .published
                .or(entry.updated)
                .map(|dt| dt.to_rfc2822())
        });

        RawEntry {
            title: entry.title.map(|t| t.content),
            link,
            summary: entry.summary.map(|s| s.content),
            content: entry.content.and_then(|c| c.body),
            published,
            media_content,
            media_thumbnails,
            links,
        }
    }

    /// The article link: an alternate link if there is one, else the first non-enclosure link
    fn select_link(links: &[feed_rs::model::Link]) -> Option<String> {
        let is_alternate = |l: &&feed_rs::model::Link| {
            l.rel.as_deref().map_or(true, |r| r == "alternate")
        };

        links
            .iter()
            .find(is_alternate)
            .or_else(|| links.iter().find(|l| l.rel.as_deref() != Some("enclosure")))
            .map(|l| l.href.clone())
    }
}

impl Default for RssAtomParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedParser for RssAtomParser {
    fn parse(&self, bytes: &[u8]) -> NewsResult<Vec<RawEntry>> {
        let feed = Self::parse_bytes(bytes)?;

        // Only trust the verbatim pass when it saw the same entries
        let mut verbatim = verbatim::read_entries(bytes)
            .filter(|v| v.len() == feed.entries.len())
            .unwrap_or_default()
            .into_iter();

        Ok(feed
            .entries
            .into_iter()
            .map(|entry| Self::to_raw_entry(entry, verbatim.next().unwrap_or_default()))
            .collect())
    }
}
