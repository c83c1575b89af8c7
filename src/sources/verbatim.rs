use quick_xml::de::from_reader;
use serde::Deserialize;

/// Entry fields that feed-rs normalizes away, read straight from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbatimEntry {
    /// Date text exactly as written
    pub published: Option<String>,
    /// RSS `<enclosure>` elements as (url, type)
    pub enclosures: Vec<(String, Option<String>)>,
}

#[derive(Debug, Deserialize)]
struct Document {
    // RSS 2.0
    channel: Option<Channel>,
    // RSS 1.0 keeps items beside the channel
    #[serde(rename = "item", default)]
    items: Vec<Item>,
    // Atom
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    #[serde(rename = "date", alias = "dc:date")]
    dc_date: Option<String>,
    #[serde(default)]
    enclosure: Vec<Enclosure>,
}

#[derive(Debug, Deserialize)]
struct Enclosure {
    #[serde(rename = "@url")]
    url: String,
    #[serde(rename = "@type")]
    mime: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    published: Option<String>,
    updated: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Per-entry verbatim fields in document order, or `None` when the document
/// cannot be read this way (JSON Feed, non-UTF-8, HTML entities...).
pub fn read_entries(bytes: &[u8]) -> Option<Vec<VerbatimEntry>> {
    let document: Document = from_reader(bytes).ok()?;

    if !document.entries.is_empty() {
        let entries = document
            .entries
            .into_iter()
            .map(|e| VerbatimEntry {
                published: non_blank(e.published).or_else(|| non_blank(e.updated)),
                enclosures: Vec::new(),
            })
            .collect();
        return Some(entries);
    }

    let items = match document.channel {
        Some(channel) if !channel.items.is_empty() => channel.items,
        _ => document.items,
    };

    let entries = items
        .into_iter()
        .map(|item| VerbatimEntry {
            published: non_blank(item.pub_date).or_else(|| non_blank(item.dc_date)),
            enclosures: item
                .enclosure
                .into_iter()
                .map(|e| (e.url, e.mime))
                .collect(),
        })
        .collect();

    Some(entries)
}
