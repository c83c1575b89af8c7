pub mod source;
pub mod entry;
pub mod item;

pub use source::SourceDescriptor;
pub use entry::{EntryLink, MediaContent, RawEntry};
pub use item::{sort_by_recency, NewsItem, MISSING_LINK, UNTITLED};
