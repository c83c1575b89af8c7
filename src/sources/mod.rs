pub mod traits;
pub mod rss_atom;
pub mod fetcher;
pub mod health;
pub mod registry;
pub mod verbatim;

pub use traits::{FeedFetcher, FeedParser};
pub use rss_atom::RssAtomParser;
pub use fetcher::{HttpFeedFetcher, DEFAULT_ITEMS_PER_SOURCE};
pub use health::{SourceHealth, SourceStatus};
pub use registry::SourceRegistry;
