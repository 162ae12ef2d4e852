//! Commit classification pipeline
//!
//! commit hash → cached or fetched metadata → classification → record.

mod builder;
mod cache;
mod classify;
mod fetcher;

pub use builder::{APPROVER_COLUMNS, RecordBuilder};
pub use cache::{CacheError, MetadataCache};
pub use classify::{CATEGORY_LABEL_PREFIX, Classification, TOPIC_LABEL_PREFIX, classify};
pub use fetcher::{CommitFetcher, FetchError, MetadataFetcher, parse_pr_number};
