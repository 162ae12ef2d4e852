//! Data models for relist
//!
//! Plain data structures for fetched commit metadata, worklist records,
//! and the release-notes topic vocabulary.

mod metadata;
mod record;
pub mod topic;

pub use metadata::CommitMetadata;
pub use record::{CommitRecord, RECORD_FIELDS};
pub use topic::{CANONICAL_TOPICS, UNCATEGORIZED, UNTOPICED};
