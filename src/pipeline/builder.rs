//! Worklist record construction

use super::cache::{CacheError, MetadataCache};
use super::classify::{Classification, classify};
use super::fetcher::MetadataFetcher;
use crate::model::CommitRecord;

/// Number of approver columns in a record
pub const APPROVER_COLUMNS: usize = 3;

/// Builds worklist records from cached commit metadata
///
/// Owns the metadata cache for the lifetime of the process.
#[derive(Debug)]
pub struct RecordBuilder<F> {
    cache: MetadataCache<F>,
    pull_request_url_base: String,
}

impl<F: MetadataFetcher> RecordBuilder<F> {
    /// `pull_request_url_base` is the URL PR numbers are appended to,
    /// e.g. `https://github.com/PaddlePaddle/Paddle/pull`
    pub fn new(cache: MetadataCache<F>, pull_request_url_base: impl Into<String>) -> Self {
        Self {
            cache,
            pull_request_url_base: pull_request_url_base.into(),
        }
    }

    /// Build the full record for one commit
    pub fn build(&mut self, commit_hash: &str) -> Result<CommitRecord, CacheError> {
        let metadata = self.cache.get(commit_hash)?;
        let Classification { category, topic } = classify(metadata);

        // Approvers beyond the third are dropped
        let mut approvers = metadata
            .approvers
            .iter()
            .cloned()
            .chain(std::iter::repeat(String::new()))
            .take(APPROVER_COLUMNS);

        Ok(CommitRecord {
            commit_hash: commit_hash.to_string(),
            category,
            topic,
            title: metadata.title.clone(),
            pull_request_link: metadata.pull_request_number.as_ref().map(|number| {
                format!(
                    "{}/{}",
                    self.pull_request_url_base.trim_end_matches('/'),
                    number
                )
            }),
            author: metadata.author.clone(),
            labels: metadata.labels.join(","),
            approver_1: approvers.next().unwrap_or_default(),
            approver_2: approvers.next().unwrap_or_default(),
            approver_3: approvers.next().unwrap_or_default(),
            merge_into: None,
        })
    }

    /// Classify a commit without building a record
    pub fn classify(&mut self, commit_hash: &str) -> Result<Classification, CacheError> {
        Ok(classify(self.cache.get(commit_hash)?))
    }

    pub fn cache(&self) -> &MetadataCache<F> {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::model::CommitMetadata;
    use crate::pipeline::FetchError;

    struct StaticFetcher(HashMap<&'static str, CommitMetadata>);

    impl MetadataFetcher for StaticFetcher {
        fn fetch(&self, commit_hash: &str) -> Result<CommitMetadata, FetchError> {
            Ok(self.0.get(commit_hash).cloned().unwrap_or_default())
        }
    }

    fn builder_with(
        dir: &tempfile::TempDir,
        entries: Vec<(&'static str, CommitMetadata)>,
    ) -> RecordBuilder<StaticFetcher> {
        let fetcher = StaticFetcher(entries.into_iter().collect());
        let cache = MetadataCache::open(dir.path().join("data.json"), fetcher).unwrap();
        RecordBuilder::new(cache, "https://github.com/PaddlePaddle/Paddle/pull")
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_build_reviewed_commit() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = CommitMetadata {
            title: "Add fused softmax (#4821)".to_string(),
            pull_request_number: Some("4821".to_string()),
            labels: strings(&["release notes: performance", "topic: bug_fixes"]),
            author: "zhangsan".to_string(),
            approvers: strings(&["lisi", "wangwu"]),
            ..Default::default()
        };
        let mut builder = builder_with(&dir, vec![("aaa", metadata)]);

        let record = builder.build("aaa").unwrap();
        assert_eq!(record.commit_hash, "aaa");
        assert_eq!(record.category, "performance");
        assert_eq!(record.topic, "bug_fixes");
        assert_eq!(record.title, "Add fused softmax (#4821)");
        assert_eq!(
            record.pull_request_link.as_deref(),
            Some("https://github.com/PaddlePaddle/Paddle/pull/4821")
        );
        assert_eq!(record.author, "zhangsan");
        assert_eq!(record.labels, "release notes: performance,topic: bug_fixes");
        assert_eq!(record.approver_1, "lisi");
        assert_eq!(record.approver_2, "wangwu");
        assert_eq!(record.approver_3, "");
        assert_eq!(record.merge_into, None);
    }

    #[test]
    fn test_build_truncates_approvers() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = CommitMetadata {
            title: "x (#1)".to_string(),
            pull_request_number: Some("1".to_string()),
            approvers: strings(&["a", "b", "c", "d", "e"]),
            ..Default::default()
        };
        let mut builder = builder_with(&dir, vec![("aaa", metadata)]);

        let record = builder.build("aaa").unwrap();
        assert_eq!(
            (record.approver_1.as_str(), record.approver_2.as_str(), record.approver_3.as_str()),
            ("a", "b", "c")
        );
    }

    #[test]
    fn test_build_unreviewed_commit() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = CommitMetadata {
            title: "Fix typo".to_string(),
            ..Default::default()
        };
        let mut builder = builder_with(&dir, vec![("bbb", metadata)]);

        let record = builder.build("bbb").unwrap();
        assert_eq!(record.pull_request_link, None);
        assert_eq!(record.category, "Uncategorized");
        assert_eq!(record.topic, "Untopiced");
        assert_eq!(record.labels, "");
        assert_eq!(record.approver_1, "");
    }

    #[test]
    fn test_url_base_trailing_slash() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StaticFetcher(HashMap::from([(
            "ccc",
            CommitMetadata {
                pull_request_number: Some("9".to_string()),
                ..Default::default()
            },
        )]));
        let cache = MetadataCache::open(dir.path().join("data.json"), fetcher).unwrap();
        let mut builder = RecordBuilder::new(cache, "https://github.com/o/r/pull/");

        let record = builder.build("ccc").unwrap();
        assert_eq!(
            record.pull_request_link.as_deref(),
            Some("https://github.com/o/r/pull/9")
        );
    }
}
