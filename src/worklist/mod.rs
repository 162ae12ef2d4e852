//! The release-notes worklist
//!
//! An ordered, oldest-first list of classified commit records backed by a
//! CSV file. Commit hashes are unique and existing records keep their
//! position (and any manual edits) when new commits are appended.

mod stats;
pub mod store;

pub use stats::Stats;

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::git::{RangeResolver, ResolutionError};
use crate::model::{CommitRecord, UNCATEGORIZED};
use crate::pipeline::{CacheError, FetchError, MetadataFetcher, RecordBuilder};

/// Errors operating on a worklist
#[derive(Error, Debug)]
pub enum WorklistError {
    #[error("A worklist already exists at {0}")]
    AlreadyExists(PathBuf),

    #[error("The worklist at {0} is empty; create a new one instead")]
    Empty(PathBuf),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl WorklistError {
    /// The fetch failure behind this error, if any
    pub fn as_fetch_error(&self) -> Option<&FetchError> {
        match self {
            Self::Cache(CacheError::Fetch(e)) => Some(e),
            _ => None,
        }
    }
}

/// Ordered collection of commit records persisted at `path`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worklist {
    path: PathBuf,
    records: Vec<CommitRecord>,
}

impl Worklist {
    /// Build a worklist for every commit in `base..target` (merge-base
    /// semantics) and persist it
    ///
    /// Fails without writing anything if a worklist already exists at `path`.
    pub fn create_new<R, F>(
        path: impl Into<PathBuf>,
        base: &str,
        target: &str,
        resolver: &R,
        builder: &mut RecordBuilder<F>,
    ) -> Result<Self, WorklistError>
    where
        R: RangeResolver,
        F: MetadataFetcher,
    {
        let path = path.into();
        if path.exists() {
            return Err(WorklistError::AlreadyExists(path));
        }

        let hashes = resolver.commits_between(base, target)?;
        info!(%base, %target, commits = hashes.len(), "creating worklist");

        let mut worklist = Self {
            path,
            records: Vec::with_capacity(hashes.len()),
        };
        worklist.append(hashes, builder)?;
        worklist.persist()?;
        Ok(worklist)
    }

    /// Load a persisted worklist
    ///
    /// A non-empty `new_title` column replaces `title` in memory.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, WorklistError> {
        let path = path.into();
        let records = store::read_records(&path)?;
        info!(path = %path.display(), records = records.len(), "loaded worklist");
        Ok(Self { path, records })
    }

    /// Wrap records that are not yet persisted
    pub fn from_records(path: impl Into<PathBuf>, records: Vec<CommitRecord>) -> Self {
        Self {
            path: path.into(),
            records,
        }
    }

    /// Append every commit after the last record up to `target`
    ///
    /// Returns the number of records added. Does not persist.
    pub fn extend<R, F>(
        &mut self,
        target: &str,
        resolver: &R,
        builder: &mut RecordBuilder<F>,
    ) -> Result<usize, WorklistError>
    where
        R: RangeResolver,
        F: MetadataFetcher,
    {
        let last = self
            .records
            .last()
            .map(|record| record.commit_hash.clone())
            .ok_or_else(|| WorklistError::Empty(self.path.clone()))?;

        let hashes = resolver.commits_between(&last, target)?;
        info!(from = %last, %target, commits = hashes.len(), "extending worklist");
        self.append(hashes, builder)
    }

    /// Re-run classification for records still marked `Uncategorized`
    ///
    /// Returns the number of records whose category or topic changed.
    pub fn reclassify_uncategorized<F: MetadataFetcher>(
        &mut self,
        builder: &mut RecordBuilder<F>,
    ) -> Result<usize, WorklistError> {
        let mut changed = 0;

        for record in self
            .records
            .iter_mut()
            .filter(|record| record.category == UNCATEGORIZED)
        {
            let classification = builder.classify(&record.commit_hash)?;
            if record.category != classification.category || record.topic != classification.topic
            {
                changed += 1;
            }
            record.category = classification.category;
            record.topic = classification.topic;
        }

        info!(changed, "reclassified uncategorized records");
        Ok(changed)
    }

    /// Records matching both constraints, in worklist order
    ///
    /// `None` places no constraint on that axis.
    pub fn filter(&self, category: Option<&str>, topic: Option<&str>) -> Vec<&CommitRecord> {
        self.records
            .iter()
            .filter(|record| category.is_none_or(|c| record.category == c))
            .filter(|record| topic.is_none_or(|t| record.topic == t))
            .collect()
    }

    /// Record counts by category, then topic
    pub fn stats(&self) -> Stats {
        Stats::from_records(&self.records)
    }

    /// Write the whole worklist to its path, replacing previous content
    pub fn persist(&self) -> Result<(), WorklistError> {
        store::write_records(&self.path, &self.records)?;
        info!(path = %self.path.display(), records = self.records.len(), "worklist written");
        Ok(())
    }

    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build and append records for `hashes`, skipping any already present
    fn append<F: MetadataFetcher>(
        &mut self,
        hashes: Vec<String>,
        builder: &mut RecordBuilder<F>,
    ) -> Result<usize, WorklistError> {
        let mut seen: HashSet<String> = self
            .records
            .iter()
            .map(|record| record.commit_hash.clone())
            .collect();
        let before = self.records.len();

        for hash in hashes {
            if !seen.insert(hash.clone()) {
                continue;
            }
            let record = builder.build(&hash)?;
            debug!(%record, "appended");
            self.records.push(record);
        }

        Ok(self.records.len() - before)
    }
}
