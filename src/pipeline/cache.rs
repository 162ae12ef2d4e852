//! Disk-backed commit metadata cache
//!
//! The cache is read once when opened and rewritten in full after every
//! miss, so an interrupted run keeps everything fetched before the failure.
//! Entries are never overwritten: a hit never reaches the fetcher.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::fetcher::{FetchError, MetadataFetcher};
use crate::model::CommitMetadata;

/// Errors reading, populating, or writing the cache
#[derive(Error, Debug)]
pub enum CacheError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to read cache {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write cache {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed cache {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Commit hash → metadata map persisted as JSON
#[derive(Debug)]
pub struct MetadataCache<F> {
    path: PathBuf,
    fetcher: F,
    entries: BTreeMap<String, CommitMetadata>,
}

impl<F: MetadataFetcher> MetadataCache<F> {
    /// Open the cache at `path`, loading it if the file exists
    pub fn open(path: impl Into<PathBuf>, fetcher: F) -> Result<Self, CacheError> {
        let path = path.into();
        let entries = if path.exists() {
            read_entries(&path)?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = entries.len(), "opened metadata cache");

        Ok(Self {
            path,
            fetcher,
            entries,
        })
    }

    /// Metadata for `commit_hash`, fetching and persisting it on a miss
    pub fn get(&mut self, commit_hash: &str) -> Result<&CommitMetadata, CacheError> {
        if !self.entries.contains_key(commit_hash) {
            let metadata = self.fetcher.fetch(commit_hash)?;
            self.entries.insert(commit_hash.to_string(), metadata);
            self.write_to_disk()?;
        }
        Ok(&self.entries[commit_hash])
    }

    /// Is `commit_hash` already cached?
    pub fn contains(&self, commit_hash: &str) -> bool {
        self.entries.contains_key(commit_hash)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Rewrite the whole cache file
    ///
    /// Writes a sibling temp file first and renames it into place.
    fn write_to_disk(&self) -> Result<(), CacheError> {
        let write_err = |source| CacheError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_vec(&self.entries).map_err(|source| CacheError::Json {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        info!(path = %self.path.display(), entries = self.entries.len(), "cache written");
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, CommitMetadata>, CacheError> {
    let contents = fs::read_to_string(path).map_err(|source| CacheError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CacheError::Json {
        path: path.to_path_buf(),
        source,
    })
}
