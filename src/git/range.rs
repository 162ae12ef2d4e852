//! Commit range resolution (merge-base semantics)

use thiserror::Error;
use tracing::debug;

use super::constants::errors;
use super::{GitError, GitExecutor};

/// Errors resolving a revision range
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("Invalid revision '{reference}': {stderr}")]
    InvalidRevision { reference: String, stderr: String },

    #[error("No common ancestor between '{base}' and '{target}'")]
    NoCommonAncestor { base: String, target: String },

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Computes the ordered commits between two revisions
///
/// The result holds the commits reachable from `target` but not from the
/// merge base of `base` and `target`, oldest first.
pub trait RangeResolver {
    fn commits_between(&self, base: &str, target: &str) -> Result<Vec<String>, ResolutionError>;
}

impl RangeResolver for GitExecutor {
    fn commits_between(&self, base: &str, target: &str) -> Result<Vec<String>, ResolutionError> {
        let merge_base = match self.merge_base(base, target) {
            Ok(hash) if !hash.is_empty() => hash,
            Ok(_) | Err(GitError::CommandFailed { exit_code: 1, .. }) => {
                return Err(ResolutionError::NoCommonAncestor {
                    base: base.to_string(),
                    target: target.to_string(),
                });
            }
            Err(GitError::CommandFailed { stderr, .. }) if is_bad_revision(&stderr) => {
                return Err(ResolutionError::InvalidRevision {
                    reference: offending_reference(&stderr, base, target).to_string(),
                    stderr,
                });
            }
            Err(e) => return Err(e.into()),
        };
        debug!(%base, %target, %merge_base, "resolved merge base");

        let entries = self.log_range(&merge_base, target)?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                debug!(commit = %entry.hash, title = %entry.title, "in range");
                entry.hash
            })
            .collect())
    }
}

fn is_bad_revision(stderr: &str) -> bool {
    errors::BAD_REVISION
        .iter()
        .any(|pattern| stderr.contains(pattern))
}

/// Pick whichever reference git complained about, defaulting to `base`
fn offending_reference<'a>(stderr: &str, base: &'a str, target: &'a str) -> &'a str {
    if !stderr.contains(base) && stderr.contains(target) {
        target
    } else {
        base
    }
}
