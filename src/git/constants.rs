//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and formats.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const MERGE_BASE: &str = "merge-base";
    pub const DIFF_TREE: &str = "diff-tree";
}

/// git command flags
pub mod flags {
    /// Run as if git was started in the given directory
    pub const REPO_PATH: &str = "-C";
    /// Limit `git log` to a single commit
    pub const SINGLE_COMMIT: &[&str] = &["-n", "1"];
    /// Oldest commit first
    pub const REVERSE: &str = "--reverse";
    /// Suppress the commit id line in `git diff-tree`
    pub const NO_COMMIT_ID: &str = "--no-commit-id";
    /// Only print changed paths
    pub const NAME_ONLY: &str = "--name-only";
    /// Recurse into subtrees
    pub const RECURSIVE: &str = "-r";
}

/// `--pretty=format:` strings for stable output parsing
pub mod formats {
    /// Subject line only
    pub const SUBJECT: &str = "--pretty=format:%s";
    /// Body only (everything after the subject and blank line)
    pub const BODY: &str = "--pretty=format:%b";
    /// Full hash, TAB, subject
    pub const HASH_AND_SUBJECT: &str = "--pretty=format:%H%x09%s";
}

/// Error detection patterns in git stderr
pub mod errors {
    /// Pattern indicating the working directory is not inside a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
    /// Pattern emitted when a revision does not resolve
    pub const BAD_REVISION: &[&str] = &[
        "Not a valid object name",
        "bad revision",
        "unknown revision",
        "Not a valid commit name",
    ];
}

/// Separator between hash and subject in [`formats::HASH_AND_SUBJECT`]
pub const FIELD_SEPARATOR: char = '\t';
