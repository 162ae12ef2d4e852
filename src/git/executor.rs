//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::GitError;
use super::constants::{self, commands, errors, flags, formats};
use super::parser::{LogEntry, Parser};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    ///
    /// Returns trimmed stdout on success.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.args(args);
        debug!(?args, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git merge-base <a> <b>`
    ///
    /// Exit code 1 with no output means the two revisions share no ancestor.
    pub fn merge_base(&self, a: &str, b: &str) -> Result<String, GitError> {
        self.run(&[commands::MERGE_BASE, a, b])
    }

    /// Run `git log --reverse` over `<from>..<to>`, oldest first
    pub fn log_range(&self, from: &str, to: &str) -> Result<Vec<LogEntry>, GitError> {
        let range = format!("{from}..{to}");
        let output = self.run(&[
            commands::LOG,
            flags::REVERSE,
            formats::HASH_AND_SUBJECT,
            &range,
        ])?;
        Parser::parse_log(&output)
    }

    /// Subject line of a single commit
    pub fn commit_title(&self, commit_hash: &str) -> Result<String, GitError> {
        let mut args = vec![commands::LOG];
        args.extend_from_slice(flags::SINGLE_COMMIT);
        args.extend([formats::SUBJECT, commit_hash]);
        self.run(&args)
    }

    /// Body of a single commit (empty string when there is none)
    pub fn commit_body(&self, commit_hash: &str) -> Result<String, GitError> {
        let mut args = vec![commands::LOG];
        args.extend_from_slice(flags::SINGLE_COMMIT);
        args.extend([formats::BODY, commit_hash]);
        self.run(&args)
    }

    /// Paths touched by a single commit
    pub fn files_changed(&self, commit_hash: &str) -> Result<Vec<String>, GitError> {
        let output = self.run(&[
            commands::DIFF_TREE,
            flags::NO_COMMIT_ID,
            flags::NAME_ONLY,
            flags::RECURSIVE,
            commit_hash,
        ])?;
        Ok(Parser::parse_file_list(&output))
    }
}
