//! git output parser
//!
//! Parses the output from git commands into structured data.

use std::sync::LazyLock;

use regex::Regex;

use super::GitError;
use super::constants::FIELD_SEPARATOR;

/// Pull request reference appended to squash-merged commit subjects,
/// e.g. `Fix crash on empty input (#1234)`
static PR_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#([0-9]+)\)").expect("Invalid PR number regex"));

/// One line of `git log --pretty=format:%H%x09%s`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Full commit hash
    pub hash: String,
    /// Subject line
    pub title: String,
}

/// Parser for git command output
pub struct Parser;

impl Parser {
    /// Parse `git log` output in `%H%x09%s` format
    ///
    /// Empty output (empty range) yields an empty list.
    pub fn parse_log(output: &str) -> Result<Vec<LogEntry>, GitError> {
        let mut entries = Vec::new();

        for line in output.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let (hash, title) = line.split_once(FIELD_SEPARATOR).unwrap_or((line, ""));
            let hash = hash.trim();

            if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(GitError::ParseError(format!(
                    "Expected commit hash at start of log line: {:?}",
                    line
                )));
            }

            entries.push(LogEntry {
                hash: hash.to_string(),
                title: title.to_string(),
            });
        }

        Ok(entries)
    }

    /// Parse `git diff-tree --name-only` output into a list of paths
    pub fn parse_file_list(output: &str) -> Vec<String> {
        output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }

    /// Extract every `(#<digits>)` pull request reference in a commit subject
    ///
    /// Matches are returned in order of appearance.
    pub fn parse_pr_numbers(title: &str) -> Vec<String> {
        PR_NUMBER_REGEX
            .captures_iter(title)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
