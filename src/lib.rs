//! relist - release-notes worklist builder
//!
//! Walks a range of git commits, looks up the pull request each one came
//! from, classifies it by its release-notes labels, and keeps the result
//! in an incrementally updated CSV worklist.
//!
//! This library provides:
//! - [`cli`]: Command-line definitions
//! - [`config`]: Settings and GitHub token lookup
//! - [`export`]: Per-category CSV and Markdown exports
//! - [`git`]: git command execution, parsing, and range resolution
//! - [`github`]: Pull request metadata from the GitHub GraphQL API
//! - [`model`]: Domain models
//! - [`pipeline`]: Metadata cache, classifier, and record builder
//! - [`report`]: Markdown rendering
//! - [`worklist`]: The persisted worklist

pub mod cli;
pub mod config;
pub mod export;
pub mod git;
pub mod github;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod worklist;
