//! Common test utilities for integration tests.
//!
//! This module provides helpers for creating temporary git repositories
//! and a canned GitHub lookup so no test touches the network.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fake_github;
pub mod test_repo;

pub use fake_github::FakeGitHub;
pub use test_repo::TestRepo;

/// Is `git` available on PATH?
pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Return early from a test when git is not installed
macro_rules! skip_if_no_git {
    () => {
        if !$crate::common::git_available() {
            eprintln!("git not found, skipping test");
            return;
        }
    };
}
