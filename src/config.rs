//! Configuration
//!
//! Settings come from an optional `relist.toml`, then command-line
//! overrides. The GitHub token is read from the environment or from
//! `~/.gh_tokenrc`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "relist.toml";
pub const DEFAULT_OWNER: &str = "PaddlePaddle";
pub const DEFAULT_REPO_NAME: &str = "Paddle";
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_WORKLIST_PATH: &str = "results/commitlist.csv";
pub const DEFAULT_CACHE_PATH: &str = "results/data.json";
pub const DEFAULT_EXPORT_DIR: &str = "results/export";

/// Environment variable checked first for a GitHub token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Token file in the home directory, containing `github_oauth = <token>`
pub const TOKEN_RC_FILE: &str = ".gh_tokenrc";

static TOKEN_RC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*github_oauth\s*=\s*(\S+)\s*$").expect("Invalid token rc regex")
});

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// The GitHub repository pull requests are looked up in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_repo_name")]
    pub name: String,
    #[serde(default = "default_graphql_endpoint")]
    pub graphql_endpoint: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            name: default_repo_name(),
            graphql_endpoint: default_graphql_endpoint(),
        }
    }
}

impl RepositoryConfig {
    /// Base URL that PR numbers are appended to
    pub fn pull_request_url_base(&self) -> String {
        format!("https://github.com/{}/{}/pull", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_worklist_path")]
    pub worklist: PathBuf,
    #[serde(default = "default_cache_path")]
    pub cache: PathBuf,
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            worklist: default_worklist_path(),
            cache: default_cache_path(),
            export_dir: default_export_dir(),
        }
    }
}

fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

fn default_repo_name() -> String {
    DEFAULT_REPO_NAME.to_string()
}

fn default_graphql_endpoint() -> String {
    DEFAULT_GRAPHQL_ENDPOINT.to_string()
}

fn default_worklist_path() -> PathBuf {
    PathBuf::from(DEFAULT_WORKLIST_PATH)
}

fn default_cache_path() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_PATH)
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

/// Load configuration
///
/// With an explicit `path` the file must exist. Otherwise `relist.toml` in
/// the working directory is used when present, and defaults when not.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(CONFIG_FILE_NAME), false),
    };

    if !required && !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&contents).map_err(|source| ConfigError::Toml { path, source })
}

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Resolve the GitHub token: `$GITHUB_TOKEN`, then `~/.gh_tokenrc`
pub fn github_token() -> Option<String> {
    if let Ok(token) = std::env::var(TOKEN_ENV)
        && !token.trim().is_empty()
    {
        return Some(token.trim().to_string());
    }

    let rc = dirs::home_dir()?.join(TOKEN_RC_FILE);
    let contents = fs::read_to_string(rc).ok()?;
    parse_token_rc(&contents)
}

/// Extract the token from `github_oauth = <token>` in a token rc file
pub fn parse_token_rc(contents: &str) -> Option<String> {
    TOKEN_RC_REGEX
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
