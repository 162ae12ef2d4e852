//! relist - release-notes worklist builder
//!
//! Binary entry point.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use relist::cli::{Cli, Command};
use relist::config::{self, Config};
use relist::export;
use relist::git::GitExecutor;
use relist::github::GitHubClient;
use relist::pipeline::{CommitFetcher, MetadataCache, RecordBuilder};
use relist::worklist::Worklist;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

/// Log to stderr, honoring RUST_LOG when set
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let path = config.paths.worklist.clone();
    let git = match &cli.repo {
        Some(repo) => GitExecutor::with_repo_path(repo.clone()),
        None => GitExecutor::new(),
    };

    match cli.command {
        Command::CreateNew { base, target } => {
            let mut builder = record_builder(&config, &git)?;
            let worklist = Worklist::create_new(&path, &base, &target, &git, &mut builder)
                .wrap_err_with(|| format!("creating worklist at {}", path.display()))?;
            println!("Created {} with {} commits", path.display(), worklist.len());
        }
        Command::UpdateTo { target } => {
            let mut worklist = load(&path)?;
            let mut builder = record_builder(&config, &git)?;
            let added = worklist
                .extend(&target, &git, &mut builder)
                .wrap_err_with(|| format!("updating worklist to {target}"))?;
            worklist.persist()?;
            println!("Added {added} commits to {}", path.display());
        }
        Command::RerunClassification => {
            let mut worklist = load(&path)?;
            let mut builder = record_builder(&config, &git)?;
            let changed = worklist
                .reclassify_uncategorized(&mut builder)
                .wrap_err("re-running classification")?;
            worklist.persist()?;
            println!("Reclassified {changed} records");
        }
        Command::Stats => {
            let worklist = load(&path)?;
            println!("{}", worklist.stats());
        }
        Command::ExportCsvCategories => {
            let worklist = load(&path)?;
            for written in export::export_csv_categories(&worklist, &config.paths.export_dir)? {
                println!("Exported {}", written.display());
            }
        }
        Command::ExportMarkdown => {
            let worklist = load(&path)?;
            for written in export::export_markdown(&worklist, &config.paths.export_dir)? {
                println!("Exported {}", written.display());
            }
        }
    }

    Ok(())
}

/// Config file values with command-line overrides applied
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = config::load_config(cli.config.as_deref()).wrap_err("loading config")?;

    if let Some(path) = &cli.path {
        config.paths.worklist = path.clone();
    }
    if let Some(cache) = &cli.cache {
        config.paths.cache = cache.clone();
    }
    if let Some(export_dir) = &cli.export_dir {
        config.paths.export_dir = export_dir.clone();
    }
    if let Some(owner) = &cli.repo_owner {
        config.repository.owner = owner.clone();
    }
    if let Some(name) = &cli.repo_name {
        config.repository.name = name.clone();
    }

    Ok(config)
}

fn load(path: &std::path::Path) -> Result<Worklist> {
    Worklist::load(path).wrap_err_with(|| format!("loading worklist from {}", path.display()))
}

/// Construct the process-wide metadata cache and the builder that owns it
fn record_builder(
    config: &Config,
    git: &GitExecutor,
) -> Result<RecordBuilder<CommitFetcher<GitHubClient>>> {
    let token = config::github_token();
    if token.is_none() {
        warn!(
            "no GitHub token found in ${} or ~/{}; uncached pull requests cannot be fetched",
            config::TOKEN_ENV,
            config::TOKEN_RC_FILE
        );
    }

    let repo = &config.repository;
    let client = GitHubClient::new(
        &repo.graphql_endpoint,
        &repo.owner,
        &repo.name,
        token.as_deref(),
    )
    .wrap_err("building GitHub client")?;
    let fetcher = CommitFetcher::new(git.clone(), client);
    let cache = MetadataCache::open(&config.paths.cache, fetcher)
        .wrap_err_with(|| format!("opening cache {}", config.paths.cache.display()))?;

    Ok(RecordBuilder::new(cache, repo.pull_request_url_base()))
}
