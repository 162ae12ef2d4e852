//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "relist",
    version,
    about = "Build and maintain a release-notes worklist from git history"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Worklist CSV location (default: results/commitlist.csv)
    #[arg(long, global = true)]
    pub path: Option<PathBuf>,

    /// Metadata cache location (default: results/data.json)
    #[arg(long, global = true)]
    pub cache: Option<PathBuf>,

    /// Directory for per-category exports (default: results/export)
    #[arg(long, global = true)]
    pub export_dir: Option<PathBuf>,

    /// Config file (default: ./relist.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// git repository to read history from (default: current directory)
    #[arg(long, global = true)]
    pub repo: Option<PathBuf>,

    /// GitHub repository owner pull requests belong to
    #[arg(long, global = true)]
    pub repo_owner: Option<String>,

    /// GitHub repository name pull requests belong to
    #[arg(long, global = true)]
    pub repo_name: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create a worklist with every commit between BASE and TARGET
    #[command(alias = "create_new")]
    CreateNew { base: String, target: String },

    /// Append commits after the last worklist entry up to TARGET
    #[command(alias = "update_to")]
    UpdateTo { target: String },

    /// Re-run classification for records still marked Uncategorized
    #[command(alias = "rerun_with_new_filters")]
    RerunClassification,

    /// Print record counts by category and topic
    #[command(alias = "stat")]
    Stats,

    /// Write one worklist-format CSV per category
    #[command(alias = "export_csv_categories")]
    ExportCsvCategories,

    /// Write one Markdown worksheet per category
    #[command(alias = "export_markdown")]
    ExportMarkdown,
}
