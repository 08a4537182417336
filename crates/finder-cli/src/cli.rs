//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use finder_domain::TopK;
use std::path::PathBuf;

/// Assessment Finder - Find assessments that match a job description.
#[derive(Debug, Parser)]
#[command(name = "finder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (URLs or raw queries only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get assessment recommendations for a query
    Recommend(RecommendArgs),

    /// List the test queries available for selection
    Queries(QueriesArgs),

    /// Extract test queries from a local JSON or CSV document
    Extract(ExtractArgs),

    /// Check that the recommendation service is up
    Health(HealthArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the recommend command.
#[derive(Debug, Parser)]
pub struct RecommendArgs {
    /// Job description or requirement text
    pub query: Option<String>,

    /// Use test query number N (see `finder queries`)
    #[arg(long, conflicts_with_all = ["query", "file", "stdin"])]
    pub pick: Option<usize>,

    /// Read the query from a file
    #[arg(long, conflicts_with_all = ["query", "stdin"])]
    pub file: Option<PathBuf>,

    /// Read the query from stdin
    #[arg(long, conflicts_with = "query")]
    pub stdin: bool,

    /// Number of results (1-20)
    #[arg(short = 'k', long)]
    pub top_k: Option<TopK>,

    /// Service base address
    #[arg(short, long, env = "FINDER_API_URL")]
    pub url: Option<String>,
}

/// Arguments for the queries command.
#[derive(Debug, Parser)]
pub struct QueriesArgs {
    /// Print full query text instead of a one-line preview
    #[arg(long)]
    pub full: bool,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Document to extract from
    pub file: PathBuf,

    /// Keep queries longer than this many characters
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Treat the document as CSV even if it looks like JSON
    #[arg(long)]
    pub csv_only: bool,
}

/// Arguments for the health command.
#[derive(Debug, Parser)]
pub struct HealthArgs {
    /// Service base address
    #[arg(short, long, env = "FINDER_API_URL")]
    pub url: Option<String>,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Service base address
        #[arg(short, long)]
        url: String,
        /// Default number of results (1-20)
        #[arg(short = 'k', long, default_value = "10")]
        top_k: TopK,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
