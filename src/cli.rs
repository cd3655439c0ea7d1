use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shindan",
    version,
    about = "Facility-match diagnosis quiz scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a submission and print the qualified candidates
    Diagnose(DiagnoseCommand),
    /// List the quiz questions and their options
    Questions(QuestionsCommand),
    /// List the candidate facilities
    Catalog(CatalogCommand),
    /// Lint a catalog for inconsistent static data
    Check(CheckCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct DiagnoseCommand {
    /// Selected option string (repeatable)
    #[arg(short, long = "select", value_name = "TAG")]
    pub select: Vec<String>,

    /// AND-filter tag, must be one of the selections (repeatable)
    #[arg(short = 'F', long = "filter", value_name = "TAG")]
    pub filter: Vec<String>,

    /// TOML file with selections (and optionally filter tags)
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Catalog TOML overriding the builtin data
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Minimum match count for a candidate to qualify
    #[arg(long)]
    pub threshold: Option<u32>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct QuestionsCommand {
    /// Catalog TOML overriding the builtin data
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Args)]
pub struct CatalogCommand {
    /// Catalog TOML overriding the builtin data
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Catalog TOML overriding the builtin data
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}
