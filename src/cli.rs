use clap::{Args, Parser, Subcommand, ValueEnum};
use leadscore::report::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "leadscore",
    version,
    about = "Lead quality scoring and pipeline analytics CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./leadscore.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single lead document
    Score(ScoreCommand),
    /// Score a batch of leads and print aggregate analytics
    Report(ReportCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ReportCommand {
    /// JSON file (array, object, or {"leads": [...]}) or directory of JSON documents
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Also write a timestamped snapshot to the export directory
    #[arg(long)]
    pub export: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
        }
    }
}
