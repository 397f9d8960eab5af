//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "statcast-etl",
    version,
    about = "MLB pitching warehouse ETL",
    long_about = "Ingest a team's pitching boxscores, extract statcast \
                  pitch-by-pitch data, and stage it into the warehouse.\n\n\
                  Database connection comes from DB_USER / DB_PASSWORD / \
                  DB_HOST / DB_PORT / DB_NAME (a .env file is honored)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Control ANSI color output.
    #[arg(long = "color", value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the warehouse schemas and tables if they do not exist.
    InitTables,

    /// Fetch a team's schedule and load its pitching boxscores.
    Boxscores(BoxscoresArgs),

    /// Download statcast pitches for every pitcher in the boxscore table.
    Statcast(StatcastArgs),

    /// Clean a statcast export and load it into the pitching fact table.
    Stage(StageArgs),
}

#[derive(Parser)]
pub struct BoxscoresArgs {
    /// MLB Stats API team id (119 = Los Angeles Dodgers).
    #[arg(long = "team-id", default_value_t = 119)]
    pub team_id: i64,

    /// First schedule date (YYYY-MM-DD).
    #[arg(long)]
    pub start: String,

    /// Last schedule date (YYYY-MM-DD).
    #[arg(long)]
    pub end: String,
}

#[derive(Parser)]
pub struct StatcastArgs {
    /// First game date (YYYY-MM-DD).
    #[arg(long)]
    pub start: String,

    /// Last game date (YYYY-MM-DD).
    #[arg(long)]
    pub end: String,

    /// Path of the combined CSV export to write.
    #[arg(long, value_name = "PATH", default_value = "statcast_pitches.csv")]
    pub export: PathBuf,
}

#[derive(Parser)]
pub struct StageArgs {
    /// Statcast CSV export to stage.
    #[arg(value_name = "EXPORT")]
    pub input: PathBuf,

    /// Primary key columns to enforce (comma separated).
    #[arg(long, value_delimiter = ',', value_name = "COLUMNS")]
    pub key: Option<Vec<String>>,

    /// Run the pipeline and report without loading the warehouse.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}
