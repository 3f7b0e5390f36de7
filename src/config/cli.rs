use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bclamp", version)]
#[command(about = "Clamp numbers to an inclusive [lower, upper] range")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Treat lower > upper as an unordered pair instead of an error
    #[arg(long, global = true)]
    pub swap_inverted: bool,

    /// Clamp infinities and pass NaN through instead of rejecting them
    #[arg(long, global = true)]
    pub allow_non_finite: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Clamp a single value
    Value(ValueArgs),
    /// Clamp one column of a CSV file
    Batch(BatchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct BoundsArgs {
    /// Inclusive lower bound (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    pub lower: Option<f64>,

    /// Inclusive upper bound (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    pub upper: Option<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct ValueArgs {
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    #[command(flatten)]
    pub bounds: BoundsArgs,
}

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// CSV file with a header row
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the clamped CSV (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the numeric column to clamp
    #[arg(long)]
    pub column: Option<String>,

    #[command(flatten)]
    pub bounds: BoundsArgs,
}

impl CliConfig {
    pub fn bounds_args(&self) -> &BoundsArgs {
        match &self.command {
            Command::Value(args) => &args.bounds,
            Command::Batch(args) => &args.bounds,
        }
    }

    pub fn column(&self) -> Option<&str> {
        match &self.command {
            Command::Batch(args) => args.column.as_deref(),
            Command::Value(_) => None,
        }
    }
}
