use crate::config::cli::{Command, ValueArgs};
use crate::config::{CliConfig, ResolvedConfig};
use crate::core::batch::BatchClamper;
use crate::core::policy::Clamper;
use crate::domain::model::{BatchSummary, Position};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// Result of a single `value` invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueReport {
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
    pub result: f64,
    pub position: Position,
}

/// Runs the parsed command. Results go to `out`; the batch summary goes to
/// `diag` when the clamped CSV itself is written to `out`.
pub fn run<W: Write, D: Write>(cli: &CliConfig, out: &mut W, diag: &mut D) -> Result<()> {
    let config = ResolvedConfig::from_cli(cli)?;
    match &cli.command {
        Command::Value(args) => {
            let report = clamp_value(&config, args)?;
            if cli.json {
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                writeln!(out, "{}", report.result)?;
            }
        }
        Command::Batch(args) => {
            let batch = BatchClamper::from_config(&config)?;
            match args.output.as_deref() {
                Some(path) => {
                    let summary = batch.run_files(&args.input, path)?;
                    write_summary(out, &summary, cli.json)?;
                }
                None => {
                    let summary = batch.run_path(&args.input, &mut *out)?;
                    write_summary(diag, &summary, cli.json)?;
                }
            }
        }
    }
    Ok(())
}

pub fn clamp_value(config: &ResolvedConfig, args: &ValueArgs) -> Result<ValueReport> {
    let bounds = config.bounds()?;
    let result = Clamper::new(config.policy()).apply_bounds(args.value, &bounds)?;
    tracing::debug!("clamp({}, {}) = {}", args.value, bounds, result);
    Ok(ValueReport {
        value: args.value,
        lower: bounds.lower,
        upper: bounds.upper,
        result,
        position: bounds.position(args.value),
    })
}

fn write_summary<W: Write>(out: &mut W, summary: &BatchSummary, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(summary)?)?;
    } else {
        writeln!(
            out,
            "{} values: {} below, {} within, {} above",
            summary.total, summary.below, summary.within, summary.above
        )?;
    }
    Ok(())
}
