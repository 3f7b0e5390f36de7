use crate::core::policy::Clamper;
use crate::domain::model::{BatchSummary, Bounds, ClampRecord};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ClampError, Result};
use crate::utils::validation::{parse_number, validate_non_empty_string};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const DEFAULT_COLUMN: &str = "value";

/// Clamps one numeric column of a CSV stream.
///
/// Output rows are `value,result,position`, one per input row, in input order.
pub struct BatchClamper {
    clamper: Clamper,
    bounds: Bounds,
    column: String,
}

impl BatchClamper {
    pub fn new(clamper: Clamper, bounds: Bounds, column: impl Into<String>) -> Self {
        Self {
            clamper,
            bounds,
            column: column.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        validate_non_empty_string("batch.column", config.column())?;
        let clamper = Clamper::new(config.policy());
        let bounds = config.bounds()?;
        Ok(Self::new(clamper, bounds, config.column()))
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<BatchSummary> {
        // flexible: short rows are reported below with their row number
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input);
        let mut writer = csv::Writer::from_writer(output);

        let column_index = reader
            .headers()?
            .iter()
            .position(|h| h == self.column)
            .ok_or_else(|| ClampError::ConfigError {
                message: format!("Column '{}' not found in CSV header", self.column),
            })?;

        tracing::debug!(
            "Clamping column '{}' (index {}) to {}",
            self.column,
            column_index,
            self.bounds
        );

        let mut summary = BatchSummary::default();
        for (row, result) in reader.records().enumerate() {
            let record = result?;
            // header is line 1
            let field = format!("row {}", row + 2);
            let raw = record.get(column_index).ok_or_else(|| {
                ClampError::invalid_argument(&field, "", format!("Missing column '{}'", self.column))
            })?;
            let value = parse_number(&field, raw)?;

            let clamped = self.clamper.apply_bounds(value, &self.bounds).map_err(|e| match e {
                ClampError::InvalidArgument { value, reason, .. } => ClampError::InvalidArgument {
                    field: field.clone(),
                    value,
                    reason,
                },
                other => other,
            })?;

            let out = ClampRecord {
                value,
                result: clamped,
                position: self.bounds.position(value),
            };
            writer.serialize(&out)?;
            summary.record(&out);
        }

        writer.flush()?;
        tracing::info!(
            "Clamped {} values: {} below, {} within, {} above",
            summary.total,
            summary.below,
            summary.within,
            summary.above
        );
        Ok(summary)
    }

    /// Reads the CSV file at `input` and writes clamped rows to `out`.
    pub fn run_path<W: Write>(&self, input: &Path, out: W) -> Result<BatchSummary> {
        tracing::info!("📁 Reading values from {}", input.display());
        let reader = File::open(input)?;
        self.run(reader, out)
    }

    /// Reads `input` and writes the clamped CSV to `output`.
    ///
    /// Rows go to a temporary file beside `output`, which replaces `output`
    /// only when every row succeeded. `output` must not be the input file.
    pub fn run_files(&self, input: &Path, output: &Path) -> Result<BatchSummary> {
        if output.exists() && std::fs::canonicalize(input)? == std::fs::canonicalize(output)? {
            return Err(ClampError::ConfigError {
                message: format!(
                    "Output path {} is the input file; choose a different output",
                    output.display()
                ),
            });
        }

        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut staged = NamedTempFile::new_in(dir)?;
        let summary = self.run_path(input, &mut staged)?;
        staged.persist(output).map_err(|e| ClampError::IoError(e.error))?;

        tracing::info!("📁 Output saved to: {}", output.display());
        Ok(summary)
    }
}
