#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::batch::DEFAULT_COLUMN;
use crate::core::policy::{ClampPolicy, Clamper, InvertedBounds, NonFinite};
use crate::domain::model::Bounds;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use toml_config::TomlConfig;

/// Settings after layering command-line overrides on top of the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub policy: ClampPolicy,
    pub column: String,
}

impl ResolvedConfig {
    pub fn from_toml(file: &TomlConfig) -> Self {
        Self {
            lower: file.lower(),
            upper: file.upper(),
            policy: file.policy,
            column: file.column().unwrap_or(DEFAULT_COLUMN).to_string(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut resolved = Self::from_toml(&file);
        let bounds = cli.bounds_args();
        if let Some(lower) = bounds.lower {
            resolved.lower = Some(lower);
        }
        if let Some(upper) = bounds.upper {
            resolved.upper = Some(upper);
        }
        if let Some(column) = cli.column() {
            resolved.column = column.to_string();
        }
        if cli.swap_inverted {
            resolved.policy.inverted_bounds = InvertedBounds::Swap;
        }
        if cli.allow_non_finite {
            resolved.policy.non_finite = NonFinite::Propagate;
        }

        tracing::debug!("Resolved config: {:?}", resolved);
        Ok(resolved)
    }
}

impl ConfigProvider for ResolvedConfig {
    fn bounds(&self) -> Result<Bounds> {
        let lower = validate_required_field("bounds.lower", &self.lower)?;
        let upper = validate_required_field("bounds.upper", &self.upper)?;
        Clamper::new(self.policy).resolve_bounds(*lower, *upper)
    }

    fn policy(&self) -> ClampPolicy {
        self.policy
    }

    fn column(&self) -> &str {
        &self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ClampError;

    #[test]
    fn test_missing_bounds_is_reported() {
        let resolved = ResolvedConfig::from_toml(&TomlConfig::default());
        let err = resolved.bounds().unwrap_err();
        assert!(matches!(err, ClampError::MissingConfigError { ref field } if field == "bounds.lower"));
        assert_eq!(resolved.column(), DEFAULT_COLUMN);
    }

    #[test]
    fn test_bounds_follow_policy() {
        let file = TomlConfig::from_toml_str("[bounds]\nlower = 10\nupper = 0\n").unwrap();
        let mut resolved = ResolvedConfig::from_toml(&file);
        assert!(resolved.bounds().is_err());

        resolved.policy.inverted_bounds = InvertedBounds::Swap;
        assert_eq!(resolved.bounds().unwrap(), Bounds::new(0.0, 10.0).unwrap());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file() {
        use clap::Parser;
        use std::io::Write;

        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[bounds]\nlower = 0\nupper = 100\n\n[batch]\ncolumn = \"score\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "bclamp",
            "--config",
            path.as_str(),
            "value",
            "75",
            "--upper",
            "50",
            "--allow-non-finite",
        ])
        .unwrap();

        let resolved = ResolvedConfig::from_cli(&cli).unwrap();
        assert_eq!(resolved.lower, Some(0.0));
        assert_eq!(resolved.upper, Some(50.0));
        assert_eq!(resolved.column, "score");
        assert_eq!(resolved.policy.non_finite, NonFinite::Propagate);
        assert_eq!(resolved.policy.inverted_bounds, InvertedBounds::Reject);
    }
}
