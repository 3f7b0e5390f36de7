use crate::core::policy::ClampPolicy;
use crate::utils::error::{ClampError, Result};
use crate::utils::validation::{validate_finite, validate_non_empty_string, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
});

/// On-disk configuration. Every table is optional so a file can set only
/// the policy and leave bounds to the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub bounds: Option<BoundsConfig>,
    #[serde(default)]
    pub policy: ClampPolicy,
    pub batch: Option<BatchConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoundsConfig {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub column: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClampError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config: Self = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value; unknown names are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn lower(&self) -> Option<f64> {
        self.bounds.as_ref().and_then(|b| b.lower)
    }

    pub fn upper(&self) -> Option<f64> {
        self.bounds.as_ref().and_then(|b| b.upper)
    }

    pub fn column(&self) -> Option<&str> {
        self.batch.as_ref().and_then(|b| b.column.as_deref())
    }
}

impl Validate for TomlConfig {
    // Bound order is checked later, once the policy and CLI overrides are applied.
    fn validate(&self) -> Result<()> {
        if let Some(lower) = self.lower() {
            validate_finite("bounds.lower", lower)?;
        }
        if let Some(upper) = self.upper() {
            validate_finite("bounds.upper", upper)?;
        }
        if let Some(column) = self.column() {
            validate_non_empty_string("batch.column", column)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::{InvertedBounds, NonFinite};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[bounds]
lower = 0.0
upper = 100.0

[policy]
inverted_bounds = "swap"
non_finite = "reject"

[batch]
column = "score"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.lower(), Some(0.0));
        assert_eq!(config.upper(), Some(100.0));
        assert_eq!(config.policy.inverted_bounds, InvertedBounds::Swap);
        assert_eq!(config.policy.non_finite, NonFinite::Reject);
        assert_eq!(config.column(), Some("score"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.lower(), None);
        assert_eq!(config.policy, ClampPolicy::strict());
        assert_eq!(config.column(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BCLAMP_TEST_UPPER", "42.5");

        let toml_content = r#"
[bounds]
lower = 0
upper = ${BCLAMP_TEST_UPPER}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.upper(), Some(42.5));

        std::env::remove_var("BCLAMP_TEST_UPPER");
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let err = TomlConfig::from_toml_str("[policy]\nnon_finite = \"ignore\"\n").unwrap_err();
        assert!(matches!(err, ClampError::TomlError(_)));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[batch]\ncolumn = \"  \"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[bounds]\nlower = nan\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[bounds]\nlower = -1.0\nupper = 1.0\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.lower(), Some(-1.0));
        assert_eq!(config.upper(), Some(1.0));
    }
}
