use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClampError {
    #[error("Invalid argument '{field}' = {value}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Configuration,
    Io,
}

impl ClampError {
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ClampError::InvalidArgument {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClampError::InvalidArgument { .. } => ErrorCategory::Argument,
            ClampError::ConfigError { .. }
            | ClampError::MissingConfigError { .. }
            | ClampError::TomlError(_) => ErrorCategory::Configuration,
            ClampError::IoError(_) | ClampError::CsvError(_) | ClampError::SerializationError(_) => {
                ErrorCategory::Io
            }
        }
    }

    /// Process exit code for the CLI. 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Argument => 1,
            ErrorCategory::Io => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClampError::InvalidArgument { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            ClampError::MissingConfigError { field } => {
                format!("'{}' must be set on the command line or in the config file", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClampError>;
