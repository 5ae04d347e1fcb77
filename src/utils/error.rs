use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
}

impl GreeterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GreeterError::IoError(_) => ErrorCategory::Io,
            GreeterError::SerializationError(_) => ErrorCategory::Input,
            GreeterError::ConfigParseError { .. }
            | GreeterError::InvalidConfigValueError { .. }
            | GreeterError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GreeterError::IoError(e) => format!("Could not read input: {}", e),
            GreeterError::SerializationError(e) => format!("Value is not valid JSON: {}", e),
            GreeterError::ConfigParseError { message } => {
                format!("Config file could not be parsed: {}", message)
            }
            GreeterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            GreeterError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GreeterError::IoError(_) => "Check that the file exists and is readable",
            GreeterError::SerializationError(_) => {
                "Quote text values as JSON strings, e.g. '\"world\"', or drop --json"
            }
            GreeterError::ConfigParseError { .. } => {
                "Make sure the config file is valid TOML with a [greeter] table"
            }
            GreeterError::InvalidConfigValueError { .. } => "Fix the value named above",
            GreeterError::MissingConfigError { .. } => {
                "Add the missing setting, e.g. values = [\"world\"] under [greeter]"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
