use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid input for '{field}' ({value}): {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid fund history: {message}")]
    InvalidHistoryError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        CalcError::InvalidInputError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidInputError { .. } => ErrorCategory::Input,
            CalcError::ApiError(_) | CalcError::HttpStatusError { .. } => ErrorCategory::Network,
            CalcError::CsvError(_)
            | CalcError::SerializationError(_)
            | CalcError::InvalidHistoryError { .. } => ErrorCategory::Data,
            CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CalcError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidInputError { .. } => {
                "Enter a positive amount and a day count greater than zero"
            }
            CalcError::ApiError(_) => "Check your network connection and retry",
            CalcError::HttpStatusError { .. } => {
                "Verify the dataset URL, the server may be temporarily unavailable"
            }
            CalcError::CsvError(_) => "Retry with --format table or --format json",
            CalcError::IoError(_) => "Make sure the dataset files exist and are readable",
            CalcError::SerializationError(_) => {
                "Regenerate the dataset JSON, it does not match the expected layout"
            }
            CalcError::ConfigError { .. } | CalcError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            CalcError::InvalidConfigValueError { .. } => {
                "Fix the highlighted configuration value and retry"
            }
            CalcError::MissingConfigError { .. } => {
                "Pass the value on the command line or add it to the config file"
            }
            CalcError::InvalidHistoryError { .. } => {
                "Regenerate fci_data.json, the quote history is incomplete"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidInputError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            CalcError::ApiError(_) | CalcError::HttpStatusError { .. } => {
                format!("Could not download the rate data ({})", self)
            }
            CalcError::SerializationError(_) => {
                format!("The rate data could not be read ({})", self)
            }
            CalcError::MissingConfigError { field } => {
                format!("Missing setting: {}", field)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
