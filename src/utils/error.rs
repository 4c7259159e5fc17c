use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RecordsError {
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        RecordsError::InvalidArgument {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        RecordsError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RecordsError::InvalidArgument { .. } => ErrorCategory::Validation,
            RecordsError::IoError(_) | RecordsError::SerializationError(_) => ErrorCategory::Io,
            RecordsError::ConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RecordsError::InvalidArgument { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecordsError::InvalidArgument { reason, .. } => reason.clone(),
            RecordsError::ConfigError { message } => format!("Scenario problem: {}", message),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Correct the offending value in the scenario and run again",
            ErrorCategory::Configuration => "Check the scenario file syntax and the command-line flags",
            ErrorCategory::Io => "Check that the output stream and scenario path are accessible",
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;
