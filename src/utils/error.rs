use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Arithmetic overflow during {operation}")]
    Overflow { operation: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Computation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::ConfigParseError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DemoError::IoError(_) => ErrorCategory::Io,
            DemoError::SerializationError(_) | DemoError::Overflow { .. } => {
                ErrorCategory::Computation
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::ConfigParseError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            // stdout closed early, e.g. piped into `head`
            DemoError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            DemoError::IoError(_) => ErrorSeverity::Critical,
            DemoError::SerializationError(_) | DemoError::Overflow { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    /// Exit code the binary uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::IoError(_) => {
                "Check that the file exists and that standard output is writable".to_string()
            }
            DemoError::SerializationError(_) => {
                "Check that the person record only holds plain text and numbers".to_string()
            }
            DemoError::ConfigParseError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            DemoError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
            DemoError::Overflow { .. } => {
                "Use smaller numbers so their sum fits in a 64-bit integer".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read or write: {}", e),
            DemoError::SerializationError(_) => "Could not render the person record".to_string(),
            DemoError::ConfigParseError { message } => {
                format!("The config file could not be parsed: {}", message)
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            DemoError::Overflow { operation } => format!("The {} overflowed", operation),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
