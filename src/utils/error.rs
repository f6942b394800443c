use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EtlError {
    /// Message shown on stderr when the run aborts.
    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::CsvError(e) => format!("Could not parse the input file: {}", e),
            EtlError::IoError(e) => format!("Could not read or write a file: {}", e),
            EtlError::ConfigError { message } => format!("Configuration problem: {}", message),
            EtlError::ProcessingError { message } => format!("Processing failed: {}", message),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
