use std::io;

use thiserror::Error;

/// Library-wide error type for transfer-panel operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Pane name is not one of the panel's panes.
    #[error("Invalid pane '{0}': must be one of rsync, rclone")]
    InvalidPane(String),

    /// Config file not found at an explicitly requested path.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Interactive prompt failed.
    #[error("Failed to read {field}: {details}")]
    Prompt { field: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidPane(_)
            | AppError::TomlParseError(_)
            | AppError::Prompt { .. } => io::ErrorKind::InvalidInput,
            AppError::ConfigFileNotFound(_) => io::ErrorKind::NotFound,
            AppError::Logging(_) => io::ErrorKind::Other,
        }
    }
}

/// Failure to complete a job request or to decode its response.
///
/// These never escape the panel: the dispatcher turns each one into a failed
/// `JobOutcome` with a rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[error("{0}")]
    Request(String),

    /// A success response carried a body that is not a job result.
    #[error("{0}")]
    Decode(String),

    /// A non-success response carried a body that is not a job result.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The request failed without any reason attached.
    #[error("request failed")]
    Unavailable,
}

impl TransportError {
    /// Human-readable reason, if the failure carried one.
    pub fn reason(&self) -> Option<String> {
        match self {
            TransportError::Request(message) | TransportError::Decode(message) => {
                let message = message.trim();
                (!message.is_empty()).then(|| message.to_string())
            }
            TransportError::Status { .. } => Some(self.to_string()),
            TransportError::Unavailable => None,
        }
    }
}
