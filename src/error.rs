use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotifError {
    #[error("Invalid argument: {name} = {value}, {message}")]
    InvalidArgument {
        name: String,
        value: String,
        message: String,
    },

    #[error("Malformed motif matrix: {0}")]
    MalformedMatrix(String),

    #[error("Window of length {k} out of range: only {available} positions available")]
    WindowOutOfRange { k: usize, available: usize },

    #[error("No windows of length {k} available in row {row}")]
    NoWindowsAvailable { row: usize, k: usize },

    #[error("Invalid sequence at position {position}: {message}")]
    InvalidSequence { position: usize, message: String },

    #[error("Data error: {0}")]
    DataError(String),
}

/// Type alias for Result with MotifError
pub type Result<T> = std::result::Result<T, MotifError>;

impl MotifError {
    /// Create a new InvalidArgument error
    pub fn invalid_argument(
        name: impl Into<String>,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        MotifError::InvalidArgument {
            name: name.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }

    /// Create a new MalformedMatrix error
    pub fn malformed_matrix(message: impl Into<String>) -> Self {
        MotifError::MalformedMatrix(message.into())
    }

    /// Create a new InvalidSequence error
    pub fn invalid_sequence(position: usize, message: impl Into<String>) -> Self {
        MotifError::InvalidSequence {
            position,
            message: message.into(),
        }
    }
}
