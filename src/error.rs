use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pagefix
#[derive(Error, Debug)]
pub enum PagefixError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("File operation failed: {message}")]
    FileOperation { message: String, path: PathBuf },

    #[error("Error: {} not found", path.display())]
    MissingInput { path: PathBuf },

    #[error("Error decoding base64: {message}")]
    PayloadDecode {
        message: String,
        /// Length of the cleaned payload string, in characters
        cleaned_len: usize,
        /// First 100 characters of the cleaned payload
        prefix: String,
    },
}

impl PagefixError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new file operation error
    pub fn file_error(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileOperation {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a new missing input error
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput { path: path.into() }
    }

    /// Create a new payload decode error, capturing the diagnostics the
    /// decode command reports: cleaned length and a 100-character prefix.
    pub fn payload_decode(message: impl Into<String>, cleaned: &str) -> Self {
        Self::PayloadDecode {
            message: message.into(),
            cleaned_len: cleaned.chars().count(),
            prefix: cleaned.chars().take(100).collect(),
        }
    }
}

impl From<std::io::Error> for PagefixError {
    fn from(error: std::io::Error) -> Self {
        PagefixError::io_error(error, None::<PathBuf>)
    }
}

/// Result type alias using PagefixError
pub type PagefixResult<T> = Result<T, PagefixError>;
