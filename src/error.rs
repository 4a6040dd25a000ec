use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for FSD reading and FDI writing
pub type Result<T> = std::result::Result<T, FdiError>;

/// Errors that can occur while converting an FSD dump to an FDI image
#[derive(Debug, Error)]
pub enum FdiError {
    /// A file could not be opened or created
    #[error("Cannot open file '{}': {source}", path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not a recognised FSD file
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Parse error at specific offset
    #[error("Parse error at offset {offset}: {message}")]
    ParseError {
        /// Byte offset where error occurred
        offset: usize,
        /// Error message
        message: String,
    },

    /// Sector data too long for one decoded data block
    #[error("Sector of {0} bytes is too large for an FDI track")]
    SectorTooLarge(usize),

    /// Encoded track too long for its track descriptor
    #[error("Track {track} is {len} bytes, more than a track descriptor can hold")]
    TrackTooLarge {
        /// Index of the track in the image
        track: usize,
        /// Encoded length in bytes
        len: usize,
    },
}

impl FdiError {
    /// Create an open error for the given path
    pub fn open<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        FdiError::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with context
    pub fn parse<S: Into<String>>(offset: usize, message: S) -> Self {
        FdiError::ParseError {
            offset,
            message: message.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        FdiError::InvalidFormat(message.into())
    }
}
