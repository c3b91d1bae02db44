//! Error types for QDataStream decoding.

/// Errors that can occur while decoding a QDataStream.
///
/// Every error is fatal for the read that produced it. The stream has no
/// resynchronization markers, so after an error the cursor position is not
/// guaranteed to sit on a field boundary.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported variant type {0}")]
    UnsupportedType(u32),

    #[error("{version} is not a supported stream version, expected one of {supported:?}")]
    UnsupportedVersion {
        version: u32,
        supported: &'static [u32],
    },

    #[error("{kind} length {len} exceeds limit of {limit}")]
    LengthLimit {
        kind: &'static str,
        len: u32,
        limit: u32,
    },

    #[error("variant nesting exceeds maximum depth of {0}")]
    DepthLimit(usize),

    #[error("string byte length {0} is not a whole number of UTF-16 code units")]
    OddStringLength(u32),

    #[error("invalid UTF-16 string: {0}")]
    InvalidUtf16(#[from] std::string::FromUtf16Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl StreamError {
    /// Returns `true` if the error was caused by the byte source running dry.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// A convenience `Result` alias using [`StreamError`].
pub type Result<T> = std::result::Result<T, StreamError>;
