//! The closed error taxonomy.
//!
//! Errors are hand-rolled std types (no `thiserror`): a small [`ErrorKind`]
//! enum naming the failure category plus a message-carrying [`Error`]. The
//! first error aborts the operation; there is no recovery, no retries and no
//! silent defaults anywhere in the DOM layer.

use std::fmt;

/// The category of a failure. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An object lookup named a key the object does not hold.
    KeyNotFound,
    /// Opening or reading a file failed.
    FilesystemError,
    /// The input is not well-formed JSON.
    ParsingError,
    /// A token was well-formed but had the wrong type for its position.
    ParsingErrorWrongType,
    /// A typed accessor or mutator was used against a node of another kind.
    WrongType,
    /// An array index was out of bounds.
    WrongIndex,
}

/// A failure, carrying its [`ErrorKind`] and a human-readable message.
#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Construct an error of an explicit kind with a message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
        }
    }

    /// A [`ParsingError`](ErrorKind::ParsingError).
    pub fn parsing(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::ParsingError, message)
    }

    /// A [`ParsingErrorWrongType`](ErrorKind::ParsingErrorWrongType).
    pub fn parsing_wrong_type(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::ParsingErrorWrongType, message)
    }

    /// A [`WrongType`](ErrorKind::WrongType).
    pub fn wrong_type(message: impl Into<String>) -> Self {
        Error::new(ErrorKind::WrongType, message)
    }

    /// A [`KeyNotFound`](ErrorKind::KeyNotFound) naming the missing key.
    pub fn key_not_found(key: &str) -> Self {
        Error::new(ErrorKind::KeyNotFound, format!("key '{key}' not found"))
    }

    /// A [`WrongIndex`](ErrorKind::WrongIndex) naming the index and length.
    pub fn wrong_index(index: usize, len: usize) -> Self {
        Error::new(
            ErrorKind::WrongIndex,
            format!("index {index} out of bounds for array of length {len}"),
        )
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::KeyNotFound => "key not found",
            ErrorKind::FilesystemError => "filesystem error",
            ErrorKind::ParsingError => "parsing error",
            ErrorKind::ParsingErrorWrongType => "parsing error (wrong type)",
            ErrorKind::WrongType => "wrong type",
            ErrorKind::WrongIndex => "wrong index",
        };
        f.write_str(text)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::FilesystemError, err.to_string())
    }
}
