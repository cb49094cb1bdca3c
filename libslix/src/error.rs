// libslix-rs/libslix/src/error.rs

//! Error types for the SLIX layer, the ISO15693 base layer, stores and the codec.

use thiserror::Error;

/// SLIX layer error.
///
/// Success is expressed through `Ok`/`None`; there is no "no error" variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlixError {
    /// No reply in time
    #[error("operation timed out")]
    Timeout,

    /// Frame too short, too long or otherwise malformed
    #[error("frame format error")]
    Format,

    /// Command or feature not available on this tag
    #[error("command not supported")]
    NotSupported,

    /// Base protocol failure
    #[error("internal error in base protocol")]
    Internal,

    /// Anything else, including dropped requests
    #[error("unknown error")]
    Unknown,
}

/// Errors reported by the ISO15693-3 base layer (transport and error frames).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Iso15693Error {
    #[error("no tag present")]
    NotPresent,
    #[error("response buffer empty")]
    BufferEmpty,
    #[error("buffer overflow")]
    BufferOverflow,
    #[error("field is off")]
    FieldOff,
    #[error("crc mismatch")]
    WrongCrc,
    #[error("timed out waiting for response")]
    Timeout,
    #[error("format error")]
    Format,
    #[error("i/o error")]
    Io,
    #[error("not supported")]
    NotSupported,
    #[error("unexpected response")]
    UnexpectedResponse,
    #[error("internal error")]
    Internal,
    #[error("custom error")]
    Custom,
    #[error("unknown error")]
    Unknown,
}

impl From<Iso15693Error> for SlixError {
    fn from(err: Iso15693Error) -> Self {
        match err {
            Iso15693Error::Timeout => SlixError::Timeout,
            Iso15693Error::Format => SlixError::Format,
            Iso15693Error::NotSupported => SlixError::NotSupported,
            Iso15693Error::Internal => SlixError::Internal,
            _ => SlixError::Unknown,
        }
    }
}

/// Errors raised by a key/value store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Key absent from the store
    #[error("key not found: {0}")]
    MissingKey(String),

    /// Value has the wrong number of bytes
    #[error("invalid value length: expected {expected}, got {actual}")]
    Length { expected: usize, actual: usize },

    /// Value text could not be parsed
    #[error("value parse error: {0}")]
    Parse(String),

    /// Store refused the write
    #[error("store is read-only")]
    ReadOnly,
}

/// Errors raised while loading or saving `SlixData`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The ISO15693 base record failed to load or save
    #[error("base protocol record: {0}")]
    BaseFormat(StoreError),

    /// UID is not a SLIX family tag
    #[error("uid does not identify a SLIX variant")]
    UnknownVariant,

    /// A stored SLIX field is present but unreadable
    #[error("malformed value for '{key}': {source}")]
    Malformed {
        /// Offending key
        key: &'static str,
        /// Underlying store error
        #[source]
        source: StoreError,
    },

    /// Writing a SLIX field failed
    #[error("store write failed for '{key}': {source}")]
    Store {
        /// Key being written
        key: &'static str,
        /// Underlying store error
        #[source]
        source: StoreError,
    },

    /// Writing a section comment failed
    #[error("store comment write failed: {0}")]
    Comment(#[source] StoreError),
}

/// A [`WriteBatch`](crate::store::WriteBatch) was rejected; nothing from it
/// was kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("batched write #{index} failed: {source}")]
pub struct BatchError {
    /// Position of the failing write in the batch
    pub index: usize,
    /// Store failure for that write
    #[source]
    pub source: StoreError,
}

/// Result alias for SLIX operations.
pub type Result<T> = std::result::Result<T, SlixError>;
