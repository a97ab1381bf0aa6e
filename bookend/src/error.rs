use std::{io, string::FromUtf8Error};
use bookend_core::ScanError;

/// [`Result`][std::result::Result] alias for [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error that can occur during processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Named template does not exist in storage.
    #[error("cannot process {name}: does not exist")]
    NotFound { name: String },
    /// Template exists but could not be opened.
    #[error("cannot process {name}: failed to open")]
    Unopenable {
        name: String,
        #[source]
        source: io::Error,
    },
    /// Malformed template or failure reading it.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// Failure writing to the sink.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Rendered output is not valid utf-8.
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
}

impl Error {
    /// Returns `true` if the template has a key without closing delimiter.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Scan(ScanError::Unterminated { .. }))
    }

    /// Convert error to [`io::Error`].
    ///
    /// Template errors will become [`io::ErrorKind::NotFound`] or [`io::ErrorKind::InvalidData`].
    pub fn into_io(self) -> io::Error {
        match self {
            Error::NotFound { .. } => io::Error::new(io::ErrorKind::NotFound, self),
            Error::Unopenable { source, .. } => source,
            Error::Scan(ScanError::Io(error)) => error,
            Error::Scan(err) => io::Error::new(io::ErrorKind::InvalidData, err),
            Error::Io(error) => error,
            Error::Utf8(err) => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}
