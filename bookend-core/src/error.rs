use std::io;

/// [`Result`][std::result::Result] alias for [`ScanError`].
pub type Result<T,E = ScanError> = core::result::Result<T,E>;

/// An error that may occur during scanning in [`Scanner`][super::Scanner].
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Input ended before the key opened at `offset` was closed.
    #[error("unterminated key opened at byte {offset}")]
    Unterminated { offset: usize },
    /// Character that cannot be used as a delimiter.
    #[error("invalid delimiter {0:?}, expected printable ascii other than '\\'")]
    InvalidDelimiter(char),
    /// Failed to read the template source.
    #[error("failed to read template: {0}")]
    Io(#[from] io::Error),
}
