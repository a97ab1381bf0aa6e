use crate::ScanError;

/// The escape byte.
///
/// Only meaningful right before the delimiter, where it turns the delimiter into a literal.
pub const ESCAPE: u8 = b'\\';

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: Delimiter = Delimiter(b'%');

/// Literal bytes buffered before they are flushed to the output.
pub const DEFAULT_BUFFER_SIZE: usize = 100;

/// A key delimiter, also called bookend.
//
// Opening and closing delimiter are the same byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter(u8);

impl Delimiter {
    /// Create new [`Delimiter`].
    ///
    /// Only printable ascii characters other than the [`ESCAPE`] byte are accepted.
    pub fn new(ch: char) -> Result<Self, ScanError> {
        match u8::try_from(ch) {
            Ok(byte) if byte.is_ascii_graphic() && byte != ESCAPE => Ok(Self(byte)),
            _ => Err(ScanError::InvalidDelimiter(ch)),
        }
    }

    /// Returns the delimiter byte.
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Returns `true` if given byte is this delimiter.
    pub const fn matches(self, byte: u8) -> bool {
        self.0 == byte
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        DEFAULT_DELIMITER
    }
}

impl TryFrom<char> for Delimiter {
    type Error = ScanError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&char::from(self.0), f)
    }
}

/// Scanner configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    delimiter: Delimiter,
    buffer_size: usize,
}

impl ScanConfig {
    /// Create configuration with the defaults, `%` as delimiter and 100 bytes literal buffer.
    pub const fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Set the key delimiter.
    pub const fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the literal buffer capacity.
    ///
    /// Zero is treated as one.
    pub const fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = if buffer_size == 0 { 1 } else { buffer_size };
        self
    }

    pub const fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}
