//! Template sources.
use std::io::{self, BufReader, Read};

/// A byte source that can only move forward.
pub trait Source {
    /// Returns the next byte, or [`None`] when input is exhausted.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<S> Source for &mut S where S: Source {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        S::next_byte(self)
    }
}

/// In memory template.
pub struct SliceSource<'a> {
    source: &'a [u8],
    index: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self { source, index: 0 }
    }
}

impl<'a> From<&'a str> for SliceSource<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for SliceSource<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::new(value)
    }
}

impl Source for SliceSource<'_> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.source.get(self.index).copied();
        if byte.is_some() {
            self.index += 1;
        }
        Ok(byte)
    }
}

/// Buffered template from any [`Read`] implementation, e.g. a [`File`][std::fs::File].
pub struct ReadSource<R> {
    reader: BufReader<R>,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader: BufReader::new(reader) }
    }

    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: Read> Source for ReadSource<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn drain(mut source: impl Source) -> Vec<u8> {
        let mut out = vec![];
        while let Some(byte) = source.next_byte().unwrap() {
            out.push(byte);
        }
        out
    }

    #[test]
    fn slice() {
        assert_eq!(drain(SliceSource::from("a%b")), b"a%b");
        assert_eq!(drain(SliceSource::from("")), b"");
    }

    #[test]
    fn reader() {
        assert_eq!(drain(ReadSource::new(&b"hello"[..])), b"hello");
    }

    #[test]
    fn exhausted_stays_exhausted() {
        let mut source = SliceSource::from("x");
        assert_eq!(source.next_byte().unwrap(), Some(b'x'));
        assert_eq!(source.next_byte().unwrap(), None);
        assert_eq!(source.next_byte().unwrap(), None);
    }
}
