//! The [`Writer`] trait and output sinks.
use std::io;
use crate::Result;

/// Output sink.
pub trait Writer {
    /// Append a run of bytes.
    fn write_bytes(&mut self, value: &[u8]) -> Result<()>;

    /// Append a string.
    fn write_str(&mut self, value: &str) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }
}

impl<W> Writer for &mut W where W: Writer {
    fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        W::write_bytes(self, value)
    }
}

impl Writer for Vec<u8> {
    fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.extend_from_slice(value);
        Ok(())
    }
}

impl Writer for bytes::BytesMut {
    fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        bytes::BufMut::put_slice(self, value);
        Ok(())
    }
}

/// Adapt [`io::Write`] into [`Writer`].
///
/// Every write is passed to the inner writer as is.
pub struct IoWriter<W>(pub W);

impl<W> Writer for IoWriter<W> where W: io::Write {
    fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.0.write_all(value)?;
        Ok(())
    }
}

/// Streaming sink using HTTP/1.1 chunked transfer encoding.
///
/// Used when the response length is unknown upfront. Each non empty write is sent as a single
/// chunk and flushed right away. The caller is expected to have sent the response head with
/// `Transfer-Encoding: chunked`, and to call [`Chunked::finish`] once the body is complete.
pub struct Chunked<W> {
    inner: W,
}

impl<W> Chunked<W> where W: io::Write {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Write the terminating chunk and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.write_all(b"0\r\n\r\n")?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W> Writer for Chunked<W> where W: io::Write {
    fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        // zero length chunk terminates the body
        if value.is_empty() {
            return Ok(());
        }
        write!(self.inner, "{:X}\r\n", value.len())?;
        self.inner.write_all(value)?;
        self.inner.write_all(b"\r\n")?;
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn chunked_framing() {
        let mut chunked = Chunked::new(Vec::<u8>::new());
        chunked.write_str("Hello, ").unwrap();
        chunked.write_str("").unwrap();
        chunked.write_bytes(&[b'x'; 26]).unwrap();
        let out = chunked.finish().unwrap();

        let mut expected = b"7\r\nHello, \r\n1A\r\n".to_vec();
        expected.extend_from_slice(&[b'x'; 26]);
        expected.extend_from_slice(b"\r\n0\r\n\r\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn io_writer() {
        let mut out = IoWriter(io::Cursor::new(Vec::<u8>::new()));
        out.write_str("abc").unwrap();
        assert_eq!(out.0.into_inner(), b"abc");
    }

    #[test]
    fn bytes_mut() {
        let mut out = bytes::BytesMut::new();
        out.write_str("abc").unwrap();
        assert_eq!(&out[..], b"abc");
    }
}
