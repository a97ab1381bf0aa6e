use bookend_core::{ScanConfig, Scanner, Source, Visitor};

use crate::{Error, Resolver, Result, Writer};

/// [`Visitor`] that resolves keys and writes everything into a [`Writer`].
pub(crate) struct Substitute<R, W> {
    resolver: R,
    sink: W,
    value: String,
}

impl<R, W> Substitute<R, W> {
    pub(crate) fn new(resolver: R, sink: W) -> Self {
        Self { resolver, sink, value: String::new() }
    }
}

impl<R, W> Visitor for Substitute<R, W>
where
    R: Resolver,
    W: Writer,
{
    type Output = ();
    type Error = Error;

    fn visit_literal(&mut self, source: &[u8]) -> Result<()> {
        self.sink.write_bytes(source)
    }

    fn visit_key(&mut self, key: &str) -> Result<()> {
        self.value.clear();
        self.resolver.resolve(key, &mut self.value);
        tracing::trace!(key, len = self.value.len(), "substitute");

        if self.value.is_empty() {
            return Ok(());
        }
        self.sink.write_str(&self.value)
    }

    fn finish(self) -> Result<()> {
        Ok(())
    }
}

/// Scan `source`, resolve every key with `resolver`, and write the result into `sink`.
///
/// This is the path shared by every entry point. Output already written into `sink` is not
/// retracted when an error occurs.
pub fn process<S, R, W>(source: S, resolver: R, sink: W, config: ScanConfig) -> Result<()>
where
    S: Source,
    R: Resolver,
    W: Writer,
{
    Scanner::with_config(source, Substitute::new(resolver, sink), config).scan()
}
