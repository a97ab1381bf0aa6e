use bookend_core::{Delimiter, ReadSource, ScanConfig};

use crate::{Error, Resolver, Result, Storage, Value, Writer, render::process, resolve::Map};

/// Reads templates from a [`Storage`], processes them, and sends the result to a [`Writer`].
///
/// The caller is expected to have sent the response head before calling any `send` method,
/// and to finalize the response after it returns. When sending fails, whatever was already
/// written to the sink stays written, so the response must be treated as incomplete.
///
/// Every failure is logged as a warning with the template name.
#[derive(Debug, Clone)]
pub struct Processor<S> {
    storage: S,
    config: ScanConfig,
}

impl<S> Processor<S> {
    /// Create new [`Processor`] with default configuration.
    pub fn new(storage: S) -> Self {
        Self { storage, config: ScanConfig::default() }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S> Processor<S>
where
    S: Storage,
{
    /// Process template `name` and send the result into `sink`.
    pub fn send(&self, name: &str, resolver: impl Resolver, sink: impl Writer) -> Result<()> {
        self.scan(name, resolver, sink, self.config)
    }

    /// Same as [`send`][Processor::send] with a different delimiter for this call only.
    pub fn send_with(
        &self,
        name: &str,
        resolver: impl Resolver,
        sink: impl Writer,
        delimiter: Delimiter,
    ) -> Result<()> {
        let config = self.config.with_delimiter(delimiter);
        self.scan(name, resolver, sink, config)
    }

    /// Same as [`send`][Processor::send] using a resolver that returns the value.
    pub fn send_mapped<F, V>(&self, name: &str, f: F, sink: impl Writer) -> Result<()>
    where
        F: FnMut(&str) -> V,
        V: Value,
    {
        self.send(name, Map(f), sink)
    }

    /// Process template `name` into a new [`String`].
    pub fn render(&self, name: &str, resolver: impl Resolver) -> Result<String> {
        let mut buffer: Vec<u8> = Vec::new();
        self.send(name, resolver, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn scan(
        &self,
        name: &str,
        resolver: impl Resolver,
        sink: impl Writer,
        config: ScanConfig,
    ) -> Result<()> {
        let source = self.open(name)?;

        match process(source, resolver, sink, config) {
            Ok(()) => {
                tracing::debug!(template = name, "processed");
                Ok(())
            }
            Err(err) => {
                if err.is_malformed() {
                    tracing::warn!(template = name, %err, "cannot process: unable to parse");
                } else {
                    tracing::warn!(template = name, %err, "failed to process");
                }
                Err(err)
            }
        }
    }

    fn open(&self, name: &str) -> Result<ReadSource<S::Reader>> {
        if !self.storage.exists(name) {
            tracing::warn!(template = name, "cannot process: does not exist");
            return Err(Error::NotFound { name: name.to_owned() });
        }

        match self.storage.open(name) {
            Ok(reader) => Ok(ReadSource::new(reader)),
            Err(source) => {
                tracing::warn!(template = name, err = %source, "cannot process: failed to open");
                Err(Error::Unopenable { name: name.to_owned(), source })
            }
        }
    }
}
