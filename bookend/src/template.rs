use bookend_core::{Delimiter, KeyVisitor, ScanConfig, Scanner, SliceSource};

use crate::{Result, Resolver, Value, Writer, render::process, resolve::Map};

/// An in memory template.
///
/// ```
/// use bookend::Template;
///
/// let page = Template::new("<p>Power: %POWER%</p>");
/// let output = page.render(|key: &str, out: &mut String| {
///     if key == "POWER" {
///         out.push_str("ON");
///     }
/// }).unwrap();
///
/// assert_eq!(output, "<p>Power: ON</p>");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    source: &'a str,
    config: ScanConfig,
}

impl<'a> Template<'a> {
    /// Create new [`Template`] with default configuration.
    pub fn new(source: &'a str) -> Self {
        Self { source, config: ScanConfig::default() }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.config = self.config.with_delimiter(delimiter);
        self
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Render into given [`Writer`].
    pub fn render_into(&self, resolver: impl Resolver, sink: impl Writer) -> Result<()> {
        process(SliceSource::from(self.source), resolver, sink, self.config)
    }

    /// Render into a new [`String`].
    pub fn render(&self, resolver: impl Resolver) -> Result<String> {
        let mut buffer = Vec::with_capacity(self.source.len());
        self.render_into(resolver, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Render into a new [`String`] using a resolver that returns the value.
    pub fn render_mapped<F, V>(&self, f: F) -> Result<String>
    where
        F: FnMut(&str) -> V,
        V: Value,
    {
        self.render(Map(f))
    }

    /// Returns all keys in order of appearance.
    pub fn keys(&self) -> Result<Vec<String>> {
        let visitor = KeyVisitor::default();
        Ok(Scanner::with_config(SliceSource::from(self.source), visitor, self.config).scan()?)
    }
}

/// Render `template` with default configuration.
///
/// Shorthand for [`Template::new(template).render(resolver)`][Template::render].
pub fn render(template: &str, resolver: impl Resolver) -> Result<String> {
    Template::new(template).render(resolver)
}

/// Render `template` with default configuration, using a resolver that returns the value.
pub fn render_mapped<F, V>(template: &str, f: F) -> Result<String>
where
    F: FnMut(&str) -> V,
    V: Value,
{
    Template::new(template).render_mapped(f)
}
