use crate::{Result, ScanError};

/// Receiver of scanned tokens.
pub trait Visitor {
    /// Finished scanner output.
    type Output;

    /// Visitor error, scanner errors are converted into it.
    type Error: From<ScanError>;

    /// Collect literal content.
    ///
    /// Never called with an empty slice.
    fn visit_literal(&mut self, source: &[u8]) -> Result<(), Self::Error>;

    /// Collect a key, may be empty.
    fn visit_key(&mut self, key: &str) -> Result<(), Self::Error>;

    /// Visitor output.
    fn finish(self) -> Result<Self::Output, Self::Error>;
}

/// [`Visitor`] implementation that only collect keys.
#[derive(Debug, Default)]
pub struct KeyVisitor {
    keys: Vec<String>,
}

impl Visitor for KeyVisitor {
    type Output = Vec<String>;
    type Error = ScanError;

    fn visit_literal(&mut self, _: &[u8]) -> Result<()> {
        Ok(())
    }

    fn visit_key(&mut self, key: &str) -> Result<()> {
        self.keys.push(key.to_owned());
        Ok(())
    }

    fn finish(self) -> Result<Self::Output> {
        Ok(self.keys)
    }
}
