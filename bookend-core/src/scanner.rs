use crate::{ScanConfig, ScanError, Source, Visitor, syntax::ESCAPE};

/// Template scanner.
///
/// For more details see the [crate level docs][crate].
pub struct Scanner<S,V> {
    source: S,
    visitor: V,
    config: ScanConfig,

    // scanner states
    offset: usize,
    literal: Vec<u8>,
    key: Vec<u8>,
}

impl<S, V> Scanner<S, V> {
    /// Create new [`Scanner`] with default [`ScanConfig`].
    ///
    /// Requires a [`Visitor`] implementation.
    pub fn new(source: S, visitor: V) -> Self {
        Self::with_config(source, visitor, ScanConfig::default())
    }

    /// Create new [`Scanner`] with given [`ScanConfig`].
    pub fn with_config(source: S, visitor: V, config: ScanConfig) -> Self {
        Self {
            source,
            visitor,
            config,
            offset: 0,
            literal: Vec::with_capacity(config.buffer_size().min(4096)),
            key: Vec::new(),
        }
    }
}

impl<S,V> Scanner<S,V>
where
    S: Source,
    V: Visitor,
{
    /// Start scanning.
    ///
    /// Literal content already passed to the visitor is not retracted on error.
    pub fn scan(mut self) -> Result<V::Output, V::Error> {
        let delimiter = self.config.delimiter();

        while let Some(mut byte) = self.next()? {
            let mut honor = true;

            if byte == ESCAPE {
                match self.next()? {
                    Some(next) if delimiter.matches(next) => {
                        byte = next;
                        honor = false;
                    }
                    // both bytes are literal, `next` can still open a key
                    Some(next) => {
                        self.push_literal(ESCAPE)?;
                        byte = next;
                    }
                    // trailing escape is dropped
                    None => break,
                }
            }

            if honor && delimiter.matches(byte) {
                let open = self.offset - 1;
                self.flush()?;
                self.scan_key(open)?;
            } else {
                self.push_literal(byte)?;
            }
        }

        self.flush()?;
        self.visitor.finish()
    }

    fn scan_key(&mut self, open: usize) -> Result<(), V::Error> {
        let delimiter = self.config.delimiter();
        self.key.clear();

        loop {
            match self.next()? {
                Some(byte) if delimiter.matches(byte) => break,
                Some(byte) => self.key.push(byte),
                None => return Err(ScanError::Unterminated { offset: open }.into()),
            }
        }

        let key = String::from_utf8_lossy(&self.key);
        self.visitor.visit_key(&key)
    }

    fn push_literal(&mut self, byte: u8) -> Result<(), V::Error> {
        if self.literal.len() >= self.config.buffer_size() {
            self.flush()?;
        }
        self.literal.push(byte);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), V::Error> {
        if !self.literal.is_empty() {
            self.visitor.visit_literal(&self.literal)?;
            self.literal.clear();
        }
        Ok(())
    }

    fn next(&mut self) -> Result<Option<u8>, ScanError> {
        let byte = self.source.next_byte()?;
        if byte.is_some() {
            self.offset += 1;
        }
        Ok(byte)
    }
}
