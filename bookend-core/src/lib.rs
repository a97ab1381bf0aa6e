//! The [`bookend`][1] template scanner.
//!
//! The [`Scanner`] type only splits literal content from delimiter bounded keys.
//! [`Scanner`] requires a [`Visitor`] implementation which will receive both in order.
//!
//! ```text
//! Power is %POWER%, 100\% sure
//! ```
//!
//! [`Scanner`] will pass `"Power is "` as literal, `"POWER"` as key, and `", 100% sure"` as
//! literal to [`Visitor`]. Escaping with `\` is only recognized right before the delimiter.
//!
//! Input is consumed exactly once from a [`Source`], so the same scanner works for in memory
//! templates and files. Literal content is buffered up to [`ScanConfig::buffer_size`] bytes
//! before it is passed to the visitor, which bounds memory when the visitor streams its output.
//!
//! The [`bookend`][1] crate contains the [`Visitor`] implementation which resolves keys and
//! writes the result to a sink.
//!
//! [1]: <https://docs.rs/bookend>
mod syntax;
mod error;
mod source;
mod visitor;
mod scanner;

pub use syntax::{Delimiter, ScanConfig, ESCAPE, DEFAULT_DELIMITER, DEFAULT_BUFFER_SIZE};
pub use error::{ScanError, Result};
pub use source::{Source, SliceSource, ReadSource};
pub use visitor::{Visitor, KeyVisitor};
pub use scanner::Scanner;
