//! Streaming template substitution for embedded web servers.
//!
//! Templates contain keys bounded by a delimiter, `%` by default. Each key is passed to a
//! [`Resolver`] and replaced by whatever it produces. Everything else is copied as is, and
//! `\%` is a literal `%`.
//!
//! ```
//! let page = bookend::render_mapped("<b>%POWER%</b> 100\\%", |key: &str| match key {
//!     "POWER" => "ON",
//!     _ => "",
//! }).unwrap();
//!
//! assert_eq!(page, "<b>ON</b> 100%");
//! ```
//!
//! Use [`Processor`] to stream templates from a [`Storage`] into a [`Writer`], e.g. a
//! [`Chunked`] http response body.
mod template;
mod render;
mod processor;
mod error;
#[cfg(feature = "time")]
pub mod time;

pub mod write;
pub mod value;
pub mod resolve;
pub mod storage;

pub use template::{Template, render, render_mapped};
pub use render::process;
pub use processor::Processor;
pub use write::{Writer, IoWriter, Chunked};
pub use value::Value;
pub use resolve::Resolver;
pub use storage::{Storage, DirStorage, MemoryStorage};
pub use error::{Error, Result};

pub use bookend_core::{Delimiter, ScanConfig, ScanError, Source, SliceSource, ReadSource};
