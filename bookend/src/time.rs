//! [`Value`] for date and time, formatted as RFC 2822.
//!
//! Dates RFC 2822 cannot express (years before 1900) fall back to the [`Display`][std::fmt::Display]
//! format of [`OffsetDateTime`].
use time::format_description::well_known::Rfc2822;

use crate::Value;

pub use time::{OffsetDateTime, UtcOffset};

impl Value for OffsetDateTime {
    fn render_into(&self, out: &mut String) {
        match self.format(&Rfc2822) {
            Ok(formatted) => out.push_str(&formatted),
            Err(err) => {
                use std::fmt::Write;
                tracing::warn!(%err, "date time is not rfc 2822, using default format");
                // writing into String is infallible
                let _ = write!(out, "{self}");
            }
        }
    }
}
