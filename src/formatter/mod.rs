//! Pluggable rendering of [`Error`]s.
//!
//! A [`Formatter`] turns an [`Error`] into text for a given [`Verb`]. Two
//! strategies are built in:
//!
//! - [`TextFormatter`]: a layered, human-readable report. This is the default.
//! - [`JsonFormatter`]: a single JSON document for machine consumption.
//!
//! # Choosing a formatter
//!
//! Pass one explicitly with [`Error::format_with`]:
//!
//! ```
//! use evs::{
//!     Verb,
//!     formatter::{JsonFormatter, TextFormatter},
//! };
//!
//! let error = evs::error!("disk full");
//! println!("{}", error.format_with(&TextFormatter::DEFAULT, Verb::SIMPLE));
//! println!("{}", error.format_with(&JsonFormatter::COMPACT, Verb::VALUE));
//! ```
//!
//! or register one globally for the [`Display`] and [`Debug`] implementations
//! of [`Error`] with [`register_formatter`].
//!
//! # Writing a formatter
//!
//! Formatters never fail. Write errors from the sink are dropped with
//! [`discard`], which keeps the decision to ignore them visible at every call
//! site.
//!
//! ```
//! use core::fmt;
//!
//! use evs::{
//!     Error,
//!     Verb,
//!     formatter::{Formatter, discard},
//! };
//!
//! #[derive(Debug)]
//! struct CountFormatter;
//!
//! impl Formatter for CountFormatter {
//!     fn format(&self, error: &Error, sink: &mut fmt::Formatter<'_>, _verb: Verb) {
//!         discard(write!(sink, "{} details", error.details().len()));
//!     }
//! }
//!
//! let error = evs::error!("boom");
//! assert_eq!(
//!     error.format_with(&CountFormatter, Verb::VALUE).to_string(),
//!     "1 details"
//! );
//! ```
//!
//! [`Display`]: core::fmt::Display
//! [`Debug`]: core::fmt::Debug
//! [`register_formatter`]: crate::hooks::register_formatter

mod json;
mod text;

use core::fmt;

pub use self::{json::JsonFormatter, text::TextFormatter};
use crate::{Error, Verb};

/// Renders an [`Error`] into a sink.
///
/// Implementations write directly to `sink` and must never panic because of
/// a failed write. There is no return value: a rendering that cannot be
/// completed is simply truncated.
pub trait Formatter: 'static + Send + Sync + fmt::Debug {
    /// Writes a rendering of `error` for `verb` to `sink`.
    fn format(&self, error: &Error, sink: &mut fmt::Formatter<'_>, verb: Verb);
}

/// Drops the result of a sink write.
///
/// Rendering is best effort, so a failed write is not propagated. It is
/// reported as a `trace` level event instead.
#[inline]
pub fn discard(result: fmt::Result) {
    if let Err(fmt::Error) = result {
        tracing::trace!("discarding failed write to error rendering sink");
    }
}

/// A [`Display`](fmt::Display) adapter that renders an [`Error`] with a
/// fixed formatter and verb.
///
/// Created by [`Error::format_with`].
#[derive(Clone, Copy)]
pub struct FormatWith<'a> {
    error: &'a Error,
    formatter: &'a dyn Formatter,
    verb: Verb,
}

impl<'a> FormatWith<'a> {
    pub(crate) fn new(error: &'a Error, formatter: &'a dyn Formatter, verb: Verb) -> Self {
        Self {
            error,
            formatter,
            verb,
        }
    }
}

impl fmt::Display for FormatWith<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.formatter.format(self.error, f, self.verb);
        Ok(())
    }
}

impl fmt::Debug for FormatWith<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
