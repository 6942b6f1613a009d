//! Global formatter registration.
//!
//! The [`Display`] and [`Debug`] implementations of [`Error`] render with the
//! formatter registered here. Out of the box that is
//! [`TextFormatter::DEFAULT`].
//!
//! ```rust
//! use evs::{formatter::JsonFormatter, hooks};
//!
//! hooks::register_formatter(JsonFormatter::COMPACT);
//!
//! let error = evs::error!("parsing failed");
//! assert!(error.to_string().starts_with("{\"wraps\":\"\""));
//!
//! hooks::reset_formatter();
//! ```
//!
//! # When to use this
//!
//! Registration is a convenience for applications that want every `{}` and
//! `{:?}` of an [`Error`] to look the same. Libraries, and any code that needs
//! a specific rendering, should pass a formatter explicitly with
//! [`Error::format_with`] instead; that never consults this module.
//!
//! # Concurrency
//!
//! Registering is memory safe at any time, but there is no ordering between a
//! registration and renders already running on other threads: they may use
//! either the old or the new formatter. Register once during startup, before
//! errors are rendered concurrently.
//!
//! [`Display`]: core::fmt::Display
//! [`Debug`]: core::fmt::Debug
//! [`Error`]: crate::Error
//! [`Error::format_with`]: crate::Error::format_with

mod slot;

use core::{fmt, ops::Deref};

use triomphe::Arc;
use unsize::CoerceUnsize;

use self::slot::{FormatterSlot, SharedFormatter};
use crate::formatter::{Formatter, TextFormatter};

static FORMATTER: FormatterSlot = FormatterSlot::new();

/// The formatter in effect at the time [`current_formatter`] was called.
///
/// Dereferences to `dyn Formatter`. Holding it does not block
/// [`register_formatter`].
pub struct CurrentFormatter(Option<SharedFormatter>);

impl CurrentFormatter {
    /// Returns `true` if no formatter has been registered and the default is
    /// in effect.
    pub fn is_default(&self) -> bool {
        self.0.is_none()
    }
}

impl Deref for CurrentFormatter {
    type Target = dyn Formatter;

    fn deref(&self) -> &Self::Target {
        self.0
            .as_deref()
            .unwrap_or(const { &TextFormatter::DEFAULT })
    }
}

impl fmt::Debug for CurrentFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CurrentFormatter").field(&&**self).finish()
    }
}

/// Returns the formatter currently used by `Display` and `Debug`.
pub fn current_formatter() -> CurrentFormatter {
    CurrentFormatter(FORMATTER.load())
}

/// Registers `formatter` globally, replacing any previous registration.
///
/// # Examples
///
/// ```rust
/// use core::fmt;
///
/// use evs::{
///     Error,
///     Verb,
///     formatter::{Formatter, discard},
///     hooks,
/// };
///
/// #[derive(Debug)]
/// struct OneLine;
///
/// impl Formatter for OneLine {
///     fn format(&self, error: &Error, sink: &mut fmt::Formatter<'_>, _verb: Verb) {
///         let last = error.details().last().map_or("", |detail| detail.message.as_str());
///         discard(sink.write_str(last));
///     }
/// }
///
/// hooks::register_formatter(OneLine);
/// assert_eq!(evs::error!("out of memory").to_string(), "out of memory");
/// hooks::reset_formatter();
/// ```
pub fn register_formatter(formatter: impl Formatter) {
    let formatter = Arc::new(formatter).unsize(unsize::Coercion!(to dyn Formatter));
    FORMATTER.store(Some(formatter));
}

/// Removes any registered formatter, restoring [`TextFormatter::DEFAULT`].
pub fn reset_formatter() {
    FORMATTER.store(None);
}
