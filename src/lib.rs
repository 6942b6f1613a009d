#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Errors that carry where they happened, and pluggable ways to print them.
//!
//! ## Overview
//!
//! An [`Error`] bundles three things:
//! - An optional wrapped **cause**: another [`Error`], a foreign error that
//!   can [`Render`] itself, or any other error of which only the message is
//!   known.
//! - An ordered list of **details**: a [`Frame`] (file, line, function) and a
//!   message, one for each place the error passed through.
//! - A captured **stack** of [`Frame`]s, most recent call first.
//!
//! How an error turns into text is decided by a
//! [`Formatter`](formatter::Formatter). The crate ships two:
//! [`TextFormatter`](formatter::TextFormatter) for people and
//! [`JsonFormatter`](formatter::JsonFormatter) for log pipelines.
//!
//! ## Quick Example
//!
//! ```
//! use evs::{Verb, formatter::TextFormatter};
//!
//! fn read_config(path: &str) -> evs::Result<String> {
//!     std::fs::read_to_string(path).map_err(|e| evs::wrap!(e, "reading {path}"))
//! }
//!
//! let error = read_config("/definitely/not/here.toml").unwrap_err();
//! let text = error.format_with(&TextFormatter::DEFAULT, Verb::VALUE).to_string();
//! assert!(text.contains("reading /definitely/not/here.toml"));
//! ```
//!
//! ## Verbs
//!
//! Renderings are parameterized by a [`Verb`]. [`Verb::SIMPLE`] asks for a
//! short rendering, anything else (usually [`Verb::VALUE`]) for a detailed
//! one. `{}` renders with [`Verb::SIMPLE`]; `{:#}` and `{:?}` render with
//! [`Verb::VALUE`].
//!
//! ## Choosing the formatter
//!
//! [`Error::format_with`] renders with a formatter you pass in. The
//! [`Display`](core::fmt::Display) and [`Debug`](core::fmt::Debug)
//! implementations use the formatter registered in [`hooks`], which defaults
//! to [`TextFormatter::DEFAULT`](formatter::TextFormatter::DEFAULT).
//!
//! ## Features
//!
//! - `std`: use `std::sync::RwLock` for the global formatter instead of a
//!   spin lock.
//! - `backtrace`: `Stack::capture` and the `capture` module.
//! - `compat-anyhow1`: conversions to and from [`anyhow`] in
//!   `compat::anyhow1`.
//!
//! [`anyhow`]: https://docs.rs/anyhow

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod detail;
mod error;
mod frame;
mod verb;

#[cfg(feature = "backtrace")]
#[cfg_attr(docsrs, doc(cfg(feature = "backtrace")))]
pub mod capture;
pub mod compat;
pub mod formatter;
pub mod hooks;

pub use self::{
    detail::Detail,
    error::{Cause, Error, Render},
    frame::{Frame, Stack},
    verb::Verb,
};

/// A [`Result`](core::result::Result) type alias where the error defaults to
/// [`Error`].
///
/// # Examples
///
/// ```
/// fn parse_port(input: &str) -> evs::Result<u16> {
///     input.parse::<u16>().map_err(|e| evs::wrap!(e, "parsing port {input:?}"))
/// }
///
/// assert_eq!(parse_port("8080").unwrap(), 8080);
/// assert!(parse_port("http").is_err());
/// ```
pub type Result<T, E = Error> = core::result::Result<T, E>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use alloc::format;
    #[doc(hidden)]
    pub use core::result::Result::Err;

    /// Path of the function enclosing the `fn __evs_here` item `_marker`.
    #[doc(hidden)]
    #[inline]
    pub fn function_name<F>(_marker: F) -> &'static str {
        let name = core::any::type_name::<F>();
        let mut name = name.strip_suffix("::__evs_here").unwrap_or(name);
        while let Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        name
    }

}
