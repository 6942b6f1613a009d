//! Bidirectional integration with the [`anyhow`] 1.x error handling library.
//!
//! To enable this integration, add the `compat-anyhow1` feature flag to your
//! `Cargo.toml`.
//!
//! # Converting from anyhow
//!
//! [`IntoEvs`] wraps an [`anyhow::Error`] as the opaque cause of a new
//! [`Error`]. The cause message is anyhow's alternate rendering, which
//! includes its whole context chain on one line:
//!
//! ```
//! use evs::compat::IntoEvs;
//!
//! fn anyhow_function() -> anyhow::Result<u16> {
//!     Err(anyhow::anyhow!("connection reset").context("fetching manifest"))
//! }
//!
//! let error = anyhow_function().into_evs().unwrap_err();
//! assert_eq!(
//!     error.wraps().unwrap().message(),
//!     "fetching manifest: connection reset"
//! );
//! ```
//!
//! An [`anyhow::Error`] that was itself created from an [`Error`] is unwrapped
//! instead.
//!
//! # Converting to anyhow
//!
//! [`Error`] is a regular `Send + Sync` error, so anyhow's own `From`
//! implementation applies and `?` just works. [`IntoAnyhow`] spells the
//! conversion out for the cases where inference needs help:
//!
//! ```
//! use evs::compat::anyhow1::IntoAnyhow;
//!
//! fn evs_function() -> evs::Result<()> {
//!     evs::bail!("database connection failed");
//! }
//!
//! fn anyhow_function() -> anyhow::Result<()> {
//!     evs_function().into_anyhow()?;
//!     Ok(())
//! }
//!
//! assert!(anyhow_function().is_err());
//! ```
//!
//! [`Error`]: crate::Error

use core::fmt;

use super::IntoEvs;
use crate::Error;

/// Presents an [`anyhow::Error`] as a cause. `Display` is anyhow's alternate
/// form, `source` follows anyhow's chain.
struct AnyhowCause(anyhow::Error);

impl fmt::Debug for AnyhowCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for AnyhowCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.0)
    }
}

impl core::error::Error for AnyhowCause {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.0.source()
    }
}

impl IntoEvs for anyhow::Error {
    type Output = Error;

    fn into_evs(self) -> Self::Output {
        match self.downcast::<Error>() {
            Ok(error) => error,
            Err(other) => Error::wrap(AnyhowCause(other)),
        }
    }
}

impl<T> IntoEvs for anyhow::Result<T> {
    type Output = Result<T, Error>;

    #[inline(always)]
    fn into_evs(self) -> Self::Output {
        self.map_err(IntoEvs::into_evs)
    }
}

/// Converts [`Error`]s into [`anyhow::Error`].
///
/// Implemented for [`Error`] and for `Result<T, Error>`.
pub trait IntoAnyhow {
    /// The type produced by the conversion.
    type Output;

    /// Converts this value into an anyhow type.
    fn into_anyhow(self) -> Self::Output;
}

impl IntoAnyhow for Error {
    type Output = anyhow::Error;

    fn into_anyhow(self) -> Self::Output {
        anyhow::Error::new(self)
    }
}

impl<T> IntoAnyhow for Result<T, Error> {
    type Output = anyhow::Result<T>;

    fn into_anyhow(self) -> Self::Output {
        self.map_err(IntoAnyhow::into_anyhow)
    }
}
