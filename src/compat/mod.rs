//! Interoperability with other error handling approaches.
//!
//! [`Error`] implements [`core::error::Error`] and is `Send + Sync`, so it
//! already converts into `Box<dyn Error + Send + Sync>` and most other error
//! containers with `?`. The modules here cover the opposite direction.
//!
//! - [`boxed_error`]: `Box<dyn Error + Send + Sync>` into [`Error`].
//! - `anyhow1`: `anyhow` 1.x in both directions (requires the
//!   `compat-anyhow1` feature flag).
//!
//! # Example
//!
//! ```
//! use evs::compat::IntoEvs;
//!
//! fn legacy() -> Result<u32, Box<dyn core::error::Error + Send + Sync>> {
//!     Err("quota exceeded".into())
//! }
//!
//! fn current() -> evs::Result<u32> {
//!     let value = legacy().into_evs()?;
//!     Ok(value)
//! }
//!
//! let error = current().unwrap_err();
//! assert_eq!(error.wraps().unwrap().message(), "quota exceeded");
//! ```
//!
//! [`Error`]: crate::Error

pub mod boxed_error;

#[cfg(feature = "compat-anyhow1")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-anyhow1")))]
pub mod anyhow1;

/// Converts errors from other libraries into [`Error`](crate::Error).
///
/// Implemented for error values, where [`Output`](IntoEvs::Output) is
/// [`Error`](crate::Error), and for `Result`s of them, where the error variant
/// is converted and the success value is kept.
pub trait IntoEvs {
    /// The type produced by the conversion.
    type Output;

    /// Performs the conversion.
    fn into_evs(self) -> Self::Output;
}
