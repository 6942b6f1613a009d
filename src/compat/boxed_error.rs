//! Convert boxed error trait objects into [`Error`]s.
//!
//! A `Box<dyn Error + Send + Sync>` becomes an [`Error`] wrapping it as an
//! opaque cause. If the box already holds an [`Error`], that error is
//! returned as is, so converting into a box and back is lossless.
//!
//! ```
//! use evs::{Error, compat::IntoEvs};
//!
//! let boxed: Box<dyn core::error::Error + Send + Sync> = evs::error!("disk full").into();
//! let error: Error = boxed.into_evs();
//! assert!(error.wraps().is_none());
//! assert_eq!(error.details()[0].message, "disk full");
//! ```

use alloc::boxed::Box;
use core::error::Error as StdError;

use super::IntoEvs;
use crate::{Cause, Error};

impl IntoEvs for Box<dyn StdError + Send + Sync> {
    type Output = Error;

    fn into_evs(self) -> Self::Output {
        match self.downcast::<Error>() {
            Ok(error) => *error,
            Err(other) => Error::from_cause(Cause::Opaque(other)),
        }
    }
}

impl<T> IntoEvs for Result<T, Box<dyn StdError + Send + Sync>> {
    type Output = Result<T, Error>;

    #[inline(always)]
    fn into_evs(self) -> Self::Output {
        self.map_err(IntoEvs::into_evs)
    }
}
