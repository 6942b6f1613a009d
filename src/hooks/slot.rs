#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

use triomphe::Arc;

use crate::formatter::Formatter;

pub(crate) type SharedFormatter = Arc<dyn Formatter>;

/// Storage for the globally registered formatter.
///
/// Readers clone the [`Arc`] and drop the guard before formatting, so a
/// formatter can itself display errors without deadlocking.
#[repr(transparent)]
pub(crate) struct FormatterSlot(impl_::RwLock<Option<SharedFormatter>>);

impl FormatterSlot {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(impl_::RwLock::new(None))
    }

    #[inline]
    pub(crate) fn load(&'static self) -> Option<SharedFormatter> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        // Nothing can panic while the slot is written, so a poisoned lock
        // still holds a valid value.
        #[cfg(feature = "std")]
        let guard = self
            .0
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        guard.clone()
    }

    #[inline]
    pub(crate) fn store(&'static self, formatter: Option<SharedFormatter>) -> Option<SharedFormatter> {
        #[cfg(not(feature = "std"))]
        let mut guard = self.0.write();

        #[cfg(feature = "std")]
        let mut guard = self
            .0
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        core::mem::replace(&mut *guard, formatter)
    }
}
