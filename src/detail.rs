use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::Frame;

/// A contextual annotation attached to an [`Error`] as it propagates.
///
/// Details are kept in the order they were appended. They are never
/// reordered, filtered or deduplicated.
///
/// [`Error`]: crate::Error
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detail {
    /// Where the detail was attached.
    pub location: Frame,
    /// Free-text message. May be empty.
    pub message: String,
}

impl Detail {
    /// Creates a new detail.
    pub fn new(location: Frame, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}
