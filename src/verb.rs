//! Rendering verbs.
//!
//! A [`Verb`] is the single-character directive a [`Formatter`] receives
//! alongside the sink. It plays the role of a printf-style conversion
//! character: the built-in formatters only distinguish [`Verb::SIMPLE`] from
//! everything else, but custom formatters are free to give other characters a
//! meaning of their own.
//!
//! The [`Display`] and [`Debug`] implementations of [`Error`] pick a verb from
//! the formatting flags they were invoked with:
//!
//! | invocation | verb              |
//! |------------|-------------------|
//! | `{}`       | [`Verb::SIMPLE`]  |
//! | `{:#}`     | [`Verb::VALUE`]   |
//! | `{:?}`     | [`Verb::VALUE`]   |
//!
//! [`Formatter`]: crate::formatter::Formatter
//! [`Error`]: crate::Error
//! [`Display`]: core::fmt::Display
//! [`Debug`]: core::fmt::Debug

use core::fmt;

/// A single-character rendering directive.
///
/// # Examples
///
/// ```
/// use evs::Verb;
///
/// assert!(Verb::SIMPLE.is_simple());
/// assert!(!Verb::VALUE.is_simple());
/// assert!(!Verb::new('x').is_simple());
/// assert_eq!(Verb::new('s'), Verb::SIMPLE);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Verb(char);

impl Verb {
    /// Compact rendering: frames are shown as `[file:line]` only.
    pub const SIMPLE: Self = Self('s');
    /// The default "value" verb. Frames include the function name.
    pub const VALUE: Self = Self('v');

    /// Creates a verb from an arbitrary character.
    ///
    /// Characters other than `s` have no special meaning to the built-in
    /// formatters and select the verbose rendering.
    pub const fn new(verb: char) -> Self {
        Self(verb)
    }

    /// Returns the underlying character.
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Returns `true` if this is the compact `s` verb.
    pub const fn is_simple(self) -> bool {
        self.0 == Self::SIMPLE.0
    }

    pub(crate) fn for_display(formatter: &fmt::Formatter<'_>) -> Self {
        if formatter.alternate() {
            Self::VALUE
        } else {
            Self::SIMPLE
        }
    }
}

impl Default for Verb {
    fn default() -> Self {
        Self::VALUE
    }
}

impl From<char> for Verb {
    fn from(verb: char) -> Self {
        Self(verb)
    }
}

/// Writes the bare verb character.
impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
