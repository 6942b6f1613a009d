//! Call-site descriptors and ordered stacks of them.
//!
//! A [`Frame`] is a plain value: the file, line and function of one call
//! site. A [`Stack`] is an ordered, read-only sequence of frames. Neither type
//! interprets its contents; capture order is decided by whoever builds the
//! stack (the `backtrace` feature adds `Stack::capture`, most recent call
//! first) and is preserved verbatim by every formatter.

use alloc::{borrow::Cow, vec::Vec};
use core::slice;

use serde::{Deserialize, Serialize};

/// A single captured call site.
///
/// # Examples
///
/// ```
/// use evs::Frame;
///
/// let frame = Frame::new("pkg/a.go", 10, "Do");
/// assert_eq!(frame.basename('/'), "a.go");
/// assert_eq!(frame.line, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    /// The source file path, as recorded at capture time.
    pub file: Cow<'static, str>,
    /// The line number within [`file`](Self::file), starting at 1. `0` means
    /// the line is unknown and is rendered as is.
    pub line: u32,
    /// The (usually fully qualified) name of the enclosing function.
    pub function: Cow<'static, str>,
}

impl Frame {
    /// Creates a new frame.
    pub fn new(
        file: impl Into<Cow<'static, str>>,
        line: u32,
        function: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// Returns the last segment of [`file`](Self::file) after splitting on
    /// `separator`.
    ///
    /// This is a display simplification, not a filesystem operation: the path
    /// is never normalized or resolved.
    ///
    /// ```
    /// use evs::Frame;
    ///
    /// assert_eq!(Frame::new("a/b/c.go", 1, "f").basename('/'), "c.go");
    /// assert_eq!(Frame::new("c.go", 1, "f").basename('/'), "c.go");
    /// assert_eq!(Frame::new("dir/", 1, "f").basename('/'), "");
    /// ```
    pub fn basename(&self, separator: char) -> &str {
        let file: &str = &self.file;
        file.rsplit(separator).next().unwrap_or(file)
    }
}

/// An ordered sequence of [`Frame`]s.
///
/// Serializes as a plain array of frames.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack {
    frames: Vec<Frame>,
}

impl Stack {
    /// Creates a stack from frames, keeping their order.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Creates a stack without frames.
    pub const fn empty() -> Self {
        Self { frames: Vec::new() }
    }

    /// The frames, in the order they were supplied.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Iterates over the frames in order.
    pub fn iter(&self) -> slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// The number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if the stack has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl From<Vec<Frame>> for Stack {
    fn from(frames: Vec<Frame>) -> Self {
        Self::new(frames)
    }
}

impl FromIterator<Frame> for Stack {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Frame;
    type IntoIter = slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Stack {
    type Item = Frame;
    type IntoIter = alloc::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}
