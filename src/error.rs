//! The [`Error`] aggregate and its wrapped [`Cause`].

use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use crate::{
    Detail, Stack, Verb,
    formatter::{FormatWith, Formatter},
    hooks,
};

/// The verb-aware rendering capability.
///
/// Errors implementing this trait can be wrapped with
/// [`Error::wrap_renderable`]. When such an error is the cause of an [`Error`],
/// the text formatter delegates to [`render`](Render::render) with its own sink
/// and verb instead of falling back to the plain `Display` message.
///
/// # Examples
///
/// ```
/// use core::fmt;
///
/// use evs::{Error, Render, Verb, formatter::TextFormatter};
///
/// #[derive(Debug)]
/// struct Timeout(u32);
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "timed out after {}ms", self.0)
///     }
/// }
///
/// impl core::error::Error for Timeout {}
///
/// impl Render for Timeout {
///     fn render(&self, sink: &mut fmt::Formatter<'_>, verb: Verb) -> fmt::Result {
///         if verb.is_simple() {
///             write!(sink, "timeout")
///         } else {
///             write!(sink, "timeout ({}ms)", self.0)
///         }
///     }
/// }
///
/// let error = Error::wrap_renderable(Timeout(250));
/// let text = error.format_with(&TextFormatter::DEFAULT, Verb::VALUE).to_string();
/// assert_eq!(text, "timeout (250ms)\n");
/// ```
pub trait Render: core::error::Error + Send + Sync + 'static {
    /// Writes a rendering of `self` to `sink` according to `verb`.
    fn render(&self, sink: &mut fmt::Formatter<'_>, verb: Verb) -> fmt::Result;
}

/// The underlying error wrapped by an [`Error`].
///
/// The variant records which rendering capability the cause offers, so that
/// formatters can pick the richest one available without runtime probing.
pub enum Cause {
    /// Another [`Error`]. Rendered with the same formatter as its parent.
    Nested(Box<Error>),
    /// A foreign error that can render itself for a given verb.
    Renderable(Box<dyn Render>),
    /// Any other error. Only its `Display` message is available.
    Opaque(Box<dyn core::error::Error + Send + Sync + 'static>),
}

impl Cause {
    /// Classifies `error`: an [`Error`] becomes [`Cause::Nested`], anything
    /// else [`Cause::Opaque`].
    pub fn new<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        let error: Box<dyn core::error::Error + Send + Sync + 'static> = Box::new(error);
        match error.downcast::<Error>() {
            Ok(nested) => Self::Nested(nested),
            Err(opaque) => Self::Opaque(opaque),
        }
    }

    /// The plain, single-string message of the cause.
    ///
    /// This is the `Display` output of the wrapped value. For a nested
    /// [`Error`] that output comes from the globally registered formatter.
    pub fn message(&self) -> String {
        match self {
            Self::Nested(error) => error.to_string(),
            Self::Renderable(error) => error.to_string(),
            Self::Opaque(error) => error.to_string(),
        }
    }

    /// The cause as a standard error trait object.
    pub fn as_error(&self) -> &(dyn core::error::Error + 'static) {
        match self {
            Self::Nested(error) => &**error,
            Self::Renderable(error) => &**error,
            Self::Opaque(error) => &**error,
        }
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nested(error) => f.debug_tuple("Nested").field(&error.details).finish(),
            Self::Renderable(error) => f.debug_tuple("Renderable").field(error).finish(),
            Self::Opaque(error) => f.debug_tuple("Opaque").field(error).finish(),
        }
    }
}

/// A rich error: an optional wrapped cause, an ordered list of [`Detail`]s
/// and a captured [`Stack`].
///
/// Rendering is delegated to a [`Formatter`]. [`format_with`] uses the one
/// you pass in; the [`Display`] and [`Debug`] implementations use the
/// globally registered formatter (see [`hooks`]).
///
/// # Examples
///
/// ```
/// use evs::{Detail, Error, Frame, Stack, Verb, formatter::TextFormatter};
///
/// let error = Error::new()
///     .with_detail(Detail::new(Frame::new("pkg/a.go", 10, "Do"), "bad input"))
///     .with_stack(Stack::new(vec![Frame::new("pkg/a.go", 10, "Do")]));
///
/// let text = error.format_with(&TextFormatter::DEFAULT, Verb::SIMPLE).to_string();
/// assert_eq!(
///     text,
///     format!("{}: bad input\n\nWith Stacktrace:\n[a.go:10]", Error::type_name())
/// );
/// ```
///
/// [`format_with`]: Error::format_with
/// [`Display`]: core::fmt::Display
/// [`Debug`]: core::fmt::Debug
#[derive(Default)]
pub struct Error {
    wraps: Option<Cause>,
    details: Vec<Detail>,
    stack: Stack,
}

impl Error {
    /// The type name used in header lines of the text rendering.
    pub fn type_name() -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Creates an error without cause, details or stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error wrapping `error`.
    ///
    /// If `error` is itself an [`Error`] it is kept as a [`Cause::Nested`]
    /// and will be rendered recursively; otherwise it is kept as an opaque
    /// cause and only its message is shown.
    ///
    /// This holds for [`Render`] implementations too: their verb-aware
    /// rendering is only used when wrapped with
    /// [`wrap_renderable`](Self::wrap_renderable).
    pub fn wrap<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::from_cause(Cause::new(error))
    }

    /// Creates an error wrapping a cause that can render itself.
    pub fn wrap_renderable<E: Render>(error: E) -> Self {
        Self::from_cause(Cause::Renderable(Box::new(error)))
    }

    /// Creates an error from an already classified cause.
    pub fn from_cause(cause: Cause) -> Self {
        Self {
            wraps: Some(cause),
            details: Vec::new(),
            stack: Stack::empty(),
        }
    }

    /// Appends a detail and returns the error.
    #[must_use]
    pub fn with_detail(mut self, detail: Detail) -> Self {
        self.details.push(detail);
        self
    }

    /// Appends a detail in place.
    pub fn push_detail(&mut self, detail: Detail) {
        self.details.push(detail);
    }

    /// Replaces the stack and returns the error.
    #[must_use]
    pub fn with_stack(mut self, stack: Stack) -> Self {
        self.stack = stack;
        self
    }

    /// The wrapped cause, if any.
    pub fn wraps(&self) -> Option<&Cause> {
        self.wraps.as_ref()
    }

    /// The details, oldest first.
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// The captured stack.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Returns a value that renders this error with `formatter` and `verb`
    /// when displayed.
    ///
    /// This bypasses the global formatter registration entirely.
    pub fn format_with<'a>(&'a self, formatter: &'a dyn Formatter, verb: Verb) -> FormatWith<'a> {
        FormatWith::new(self, formatter, verb)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = Verb::for_display(f);
        hooks::current_formatter().format(self, f, verb);
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hooks::current_formatter().format(self, f, Verb::VALUE);
        Ok(())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.wraps.as_ref().map(Cause::as_error)
    }
}
