//! The default, human-readable formatter.
//!
//! A rendering has up to three sections, always in this order:
//!
//! 1. The wrapped cause. A cause that can render itself (a nested [`Error`]
//!    or a [`Render`] implementation) is rendered with the same sink and
//!    verb, and a failure it reports does not stop the rest of the
//!    rendering. Anything else is shown as `<type>: <message>`. Either way the
//!    section ends with a newline.
//! 2. The details. Without a wrapped cause the first detail becomes the
//!    header line `<type>: <message>`. Every remaining detail is written as
//!    `<frame> <message>`.
//! 3. The stack, introduced by a blank line and the stack header, one frame
//!    per line and no trailing newline.
//!
//! Frames render as `[<file>:<line>]` for [`Verb::SIMPLE`] and as
//! `<function> [<file>:<line>]` for every other verb, where `<file>` is the
//! last segment of the recorded path.
//!
//! ```text
//! evs::error::Error: connection refused
//! load_config [config.rs:41] reading settings
//!
//! With Stacktrace:
//! app::load_config [config.rs:41]
//! app::main [main.rs:7]
//! ```
//!
//! [`Render`]: crate::Render

use core::fmt::{self, Write};

use crate::{
    Cause, Error, Frame, Stack, Verb,
    formatter::{Formatter, discard},
};

/// The default text formatter.
///
/// # Examples
///
/// ```
/// use evs::{Detail, Error, Frame, Verb, formatter::TextFormatter};
///
/// let error = Error::new().with_detail(Detail::new(Frame::new("pkg/a.go", 10, "Do"), "bad input"));
/// assert_eq!(
///     error.format_with(&TextFormatter::DEFAULT, Verb::VALUE).to_string(),
///     format!("{}: bad input", Error::type_name()),
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextFormatter {
    /// Character separating path segments in [`Frame::file`]. Only the text
    /// after the last separator is shown.
    pub path_separator: char,
    /// Line introducing the stack section.
    pub stack_header: &'static str,
}

impl TextFormatter {
    /// `/` separated paths and the `With Stacktrace:` header.
    pub const DEFAULT: Self = Self {
        path_separator: '/',
        stack_header: "With Stacktrace:",
    };
    /// Like [`DEFAULT`](Self::DEFAULT), but for `\` separated paths.
    pub const WINDOWS: Self = Self {
        path_separator: '\\',
        ..Self::DEFAULT
    };
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Formatter for TextFormatter {
    fn format(&self, error: &Error, sink: &mut fmt::Formatter<'_>, verb: Verb) {
        discard(TextFormatterState::new(self, sink, verb).format_error(error));
    }
}

struct TextFormatterState<'a, 'b> {
    config: &'a TextFormatter,
    sink: &'a mut fmt::Formatter<'b>,
    verb: Verb,
}

impl<'a, 'b> TextFormatterState<'a, 'b> {
    fn new(config: &'a TextFormatter, sink: &'a mut fmt::Formatter<'b>, verb: Verb) -> Self {
        Self { config, sink, verb }
    }

    fn format_error(&mut self, error: &Error) -> fmt::Result {
        self.format_wrapped(error)?;
        self.format_details(error)?;
        self.format_stack(error.stack())
    }

    fn format_wrapped(&mut self, error: &Error) -> fmt::Result {
        match error.wraps() {
            None => Ok(()),
            Some(Cause::Nested(nested)) => {
                self.config.format(nested, self.sink, self.verb);
                self.sink.write_char('\n')
            }
            Some(Cause::Renderable(renderable)) => {
                discard(renderable.render(self.sink, self.verb));
                self.sink.write_char('\n')
            }
            Some(Cause::Opaque(opaque)) => writeln!(self.sink, "{}: {opaque}", Error::type_name()),
        }
    }

    fn format_details(&mut self, error: &Error) -> fmt::Result {
        let mut details = error.details().iter();
        // Without a cause the first detail takes the header position.
        if error.wraps().is_none()
            && let Some(first) = details.next()
        {
            write!(self.sink, "{}: {}", Error::type_name(), first.message)?;
        }
        for detail in details {
            self.format_frame(&detail.location)?;
            self.sink.write_char(' ')?;
            self.sink.write_str(&detail.message)?;
        }
        Ok(())
    }

    fn format_frame(&mut self, frame: &Frame) -> fmt::Result {
        let basename = frame.basename(self.config.path_separator);
        if self.verb.is_simple() {
            write!(self.sink, "[{basename}:{}]", frame.line)
        } else {
            write!(self.sink, "{} [{basename}:{}]", frame.function, frame.line)
        }
    }

    fn format_stack(&mut self, stack: &Stack) -> fmt::Result {
        if stack.is_empty() {
            return Ok(());
        }
        self.sink.write_str("\n\n")?;
        self.sink.write_str(self.config.stack_header)?;
        self.sink.write_char('\n')?;
        for (index, frame) in stack.iter().enumerate() {
            if index != 0 {
                self.sink.write_char('\n')?;
            }
            self.format_frame(frame)?;
        }
        Ok(())
    }
}
