use alloc::string::String;
use core::fmt;

use serde::Serialize;

use crate::{
    Cause, Detail, Error, Stack, Verb,
    formatter::{Formatter, discard},
};

/// A formatter producing one JSON document per error.
///
/// The document has three fields:
///
/// - `wraps`: the plain message of the wrapped cause, or `""` without one.
///   The cause is always flattened to its message, even when it is itself an
///   [`Error`] with details and a stack of its own.
/// - `stack`: the frames, in order, as `{"file", "line", "function"}`
///   objects.
/// - `details`: the details, in order, as `{"location", "message"}` objects.
///
/// The document is followed by a newline. The verb is ignored.
///
/// # Examples
///
/// ```
/// use evs::{Detail, Error, Frame, Verb, formatter::JsonFormatter};
///
/// let error = Error::new().with_detail(Detail::new(Frame::new("pkg/a.go", 10, "Do"), "bad input"));
/// assert_eq!(
///     error.format_with(&JsonFormatter::COMPACT, Verb::VALUE).to_string(),
///     "{\"wraps\":\"\",\"stack\":[],\"details\":[{\"location\":{\"file\":\"pkg/a.go\",\"line\":10,\"function\":\"Do\"},\"message\":\"bad input\"}]}\n",
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct JsonFormatter {
    /// Whether to indent the document over multiple lines.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Single-line documents.
    pub const COMPACT: Self = Self { pretty: false };
    /// Indented, multi-line documents.
    pub const PRETTY: Self = Self { pretty: true };
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::COMPACT
    }
}

#[derive(Serialize)]
struct Projection<'a> {
    wraps: String,
    stack: &'a Stack,
    details: &'a [Detail],
}

impl<'a> Projection<'a> {
    fn new(error: &'a Error) -> Self {
        Self {
            wraps: error.wraps().map(Cause::message).unwrap_or_default(),
            stack: error.stack(),
            details: error.details(),
        }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, error: &Error, sink: &mut fmt::Formatter<'_>, _verb: Verb) {
        let projection = Projection::new(error);
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&projection)
        } else {
            serde_json::to_string(&projection)
        };
        match encoded {
            Ok(document) => {
                discard(sink.write_str(&document).and_then(|()| sink.write_str("\n")));
            }
            Err(encode_error) => {
                tracing::trace!(%encode_error, "discarding failed JSON encoding of error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    use serde_json::Value;

    use super::*;
    use crate::{Frame, formatter::TextFormatter};

    #[derive(Debug, thiserror::Error)]
    #[error("socket closed")]
    struct Closed;

    fn render(error: &Error, formatter: &JsonFormatter) -> String {
        error.format_with(formatter, Verb::VALUE).to_string()
    }

    fn decode(error: &Error) -> Value {
        let text = render(error, &JsonFormatter::COMPACT);
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1);
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_empty_error() {
        let value = decode(&Error::new());
        assert_eq!(value["wraps"], "");
        assert_eq!(value["stack"], Value::Array(Vec::new()));
        assert_eq!(value["details"], Value::Array(Vec::new()));
    }

    #[test]
    fn test_opaque_cause_is_flattened_to_message() {
        let value = decode(&Error::wrap(Closed));
        assert_eq!(value["wraps"], "socket closed");
    }

    #[test]
    fn test_nested_cause_is_flattened_to_message() {
        let inner = Error::new().with_detail(Detail::new(Frame::new("a.rs", 1, "f"), "inner"));
        let expected = inner.to_string();
        let value = decode(&Error::wrap(inner));
        assert!(value["wraps"].is_string());
        assert_eq!(value["wraps"], expected.as_str());
    }

    #[test]
    fn test_details_and_stack_keep_order_and_count() {
        let error = Error::wrap(Closed)
            .with_detail(Detail::new(Frame::new("a/one.rs", 1, "one"), "first"))
            .with_detail(Detail::new(Frame::new("b/two.rs", 2, "two"), "second"))
            .with_detail(Detail::new(Frame::new("b/two.rs", 2, "two"), "second"))
            .with_stack(Stack::new(vec![
                Frame::new("x.rs", 30, "x"),
                Frame::new("y.rs", 20, "y"),
                Frame::new("z.rs", 10, "z"),
            ]));
        let value = decode(&error);

        let details = value["details"].as_array().unwrap();
        let messages: Vec<&str> = details
            .iter()
            .map(|detail| detail["message"].as_str().unwrap())
            .collect();
        assert_eq!(messages, ["first", "second", "second"]);
        assert_eq!(details[0]["location"]["file"], "a/one.rs");
        assert_eq!(details[1]["location"]["line"], 2);
        assert_eq!(details[1]["location"]["function"], "two");

        let stack = value["stack"].as_array().unwrap();
        let lines: Vec<u64> = stack
            .iter()
            .map(|frame| frame["line"].as_u64().unwrap())
            .collect();
        assert_eq!(lines, [30, 20, 10]);
    }

    #[test]
    fn test_decodes_back_into_the_data_model() {
        let error = Error::new()
            .with_detail(Detail::new(Frame::new("a.rs", 1, "f"), "first"))
            .with_stack(Stack::new(vec![Frame::new("a.rs", 1, "f")]));
        let value = decode(&error);
        let details: Vec<Detail> = serde_json::from_value(value["details"].clone()).unwrap();
        let stack: Stack = serde_json::from_value(value["stack"].clone()).unwrap();
        assert_eq!(details, error.details());
        assert_eq!(&stack, error.stack());
    }

    #[test]
    fn test_verb_does_not_matter() {
        let error = Error::wrap(Closed).with_detail(Detail::new(Frame::new("a.rs", 1, "f"), "m"));
        let simple = error.format_with(&JsonFormatter::COMPACT, Verb::SIMPLE).to_string();
        let value = error.format_with(&JsonFormatter::COMPACT, Verb::VALUE).to_string();
        assert_eq!(simple, value);
    }

    #[test]
    fn test_pretty_and_compact_encode_the_same_document() {
        let error = Error::wrap(Closed)
            .with_detail(Detail::new(Frame::new("a.rs", 1, "f"), "m"))
            .with_stack(Stack::new(vec![Frame::new("a.rs", 1, "f")]));
        let pretty = render(&error, &JsonFormatter::PRETTY);
        assert!(pretty.lines().count() > 1);
        let pretty: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(pretty, decode(&error));
    }

    #[test]
    fn test_text_and_json_agree_on_the_cause_message() {
        let error = Error::wrap(Closed);
        let text = error.format_with(&TextFormatter::DEFAULT, Verb::VALUE).to_string();
        let value = decode(&error);
        assert!(text.ends_with(&format!("{}\n", value["wraps"].as_str().unwrap())));
    }
}
