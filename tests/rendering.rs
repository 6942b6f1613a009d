//! End-to-end rendering through the public API.
//!
//! Nothing in this binary registers a global formatter, so `Display` and
//! `Debug` always use the default text formatter here.

use core::fmt::{self, Write};

use evs::{
    Cause, Detail, Error, Frame, Render, Stack, Verb,
    formatter::{JsonFormatter, TextFormatter},
};

#[derive(Debug, thiserror::Error)]
#[error("disk on fire")]
struct DiskOnFire;

#[derive(Debug, thiserror::Error)]
#[error("rate limited")]
struct RateLimited {
    retry_after: u32,
}

impl Render for RateLimited {
    fn render(&self, sink: &mut fmt::Formatter<'_>, verb: Verb) -> fmt::Result {
        if verb.is_simple() {
            sink.write_str("rate limited")
        } else {
            write!(sink, "rate limited (retry after {}s)", self.retry_after)
        }
    }
}

fn text(error: &Error, verb: Verb) -> String {
    error.format_with(&TextFormatter::DEFAULT, verb).to_string()
}

fn bad_input() -> Error {
    Error::new().with_detail(Detail::new(Frame::new("pkg/a.go", 10, "Do"), "bad input"))
}

#[test]
fn test_single_detail_without_stack() {
    let expected = format!("{}: bad input", Error::type_name());
    assert_eq!(text(&bad_input(), Verb::VALUE), expected);
    assert_eq!(text(&bad_input(), Verb::SIMPLE), expected);
}

#[test]
fn test_single_detail_with_stack() {
    let error = bad_input().with_stack(Stack::new(vec![Frame::new("pkg/a.go", 10, "Do")]));
    assert_eq!(
        text(&error, Verb::SIMPLE),
        format!("{}: bad input\n\nWith Stacktrace:\n[a.go:10]", Error::type_name())
    );
    assert_eq!(
        text(&error, Verb::VALUE),
        format!("{}: bad input\n\nWith Stacktrace:\nDo [a.go:10]", Error::type_name())
    );
}

#[test]
fn test_display_and_debug_pick_verbs() {
    let error = Error::wrap(DiskOnFire)
        .with_detail(Detail::new(Frame::new("src/save.rs", 4, "app::save"), "saving"));
    assert_eq!(format!("{error}"), text(&error, Verb::SIMPLE));
    assert_eq!(format!("{error:#}"), text(&error, Verb::VALUE));
    assert_eq!(format!("{error:?}"), text(&error, Verb::VALUE));
    assert_ne!(format!("{error}"), format!("{error:#}"));
}

#[test]
fn test_macros_record_call_site() {
    let line = line!() + 1;
    let error = evs::error!("missing key `{}`", "port");
    let detail = &error.details()[0];
    assert_eq!(detail.message, "missing key `port`");
    assert!(detail.location.file.ends_with("rendering.rs"));
    assert_eq!(detail.location.line, line);
    assert_eq!(
        detail.location.function,
        "rendering::test_macros_record_call_site"
    );
}

#[test]
fn test_wrapped_foreign_error_with_detail() {
    let error = evs::wrap!(DiskOnFire, "saving {}", "report.txt");
    let location = &error.details()[0].location;
    assert_eq!(
        text(&error, Verb::VALUE),
        format!(
            "{}: disk on fire\n{} [rendering.rs:{}] saving report.txt",
            Error::type_name(),
            location.function,
            location.line,
        )
    );
    assert_eq!(
        text(&error, Verb::SIMPLE),
        format!(
            "{}: disk on fire\n[rendering.rs:{}] saving report.txt",
            Error::type_name(),
            location.line,
        )
    );
}

#[test]
fn test_layered_chain_renders_innermost_first() {
    let inner = Error::wrap(DiskOnFire)
        .with_detail(Detail::new(Frame::new("src/io.rs", 7, "app::io::write"), "write"));
    let middle = Error::wrap(inner)
        .with_detail(Detail::new(Frame::new("src/save.rs", 21, "app::save"), "save"));
    let outer = Error::wrap(middle)
        .with_detail(Detail::new(Frame::new("src/main.rs", 3, "app::main"), "exit"));

    assert!(matches!(outer.wraps(), Some(Cause::Nested(_))));
    assert_eq!(
        text(&outer, Verb::SIMPLE),
        format!(
            "{}: disk on fire\n[io.rs:7] write\n[save.rs:21] save\n[main.rs:3] exit",
            Error::type_name()
        )
    );
}

#[test]
fn test_renderable_cause_receives_verb() {
    let error = Error::wrap_renderable(RateLimited { retry_after: 30 });
    assert_eq!(format!("{error}"), "rate limited\n");
    assert_eq!(format!("{error:#}"), "rate limited (retry after 30s)\n");
    assert_eq!(error.wraps().map(Cause::message).as_deref(), Some("rate limited"));
}

#[test]
fn test_bail_returns_early() {
    fn check(port: u32) -> evs::Result<u32> {
        if port > u32::from(u16::MAX) {
            evs::bail!("port {port} out of range");
        }
        Ok(port)
    }

    assert_eq!(check(80).unwrap(), 80);
    let error = check(70_000).unwrap_err();
    assert_eq!(error.details()[0].message, "port 70000 out of range");
}

#[test]
fn test_json_and_text_describe_the_same_error() {
    let error = Error::wrap(DiskOnFire)
        .with_detail(Detail::new(Frame::new("src/save.rs", 4, "app::save"), "saving"))
        .with_stack(Stack::new(vec![
            Frame::new("src/save.rs", 4, "app::save"),
            Frame::new("src/main.rs", 9, "app::main"),
        ]));

    let document = error.format_with(&JsonFormatter::COMPACT, Verb::SIMPLE).to_string();
    let value: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(value["wraps"], "disk on fire");
    assert_eq!(value["details"][0]["location"]["function"], "app::save");
    assert_eq!(value["stack"][1]["file"], "src/main.rs");

    let rendered = text(&error, Verb::VALUE);
    assert!(rendered.contains("disk on fire"));
    assert!(rendered.ends_with("app::save [save.rs:4]\napp::main [main.rs:9]"));
}

#[test]
fn test_source_chain_reaches_foreign_error() {
    let error = evs::wrap!(evs::wrap!(DiskOnFire, "inner"), "outer");
    let first = core::error::Error::source(&error).unwrap();
    assert!(first.is::<Error>());
    let second = first.source().unwrap();
    assert_eq!(second.to_string(), "disk on fire");
    assert!(second.source().is_none());
}

#[test]
fn test_failing_sink_does_not_fail_display() {
    struct Broken;

    impl Write for Broken {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    let error = evs::wrap!(DiskOnFire, "saving").with_stack(Stack::new(vec![Frame::new(
        "src/save.rs",
        4,
        "app::save",
    )]));
    let mut sink = Broken;
    assert!(write!(sink, "{error}").is_ok());
    assert!(write!(sink, "{error:?}").is_ok());
    let json = error.format_with(&JsonFormatter::PRETTY, Verb::VALUE);
    assert!(write!(sink, "{json}").is_ok());
}

#[test]
fn test_rendering_is_repeatable() {
    let error = evs::wrap!(DiskOnFire, "saving");
    assert_eq!(format!("{error:#}"), format!("{error:#}"));
    assert_eq!(error.to_string(), error.to_string());
}
