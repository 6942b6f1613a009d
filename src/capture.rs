//! Stack capture.
//!
//! This module is only available with the `backtrace` feature:
//!
//! ```toml
//! [dependencies]
//! evs = { version = "0.1", features = ["backtrace"] }
//! ```
//!
//! Rendering never captures anything by itself. Call [`Stack::capture`] (or
//! [`StackCollector::collect`] for control over filtering) where the error is
//! raised and attach the result with [`Error::with_stack`].
//!
//! ```
//! use evs::Stack;
//!
//! let error = evs::error!("unreachable state").with_stack(Stack::capture());
//! # let _ = error;
//! ```
//!
//! Frames are stored most recent call first. Frames without file or line
//! information are skipped.
//!
//! [`Error::with_stack`]: crate::Error::with_stack

use alloc::{borrow::Cow, format, string::String, vec::Vec};
use std::path::{Path, PathBuf};

use crate::{Frame, Stack};

/// Captures the current call stack as a [`Stack`].
#[derive(Copy, Clone, Debug)]
pub struct StackCollector {
    /// Upper bound on the number of captured frames.
    pub max_frame_count: usize,
    /// Drop the frames of the capture machinery itself and everything below
    /// the runtime entry point.
    pub do_capture_filtering: bool,
}

impl Default for StackCollector {
    fn default() -> Self {
        Self {
            do_capture_filtering: std::env::var_os("RUST_BACKTRACE")
                .is_none_or(|v| !v.eq_ignore_ascii_case("full")),
            max_frame_count: 100,
        }
    }
}

impl StackCollector {
    /// Captures the stack of the calling thread.
    #[inline(never)]
    pub fn collect(&self) -> Stack {
        Stack::new(capture_frames(self.max_frame_count, self.do_capture_filtering))
    }
}

impl Stack {
    /// Captures the stack of the calling thread with the default
    /// [`StackCollector`].
    #[inline(never)]
    pub fn capture() -> Self {
        StackCollector::default().collect()
    }
}

#[derive(PartialEq, Eq, Debug)]
enum CaptureState {
    LookingForCollector,
    LookingForDifferentCrate,
    Capturing,
    Done,
}

struct CapturedFrame {
    frame: Frame,
    is_runtime: bool,
}

// Based on https://github.com/rust-lang/rust/blob/1f7dcc878d73c45cc40018aac6e5c767446df110/library/std/src/sys/backtrace.rs#L46
#[inline(never)]
fn capture_frames(max_frame_count: usize, do_capture_filtering: bool) -> Vec<Frame> {
    let cwd = std::env::current_dir().ok();
    let cwd: Option<&Path> = cwd.as_deref();

    let mut state = if do_capture_filtering {
        CaptureState::LookingForCollector
    } else {
        CaptureState::Capturing
    };
    let mut frames: Vec<CapturedFrame> = Vec::new();

    macro_rules! is_done {
        () => {
            frames.len() >= max_frame_count || state == CaptureState::Done
        };
    }

    backtrace::trace(|frame| {
        if is_done!() {
            return false;
        }

        backtrace::resolve_frame(frame, |symbol| {
            if is_done!() {
                return;
            }
            let Some(name) = symbol.name() else {
                return;
            };
            let function = format!("{name:#}");

            match state {
                CaptureState::LookingForCollector => {
                    if function == "evs::capture::capture_frames" {
                        state = CaptureState::LookingForDifferentCrate;
                    }
                    return;
                }
                CaptureState::LookingForDifferentCrate => {
                    if function.starts_with("evs::") || function.contains(" as evs::") {
                        return;
                    }
                    state = CaptureState::Capturing;
                }
                CaptureState::Capturing => {
                    if do_capture_filtering
                        && (function.contains("__rust_begin_short_backtrace")
                            || function == "tokio::runtime::context::runtime::enter_runtime")
                    {
                        state = CaptureState::Done;
                        return;
                    }
                }
                CaptureState::Done => return,
            }

            let (Some(path), Some(line)) = (symbol.filename(), symbol.lineno()) else {
                return;
            };
            frames.push(CapturedFrame {
                is_runtime: function.starts_with("std::")
                    || function.starts_with("core::")
                    || function.starts_with("tokio::")
                    || function == "__rust_try"
                    || function == "__GI___clone3"
                    || function == "start_thread",
                frame: Frame::new(display_path(cwd, path), line, function),
            });
        });

        !is_done!()
    });

    if do_capture_filtering {
        while let Some(last) = frames.last()
            && last.is_runtime
        {
            frames.pop();
        }
    }
    frames.into_iter().map(|captured| captured.frame).collect()
}

fn display_path(cwd: Option<&Path>, path: &Path) -> Cow<'static, str> {
    let relative: PathBuf = match cwd.and_then(|cwd| path.strip_prefix(cwd).ok()) {
        Some(stripped) => stripped.to_path_buf(),
        None => path.to_path_buf(),
    };
    let relative: String = relative.to_string_lossy().into_owned();
    Cow::Owned(relative)
}
