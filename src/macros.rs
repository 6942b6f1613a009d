/// Captures the current call site as a [`Frame`](crate::Frame).
///
/// The function name is the path of the enclosing function, e.g.
/// `my_crate::config::load`. Closures report the function they are defined
/// in.
///
/// # Examples
///
/// ```
/// fn load() -> evs::Frame {
///     evs::frame!()
/// }
///
/// let frame = load();
/// assert!(frame.file.ends_with(".rs"));
/// assert!(frame.function.ends_with("load"));
/// ```
#[macro_export]
macro_rules! frame {
    () => {
        $crate::Frame::new(
            ::core::file!(),
            ::core::line!(),
            $crate::__private::function_name({
                fn __evs_here() {}
                __evs_here
            }),
        )
    };
}

/// Creates a [`Detail`](crate::Detail) located at the call site.
///
/// The arguments are interpreted as by [`format!()`].
///
/// [`format!()`]: std::format
///
/// # Examples
///
/// ```
/// let attempt = 3;
/// let detail = evs::detail!("retry {attempt} failed");
/// assert_eq!(detail.message, "retry 3 failed");
/// ```
#[macro_export]
macro_rules! detail {
    ($($arg:tt)+) => {
        $crate::Detail::new($crate::frame!(), $crate::__private::format!($($arg)+))
    };
}

/// Creates a root [`Error`](crate::Error) with one detail located at the call
/// site.
///
/// The arguments are interpreted as by [`format!()`]. The message becomes the
/// header line of the text rendering.
///
/// [`format!()`]: std::format
///
/// # Examples
///
/// ```
/// use evs::{Error, Verb, formatter::TextFormatter};
///
/// let error = evs::error!("missing field `{}`", "name");
/// assert_eq!(
///     error.format_with(&TextFormatter::DEFAULT, Verb::SIMPLE).to_string(),
///     format!("{}: missing field `name`", Error::type_name()),
/// );
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::Error::new().with_detail($crate::detail!($($arg)+))
    };
}

/// Wraps an existing error, optionally adding a detail located at the call
/// site.
///
/// The error is classified as by [`Error::wrap`](crate::Error::wrap), so a
/// [`Render`](crate::Render) implementation is kept as an opaque cause. Use
/// [`Error::wrap_renderable`](crate::Error::wrap_renderable) to keep its
/// verb-aware rendering.
///
/// # Examples
///
/// ```
/// let io = std::io::Error::other("disk on fire");
/// let error = evs::wrap!(io, "saving {}", "report.txt");
/// assert_eq!(error.details()[0].message, "saving report.txt");
/// assert_eq!(error.wraps().unwrap().message(), "disk on fire");
/// ```
#[macro_export]
macro_rules! wrap {
    ($error:expr $(,)?) => {
        $crate::Error::wrap($error)
    };
    ($error:expr, $($arg:tt)+) => {
        $crate::Error::wrap($error).with_detail($crate::detail!($($arg)+))
    };
}

/// Returns early with an [`Error`](crate::Error) built by [`error!`].
///
/// This is equivalent to writing `return Err(evs::error!(...).into());`
///
/// # Examples
///
/// ```
/// fn check(value: i32) -> Result<(), evs::Error> {
///     if value < 0 {
///         evs::bail!("value must be non-negative, got {value}");
///     }
///     Ok(())
/// }
///
/// assert!(check(1).is_ok());
/// assert_eq!(
///     check(-1).unwrap_err().details()[0].message,
///     "value must be non-negative, got -1"
/// );
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return $crate::__private::Err($crate::error!($($arg)+).into())
    };
}
