//! Annotating `Result`s in place

use crate::{Builder, Error, Kind};

/// Extension trait for wrapping the error side of a `Result`.
///
/// `Ok` values pass through untouched, so these can be applied to every
/// fallible call without checking it first.
///
/// ```rust
/// use errctx::{Kind, ResultExt};
///
/// fn read_config() -> errctx::Result<String> {
///     std::fs::read_to_string("/nonexistent/app.toml").annotate_kind(Kind::Io, "read config")
/// }
///
/// let err = read_config().unwrap_err();
/// assert_eq!(err.kind(), Kind::Io);
/// assert_eq!(err.msg(), "read config");
/// ```
pub trait ResultExt<T> {
    /// Wrap the error with a message
    fn annotate(self, message: impl Into<String>) -> Result<T, Error>;

    /// Wrap the error with a kind and a message
    fn annotate_kind(self, kind: Kind, message: impl Into<String>) -> Result<T, Error>;

    /// Wrap the error with whatever `f` sets on the builder.
    ///
    /// The error itself is always the cause; a cause set by `f` is discarded.
    fn annotate_with<F>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce(Builder) -> Builder;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn annotate(self, message: impl Into<String>) -> Result<T, Error> {
        self.map_err(|err| Error::wrap(err, message))
    }

    fn annotate_kind(self, kind: Kind, message: impl Into<String>) -> Result<T, Error> {
        self.map_err(|err| Error::with_kind(err, kind, message))
    }

    fn annotate_with<F>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce(Builder) -> Builder,
    {
        self.map_err(|err| f(Builder::new()).build_with(err.into()))
    }
}
