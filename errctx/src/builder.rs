//! Building error records

use crate::{Error, Kind, MetaData};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::error::Error as StdError;
use std::sync::Arc;

/// Collects the parts of an [`Error`] record.
///
/// Every setter may be called any number of times; the last call wins. The
/// cause is required: [`Builder::build`] returns `None` without one, so a call
/// site can wrap a possibly absent error unconditionally.
///
/// When the cause is itself a record, an unset (or `Unknown`) kind and unset
/// metadata are taken from it.
///
/// ```rust
/// use errctx::{Error, Kind};
///
/// let inner = Error::builder()
///     .cause(errctx::new("connection reset"))
///     .kind(Kind::Io)
///     .build();
/// let outer = Error::builder().cause(inner.unwrap()).message("fetch page").build().unwrap();
///
/// assert_eq!(outer.kind(), Kind::Io);
/// assert!(Error::builder().message("orphan").build().is_none());
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    kind: Kind,
    message: String,
    meta: Option<Arc<MetaData>>,
    cause: Option<anyhow::Error>,
}

impl Builder {
    /// Create an empty builder: no cause, no message, `Unknown` kind
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for this link
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the kind for this link
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the metadata for this link
    pub fn meta(mut self, meta: impl Into<MetaData>) -> Self {
        self.meta = Some(Arc::new(meta.into()));
        self
    }

    /// Set the wrapped error
    pub fn cause(mut self, cause: impl Into<anyhow::Error>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Set the wrapped error if there is one. `None` leaves any earlier cause
    /// in place.
    pub fn maybe_cause<E: Into<anyhow::Error>>(self, cause: Option<E>) -> Self {
        match cause {
            Some(cause) => self.cause(cause),
            None => self,
        }
    }

    /// Apply one tagged argument
    pub fn arg(self, arg: impl Into<Arg>) -> Self {
        match arg.into() {
            Arg::Message(message) => self.message(message),
            Arg::Kind(kind) => self.kind(kind),
            Arg::Meta(meta) => self.meta(meta),
            Arg::Cause(cause) => self.cause(cause),
            Arg::Ignored => self,
        }
    }

    /// Build the record, or `None` if no cause was set.
    pub fn build(mut self) -> Option<Error> {
        let cause = self.cause.take()?;
        Some(self.build_with(cause))
    }

    pub(crate) fn build_with(self, cause: anyhow::Error) -> Error {
        let Builder {
            mut kind,
            message,
            mut meta,
            ..
        } = self;

        let inner: &(dyn StdError + 'static) = cause.as_ref();
        if let Some(inner) = inner.downcast_ref::<Error>() {
            if kind == Kind::Unknown {
                kind = inner.kind;
            }
            if meta.is_none() {
                meta = inner.meta.clone();
            }
        }

        Error {
            kind,
            message,
            meta,
            cause,
        }
    }
}

/// One argument of [`Error::from_args`] or [`e!`](crate::e).
///
/// Most values convert with `Arg::from`, which is what `e!` does:
///
/// | value                                   | argument           |
/// |-----------------------------------------|--------------------|
/// | `&str`, `String`                        | [`Arg::Message`]   |
/// | [`Kind`]                                | [`Arg::Kind`]      |
/// | [`MetaData`], `HashMap`/`BTreeMap` of JSON values | [`Arg::Meta`] |
/// | [`Error`], `anyhow::Error`              | [`Arg::Cause`]     |
/// | `Option` of any of these                | the inner argument, or [`Arg::Ignored`] |
///
/// Other error types go through [`Arg::cause`].
#[derive(Debug)]
pub enum Arg {
    /// The message for this link
    Message(String),
    /// The kind for this link
    Kind(Kind),
    /// The metadata for this link
    Meta(MetaData),
    /// The wrapped error
    Cause(anyhow::Error),
    /// An absent value; has no effect.
    Ignored,
}

impl Arg {
    /// Wrap any error as a cause argument
    pub fn cause(err: impl Into<anyhow::Error>) -> Self {
        Arg::Cause(err.into())
    }
}

impl From<&str> for Arg {
    fn from(message: &str) -> Self {
        Arg::Message(message.to_string())
    }
}

impl From<String> for Arg {
    fn from(message: String) -> Self {
        Arg::Message(message)
    }
}

impl From<Kind> for Arg {
    fn from(kind: Kind) -> Self {
        Arg::Kind(kind)
    }
}

impl From<MetaData> for Arg {
    fn from(meta: MetaData) -> Self {
        Arg::Meta(meta)
    }
}

impl From<HashMap<String, Value>> for Arg {
    fn from(map: HashMap<String, Value>) -> Self {
        Arg::Meta(map.into())
    }
}

impl From<BTreeMap<String, Value>> for Arg {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Arg::Meta(map.into())
    }
}

impl From<Error> for Arg {
    fn from(err: Error) -> Self {
        Arg::Cause(anyhow::Error::new(err))
    }
}

impl From<anyhow::Error> for Arg {
    fn from(err: anyhow::Error) -> Self {
        Arg::Cause(err)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Ignored, Into::into)
    }
}

impl Error {
    /// Build a record from tagged arguments, in any order.
    ///
    /// Returns `None` if no cause is among them.
    pub fn from_args(args: impl IntoIterator<Item = Arg>) -> Option<Error> {
        args.into_iter()
            .fold(Builder::new(), |builder, arg| builder.arg(arg))
            .build()
    }
}

/// Build an `Option<Error>` from a list of values, each converted with
/// [`Arg::from`].
///
/// ```rust
/// use errctx::{e, Kind};
///
/// let err = e![errctx::new("EOF"), "read header", Kind::Unmarshal].unwrap();
/// assert_eq!(err.to_string(), "read header: EOF");
///
/// let none: Option<anyhow::Error> = None;
/// assert!(e![none, "read header"].is_none());
/// ```
#[macro_export]
macro_rules! e {
    ($($arg:expr),+ $(,)?) => {
        $crate::Error::from_args([$($crate::Arg::from($arg)),+])
    };
}
