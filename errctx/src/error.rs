//! The annotated error record

use crate::{Builder, Kind, MetaData};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// An error annotated with a kind, a message and optional metadata, wrapping
/// the error that caused it.
///
/// Records are built with [`Error::builder`] or [`e!`](crate::e) and are
/// immutable afterwards. Wrapping one record in another forms a chain that
/// ends at a plain leaf error:
///
/// - `kind`: the class of error, inherited from the wrapped record when unset
/// - `message`: the context added at this layer, possibly empty
/// - `meta`: machine-readable detail, inherited from the wrapped record when unset
/// - `cause`: the wrapped error, always present
///
/// # Example
///
/// ```rust
/// use errctx::{e, Kind, MetaData};
///
/// let io = e![errctx::new("network unreachable"), "io error", Kind::Io].unwrap();
/// let err = e![io, "can't load profile", MetaData::new().with("user", 42)].unwrap();
///
/// assert_eq!(err.kind(), Kind::Io);
/// assert_eq!(err.to_string(), "can't load profile: io error: network unreachable");
/// assert_eq!(err.msg(), "can't load profile");
/// ```
pub struct Error {
    pub(crate) kind: Kind,
    pub(crate) message: String,
    pub(crate) meta: Option<Arc<MetaData>>,
    pub(crate) cause: anyhow::Error,
}

impl Error {
    /// Start building a record. See [`Builder`].
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Wrap `cause` with a message, keeping its kind and metadata if it is
    /// itself a record.
    pub fn wrap(cause: impl Into<anyhow::Error>, message: impl Into<String>) -> Self {
        Builder::new().message(message).build_with(cause.into())
    }

    /// Wrap `cause` with a message and an explicit kind.
    pub fn with_kind(
        cause: impl Into<anyhow::Error>,
        kind: Kind,
        message: impl Into<String>,
    ) -> Self {
        Builder::new()
            .kind(kind)
            .message(message)
            .build_with(cause.into())
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the error kind
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Get the message added at this link (not the chained message)
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the metadata, if any
    pub fn meta(&self) -> Option<&MetaData> {
        self.meta.as_deref()
    }

    /// Get the wrapped error
    pub fn cause_ref(&self) -> &(dyn StdError + 'static) {
        self.cause.as_ref()
    }

    /// Get the wrapped error if it is itself a record
    pub fn chained_cause(&self) -> Option<&Error> {
        self.cause_ref().downcast_ref::<Error>()
    }

    /// Consume the record, returning the wrapped error
    pub fn into_cause(self) -> anyhow::Error {
        self.cause
    }

    /// Check whether this record is of the given kind
    pub fn is_kind(&self, kind: Kind) -> bool {
        self.kind == kind
    }

    /// The HTTP status for this record's kind
    pub fn status_code(&self) -> http::StatusCode {
        self.kind.status_code()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Returns the short, user-facing message.
    ///
    /// This is the chained message cut before its first `": "`, so only the
    /// outermost contribution shows and internal detail does not leak. When
    /// this link has no message, that is the next link's contribution.
    ///
    /// Only the two-character separator `": "` cuts; a bare `':'` inside a
    /// message (`"ratio 1:2"`) is kept.
    pub fn msg(&self) -> String {
        let mut full = self.to_string();
        if let Some(pos) = full.find(": ") {
            full.truncate(pos);
        }
        full
    }
}

// =============================================================================
// Display - the chained message
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut link = self;
        loop {
            if !link.message.is_empty() {
                write!(f, "{}: ", link.message)?;
            }
            match link.chained_cause() {
                Some(next) => link = next,
                None => return write!(f, "{}", link.cause),
            }
        }
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (code {})", self.kind, self.kind.code())?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if let Some(meta) = self.meta() {
            writeln!(f)?;
            writeln!(f, "    Detail:")?;
            for (key, value) in meta {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "    Caused by:")?;
        for (i, link) in self.chain().skip(1).enumerate() {
            match link.downcast_ref::<Error>() {
                Some(record) => {
                    writeln!(f, "        {}: {} [{}]", i, record.message, record.kind)?
                }
                None => writeln!(f, "        {}: {}", i, link)?,
            }
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause_ref())
    }
}
