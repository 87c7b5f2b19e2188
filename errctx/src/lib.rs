//! # errctx
//!
//! Layered error annotation: every layer of a call stack wraps the error it
//! received with its own message, and optionally a [`Kind`] and [`MetaData`],
//! without losing the original failure or its classification.
//!
//! ## Design Philosophy
//!
//! - **Kind**: a closed set of error classes with stable wire codes and
//!   HTTP statuses
//! - **Message**: the context added by one layer; the chain renders as
//!   `outer: inner: leaf`
//! - **MetaData**: machine-readable detail for API responses
//! - **Cause**: the wrapped error, required for a record to exist
//!
//! ## Usage
//!
//! ```rust
//! use errctx::{e, Kind, MetaData};
//!
//! fn fetch(id: u64) -> Result<(), errctx::Error> {
//!     let io = e![errctx::new("connection refused"), "query users", Kind::Io].unwrap();
//!     Err(e![io, "load profile", MetaData::new().with("id", id)].unwrap())
//! }
//!
//! let err = fetch(7).unwrap_err();
//! assert_eq!(err.to_string(), "load profile: query users: connection refused");
//! assert_eq!(
//!     err.to_json_string().unwrap(),
//!     r#"{"detail":{"id":7},"type":"I/O error","error":"load profile","code":3}"#
//! );
//! ```
//!
//! ## Principles
//!
//! - Kinds and metadata set deeper in the chain carry outward unless a
//!   layer overrides them
//! - Building without a cause yields `None`, so wrapping can be unconditional
//! - [`Error::msg`] is the only text meant for end users
//!
//! ## Backtraces
//!
//! errctx never captures stack traces itself. Causes are stored as
//! `anyhow::Error`, and anyhow records a backtrace for each wrapped error when
//! `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` is set in the environment. Leave
//! both unset (or `RUST_LIB_BACKTRACE=0`) to keep building records free of
//! that cost.

mod builder;
mod chain;
mod error;
mod ext;
mod kind;
#[cfg(feature = "tracing")]
mod log;
mod meta;
mod serialize;
mod status;
mod text;

pub use builder::{Arg, Builder};
pub use chain::{is_kind, is_kind_any, root_cause, Chain};
pub use error::Error;
pub use ext::ResultExt;
pub use kind::{Kind, UnknownKindCode};
pub use meta::MetaData;
pub use serialize::ErrorBody;
pub use text::{new, TextError};

/// Result type alias using errctx Error
pub type Result<T> = std::result::Result<T, Error>;
