//! Classification and cause walking over arbitrary errors

use crate::{Error, Kind};
use std::error::Error as StdError;

/// Reports whether `err` is a record of the given kind.
///
/// `None` and errors that are not records are never of any kind. Only the
/// outermost value is inspected; the chain is not searched.
pub fn is_kind(err: Option<&(dyn StdError + 'static)>, kind: Kind) -> bool {
    err.and_then(|err| err.downcast_ref::<Error>())
        .is_some_and(|err| err.kind == kind)
}

/// Like [`is_kind`], for a record carried in an `anyhow::Error`.
pub fn is_kind_any(err: &anyhow::Error, kind: Kind) -> bool {
    err.downcast_ref::<Error>()
        .is_some_and(|err| err.kind == kind)
}

/// Returns the deepest error reachable through [`source`](StdError::source).
///
/// `None` yields `None`. An error without a source is returned as is, so
/// applying this twice gives the same result as applying it once.
pub fn root_cause<'a>(
    err: Option<&'a (dyn StdError + 'static)>,
) -> Option<&'a (dyn StdError + 'static)> {
    err.and_then(|err| Chain::new(err).last())
}

/// Iterator over an error and each of its sources, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    /// Start a walk at `head`, which is yielded first
    pub fn new(head: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl Error {
    /// Iterate over this record and every error beneath it
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// The leaf error at the bottom of the chain
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        self.chain().last().unwrap_or(self)
    }
}
