//! Plain-text leaf errors

/// An error that is nothing but its text.
///
/// Used as the terminal cause of a chain when there is no underlying
/// library error to wrap.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TextError(String);

impl TextError {
    /// Get the error text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns an error that formats as the given text.
///
/// Intended as the cause argument of [`Error::builder`](crate::Error::builder)
/// or [`e!`](crate::e).
pub fn new(text: impl Into<String>) -> anyhow::Error {
    anyhow::Error::new(TextError(text.into()))
}

/// Like [`new`], with `format!` arguments.
///
/// ```rust
/// let err = errctx::errorf!("row {} missing", 7);
/// assert_eq!(err.to_string(), "row 7 missing");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::new(::std::format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_renders_text() {
        let err = new("network unreachable");
        assert_eq!(err.to_string(), "network unreachable");
        assert_eq!(
            err.downcast_ref::<TextError>().map(TextError::as_str),
            Some("network unreachable")
        );
    }

    #[test]
    fn test_errorf() {
        let err = crate::errorf!("{}: {}", "a", 1);
        assert_eq!(err.to_string(), "a: 1");
    }
}
