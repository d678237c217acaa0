//! Errors surfaced by the conversion and generation entry points.

use thiserror::Error;

/// A result specialized to this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything in this crate is a pure function, so retrying a failed call
/// with the same input yields the same error. Malformed input is rejected
/// before any numeric processing and never coerced to a fallback color.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was not a 6-digit hex color with an optional leading `#`.
    #[error("invalid hex color {0:?}: expected 6 hex digits with an optional leading '#'")]
    InvalidFormat(String),

    /// A count was out of the range the operation requires.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_the_offending_input() {
        let message = Error::InvalidFormat("#ZZZZZZ".to_string()).to_string();
        assert!(message.contains("#ZZZZZZ"));

        let message = Error::InvalidArgument("count must be at least 1".to_string()).to_string();
        assert!(message.contains("count must be at least 1"));
    }
}
