//! Feedstock errors.

use thiserror::Error;

/// Result type for feedstock operations.
pub type FeedstockResult<T> = Result<T, FeedstockError>;

/// Errors that can occur while building feed descriptions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedstockError {
    /// Non-physical values (negative or non-finite mix percentages).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedstockError::NonPhysical {
            what: "mix percentage",
        };
        assert!(err.to_string().contains("mix percentage"));
    }
}
