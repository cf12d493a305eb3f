//! Error types for the pluck crate.

use thiserror::Error;

/// Errors that can occur during extraction.
///
/// Only `single` extraction can fail: it requires at most one element (or
/// at most one matching element when a predicate is in effect). The two
/// variants keep the wording distinct so callers can tell whether a filter
/// was involved.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// A `single` extraction without a predicate saw a second element.
    #[error("sequence contains more than one element")]
    MoreThanOneElement,

    /// A `single` extraction with a predicate saw a second matching element.
    #[error("sequence contains more than one matching element")]
    MoreThanOneMatch,
}

impl ExtractError {
    /// Selects the variant appropriate for whether a predicate was in effect.
    pub(crate) fn more_than_one(filtered: bool) -> Self {
        if filtered {
            ExtractError::MoreThanOneMatch
        } else {
            ExtractError::MoreThanOneElement
        }
    }
}

/// Result type for pluck operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distinguishes_filtered_wording() {
        assert_eq!(
            ExtractError::MoreThanOneElement.to_string(),
            "sequence contains more than one element"
        );
        assert_eq!(
            ExtractError::MoreThanOneMatch.to_string(),
            "sequence contains more than one matching element"
        );
    }

    #[test]
    fn more_than_one_selects_variant() {
        assert_eq!(
            ExtractError::more_than_one(false),
            ExtractError::MoreThanOneElement
        );
        assert_eq!(
            ExtractError::more_than_one(true),
            ExtractError::MoreThanOneMatch
        );
    }
}
