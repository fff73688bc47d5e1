//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of mapping rules.
/// These are independent of where the mapping came from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "mismatched count of mappings and replacements: {mappings} mappings, {replacements} replacements"
    )]
    ArgumentMismatch { mappings: usize, replacements: usize },

    #[error("empty search string is not allowed")]
    EmptySearch,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
