//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Menu catalog has no categories")]
    EmptyCatalog,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Invalid sort mode: {0}")]
    InvalidSortMode(String),

    #[error("Invalid WhatsApp number: '{0}' contains no digits")]
    InvalidPhoneNumber(String),
}

impl DomainError {
    /// Check if this error comes from an unusable catalog
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyCatalog | DomainError::UnknownCategory(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_display() {
        assert_eq!(
            DomainError::EmptyCatalog.to_string(),
            "Menu catalog has no categories"
        );
    }

    #[test]
    fn test_is_catalog_error() {
        assert!(DomainError::EmptyCatalog.is_catalog_error());
        assert!(DomainError::UnknownCategory("x".into()).is_catalog_error());
        assert!(!DomainError::InvalidPhoneNumber("+".into()).is_catalog_error());
    }
}
