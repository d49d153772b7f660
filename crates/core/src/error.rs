//! Error types for patient form validation.

/// Errors produced when a form submission cannot become a [`crate::Patient`].
///
/// One variant per failure cause. A missing field means the form value was
/// absent or contained only whitespace; an unknown value means the field was
/// present but is not a member of its fixed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("gender is required")]
    MissingGender,
    #[error("age is required")]
    MissingAge,
    #[error("condition is required")]
    MissingCondition,
    #[error("unknown gender: {0}")]
    UnknownGender(String),
    #[error("unknown condition: {0}")]
    UnknownCondition(String),
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
