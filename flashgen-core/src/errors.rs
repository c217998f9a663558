use std::collections::BTreeMap;
use thiserror::Error;

/// Field path → messages. Ordered so serialized error details are stable.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not authenticated")]
    Unauthenticated,
    #[error("email not verified")]
    EmailNotVerified,
    #[error("email already registered")]
    EmailAlreadyRegistered,
    #[error("deck name already exists")]
    DeckNameNotUnique,
    #[error("generation already committed")]
    GenerationAlreadyCommitted,
    #[error("rate limited")]
    RateLimited,
    #[error("ai provider error: {0}")]
    AiProvider(String),
    #[error("unexpected value {value:?} in column {column}")]
    InvalidColumn { column: &'static str, value: String },
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn invalid_column(column: &'static str, value: impl Into<String>) -> Self {
        CoreError::InvalidColumn {
            column,
            value: value.into(),
        }
    }

    /// Single-field validation failure.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        CoreError::Validation(errors)
    }
}
