//! The closed set of error codes the API returns.

use axum::http::StatusCode;
use flashgen_core::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    ValidationError,
    EmailAlreadyRegistered,
    RateLimited,
    InternalError,
    InvalidCredentials,
    Unauthenticated,
    EmailNotVerified,
    DeckNameNotUnique,
    NotFound,
    AiProviderError,
    GenerationAlreadyCommitted,
}

impl ApiErrorCode {
    pub const ALL: [ApiErrorCode; 11] = [
        ApiErrorCode::ValidationError,
        ApiErrorCode::EmailAlreadyRegistered,
        ApiErrorCode::RateLimited,
        ApiErrorCode::InternalError,
        ApiErrorCode::InvalidCredentials,
        ApiErrorCode::Unauthenticated,
        ApiErrorCode::EmailNotVerified,
        ApiErrorCode::DeckNameNotUnique,
        ApiErrorCode::NotFound,
        ApiErrorCode::AiProviderError,
        ApiErrorCode::GenerationAlreadyCommitted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorCode::ValidationError => "VALIDATION_ERROR",
            ApiErrorCode::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            ApiErrorCode::RateLimited => "RATE_LIMITED",
            ApiErrorCode::InternalError => "INTERNAL_ERROR",
            ApiErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiErrorCode::Unauthenticated => "UNAUTHENTICATED",
            ApiErrorCode::EmailNotVerified => "EMAIL_NOT_VERIFIED",
            ApiErrorCode::DeckNameNotUnique => "DECK_NAME_NOT_UNIQUE",
            ApiErrorCode::NotFound => "NOT_FOUND",
            ApiErrorCode::AiProviderError => "AI_PROVIDER_ERROR",
            ApiErrorCode::GenerationAlreadyCommitted => "GENERATION_ALREADY_COMMITTED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ApiErrorCode::InvalidCredentials | ApiErrorCode::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            ApiErrorCode::EmailNotVerified => StatusCode::FORBIDDEN,
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::EmailAlreadyRegistered
            | ApiErrorCode::DeckNameNotUnique
            | ApiErrorCode::GenerationAlreadyCommitted => StatusCode::CONFLICT,
            ApiErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiErrorCode::AiProviderError => StatusCode::BAD_GATEWAY,
            ApiErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message used when the caller has nothing more specific to say.
    pub fn default_message(&self) -> &'static str {
        match self {
            ApiErrorCode::ValidationError => "Request validation failed",
            ApiErrorCode::EmailAlreadyRegistered => "Email is already registered",
            ApiErrorCode::RateLimited => "Too many requests, try again later",
            ApiErrorCode::InternalError => "An internal error occurred",
            ApiErrorCode::InvalidCredentials => "Invalid email or password",
            ApiErrorCode::Unauthenticated => "Authentication required",
            ApiErrorCode::EmailNotVerified => "Email address is not verified",
            ApiErrorCode::DeckNameNotUnique => "A deck with this name already exists",
            ApiErrorCode::NotFound => "Resource not found",
            ApiErrorCode::AiProviderError => "The AI provider failed to respond",
            ApiErrorCode::GenerationAlreadyCommitted => "Generation has already been committed",
        }
    }

    /// Codes whose real cause must not leak to the client.
    pub fn is_server_side(&self) -> bool {
        matches!(
            self,
            ApiErrorCode::InternalError | ApiErrorCode::AiProviderError
        )
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ApiErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

impl From<&CoreError> for ApiErrorCode {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::NotFound(_) => ApiErrorCode::NotFound,
            CoreError::Validation(_) => ApiErrorCode::ValidationError,
            CoreError::InvalidCredentials => ApiErrorCode::InvalidCredentials,
            CoreError::Unauthenticated => ApiErrorCode::Unauthenticated,
            CoreError::EmailNotVerified => ApiErrorCode::EmailNotVerified,
            CoreError::EmailAlreadyRegistered => ApiErrorCode::EmailAlreadyRegistered,
            CoreError::DeckNameNotUnique => ApiErrorCode::DeckNameNotUnique,
            CoreError::GenerationAlreadyCommitted => ApiErrorCode::GenerationAlreadyCommitted,
            CoreError::RateLimited => ApiErrorCode::RateLimited,
            CoreError::AiProvider(_) => ApiErrorCode::AiProviderError,
            CoreError::InvalidColumn { .. } | CoreError::Internal(_) => ApiErrorCode::InternalError,
        }
    }
}
