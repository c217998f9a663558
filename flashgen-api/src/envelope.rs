//! Response envelopes.
//!
//! Successful responses are `{ "data": ..., "meta": ... }`, failures are
//! `{ "error": { "code", "message", "details"? }, "meta": ... }`. `meta`
//! always carries the request id; paginated lists add `nextCursor`.

use flashgen_core::{CoreError, FieldErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error_code::ApiErrorCode;

/// Anything usable as `meta`.
pub trait Meta {
    fn request_id(&self) -> &str;
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeta {
    pub request_id: String,
}

impl ApiMeta {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    pub fn with_next_cursor(self, next_cursor: Option<String>) -> CursorMeta {
        CursorMeta {
            request_id: self.request_id,
            next_cursor,
        }
    }
}

impl Meta for ApiMeta {
    fn request_id(&self) -> &str {
        &self.request_id
    }
}

/// Meta of a cursor-paginated list. `nextCursor` is `null` on the last page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CursorMeta {
    pub request_id: String,
    pub next_cursor: Option<String>,
}

impl CursorMeta {
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

impl Meta for CursorMeta {
    fn request_id(&self) -> &str {
        &self.request_id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiSuccessResponse<T, M = ApiMeta> {
    pub data: T,
    pub meta: M,
}

impl<T, M> ApiSuccessResponse<T, M> {
    pub fn new(data: T, meta: M) -> Self {
        Self { data, meta }
    }
}

pub type Paginated<T> = ApiSuccessResponse<Vec<T>, CursorMeta>;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorDto<D = Value> {
    pub code: ApiErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<D>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorResponse<D = Value, M = ApiMeta> {
    pub error: ApiErrorDto<D>,
    pub meta: M,
}

impl<D, M> ApiErrorResponse<D, M> {
    pub fn new(code: ApiErrorCode, message: impl Into<String>, meta: M) -> Self {
        Self {
            error: ApiErrorDto {
                code,
                message: message.into(),
                details: None,
            },
            meta,
        }
    }

    /// Error carrying the code's default message.
    pub fn from_code(code: ApiErrorCode, meta: M) -> Self {
        Self::new(code, code.default_message(), meta)
    }

    pub fn with_details(mut self, details: D) -> Self {
        self.error.details = Some(details);
        self
    }

    pub fn code(&self) -> ApiErrorCode {
        self.error.code
    }
}

impl<M> ApiErrorResponse<ValidationErrorDetails, M> {
    pub fn validation(field_errors: FieldErrors, meta: M) -> Self {
        Self::from_code(ApiErrorCode::ValidationError, meta).with_details(ValidationErrorDetails {
            field_errors: Some(field_errors),
        })
    }
}

impl<M> ApiErrorResponse<Value, M> {
    /// Translate a domain error. Server-side causes are replaced by the
    /// code's default message; validation errors carry `fieldErrors`.
    pub fn from_core(err: &CoreError, meta: M) -> Self {
        let code = ApiErrorCode::from(err);
        match err {
            CoreError::Validation(field_errors) => {
                let details = ValidationErrorDetails {
                    field_errors: Some(field_errors.clone()),
                };
                Self::from_code(code, meta).with_details(
                    serde_json::to_value(details).unwrap_or(Value::Null),
                )
            }
            CoreError::NotFound(entity) => Self::new(code, format!("{entity} not found"), meta),
            _ => Self::from_code(code, meta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let resp = ApiSuccessResponse::new(vec![1, 2], ApiMeta::new("req-1"));
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "data": [1, 2], "meta": { "requestId": "req-1" } })
        );
    }

    #[test]
    fn cursor_meta_serializes_null_cursor() {
        let meta = ApiMeta::new("r").with_next_cursor(None);
        assert!(!meta.has_more());
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({ "requestId": "r", "nextCursor": null })
        );
    }

    #[test]
    fn generated_request_ids_are_uuids() {
        let meta = ApiMeta::generate();
        assert!(Uuid::parse_str(meta.request_id()).is_ok());
    }

    #[test]
    fn error_without_details_omits_key() {
        let resp: ApiErrorResponse = ApiErrorResponse::from_code(ApiErrorCode::NotFound, ApiMeta::new("r"));
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "error": { "code": "NOT_FOUND", "message": "Resource not found" },
                "meta": { "requestId": "r" }
            })
        );
    }

    #[test]
    fn validation_error_carries_field_errors() {
        let mut fields = FieldErrors::new();
        fields.insert("name".into(), vec!["Name must not be empty".into()]);
        let resp = ApiErrorResponse::validation(fields, ApiMeta::new("r"));
        assert_eq!(
            serde_json::to_value(&resp).unwrap()["error"],
            json!({
                "code": "VALIDATION_ERROR",
                "message": "Request validation failed",
                "details": { "fieldErrors": { "name": ["Name must not be empty"] } }
            })
        );
    }

    #[test]
    fn from_core_hides_internal_causes() {
        let err = CoreError::Internal("connection reset by peer".into());
        let resp = ApiErrorResponse::from_core(&err, ApiMeta::new("r"));
        assert_eq!(resp.code(), ApiErrorCode::InternalError);
        assert_eq!(resp.error.message, "An internal error occurred");
        assert!(resp.error.details.is_none());

        let resp = ApiErrorResponse::from_core(&CoreError::NotFound("deck"), ApiMeta::new("r"));
        assert_eq!(resp.error.message, "deck not found");
    }

    #[test]
    fn from_core_validation_details() {
        let err = CoreError::field("front", "Front must not be empty");
        let resp = ApiErrorResponse::from_core(&err, ApiMeta::new("r"));
        assert_eq!(
            resp.error.details,
            Some(json!({ "fieldErrors": { "front": ["Front must not be empty"] } }))
        );
    }

    #[test]
    fn error_response_round_trips_from_json() {
        let raw = json!({
            "error": { "code": "RATE_LIMITED", "message": "slow down" },
            "meta": { "requestId": "abc" }
        });
        let resp: ApiErrorResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.code(), ApiErrorCode::RateLimited);
        assert_eq!(resp.meta.request_id(), "abc");
    }

    #[test]
    fn typed_details_deserialize_with_and_without_key() {
        let raw = json!({
            "error": {
                "code": "VALIDATION_ERROR",
                "message": "Invalid request",
                "details": { "fieldErrors": { "name": ["Name must not be empty"] } }
            },
            "meta": { "requestId": "r1", "nextCursor": null }
        });
        let resp: ApiErrorResponse<ValidationErrorDetails, CursorMeta> =
            serde_json::from_value(raw).unwrap();
        let errors = resp.error.details.unwrap().field_errors.unwrap();
        assert_eq!(errors["name"], vec!["Name must not be empty"]);

        let raw = json!({
            "error": { "code": "NOT_FOUND", "message": "deck not found" },
            "meta": { "requestId": "r2" }
        });
        let resp: ApiErrorResponse<RetryDetails> = serde_json::from_value(raw).unwrap();
        assert!(resp.error.details.is_none());
    }

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct RetryDetails {
        retry_after_secs: u32,
    }
}
