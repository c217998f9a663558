//! axum glue for the envelopes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::envelope::{ApiErrorResponse, ApiSuccessResponse, Meta};

impl<T, M> IntoResponse for ApiSuccessResponse<T, M>
where
    T: Serialize,
    M: Serialize,
{
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// `201 Created` with the success envelope.
#[derive(Debug)]
pub struct Created<T, M>(pub ApiSuccessResponse<T, M>);

impl<T, M> IntoResponse for Created<T, M>
where
    T: Serialize,
    M: Serialize,
{
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

impl<D, M> IntoResponse for ApiErrorResponse<D, M>
where
    D: Serialize,
    M: Serialize + Meta,
{
    fn into_response(self) -> Response {
        let code = self.error.code;
        let request_id = self.meta.request_id();
        if code.is_server_side() {
            tracing::error!(%code, request_id, message = %self.error.message, "request failed");
        } else {
            tracing::debug!(%code, request_id, "request rejected");
        }
        (code.status(), Json(self)).into_response()
    }
}
