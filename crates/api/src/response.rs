//! Shared response envelope for API handlers.
//!
//! Write and delete operations answer with `{ "resultCode": ..., "msg": ...,
//! "data": ... }` where the numeric prefix of the result code doubles as the
//! HTTP status. Use [`ApiResponse`] instead of ad-hoc JSON literals to get
//! compile-time type safety and consistent serialization.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard `{ "resultCode", "msg", "data" }` response envelope.
///
/// `data` serializes as `null` when the operation carries no payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub result_code: String,
    pub msg: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Envelope with a payload.
    pub fn new(result_code: impl Into<String>, msg: impl Into<String>, data: T) -> Self {
        Self {
            result_code: result_code.into(),
            msg: msg.into(),
            data: Some(data),
        }
    }

    /// HTTP status derived from the result code prefix.
    pub fn status(&self) -> StatusCode {
        status_from_result_code(&self.result_code)
    }
}

impl ApiResponse<()> {
    /// Envelope with no payload (`data: null`).
    pub fn of(result_code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            result_code: result_code.into(),
            msg: msg.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self)).into_response()
    }
}

/// Parse the numeric prefix of a result code into an HTTP status.
///
/// `"201-1"` becomes 201 Created; an unparseable prefix falls back to 200.
pub fn status_from_result_code(code: &str) -> StatusCode {
    code.split('-')
        .next()
        .and_then(|prefix| prefix.parse::<u16>().ok())
        .and_then(|status| StatusCode::from_u16(status).ok())
        .unwrap_or(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_result_code_prefix() {
        assert_eq!(status_from_result_code("200-1"), StatusCode::OK);
        assert_eq!(status_from_result_code("201-1"), StatusCode::CREATED);
        assert_eq!(status_from_result_code("404-1"), StatusCode::NOT_FOUND);
        assert_eq!(status_from_result_code("409-1"), StatusCode::CONFLICT);
    }

    #[test]
    fn unparseable_prefix_falls_back_to_ok() {
        assert_eq!(status_from_result_code("oops"), StatusCode::OK);
        assert_eq!(status_from_result_code(""), StatusCode::OK);
    }

    #[test]
    fn envelope_serializes_null_data_when_absent() {
        let envelope = ApiResponse::<()>::of("200-1", "done");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["resultCode"], "200-1");
        assert_eq!(json["msg"], "done");
        assert!(json["data"].is_null());
    }
}
