use axum::response::{IntoResponse, Response};

use bbs_core::error::CoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform envelope with a
/// failure `resultCode`, a client-facing message, and `data: null`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bbs_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure that carries its own fixed result code (e.g. `401-1`).
    #[error("{msg}")]
    Service { code: &'static str, msg: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map the error to its result code and client-facing message.
    ///
    /// The numeric prefix of the result code doubles as the HTTP status,
    /// so `404-1` renders as a 404 response.
    pub fn result(&self) -> (&'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    ("404-1", format!("{entity} with id {id} not found"))
                }
                CoreError::Validation(msg) => ("400-1", msg.clone()),
                CoreError::Conflict(msg) => ("409-1", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    ("500-1", "An internal error occurred".to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Errors that carry their own result code ---
            AppError::Service { code, msg } => (*code, msg.clone()),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ("500-1", "An internal error occurred".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, msg) = self.result();
        ApiResponse::<()>::of(code, msg).into_response()
    }
}

/// Classify a sqlx error into a result code and message.
///
/// - `RowNotFound` maps to `404-1`.
/// - Unique constraint violations map to `409-1`.
/// - Everything else maps to `500-1` with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (&'static str, String) {
    match err {
        sqlx::Error::RowNotFound => ("404-1", "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return (
                    "409-1",
                    "Duplicate value violates a unique constraint".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            ("500-1", "An internal error occurred".to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            ("500-1", "An internal error occurred".to_string())
        }
    }
}
