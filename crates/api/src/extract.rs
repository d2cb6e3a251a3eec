//! Request extractors shared by the JSON handlers.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use bbs_core::validation::ValidateRequest;

use crate::error::AppError;

/// JSON extractor that validates the payload after deserializing.
///
/// A body that fails to deserialize is rejected with `400-2` before the
/// handler runs; a well-formed body with invalid fields is rejected with
/// `400-1` and a report listing every violation.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateRequest,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "JSON body rejected");
            AppError::Service {
                code: "400-2",
                msg: "Malformed request body.".to_string(),
            }
        })?;

        value.validate_request()?;

        Ok(Self(value))
    }
}
