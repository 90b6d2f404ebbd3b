//! JSON extractor that keeps body failures inside the legacy envelope.
//!
//! Axum's `Json` rejects malformed bodies with its own plain-text 422
//! before a handler runs; the existing browser client expects every
//! failure as `500 {error, message, success: false}`, so the rejection
//! is converted into an [`AppError`] here.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::http::error::AppError;

/// `Json<T>` with rejections mapped to the uniform error envelope.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Internal(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}
