//! JSON body extractor with a structured 400 on any decode failure.
//!
//! `axum::Json` rejects with plain-text 400/413/415/422; this keeps every client error
//! in the `AppError` body shape.

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            // DefaultBodyLimit surfaces as a 413 buffering failure
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(AppError::PayloadTooLarge)
            }
            Err(rejection) => Err(AppError::bad_request(
                "MALFORMED_BODY",
                rejection.body_text(),
            )),
        }
    }
}
