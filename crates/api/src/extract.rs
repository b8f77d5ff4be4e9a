//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor for the shop routes.
///
/// A body sent without a JSON content type reads as `{}`, so the route's own
/// validation answers it. Any other rejection becomes
/// [`AppError::MalformedBody`].
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => serde_json::from_str("{}")
                .map(Self)
                .map_err(|e| AppError::MalformedBody(e.to_string())),
            Err(rejection) => Err(rejection.into()),
        }
    }
}
