//! Path extractor that reports unparseable segments (e.g. `/api/Projects/abc`)
//! in the API's `{ "error": ... }` shape.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::AppError;

/// Drop-in replacement for [`axum::extract::Path`].
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Rejected path parameters");
                Err(AppError::BadRequest(format!(
                    "Invalid path parameter: {}",
                    rejection.body_text()
                )))
            }
        }
    }
}
