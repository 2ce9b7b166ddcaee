//! Current-user extraction.
//!
//! Identity verification is owned by an external provider; by the time a
//! request reaches this backend it carries the authenticated user id in the
//! `x-user-id` header. This extractor surfaces that id and rejects requests
//! without one.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::AppError;
use crate::api::UserId;

/// Header carrying the opaque authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match user_id {
            Some(id) => Ok(CurrentUser(UserId::new(id))),
            None => Err(AppError::Unauthorized(
                "Unauthorized: missing x-user-id header.".to_string(),
            )),
        }
    }
}
