//! # Authentication Module
//!
//! Sign-in happens at an external identity provider. By the time a request
//! reaches this service, the gateway in front of it has verified the user's
//! token and forwarded the provider's user id in the `X-User-Id` header.
//! [`CurrentUser`] reads that header; every `/api` handler takes it as an
//! extractor so that all store calls are scoped to the caller.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use timetable_core::errors::TimetableError;

use super::error_handling::AppError;

/// Header carrying the identity provider's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

impl CurrentUser {
    pub fn id(&self) -> &str {
        &self.0
    }
}

#[async_trait]
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
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                AppError(TimetableError::Authentication(
                    "Sign in required".to_string(),
                ))
            })?;

        Ok(CurrentUser(user_id.to_string()))
    }
}
