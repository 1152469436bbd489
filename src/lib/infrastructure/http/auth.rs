//! API key authentication

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use constant_time_eq::constant_time_eq;
use tracing::warn;

use crate::domain::communication::mailer::Mailer;

use super::{errors::ApiError, state::AppState};

/// Extractor that only succeeds for requests carrying `Authorization: Bearer <API key>`.
///
/// Place it before any body extractor so unauthenticated requests are rejected first.
#[derive(Debug)]
pub struct Authenticated;

#[async_trait]
impl<M: Mailer> FromRequestParts<AppState<M>> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<M>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::new_401("Unauthorized"))?;

        if !constant_time_eq(token.as_bytes(), state.config.api_key.as_bytes()) {
            warn!(uri = %parts.uri, "rejected request with an invalid API key");
            return Err(ApiError::new_401("Unauthorized"));
        }

        Ok(Authenticated)
    }
}
