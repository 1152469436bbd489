//! Send email handler

use axum::{body::Bytes, extract::State, http::StatusCode};
use serde_json::Value;

use crate::{
    domain::communication::mailer::{Mailer, Message},
    infrastructure::http::{
        auth::Authenticated,
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Relay an email through the provider
#[utoipa::path(
    post,
    operation_id = "send_email",
    tag = "Email",
    path = "/api/v1/emails",
    request_body = Message,
    security(("api_key" = [])),
    responses(
        (status = StatusCode::NO_CONTENT, description = "Email accepted by the provider"),
        (status = StatusCode::BAD_REQUEST, description = "Bad request", body = ErrorResponse, example = json!({ "error": "Missing required properties" })),
        (status = StatusCode::UNAUTHORIZED, description = "Missing or invalid API key", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "The provider rejected the email or could not be reached", body = ErrorResponse, example = json!({ "error": "Unknown" })),
    )
)]
pub async fn handler<M: Mailer>(
    State(state): State<AppState<M>>,
    _: Authenticated,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let message = Message::try_from(parse_body(&body)?)?;

    state.mailer.send_email(&message).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// An empty body is an absent message, anything else must be valid JSON
fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body).map_err(|err| {
        ApiError::new_400(&format!(
            "Failed to parse the request body as JSON: {err}"
        ))
    })
}
