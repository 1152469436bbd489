use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::communication::mailer::Mailer,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod send_email;

pub fn router<M: Mailer>() -> Router<AppState<M>> {
    Router::new()
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/emails", post(send_email::handler::<M>))
}
