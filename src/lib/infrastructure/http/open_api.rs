//! OpenAPI module

use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    domain::communication::{email_addresses::Recipients, mailer::Message},
    infrastructure::http::{errors::ErrorResponse, handlers::v1::*},
};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Postmark Relay"),
    paths(send_email::handler),
    components(schemas(Message, Recipients, ErrorResponse)),
    modifiers(&ApiKeyAuth)
)]
pub struct ApiDocs;

/// Registers the bearer API key scheme
#[derive(Debug)]
struct ApiKeyAuth;

impl Modify for ApiKeyAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{router, state::tests::test_state};

    #[tokio::test]
    async fn test_openapi_document_lists_send_email() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .get("/api/v1/openapi.json")
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();

        assert!(json["paths"]["/api/v1/emails"]["post"].is_object());
        assert!(json["components"]["securitySchemes"]["api_key"].is_object());

        Ok(())
    }
}
