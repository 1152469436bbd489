//! Postmark email transport

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use reqwest::{header::ACCEPT, Client};

use crate::domain::communication::mailer::{EmailTransport, ProviderPayload, ProviderResponse};

/// The header carrying the server token
const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";

/// Postmark configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct PostmarkConfig {
    /// The Postmark server token
    #[clap(long, env = "POSTMARK_SERVER_TOKEN")]
    pub server_token: String,

    /// The Postmark API base URL
    #[clap(long, env = "POSTMARK_API_URL", default_value = "https://api.postmarkapp.com")]
    pub api_url: String,
}

/// Sends payloads to the Postmark `/email` endpoint
#[derive(Debug, Clone)]
pub struct PostmarkTransport {
    client: Client,
    api_url: String,
}

impl PostmarkTransport {
    /// Create a new Postmark transport
    pub fn new(config: &PostmarkConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/email", self.api_url)
    }
}

#[async_trait]
impl EmailTransport for PostmarkTransport {
    async fn post_email(&self, token: &str, payload: &ProviderPayload) -> Result<ProviderResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .header(ACCEPT, "application/json")
            .header(SERVER_TOKEN_HEADER, token)
            .json(payload)
            .send()
            .await
            .context("failed to send request to Postmark")?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(ProviderResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn transport(mock_server: &MockServer) -> PostmarkTransport {
        PostmarkTransport::new(&PostmarkConfig {
            server_token: "server-token".to_string(),
            api_url: mock_server.uri(),
        })
    }

    fn payload() -> ProviderPayload {
        ProviderPayload {
            from: "a@x.com".to_string(),
            to: "b@x.com".to_string(),
            subject: "Hi".to_string(),
            text_body: Some("hi".to_string()),
            html_body: None,
            message_stream: "outbound".to_string(),
        }
    }

    #[tokio::test]
    async fn test_post_email() -> TestResult {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/email"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(header("x-postmark-server-token", "server-token"))
            .and(body_json(json!({
                "From": "a@x.com",
                "To": "b@x.com",
                "Subject": "Hi",
                "TextBody": "hi",
                "MessageStream": "outbound",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ErrorCode":0}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = transport(&mock_server)
            .post_email("server-token", &payload())
            .await?;

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"ErrorCode":0}"#);
        assert!(response.is_success());

        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_is_returned_with_body() -> TestResult {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/email"))
            .respond_with(ResponseTemplate::new(422).set_body_string("Invalid signature"))
            .mount(&mock_server)
            .await;

        let response = transport(&mock_server)
            .post_email("server-token", &payload())
            .await?;

        assert_eq!(response.status, 422);
        assert_eq!(response.body, "Invalid signature");
        assert!(!response.is_success());

        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_an_error() {
        let transport = PostmarkTransport::new(&PostmarkConfig {
            server_token: "server-token".to_string(),
            api_url: "http://127.0.0.1:1".to_string(),
        });

        let result = transport.post_email("server-token", &payload()).await;

        assert!(result.is_err());
    }
}
