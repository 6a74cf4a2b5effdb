//! HTTP client for the generation agent
//!
//! Posts the prompt as JSON and decodes the agent's reply. Business
//! failures reported by the agent come back as `Ok` with `success: false`;
//! only transport and protocol problems are `Err`.

use super::traits::AgentClientTrait;
use super::types::{AgentResponse, GenerateRequest};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors raised while talking to the agent
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("agent request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("agent returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("agent response invalid: {0}")]
    Decode(String),
}

/// Client for the agent HTTP endpoint
pub struct HttpAgentClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpAgentClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AgentError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AgentError::ClientBuild)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AgentClientTrait for HttpAgentClient {
    async fn generate(&self, prompt: &str, agent_id: &str) -> Result<AgentResponse, AgentError> {
        let body = GenerateRequest {
            message: prompt,
            agent_id,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "agent replied");

        decode_reply(status.as_u16(), status.is_success(), &text)
    }
}

/// Turn a raw HTTP reply into an agent response.
///
/// A non-2xx reply that still carries a well-formed failure body is passed
/// through so its message reaches the user.
fn decode_reply(status: u16, is_success: bool, text: &str) -> Result<AgentResponse, AgentError> {
    let parsed = serde_json::from_str::<AgentResponse>(text);
    if is_success {
        return parsed.map_err(|e| AgentError::Decode(e.to_string()));
    }
    match parsed {
        Ok(reply) if !reply.success => Ok(reply),
        _ => Err(AgentError::Status {
            status,
            body: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GenerationOutcome, DEFAULT_FAILURE_MESSAGE};

    #[test]
    fn test_new_keeps_endpoint() {
        let client = HttpAgentClient::new(
            "http://localhost:3000/api/agent",
            None,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/api/agent");
    }

    #[test]
    fn test_decode_success_body() {
        let reply = decode_reply(200, true, r#"{"success": true}"#).unwrap();
        assert!(reply.success);
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_reply(200, true, "<html>").unwrap_err();
        assert!(matches!(err, AgentError::Decode(_)));
    }

    #[test]
    fn test_error_status_with_failure_body_passes_through() {
        let reply =
            decode_reply(500, false, r#"{"success": false, "error": "agent offline"}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("agent offline"));
    }

    #[test]
    fn test_odd_shaped_success_still_yields_pdf_link() {
        let body = r#"{"success":true,"response":{"message":{"text":"done"}},"module_outputs":{"artifact_files":[{"file_url":"https://x/doc.pdf"}]}}"#;
        let reply = decode_reply(200, true, body);
        assert!(reply.is_ok());
        match GenerationOutcome::from_reply(&reply) {
            GenerationOutcome::Success { pdf_url, .. } => {
                assert_eq!(pdf_url.as_deref(), Some("https://x/doc.pdf"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_object_error_falls_back_to_default_failure() {
        let reply = decode_reply(429, false, r#"{"success":false,"error":{"code":429}}"#);
        assert_eq!(
            GenerationOutcome::from_reply(&reply),
            GenerationOutcome::Failure {
                message: DEFAULT_FAILURE_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_error_status_with_other_body_is_status_error() {
        let err = decode_reply(502, false, "Bad Gateway").unwrap_err();
        match err {
            AgentError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_error_display() {
        let err = AgentError::Status {
            status: 404,
            body: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "agent returned 404: missing");
    }

    #[test]
    fn test_unreachable_endpoint_is_http_error() {
        // Port 9 (discard) is closed on loopback
        let client =
            HttpAgentClient::new("http://127.0.0.1:9/api/agent", None, Duration::from_secs(5))
                .unwrap();
        let err = tokio_test::block_on(client.generate("hello", "agent")).unwrap_err();
        assert!(matches!(err, AgentError::Http(_)));
    }
}
