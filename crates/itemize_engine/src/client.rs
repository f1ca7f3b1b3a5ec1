use engine_logging::{engine_debug, engine_warn};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::{ErrorBody, FailureKind, ParseError, ParseResponse, ParsedItem, RequestId};

/// The fixed local endpoint the application talks to.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/parse";

/// Shown when the endpoint rejects a request without a usable `detail`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ParseRequest<'a> {
    content: &'a str,
}

#[async_trait::async_trait]
pub trait ParseClient: Send + Sync {
    async fn parse(
        &self,
        request_id: RequestId,
        content: &str,
    ) -> Result<Vec<ParsedItem>, ParseError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestParseClient {
    settings: ClientSettings,
}

impl ReqwestParseClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ParseError> {
        // No connect or request timeout: an unresponsive endpoint keeps the
        // request in flight indefinitely.
        reqwest::Client::builder()
            .build()
            .map_err(|err| ParseError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ParseClient for ReqwestParseClient {
    async fn parse(
        &self,
        request_id: RequestId,
        content: &str,
    ) -> Result<Vec<ParsedItem>, ParseError> {
        engine_debug!(
            "parse request {} to {} ({} bytes)",
            request_id,
            self.settings.endpoint,
            content.len()
        );

        let payload = serde_json::to_string(&ParseRequest { content })
            .map_err(|err| ParseError::new(FailureKind::MalformedBody, err.to_string()))?;

        let client = self.build_client()?;
        let response = client
            .post(&self.settings.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            let body: ErrorBody = serde_json::from_str(&text)
                .map_err(|err| ParseError::new(FailureKind::MalformedBody, err.to_string()))?;
            let message = body
                .detail
                .filter(|detail| !detail.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            engine_warn!(
                "parse request {} rejected with {}: {}",
                request_id,
                status,
                message
            );
            return Err(ParseError::new(
                FailureKind::Rejected {
                    status: status.as_u16(),
                },
                message,
            ));
        }

        let body: ParseResponse = serde_json::from_str(&text)
            .map_err(|err| ParseError::new(FailureKind::MalformedBody, err.to_string()))?;
        let items = body.extracted_items.unwrap_or_default();
        engine_debug!("parse request {} returned {} items", request_id, items.len());
        Ok(items)
    }
}

fn map_transport_error(err: reqwest::Error) -> ParseError {
    ParseError::new(FailureKind::Network, err.to_string())
}
