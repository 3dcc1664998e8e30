use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// API client for the WaterWise backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured API URL
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(&config.api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request and deserialize the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include) // Send session cookie
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// POST a JSON body to an endpoint answering with a success envelope
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await?;

        self.handle_envelope(response).await
    }

    /// POST without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_envelope(Request::post(&self.url(path))).await
    }

    /// DELETE a resource
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_envelope(Request::delete(&self.url(path))).await
    }

    async fn send_envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await?;

        self.handle_envelope(response).await
    }

    /// Handle a plain data response
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();

        if !response.ok() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Http { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Handle a response carrying a `{success, message}` envelope. The server
    /// reports business failures with 4xx bodies, so those are decoded too.
    async fn handle_envelope<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let ok = response.ok();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_envelope(status, ok, &body)
    }
}

pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    ok: bool,
    body: &str,
) -> Result<T, ApiError> {
    match serde_json::from_str(body) {
        Ok(envelope) => Ok(envelope),
        Err(e) if ok => Err(ApiError::Deserialization(e.to_string())),
        Err(_) => Err(ApiError::Http {
            status,
            message: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MutationResponse;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::with_base_url("https://water.example.com/");
        assert_eq!(
            client.url("/api/streak"),
            "https://water.example.com/api/streak"
        );
        assert_eq!(ApiClient::with_base_url("").url("/api/add"), "/api/add");
    }

    #[test]
    fn test_decode_envelope_reads_failure_bodies() {
        let parsed: MutationResponse =
            decode_envelope(400, false, r#"{"success": false, "message": "bad amount"}"#).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("bad amount"));
    }

    #[test]
    fn test_decode_envelope_non_json_error() {
        let result: Result<MutationResponse, _> =
            decode_envelope(502, false, "<html>Bad Gateway</html>");
        assert!(matches!(result, Err(ApiError::Http { status: 502, .. })));
    }

    #[test]
    fn test_decode_envelope_malformed_success() {
        let result: Result<MutationResponse, _> = decode_envelope(200, true, "not json");
        assert!(matches!(result, Err(ApiError::Deserialization(_))));
    }
}
