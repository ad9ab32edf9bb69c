//! Configured HTTP client shared by every endpoint function.
//!
//! One `ApiClient` is built lazily for the whole process. It knows the base
//! URL, applies a fixed timeout and JSON content type, and attaches the bearer
//! token from the encrypted store to every outgoing request. Non-2xx responses
//! are mapped to [`ApiError::Status`] carrying the server's `message` field
//! when the body provides one.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::token;

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fallback when neither the runtime nor the build environment sets a URL.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// The process-wide client instance.
pub fn client() -> &'static ApiClient {
    CLIENT.get_or_init(ApiClient::from_env)
}

/// Resolve the backend base URL: runtime env var first, then the value baked
/// in at build time, then the development default.
pub fn base_url() -> String {
    let url = std::env::var("KICKZONE_API_URL")
        .ok()
        .or_else(|| option_env!("KICKZONE_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    url.trim_end_matches('/').to_string()
}

/// HTTP client wrapper around `reqwest` with KickZone defaults.
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    fn from_env() -> Self {
        Self::new(base_url())
    }

    /// Build a client against an explicit base URL.
    pub fn new(base: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Static configuration; a failed build is fatal.
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .expect("failed to build the HTTP client");

        Self {
            base: base.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Join an endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    fn bearer(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match token::load() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Send a request and map non-2xx responses to [`ApiError::Status`].
    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = self.bearer(builder).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "request failed: {}", body);
        Err(ApiError::Status {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }

    fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|source| ApiError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }

    /// GET an endpoint and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let response = self.execute(self.http.get(self.url(path))).await?;
        let body = response.text().await?;
        Self::decode(path, &body)
    }

    /// POST a JSON body where only the 2xx acknowledgement matters.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        tracing::debug!(path, "POST");
        self.execute(self.http.post(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    /// POST a JSON body and hand back the raw response without status mapping.
    /// Used by sign-in, where 403 and 405 carry application meaning.
    pub async fn post_raw<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(path, "POST (raw)");
        let builder = self.bearer(self.http.post(self.url(path)).json(body));
        Ok(builder.send().await?)
    }

    /// POST a multipart form (post create/edit with an attached image).
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST (multipart)");
        let response = self
            .execute(self.http.post(self.url(path)).multipart(form))
            .await?;
        let body = response.text().await?;
        Self::decode(path, &body)
    }

    /// DELETE an endpoint, acknowledgement only.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(path, "DELETE");
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

/// Pull a human-readable message out of an error body. The backend usually
/// answers `{"message": "..."}`; anything else is passed through verbatim.
pub(crate) fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_doubling_slashes() {
        let client = ApiClient::new("http://api.test/".to_string());
        assert_eq!(client.url("/api/post/all"), "http://api.test/api/post/all");
        assert_eq!(client.url("api/post/all"), "http://api.test/api/post/all");
    }

    #[test]
    fn extract_message_prefers_json_field() {
        assert_eq!(
            extract_message(r#"{"message":"Invalid password"}"#),
            "Invalid password"
        );
        assert_eq!(extract_message("plain failure"), "plain failure");
        assert_eq!(extract_message(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
    }
}
