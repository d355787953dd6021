//! HTTP client abstraction and native implementation.
//!
//! The widget only ever reads from its backend (app config, connection
//! details), so the trait is GET-shaped. The native implementation is backed
//! by [`reqwest`] and used by the CLI; the browser implementation lives in
//! `browser::http` and uses `fetch`.

use async_trait::async_trait;
use std::collections::HashMap;

/// Boxed transport error, shared by every client implementation.
pub type HttpError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP response from a request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status: u16,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Parse body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Check if status is success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Platform-agnostic HTTP client.
///
/// Implementors only need [`HttpClient::request`]; [`HttpClient::get`] is
/// provided. Browser futures are not `Send`, hence the feature-dependent
/// `async_trait` flavour.
#[cfg_attr(not(feature = "browser"), async_trait)]
#[cfg_attr(feature = "browser", async_trait(?Send))]
pub trait HttpClient: Send + Sync {
    /// Send a body-less request with the given method, URL and headers.
    async fn request(
        &self,
        method: &str,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError>;

    /// Send an HTTP GET request.
    async fn get(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        self.request("GET", url, headers).await
    }
}

/// Headers sent with every JSON read.
pub fn json_headers() -> HashMap<String, String> {
    HashMap::from([("Accept".to_string(), "application/json".to_string())])
}

/// Native HTTP client using [`reqwest`].
#[cfg(feature = "native")]
pub struct NativeHttpClient {
    client: reqwest::Client,
}

#[cfg(feature = "native")]
impl NativeHttpClient {
    /// Create a native client with a 30-second request timeout.
    ///
    /// The browser build has no equivalent timeout; this one exists so a
    /// hung backend cannot wedge the CLI.
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(concat!("voxlet/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[cfg(feature = "native")]
#[async_trait]
impl HttpClient for NativeHttpClient {
    async fn request(
        &self,
        method: &str,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        let reqwest_method = method.parse::<reqwest::Method>()?;
        let mut builder = self.client.request(reqwest_method, url);

        for (key, value) in headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let resp_body = response.bytes().await?.to_vec();

        tracing::debug!(%url, status, bytes = resp_body.len(), "http response");

        Ok(HttpResponse {
            status,
            body: resp_body,
        })
    }
}
