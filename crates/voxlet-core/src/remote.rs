//! Reads from the widget backend.

use serde::de::DeserializeOwned;
use tracing::debug;
use voxlet_platform::http::{HttpClient, json_headers};
use voxlet_types::{EmbedError, RemoteAppConfig, Result};

/// GET `url` and decode its JSON body.
///
/// Transport failures, non-2xx statuses and undecodable bodies map to
/// [`EmbedError::Fetch`], [`EmbedError::Status`] and [`EmbedError::Json`].
pub async fn get_json<T: DeserializeOwned>(http: &dyn HttpClient, url: &str) -> Result<T> {
    let response = http
        .get(url, &json_headers())
        .await
        .map_err(|e| EmbedError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if !response.is_success() {
        return Err(EmbedError::Status {
            url: url.to_string(),
            status: response.status,
        });
    }

    debug!(%url, status = response.status, bytes = response.body.len(), "backend responded");
    Ok(response.json()?)
}

/// Fetch the remote app configuration. The document is passed through
/// without interpretation.
pub async fn fetch_app_config(http: &dyn HttpClient, url: &str) -> Result<RemoteAppConfig> {
    get_json(http, url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;
    use voxlet_platform::http::{HttpError, HttpResponse};

    struct Canned {
        status: u16,
        body: &'static str,
        seen: Mutex<Vec<(String, String, Option<String>)>>,
    }

    impl Canned {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpClient for Canned {
        async fn request(
            &self,
            method: &str,
            url: &str,
            headers: &HashMap<String, String>,
        ) -> std::result::Result<HttpResponse, HttpError> {
            self.seen.lock().unwrap().push((
                method.to_string(),
                url.to_string(),
                headers.get("Accept").cloned(),
            ));
            Ok(HttpResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    struct Offline;

    #[async_trait]
    impl HttpClient for Offline {
        async fn request(
            &self,
            _method: &str,
            _url: &str,
            _headers: &HashMap<String, String>,
        ) -> std::result::Result<HttpResponse, HttpError> {
            Err("connection refused".into())
        }
    }

    const URL: &str = "https://cdn.example.com/api/app-config";

    #[tokio::test]
    async fn passes_document_through() {
        let http = Canned::new(200, r#"{"pageTitle":"Demo","features":{"video":false}}"#);
        let config = fetch_app_config(&http, URL).await.unwrap();
        assert_eq!(
            config.as_value(),
            &json!({"pageTitle": "Demo", "features": {"video": false}})
        );
        assert_eq!(
            config.as_value().to_string(),
            r#"{"pageTitle":"Demo","features":{"video":false}}"#
        );

        let seen = http.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "GET");
        assert_eq!(seen[0].1, URL);
        assert_eq!(seen[0].2.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn transport_failure_is_fetch_error() {
        let err = fetch_app_config(&Offline, URL).await.unwrap_err();
        match err {
            EmbedError::Fetch { url, reason } => {
                assert_eq!(url, URL);
                assert!(reason.contains("connection refused"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_success_status_is_rejected() {
        let http = Canned::new(503, r#"{"error":"down"}"#);
        let err = fetch_app_config(&http, URL).await.unwrap_err();
        assert!(matches!(err, EmbedError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn non_json_body_is_rejected() {
        let http = Canned::new(200, "<html>login</html>");
        let err = fetch_app_config(&http, URL).await.unwrap_err();
        assert!(matches!(err, EmbedError::Json(_)));
    }
}
