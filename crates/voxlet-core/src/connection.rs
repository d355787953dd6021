//! Connection details for the voice session.
//!
//! Unlike the app config, connection details expire, so the UI asks for
//! them again on every (re)connect. Each call re-locates the loader script:
//! the page may have rewritten it since bootstrap.

use std::sync::Arc;

use tracing::{debug, error};
use voxlet_platform::http::HttpClient;
use voxlet_platform::scripts::ScriptSource;
use voxlet_types::settings::DEFAULT_CONNECTION_DETAILS_PATH;
use voxlet_types::{ConnectionDetails, EmbedSettings, Result};

use crate::loader::locate_loader_signal;
use crate::origin::{resolve_endpoint, resolve_origin};
use crate::remote::get_json;

/// Fetches [`ConnectionDetails`] from the configured endpoint.
#[derive(Clone)]
pub struct ConnectionDetailsClient {
    http: Arc<dyn HttpClient>,
    settings: EmbedSettings,
}

impl ConnectionDetailsClient {
    pub fn new(http: Arc<dyn HttpClient>, settings: EmbedSettings) -> Self {
        Self { http, settings }
    }

    /// Absolute URL the next [`fetch`](Self::fetch) will hit.
    pub fn endpoint(&self, scripts: &dyn ScriptSource) -> String {
        let loader = locate_loader_signal(scripts, &self.settings.bundle_fragment);
        let origin = resolve_origin(
            loader.as_ref(),
            scripts.page_origin().as_deref(),
            &self.settings.fallback_origin,
        );
        resolve_endpoint(
            &self.settings.connection_details_endpoint,
            &origin,
            &self.settings.fallback_origin,
            DEFAULT_CONNECTION_DETAILS_PATH,
        )
    }

    /// Fetch a fresh set of connection details. Errors are logged and
    /// returned; nothing is cached.
    pub async fn fetch(&self, scripts: &dyn ScriptSource) -> Result<ConnectionDetails> {
        let url = self.endpoint(scripts);
        debug!(%url, "fetching connection details");
        get_json(self.http.as_ref(), &url).await.inspect_err(|e| {
            error!(%url, error = %e, "failed to fetch connection details");
        })
    }
}
