//! Browser bundle entrypoint for the voxlet embed widget.
//!
//! Built with `--features browser` for `wasm32-unknown-unknown`. On
//! instantiation the bundle installs console logging, reads its baked-in
//! settings and runs the embed bootstrap against the live document. It also
//! exports `fetchConnectionDetails()` for the UI to call on every connect.
//!
//! Without the `browser` feature only the platform-independent pieces
//! (settings capture, console formatting, mount context) are compiled, which
//! is what the native test suite exercises.

pub mod allocator;
pub mod env;
pub mod logging;
pub mod mount;

/// Version information for the bundle.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log level baked in at build time.
pub fn embedded_log_level() -> tracing::Level {
    logging::parse_level(option_env!("VOXLET_LOG"))
}

#[cfg(feature = "browser")]
mod entry {
    use std::sync::Arc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    use voxlet_core::{Bootstrapper, ConnectionDetailsClient};
    use voxlet_platform::HostPage;
    use voxlet_platform::browser::BrowserPage;
    use voxlet_platform::browser::http::BrowserHttpClient;

    use crate::logging::{browser_console, init_logging};
    use crate::mount::JsMountEntrypoint;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        init_logging(browser_console, crate::embedded_log_level());

        let settings = crate::env::embedded_settings();
        let page = match BrowserPage::new() {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(error = %e, "voxlet cannot start without a document");
                return;
            }
        };
        let mount = JsMountEntrypoint::new(settings.mount_global.clone());
        let bootstrapper =
            Bootstrapper::new(page, Arc::new(BrowserHttpClient::new()), mount, settings);

        spawn_local(async move {
            // Failures are already logged; nothing reaches the host page.
            let _ = bootstrapper.run().await;
        });
    }

    /// Fetch fresh connection details. Rejects with the error message.
    #[wasm_bindgen(js_name = fetchConnectionDetails)]
    pub async fn fetch_connection_details() -> Result<JsValue, JsValue> {
        let page = BrowserPage::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let client = ConnectionDetailsClient::new(
            Arc::new(BrowserHttpClient::new()),
            crate::env::embedded_settings(),
        );
        let details = client
            .fetch(page.script_source())
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let json =
            serde_json::to_string(&details).map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&json)
    }
}
