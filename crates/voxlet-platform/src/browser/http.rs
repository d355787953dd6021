//! Browser HTTP client implementation using the web-sys fetch API.
//!
//! Requests are dispatched with `Window::fetch` on the main thread or
//! `WorkerGlobalScope::fetch` when the bundle runs in a worker. No timeout
//! is applied; a hung request simply never resolves.

use async_trait::async_trait;
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::http::{HttpClient, HttpError, HttpResponse};

/// HTTP client for browser/WASM targets using the fetch API.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHttpClient;

impl BrowserHttpClient {
    pub fn new() -> Self {
        Self
    }
}

fn js_err(value: JsValue) -> HttpError {
    super::js_error(value).to_string().into()
}

#[async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn request(
        &self,
        method: &str,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
        let req_headers = request.headers();
        for (key, value) in headers {
            req_headers.set(key, value).map_err(js_err)?;
        }

        let promise = if let Some(worker) =
            js_sys::global().dyn_ref::<web_sys::WorkerGlobalScope>()
        {
            worker.fetch_with_request(&request)
        } else if let Some(window) = web_sys::window() {
            window.fetch_with_request(&request)
        } else {
            return Err("no global fetch available (not a Window or WorkerGlobalScope)".into());
        };

        let resp_value = JsFuture::from(promise).await.map_err(js_err)?;
        let resp: Response = resp_value.dyn_into().map_err(js_err)?;
        let status = resp.status();

        let body_value = JsFuture::from(resp.array_buffer().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        let body = js_sys::Uint8Array::new(&body_value).to_vec();

        tracing::debug!(%url, status, bytes = body.len(), "fetch response");

        Ok(HttpResponse { status, body })
    }
}
