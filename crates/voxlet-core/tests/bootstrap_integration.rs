//! End-to-end bootstrap tests against a headless page.
//!
//! Each test builds a [`MemoryPage`], a canned backend and a recording mount
//! entrypoint, runs the whole bootstrap and inspects the resulting DOM.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use voxlet_core::bootstrap::{BootstrapOutcome, Bootstrapper};
use voxlet_core::mount::EmbedContext;
use voxlet_platform::dom::Dom;
use voxlet_platform::http::{HttpClient, HttpError, HttpResponse};
use voxlet_platform::memory::{MemoryPage, NodeId};
use voxlet_types::{
    AppearanceMode, ColorScheme, EmbedError, EmbedSettings, LoaderSignal, RemoteAppConfig, Result,
    ThemePreference,
};

const LOADER_SRC: &str = "https://cdn.example.com/embed-popup.js";

/// Backend stand-in: fixed reply, records every requested URL.
struct Backend {
    reply: std::result::Result<(u16, &'static str), &'static str>,
    urls: Mutex<Vec<String>>,
}

impl Backend {
    fn ok(body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok((200, body)),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            reply: Err("network unreachable"),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for Backend {
    async fn request(
        &self,
        _method: &str,
        url: &str,
        _headers: &HashMap<String, String>,
    ) -> std::result::Result<HttpResponse, HttpError> {
        self.urls.lock().unwrap().push(url.to_string());
        let (status, body) = self.reply.map_err(HttpError::from)?;
        Ok(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        })
    }
}

type Mounts = Rc<RefCell<Vec<(NodeId, Value, EmbedContext<NodeId>)>>>;

/// Mount entrypoint that renders one `<button>` and records the call.
fn recording_mount(
    page: &MemoryPage,
) -> (
    Mounts,
    impl Fn(&NodeId, RemoteAppConfig, &EmbedContext<NodeId>) -> Result<()>,
) {
    let mounts: Mounts = Rc::default();
    let seen = mounts.clone();
    let dom = page.clone();
    let mount = move |point: &NodeId, config: RemoteAppConfig, ctx: &EmbedContext<NodeId>| -> Result<()> {
        let button = dom.create_element("button")?;
        dom.add_class(&button, "voxlet-trigger")?;
        dom.append_child(point, &button)?;
        seen.borrow_mut().push((*point, config.into_value(), ctx.clone()));
        Ok(())
    };
    (mounts, mount)
}

async fn bootstrap(page: &MemoryPage, backend: Arc<Backend>) -> (BootstrapOutcome<NodeId>, Mounts) {
    let (mounts, mount) = recording_mount(page);
    let outcome = Bootstrapper::new(page.clone(), backend, mount, EmbedSettings::default())
        .run()
        .await;
    (outcome, mounts)
}

fn classes(page: &MemoryPage, node: NodeId) -> Vec<String> {
    page.node(node).classes
}

fn style_kinds(page: &MemoryPage, root: NodeId) -> Vec<String> {
    page.node(root)
        .children
        .iter()
        .filter_map(|id| {
            let node = page.node(*id);
            (node.tag == "style").then(|| node.attributes["data-voxlet"].clone())
        })
        .collect()
}

#[tokio::test]
async fn explicit_light_overrides_dark_system() {
    let page = MemoryPage::new()
        .with_prefers_dark(Some(true))
        .with_current_script(LoaderSignal::with_src(format!("{LOADER_SRC}?theme=light")));
    let backend = Backend::ok(r#"{"pageTitle":"Demo"}"#);

    let (outcome, mounts) = bootstrap(&page, backend.clone()).await;
    assert!(outcome.is_mounted());
    let boundary = outcome.boundary().unwrap();

    assert_eq!(classes(&page, boundary.theme_root), vec!["light"]);
    assert_eq!(page.listener_count(), 0);
    page.set_prefers_dark(false);
    page.set_prefers_dark(true);
    assert_eq!(classes(&page, boundary.theme_root), vec!["light"]);

    assert_eq!(backend.urls(), vec!["https://cdn.example.com/api/app-config"]);
    let mounts = mounts.borrow();
    assert_eq!(mounts.len(), 1);
    assert_eq!(mounts[0].0, boundary.mount_point);
    assert_eq!(mounts[0].1, json!({"pageTitle": "Demo"}));
    assert_eq!(mounts[0].2.theme, Some(ThemePreference::Light));
    assert_eq!(mounts[0].2.scheme, ColorScheme::Light);
}

#[tokio::test]
async fn pure_light_gets_appearance_block() {
    let page = MemoryPage::new().with_script(
        LoaderSignal::with_src(LOADER_SRC)
            .with_data("theme", "light")
            .with_data("appearance", "pure"),
    );
    let (outcome, mounts) = bootstrap(&page, Backend::ok("{}")).await;
    let boundary = outcome.boundary().unwrap();

    assert_eq!(
        style_kinds(&page, boundary.isolated_root),
        ["base", "palette", "appearance"]
    );
    assert_eq!(mounts.borrow()[0].2.appearance, AppearanceMode::Pure);
}

#[tokio::test]
async fn pure_dark_gets_no_appearance_block() {
    let page = MemoryPage::new().with_script(
        LoaderSignal::with_src(LOADER_SRC)
            .with_data("theme", "dark")
            .with_data("appearance", "pure"),
    );
    let (outcome, _) = bootstrap(&page, Backend::ok("{}")).await;
    let boundary = outcome.boundary().unwrap();

    assert_eq!(style_kinds(&page, boundary.isolated_root), ["base", "palette"]);
    assert_eq!(classes(&page, boundary.theme_root), vec!["dark"]);
}

#[tokio::test]
async fn pure_under_dark_system_keeps_appearance_block() {
    let page = MemoryPage::new()
        .with_prefers_dark(Some(true))
        .with_script(LoaderSignal::with_src(LOADER_SRC).with_data("appearance", "pure"));
    let (outcome, _) = bootstrap(&page, Backend::ok("{}")).await;
    let boundary = outcome.boundary().unwrap();

    // The block only matches `.light`; it stays in place for a later flip.
    assert_eq!(classes(&page, boundary.theme_root), vec!["dark"]);
    assert_eq!(
        style_kinds(&page, boundary.isolated_root),
        ["base", "palette", "appearance"]
    );

    page.set_prefers_dark(false);
    assert_eq!(classes(&page, boundary.theme_root), vec!["light"]);
}

#[tokio::test]
async fn fetch_failure_leaves_mount_point_empty() {
    let page = MemoryPage::new()
        .with_prefers_dark(Some(true))
        .with_current_script(LoaderSignal::with_src(LOADER_SRC));
    let (outcome, mounts) = bootstrap(&page, Backend::unreachable()).await;

    assert!(!outcome.is_mounted());
    assert!(matches!(outcome.error(), Some(EmbedError::Fetch { .. })));
    let boundary = outcome.boundary().unwrap();

    assert!(mounts.borrow().is_empty());
    assert!(page.node(boundary.mount_point).children.is_empty());
    assert_eq!(page.element_by_id("voxlet-embed-wrapper"), Some(boundary.host));
    assert_eq!(classes(&page, boundary.theme_root), vec!["dark"]);
}

#[tokio::test]
async fn non_json_config_halts() {
    let page = MemoryPage::new();
    let (outcome, mounts) = bootstrap(&page, Backend::ok("<!doctype html>")).await;
    assert!(matches!(outcome.error(), Some(EmbedError::Json(_))));
    assert!(mounts.borrow().is_empty());
}

#[tokio::test]
async fn no_loader_and_opaque_page_use_fallback_origin() {
    let page = MemoryPage::new().with_page_origin(Some("null"));
    let backend = Backend::ok("{}");
    let (outcome, mounts) = bootstrap(&page, backend.clone()).await;

    assert!(outcome.is_mounted());
    assert_eq!(backend.urls(), vec!["https://widget.voxlet.dev/api/app-config"]);
    assert_eq!(mounts.borrow()[0].2.origin, "https://widget.voxlet.dev");
}

#[tokio::test]
async fn unspecified_theme_tracks_system() {
    let page = MemoryPage::new().with_script(LoaderSignal::with_src(LOADER_SRC));
    let (outcome, mounts) = bootstrap(&page, Backend::ok("{}")).await;
    let boundary = outcome.boundary().unwrap();

    assert_eq!(mounts.borrow()[0].2.theme, None);
    assert_eq!(classes(&page, boundary.theme_root), vec!["light"]);
    assert_eq!(page.listener_count(), 1);

    page.set_prefers_dark(true);
    assert_eq!(classes(&page, boundary.theme_root), vec!["dark"]);
    assert_eq!(page.node(boundary.theme_root).style["color-scheme"], "dark");
}

#[tokio::test]
async fn mount_receives_boundary_context() {
    let page = MemoryPage::new().with_current_script(LoaderSignal::with_src(LOADER_SRC));
    let (outcome, mounts) = bootstrap(&page, Backend::ok("{}")).await;

    let BootstrapOutcome::Mounted(mounted) = outcome else {
        panic!("expected a mounted widget");
    };
    assert_eq!(mounted.config_url, "https://cdn.example.com/api/app-config");
    assert_eq!(mounted.context.portal, mounted.boundary.portal);
    assert_eq!(
        page.registry(),
        Some((mounted.boundary.isolated_root, mounted.boundary.portal))
    );

    let trigger = page.node(mounted.boundary.mount_point).children[0];
    assert_eq!(page.node(trigger).classes, vec!["voxlet-trigger"]);
    assert_eq!(mounts.borrow()[0].2.isolated_root, mounted.boundary.isolated_root);
}

#[tokio::test]
async fn missing_body_halts_without_fetching() {
    let page = MemoryPage::new().without_body();
    let backend = Backend::ok("{}");
    let (outcome, _) = bootstrap(&page, backend.clone()).await;

    assert!(outcome.boundary().is_none());
    assert!(matches!(outcome.error(), Some(EmbedError::DomUnavailable)));
    assert!(backend.urls().is_empty());
}

#[tokio::test]
async fn mount_errors_halt() {
    let page = MemoryPage::new();
    let failing = |_: &NodeId, _: RemoteAppConfig, _: &EmbedContext<NodeId>| -> Result<()> {
        Err(EmbedError::Mount("VoxletEmbed is not a function".into()))
    };
    let outcome = Bootstrapper::new(page.clone(), Backend::ok("{}"), failing, EmbedSettings::default())
        .run()
        .await;
    assert!(matches!(outcome.error(), Some(EmbedError::Mount(_))));
    assert!(outcome.boundary().is_some());
}

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn fetch_failure_is_logged_as_error() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let page = MemoryPage::new().with_current_script(LoaderSignal::with_src(LOADER_SRC));
    let (outcome, _) = bootstrap(&page, Backend::unreachable()).await;
    assert!(!outcome.is_mounted());

    let errors: Vec<String> = log
        .lines()
        .into_iter()
        .filter(|line| line.contains("ERROR"))
        .collect();
    assert_eq!(errors.len(), 1, "log: {:?}", log.lines());
    assert!(errors[0].contains("halted"), "{}", errors[0]);
    assert!(errors[0].contains("network unreachable"), "{}", errors[0]);
}
