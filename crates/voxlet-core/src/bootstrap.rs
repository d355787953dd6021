//! Embed bootstrap orchestration.
//!
//! [`Bootstrapper`] wires a [`HostPage`], an [`HttpClient`] and a
//! [`MountEntrypoint`] together and runs the one-shot bootstrap sequence.
//!
//! # Usage
//!
//! ```rust,ignore
//! use voxlet_core::bootstrap::Bootstrapper;
//! use voxlet_platform::browser::{BrowserPage, http::BrowserHttpClient};
//!
//! let page = BrowserPage::new()?;
//! let outcome = Bootstrapper::new(page, Arc::new(BrowserHttpClient::new()), mount, settings)
//!     .run()
//!     .await;
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, error, info};

use voxlet_platform::HostPage;
use voxlet_platform::dom::Dom;
use voxlet_platform::http::HttpClient;
use voxlet_types::settings::DEFAULT_APP_CONFIG_PATH;
use voxlet_types::{EmbedError, EmbedSettings, Result};

use crate::appearance::{apply_appearance_mode, resolve_appearance_mode};
use crate::isolation::{IsolationBoundary, create_isolation_boundary};
use crate::loader::locate_loader_signal;
use crate::mount::{EmbedContext, MountEntrypoint};
use crate::origin::{resolve_endpoint, resolve_origin};
use crate::remote::fetch_app_config;
use crate::styles::BASE_STYLESHEET;
use crate::theme::{apply_theme_preference, resolve_theme_preference};

/// Node handle type of a host page.
pub type NodeOf<P> = <<P as HostPage>::Dom as Dom>::Node;

/// A successful bootstrap.
#[derive(Debug, Clone)]
pub struct Mounted<N> {
    pub boundary: IsolationBoundary<N>,
    /// Context handed to the mount entrypoint.
    pub context: EmbedContext<N>,
    /// URL the remote config was fetched from.
    pub config_url: String,
}

/// Result of [`Bootstrapper::run`].
#[derive(Debug)]
pub enum BootstrapOutcome<N> {
    /// The UI was mounted.
    Mounted(Mounted<N>),
    /// Bootstrap stopped. Whatever was built stays in the page; the mount
    /// point is left empty.
    Halted {
        /// Present unless the boundary itself could not be built.
        boundary: Option<IsolationBoundary<N>>,
        error: EmbedError,
    },
}

impl<N> BootstrapOutcome<N> {
    pub fn is_mounted(&self) -> bool {
        matches!(self, Self::Mounted(_))
    }

    pub fn boundary(&self) -> Option<&IsolationBoundary<N>> {
        match self {
            Self::Mounted(mounted) => Some(&mounted.boundary),
            Self::Halted { boundary, .. } => boundary.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&EmbedError> {
        match self {
            Self::Mounted(_) => None,
            Self::Halted { error, .. } => Some(error),
        }
    }
}

/// One-shot embed bootstrapper.
///
/// The generic parameter `P` is the page implementation
/// ([`MemoryPage`](voxlet_platform::memory::MemoryPage) headlessly,
/// `BrowserPage` in the browser); `M` is the UI mount entrypoint.
pub struct Bootstrapper<P, M> {
    page: P,
    http: Arc<dyn HttpClient>,
    mount: M,
    settings: EmbedSettings,
    stylesheet: Cow<'static, str>,
}

impl<P, M> Bootstrapper<P, M>
where
    P: HostPage,
    M: MountEntrypoint<NodeOf<P>>,
{
    pub fn new(page: P, http: Arc<dyn HttpClient>, mount: M, settings: EmbedSettings) -> Self {
        Self {
            page,
            http,
            mount,
            settings,
            stylesheet: Cow::Borrowed(BASE_STYLESHEET),
        }
    }

    /// Replace the bundled base stylesheet.
    pub fn with_stylesheet(mut self, css: impl Into<Cow<'static, str>>) -> Self {
        self.stylesheet = css.into();
        self
    }

    /// The page being bootstrapped.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Run the bootstrap sequence.
    ///
    /// 1. Build the isolation boundary
    /// 2. Locate the loader script
    /// 3. Resolve and apply the theme
    /// 4. Resolve and apply the appearance
    /// 5. Resolve the backend origin
    /// 6. Fetch the remote app config
    /// 7. Hand off to the mount entrypoint
    ///
    /// Never fails: every error is logged and reported as
    /// [`BootstrapOutcome::Halted`]. There is no retry.
    pub async fn run(&self) -> BootstrapOutcome<NodeOf<P>> {
        info!("voxlet bootstrap starting");

        // 1. Isolation boundary
        let boundary = match create_isolation_boundary(
            self.page.dom(),
            &self.settings,
            &self.stylesheet,
        ) {
            Ok(boundary) => boundary,
            Err(error) => {
                error!(error = %error, "failed to create isolation boundary");
                return BootstrapOutcome::Halted {
                    boundary: None,
                    error,
                };
            }
        };

        match self.configure_and_mount(&boundary).await {
            Ok((context, config_url)) => {
                info!(origin = %context.origin, scheme = %context.scheme, "voxlet widget mounted");
                BootstrapOutcome::Mounted(Mounted {
                    boundary,
                    context,
                    config_url,
                })
            }
            Err(error) => {
                error!(error = %error, "voxlet bootstrap halted, widget not mounted");
                BootstrapOutcome::Halted {
                    boundary: Some(boundary),
                    error,
                }
            }
        }
    }

    async fn configure_and_mount(
        &self,
        boundary: &IsolationBoundary<NodeOf<P>>,
    ) -> Result<(EmbedContext<NodeOf<P>>, String)> {
        let dom = self.page.dom();
        let scripts = self.page.script_source();

        // 2. Loader script
        let loader = locate_loader_signal(scripts, &self.settings.bundle_fragment);
        if loader.is_none() {
            debug!("no loader script found, using defaults");
        }

        // 3. Theme
        let theme = resolve_theme_preference(loader.as_ref());
        let applied = apply_theme_preference(
            dom,
            self.page.color_scheme(),
            theme.unwrap_or_default(),
            &boundary.theme_root,
        )?;

        // 4. Appearance
        let appearance = resolve_appearance_mode(loader.as_ref());
        apply_appearance_mode(dom, appearance, theme, &boundary.isolated_root)?;

        // 5. Origin
        let origin = resolve_origin(
            loader.as_ref(),
            scripts.page_origin().as_deref(),
            &self.settings.fallback_origin,
        );

        // 6. Remote config
        let config_url = resolve_endpoint(
            &self.settings.app_config_path,
            &origin,
            &self.settings.fallback_origin,
            DEFAULT_APP_CONFIG_PATH,
        );
        debug!(url = %config_url, "fetching remote app config");
        let config = fetch_app_config(self.http.as_ref(), &config_url).await?;

        // 7. Mount
        let context = EmbedContext {
            isolated_root: boundary.isolated_root.clone(),
            portal: boundary.portal.clone(),
            theme,
            scheme: applied.scheme,
            appearance,
            origin,
        };
        self.mount.mount(&boundary.mount_point, config, &context)?;

        Ok((context, config_url))
    }
}
