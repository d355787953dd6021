//! Hand-off to the external UI.
//!
//! The bootstrapper never renders anything itself. Once the remote config is
//! in, it calls a [`MountEntrypoint`] with the empty mount point, the config
//! document and an [`EmbedContext`] describing the boundary it built.

use voxlet_types::{AppearanceMode, ColorScheme, RemoteAppConfig, Result, ThemePreference};

/// Everything the UI needs to know about the boundary it is mounted into.
///
/// The same isolated root and portal are also published on the page
/// registry for floating UI code that cannot be handed this value.
#[derive(Debug, Clone)]
pub struct EmbedContext<N> {
    /// Isolated root holding the widget's styles.
    pub isolated_root: N,
    /// Portal target for menus and dropdowns.
    pub portal: N,
    /// Preference requested by the loader, `None` when unspecified.
    pub theme: Option<ThemePreference>,
    /// Scheme applied at mount time. May change later under `system`.
    pub scheme: ColorScheme,
    pub appearance: AppearanceMode,
    /// Backend origin the config was fetched from.
    pub origin: String,
}

/// External UI mount entrypoint.
pub trait MountEntrypoint<N> {
    /// Render the widget into `mount_point`. Called at most once per
    /// bootstrap.
    fn mount(&self, mount_point: &N, config: RemoteAppConfig, context: &EmbedContext<N>)
        -> Result<()>;
}

impl<N, F> MountEntrypoint<N> for F
where
    F: Fn(&N, RemoteAppConfig, &EmbedContext<N>) -> Result<()>,
{
    fn mount(
        &self,
        mount_point: &N,
        config: RemoteAppConfig,
        context: &EmbedContext<N>,
    ) -> Result<()> {
        self(mount_point, config, context)
    }
}
