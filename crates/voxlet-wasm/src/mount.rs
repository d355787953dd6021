//! Mount hand-off to the JavaScript UI bundle.
//!
//! The UI registers a global function (named by
//! [`EmbedSettings::mount_global`](voxlet_types::EmbedSettings)) taking
//! `(mountPoint, config, context)`. `context` carries the node handles plus
//! the plain fields from [`context_fields`].

use serde_json::{Value, json};
use voxlet_core::mount::EmbedContext;

/// Context fields that are plain data, keyed as the UI expects them.
pub fn context_fields<N>(context: &EmbedContext<N>) -> Value {
    json!({
        "theme": context.theme.map(|t| t.as_str()),
        "colorScheme": context.scheme.class_name(),
        "appearance": context.appearance.as_str(),
        "origin": context.origin,
    })
}

#[cfg(feature = "browser")]
pub use js::JsMountEntrypoint;

#[cfg(feature = "browser")]
mod js {
    use js_sys::{Function, JSON, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::Node;

    use voxlet_core::mount::{EmbedContext, MountEntrypoint};
    use voxlet_platform::browser::js_error;
    use voxlet_types::{EmbedError, RemoteAppConfig, Result};

    use super::context_fields;

    /// Calls `window[global](mountPoint, config, context)`.
    pub struct JsMountEntrypoint {
        global: String,
    }

    impl JsMountEntrypoint {
        pub fn new(global: impl Into<String>) -> Self {
            Self {
                global: global.into(),
            }
        }

        fn entry(&self) -> Result<Function> {
            let window = web_sys::window().ok_or(EmbedError::DomUnavailable)?;
            Reflect::get(&window, &JsValue::from_str(&self.global))
                .map_err(mount_error)?
                .dyn_into::<Function>()
                .map_err(|_| EmbedError::Mount(format!("{} is not a function", self.global)))
        }
    }

    fn mount_error(value: JsValue) -> EmbedError {
        EmbedError::Mount(js_error(value).to_string())
    }

    fn context_object(context: &EmbedContext<Node>) -> Result<JsValue> {
        let object: Object = JSON::parse(&context_fields(context).to_string())
            .map_err(mount_error)?
            .unchecked_into();
        Reflect::set(&object, &"shadowRoot".into(), &context.isolated_root).map_err(mount_error)?;
        Reflect::set(&object, &"portal".into(), &context.portal).map_err(mount_error)?;
        Ok(object.into())
    }

    impl MountEntrypoint<Node> for JsMountEntrypoint {
        fn mount(
            &self,
            mount_point: &Node,
            config: RemoteAppConfig,
            context: &EmbedContext<Node>,
        ) -> Result<()> {
            let entry = self.entry()?;
            let config = JSON::parse(&config.as_value().to_string()).map_err(mount_error)?;
            let context = context_object(context)?;
            entry
                .call3(&JsValue::NULL, mount_point, &config, &context)
                .map_err(mount_error)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlet_types::{AppearanceMode, ColorScheme, ThemePreference};

    fn context(theme: Option<ThemePreference>) -> EmbedContext<()> {
        EmbedContext {
            isolated_root: (),
            portal: (),
            theme,
            scheme: ColorScheme::Dark,
            appearance: AppearanceMode::Default,
            origin: "https://cdn.example.com".into(),
        }
    }

    #[test]
    fn fields_use_wire_names() {
        assert_eq!(
            context_fields(&context(Some(ThemePreference::System))),
            json!({
                "theme": "system",
                "colorScheme": "dark",
                "appearance": "default",
                "origin": "https://cdn.example.com",
            })
        );
    }

    #[test]
    fn unspecified_theme_is_null() {
        assert_eq!(context_fields(&context(None))["theme"], Value::Null);
    }
}
