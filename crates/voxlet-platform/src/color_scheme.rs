//! System color-scheme signal.

/// Callback invoked with the current "prefers dark" value on every change.
pub type SchemeListener = Box<dyn Fn(bool)>;

/// Access to the operating system's light/dark preference.
pub trait ColorSchemeSource {
    /// Current value of `prefers-color-scheme: dark`, or `None` when the
    /// runtime cannot answer.
    fn prefers_dark(&self) -> Option<bool>;

    /// Whether change notifications can be subscribed to. Older runtimes
    /// answer queries but cannot notify.
    fn supports_live_tracking(&self) -> bool;

    /// Register `listener` for the rest of the page's life. There is no
    /// unsubscribe. Returns `false` when registration was not possible.
    fn on_change(&self, listener: SchemeListener) -> bool;
}
