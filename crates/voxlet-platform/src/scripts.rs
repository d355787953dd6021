//! Script discovery on the host page.

use voxlet_types::LoaderSignal;

/// Read-only view of the page's script elements and origin.
///
/// None of these lookups can fail: an unavailable current script, a page
/// with no scripts, or an unreadable location all map to empty results.
pub trait ScriptSource {
    /// The script element currently executing, if the runtime exposes it.
    /// Bundlers that evaluate code outside a script context report `None`.
    fn current_script(&self) -> Option<LoaderSignal>;

    /// Every `<script>` element in document order.
    fn scripts(&self) -> Vec<LoaderSignal>;

    /// The host page's serialized origin. Sandboxed or opaque origins are
    /// reported as the literal `"null"`, exactly as the runtime serializes
    /// them; rejecting that sentinel is the caller's job.
    fn page_origin(&self) -> Option<String>;
}
