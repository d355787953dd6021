//! Error types for the voxlet widget.
//!
//! Provides [`EmbedError`] as the top-level error type and [`DomError`]
//! for failures raised by a page's DOM implementation. Both are
//! non-exhaustive to allow future extension without breaking downstream.
//!
//! Lookups (loader script, origin, theme) never produce errors; they return
//! `Option` and fall back. Only surface construction, the remote config
//! fetch and the mount hand-off can fail.

use thiserror::Error;

/// Top-level error type for the voxlet widget.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EmbedError {
    // ── Surface ──────────────────────────────────────────────────────

    /// The page has no usable document (no window, no body).
    #[error("DOM is not available")]
    DomUnavailable,

    /// A DOM operation failed while building the isolation boundary.
    #[error("dom error: {0}")]
    Dom(#[from] DomError),

    // ── Remote config ────────────────────────────────────────────────

    /// The request never produced a response (network, CORS, DNS).
    #[error("failed to fetch {url}: {reason}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Transport-level failure description.
        reason: String,
    },

    /// The server answered with a non-2xx status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// URL that was requested.
        url: String,
        /// HTTP status code received.
        status: u16,
    },

    /// The response body was not the expected JSON document.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    // ── Hand-off ─────────────────────────────────────────────────────

    /// The external UI mount entrypoint rejected the hand-off.
    #[error("mount failed: {0}")]
    Mount(String),
}

/// Failure reported by a page's DOM implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomError {
    /// The node handle does not refer to an element of the expected kind.
    #[error("node is not an element: {0}")]
    NotAnElement(String),

    /// The host refused to attach an isolated (shadow) root.
    #[error("cannot attach isolated root: {0}")]
    AttachRefused(String),

    /// The underlying runtime threw.
    #[error("{0}")]
    Js(String),
}

/// A convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EmbedError>;
