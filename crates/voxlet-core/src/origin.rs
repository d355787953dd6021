//! Origin and endpoint resolution.
//!
//! The widget talks to the backend that served it. Which origin that is gets
//! decided by [`ORIGIN_PRECEDENCE`]; endpoint paths are then resolved against
//! it with [`resolve_endpoint`]. Neither function can fail: every parse error
//! falls through to the next candidate.

use tracing::debug;
use url::Url;
use voxlet_types::LoaderSignal;

/// Serialized form of an opaque origin (sandboxed iframes, `file:`, `data:`).
pub const OPAQUE_ORIGIN: &str = "null";

/// Where an origin came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginSource {
    /// Parsed from the loader script's absolute source URL.
    LoaderScript,
    /// The host page's own origin, unless opaque.
    HostPage,
    /// The configured fallback service origin.
    Fallback,
}

/// Resolution order for [`resolve_origin`].
pub const ORIGIN_PRECEDENCE: [OriginSource; 3] = [
    OriginSource::LoaderScript,
    OriginSource::HostPage,
    OriginSource::Fallback,
];

/// Origin of an absolute URL, or `None` for relative, malformed or
/// opaque-origin URLs.
pub fn url_origin(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

/// Resolve the backend origin.
///
/// Precedence: loader script origin → host page origin (rejecting the
/// opaque `"null"` sentinel) → `fallback`.
pub fn resolve_origin(
    loader: Option<&LoaderSignal>,
    page_origin: Option<&str>,
    fallback: &str,
) -> String {
    let (source, origin) = ORIGIN_PRECEDENCE
        .iter()
        .find_map(|source| {
            let candidate = match source {
                OriginSource::LoaderScript => loader.and_then(|l| l.src.as_deref()).and_then(url_origin),
                OriginSource::HostPage => page_origin
                    .filter(|o| !o.is_empty() && *o != OPAQUE_ORIGIN)
                    .map(str::to_string),
                OriginSource::Fallback => Some(fallback.to_string()),
            };
            candidate.map(|origin| (*source, origin))
        })
        .unwrap_or((OriginSource::Fallback, fallback.to_string()));
    debug!(?source, %origin, "origin resolved");
    origin
}

/// Resolve `endpoint` into an absolute URL.
///
/// - `http://` / `https://` endpoints (any case) are used as-is, normalized.
/// - Anything else is resolved relative to `base_origin`.
/// - If parsing fails, `default_path` is resolved against `fallback_origin`.
pub fn resolve_endpoint(
    endpoint: &str,
    base_origin: &str,
    fallback_origin: &str,
    default_path: &str,
) -> String {
    let resolved = if is_absolute_http(endpoint) {
        Url::parse(endpoint)
    } else {
        Url::parse(base_origin).and_then(|base| base.join(endpoint))
    };

    match resolved {
        Ok(url) => url.to_string(),
        Err(e) => {
            debug!(%endpoint, %base_origin, error = %e, "endpoint unresolvable, using fallback");
            Url::parse(fallback_origin)
                .and_then(|base| base.join(default_path))
                .map(|url| url.to_string())
                .unwrap_or_else(|_| format!("{}{}", fallback_origin.trim_end_matches('/'), default_path))
        }
    }
}

fn is_absolute_http(endpoint: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        endpoint
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
