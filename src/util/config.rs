//! API base-URL resolution.
//!
//! The backend origin is deployment configuration, not a hardcoded literal:
//! the hosting page may set a `data-api-base` attribute on the document root
//! and the client picks it up at runtime, falling back to the local
//! development default. SSR paths resolve the default without touching the
//! DOM.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend origin used when the page carries no override.
pub const DEFAULT_API_BASE: &str = "http://localhost:8005";

#[cfg(feature = "hydrate")]
const API_BASE_ATTRIBUTE: &str = "data-api-base";

/// Resolve the backend origin for this page load.
pub fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        let configured = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute(API_BASE_ATTRIBUTE));
        resolve_api_base(configured)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve_api_base(None)
    }
}

/// Normalize an optional configured origin.
///
/// Blank or missing values fall back to [`DEFAULT_API_BASE`]; surrounding
/// whitespace and trailing slashes are stripped so endpoint joins never
/// produce `//api/...`.
pub fn resolve_api_base(configured: Option<String>) -> String {
    let base = configured
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
    base.trim_end_matches('/').to_owned()
}
