//! Locations
//!
//! URI handling for the locations a window can display.

use url::Url;

/// A resource identifier plus its resolved content type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// URI string
    pub uri: String,
    /// MIME type or one of the `special/*` pseudo types
    pub content_type: Option<String>,
}

impl Location {
    /// Create an unresolved location
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            content_type: None,
        }
    }

    /// Create a location with a known content type
    pub fn with_content_type(uri: &str, content_type: &str) -> Self {
        Self {
            uri: uri.to_string(),
            content_type: Some(content_type.to_string()),
        }
    }

    /// Scheme of the URI, if it parses
    pub fn scheme(&self) -> Option<String> {
        uri_scheme(&self.uri)
    }
}

/// Turn user input into a URI.
///
/// Absolute paths become `file://` URIs; anything else is trimmed and passed
/// through so the resolver can judge it.
pub fn normalize_uri(input: &str) -> String {
    let input = input.trim();

    if input.starts_with('/') {
        return match Url::from_file_path(input) {
            Ok(url) => url.to_string(),
            Err(()) => format!("file://{}", input),
        };
    }

    input.to_string()
}

/// Scheme of a URI (`None` when it does not parse)
pub fn uri_scheme(uri: &str) -> Option<String> {
    Url::parse(uri).ok().map(|url| url.scheme().to_string())
}

/// Parent location of a hierarchical URI.
///
/// Returns `None` for the root, for opaque URIs such as `about:blank` and
/// for anything that does not parse.
pub fn parent_uri(uri: &str) -> Option<String> {
    let url = Url::parse(uri).ok()?;
    if url.cannot_be_a_base() {
        return None;
    }

    let path = url.path().trim_end_matches('/');
    if path.is_empty() {
        return None;
    }

    let cut = path.rfind('/')?;
    let mut parent = url.clone();
    parent.set_path(&path[..=cut]);
    parent.set_query(None);
    parent.set_fragment(None);
    Some(parent.to_string())
}

/// Short human-readable name for a location, used as the initial title
pub fn display_name(uri: &str) -> String {
    let Ok(url) = Url::parse(uri) else {
        return uri.to_string();
    };

    if url.cannot_be_a_base() {
        return uri.to_string();
    }

    let last = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(|s| s.to_string());

    match last {
        Some(segment) => segment,
        None => match url.host_str() {
            Some(host) => host.to_string(),
            None => "/".to_string(),
        },
    }
}
