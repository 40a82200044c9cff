//! Navigation Info
//!
//! The resolved outcome of one location-change attempt.

use serde::Deserialize;

use crate::location::{uri_scheme, Location};

/// A candidate viewer: component id plus display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ViewIdentifier {
    /// Component id
    pub iid: String,
    /// Human-readable name ("Icons", "Web Page", ...)
    pub name: String,
}

impl ViewIdentifier {
    pub fn new(iid: &str, name: &str) -> Self {
        Self {
            iid: iid.to_string(),
            name: name.to_string(),
        }
    }
}

/// Result code of a resolve operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationResult {
    #[default]
    Ok,
    NotFound,
    InvalidUri,
    UnsupportedScheme,
    /// Content type resolved, but nothing in the catalog can show it
    NoHandlerForType,
    /// Catch-all; the underlying code is logged where it is produced
    UnspecificError,
}

impl NavigationResult {
    pub fn is_ok(&self) -> bool {
        *self == NavigationResult::Ok
    }
}

/// A location that cannot be shown. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("Couldn't find \"{0}\". Please check the spelling and try again.")]
    NotFound(String),

    #[error("\"{0}\" is not a valid location. Please check the spelling and try again.")]
    InvalidUri(String),

    #[error("Couldn't display \"{uri}\", because this program cannot handle {scheme}: locations.")]
    UnsupportedScheme { uri: String, scheme: String },

    #[error("Couldn't display \"{0}\", because this program cannot handle items of this type.")]
    NoHandlerForType(String),

    #[error("Couldn't display \"{0}\".")]
    Unspecific(String),
}

impl ResolutionError {
    /// Build the error for a failed result code
    pub fn from_result(result: NavigationResult, uri: &str) -> Option<Self> {
        let uri_owned = uri.to_string();
        let error = match result {
            NavigationResult::Ok => return None,
            NavigationResult::NotFound => ResolutionError::NotFound(uri_owned),
            NavigationResult::InvalidUri => ResolutionError::InvalidUri(uri_owned),
            NavigationResult::UnsupportedScheme => ResolutionError::UnsupportedScheme {
                scheme: uri_scheme(uri).unwrap_or_else(|| uri.to_string()),
                uri: uri_owned,
            },
            NavigationResult::NoHandlerForType => ResolutionError::NoHandlerForType(uri_owned),
            NavigationResult::UnspecificError => ResolutionError::Unspecific(uri_owned),
        };
        Some(error)
    }

    /// Result code this error was produced from
    pub fn result(&self) -> NavigationResult {
        match self {
            ResolutionError::NotFound(_) => NavigationResult::NotFound,
            ResolutionError::InvalidUri(_) => NavigationResult::InvalidUri,
            ResolutionError::UnsupportedScheme { .. } => NavigationResult::UnsupportedScheme,
            ResolutionError::NoHandlerForType(_) => NavigationResult::NoHandlerForType,
            ResolutionError::Unspecific(_) => NavigationResult::UnspecificError,
        }
    }
}

/// Resolved outcome of one location change
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationInfo {
    /// Location as requested
    pub requested: Location,
    /// Location after redirects
    pub actual: Location,
    /// Location the window showed when the request was made
    pub referring: Option<Location>,
    /// Candidate content views, in preference order
    pub content_identifiers: Vec<ViewIdentifier>,
    /// Meta views to show next to the content view
    pub meta_iids: Vec<String>,
    /// Fallback content view established by the content-type mapping
    pub default_content_iid: Option<String>,
    /// Content view to activate first
    pub initial_content_iid: Option<String>,
    pub result: NavigationResult,
}

impl NavigationInfo {
    /// A failed resolution for `uri`
    pub fn failed(uri: &str, result: NavigationResult, referring: Option<Location>) -> Self {
        Self {
            requested: Location::new(uri),
            actual: Location::new(uri),
            referring,
            result,
            ..Default::default()
        }
    }

    /// Requested URI
    pub fn uri(&self) -> &str {
        &self.requested.uri
    }

    /// Resolved content type of the actual location
    pub fn content_type(&self) -> Option<&str> {
        self.actual.content_type.as_deref()
    }

    /// User-facing error, if resolution failed
    pub fn error(&self) -> Option<ResolutionError> {
        ResolutionError::from_result(self.result, &self.requested.uri)
    }

    /// Whether `iid` is one of the content view candidates
    pub fn has_candidate(&self, iid: &str) -> bool {
        self.content_identifiers.iter().any(|id| id.iid == iid)
    }

    /// Display name of a candidate
    pub fn candidate_name(&self, iid: &str) -> Option<&str> {
        self.content_identifiers
            .iter()
            .find(|id| id.iid == iid)
            .map(|id| id.name.as_str())
    }
}

/// Selection pushed into views
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionInfo {
    pub selected_uris: Vec<String>,
    /// True for the view that requested this selection
    pub self_originated: bool,
}

/// How a location change moves through the back/forward lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationChangeKind {
    Standard,
    Back,
    Forward,
    Reload,
}
