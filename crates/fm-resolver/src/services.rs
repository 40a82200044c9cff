//! External Services
//!
//! What the resolver needs from the rest of the desktop: file information,
//! per-location metadata and preferences.

use fm_core::NavigationResult;
use smol::future::BoxedLocal;

/// Metadata key holding extra content views, one `label=component-id` per line
pub const CONTENT_VIEWS_KEY: &str = "content_views";

/// Metadata key holding the content view last chosen for a location
pub const INITIAL_VIEW_KEY: &str = "initial_view";

/// Preference key that enables or disables a meta view
pub fn meta_view_pref_key(iid: &str) -> String {
    format!("meta-views/{}", iid)
}

/// Answer of a file-info query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// MIME type
    pub mime_type: String,
    /// Final URI when the service followed a redirect or link
    pub actual_uri: Option<String>,
}

impl FileInfo {
    pub fn new(mime_type: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            actual_uri: None,
        }
    }
}

/// File-info failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileInfoError {
    #[error("not found")]
    NotFound,

    #[error("invalid URI")]
    InvalidUri,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("file info error {code}: {message}")]
    Other { code: i32, message: String },
}

impl FileInfoError {
    /// Map to the navigation result code.
    ///
    /// Anything without a dedicated code is logged with its raw code so it
    /// can be triaged later.
    pub fn to_result(&self, uri: &str) -> NavigationResult {
        match self {
            FileInfoError::NotFound => NavigationResult::NotFound,
            FileInfoError::InvalidUri => NavigationResult::InvalidUri,
            FileInfoError::UnsupportedScheme(_) => NavigationResult::UnsupportedScheme,
            FileInfoError::Other { code, message } => {
                tracing::warn!("Unhandled file info error {} for {}: {}", code, uri, message);
                NavigationResult::UnspecificError
            }
        }
    }
}

/// Asynchronous "get file info" query
pub trait FileInfoService {
    fn get_file_info(&self, uri: &str) -> BoxedLocal<Result<FileInfo, FileInfoError>>;
}

/// Per-location metadata store
pub trait MetadataStore {
    /// Fetch one key; `None` when unset
    fn get_metadata(&self, uri: &str, key: &str) -> BoxedLocal<Option<String>>;

    /// Store one key; `None` removes it
    fn set_metadata(&self, uri: &str, key: &str, value: Option<&str>);

    /// Call `listener` with the URI whenever one of its keys changes
    fn add_changed_listener(&self, listener: Box<dyn Fn(&str)>);
}

/// Preference lookups
pub trait Preferences {
    fn get_boolean(&self, key: &str, default: bool) -> bool;

    fn get_string(&self, key: &str) -> Option<String>;

    /// Call `callback` with the key whenever that key changes
    fn add_callback(&self, key: &str, callback: Box<dyn Fn(&str)>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let uri = "file:///x";
        assert_eq!(FileInfoError::NotFound.to_result(uri), NavigationResult::NotFound);
        assert_eq!(FileInfoError::InvalidUri.to_result(uri), NavigationResult::InvalidUri);
        assert_eq!(
            FileInfoError::UnsupportedScheme("gopher".into()).to_result(uri),
            NavigationResult::UnsupportedScheme
        );
        let other = FileInfoError::Other {
            code: 23,
            message: "too many links".into(),
        };
        assert_eq!(other.to_result(uri), NavigationResult::UnspecificError);
    }

    #[test]
    fn test_pref_key() {
        assert_eq!(meta_view_pref_key("HISTORY_VIEW"), "meta-views/HISTORY_VIEW");
    }
}
