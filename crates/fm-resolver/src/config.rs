//! Resolver Configuration

use std::collections::BTreeMap;
use std::path::Path;

use fm_core::ViewIdentifier;
use serde::Deserialize;

use crate::catalog::StaticCatalog;

/// One content-type row of the component catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    /// `major/minor`, `major/*` or `*/*`
    pub content_type: String,
    /// URI schemes this row is limited to; empty means any
    #[serde(default)]
    pub schemes: Vec<String>,
    /// Candidate views in preference order
    pub views: Vec<ViewIdentifier>,
    /// Fallback view; the first candidate when unset
    #[serde(default)]
    pub default_iid: Option<String>,
}

impl CatalogEntry {
    pub fn new(content_type: &str, views: &[(&str, &str)], default_iid: Option<&str>) -> Self {
        Self {
            content_type: content_type.to_string(),
            schemes: Vec::new(),
            views: views
                .iter()
                .map(|(iid, name)| ViewIdentifier::new(iid, name))
                .collect(),
            default_iid: default_iid.map(str::to_string),
        }
    }
}

/// Resolver configuration options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// URI scheme → pseudo content type, bypassing the file-info query
    pub special_schemes: BTreeMap<String, String>,

    /// Content type → candidate views
    pub catalog: Vec<CatalogEntry>,

    /// Meta views offered for every location, subject to preferences
    pub meta_views: Vec<String>,

    /// Diagnostic view appended to every candidate list
    pub sample_view: Option<ViewIdentifier>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        let special_schemes = [
            ("about", "special/about"),
            ("hardware", "special/hardware"),
            ("eazel", "special/eazel-service"),
            ("man", "special/man"),
            ("help", "special/help"),
        ]
        .into_iter()
        .map(|(scheme, content_type)| (scheme.to_string(), content_type.to_string()))
        .collect();

        let catalog = vec![
            CatalogEntry::new(
                "x-directory/normal",
                &[("ICON_VIEW", "Icons"), ("LIST_VIEW", "List")],
                Some("ICON_VIEW"),
            ),
            CatalogEntry::new(
                "text/html",
                &[("WEB_VIEW", "Web Page"), ("TEXT_VIEW", "Text")],
                Some("WEB_VIEW"),
            ),
            CatalogEntry::new("text/*", &[("TEXT_VIEW", "Text")], None),
            CatalogEntry::new("image/*", &[("IMAGE_VIEW", "Image")], None),
            CatalogEntry::new("special/about", &[("WEB_VIEW", "Web Page")], None),
            CatalogEntry::new("special/hardware", &[("HARDWARE_VIEW", "Hardware")], None),
            CatalogEntry::new("special/eazel-service", &[("SERVICE_VIEW", "Services")], None),
            CatalogEntry::new("special/man", &[("HELP_VIEW", "Help")], None),
            CatalogEntry::new("special/help", &[("HELP_VIEW", "Help")], None),
        ];

        Self {
            special_schemes,
            catalog,
            meta_views: vec!["HISTORY_VIEW".to_string(), "NOTES_VIEW".to_string()],
            sample_view: Some(ViewIdentifier::new("SAMPLE_VIEW", "Sample")),
        }
    }
}

impl ResolverConfig {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Catalog built from the configured entries
    pub fn static_catalog(&self) -> StaticCatalog {
        StaticCatalog::new(self.catalog.clone())
    }

    /// Pseudo content type for a scheme, if it is special
    pub fn special_content_type(&self, scheme: &str) -> Option<&str> {
        self.special_schemes.get(scheme).map(String::as_str)
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
