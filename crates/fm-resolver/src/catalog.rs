//! Component Catalog
//!
//! Maps a content type (plus URI scheme and any explicitly requested
//! component ids) to a ranked list of viewer components.

use std::collections::HashMap;

use fm_core::ViewIdentifier;

use crate::config::CatalogEntry;

/// What a location needs from a viewer
#[derive(Debug, Clone, Copy)]
pub struct CatalogQuery<'a> {
    pub content_type: &'a str,
    pub uri_scheme: Option<&'a str>,
    /// Component ids the location asked for by name
    pub explicit_iids: &'a [String],
}

/// Ranked answer to a [`CatalogQuery`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogResult {
    pub candidates: Vec<ViewIdentifier>,
    pub default_iid: Option<String>,
}

/// Component catalog; a pure function of the query
pub trait ComponentCatalog {
    fn query(&self, query: &CatalogQuery<'_>) -> CatalogResult;
}

/// Catalog backed by a fixed table
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
    /// iid → display name, for explicit lookups
    names: HashMap<String, String>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut names = HashMap::new();
        for entry in &entries {
            for view in &entry.views {
                names
                    .entry(view.iid.clone())
                    .or_insert_with(|| view.name.clone());
            }
        }
        Self { entries, names }
    }

    /// Display name of a known component
    pub fn name_of(&self, iid: &str) -> Option<&str> {
        self.names.get(iid).map(String::as_str)
    }

    /// Best entry: exact type, then `major/*`, then `*/*`
    fn lookup(&self, content_type: &str, scheme: Option<&str>) -> Option<&CatalogEntry> {
        let supertype = content_type
            .split_once('/')
            .map(|(major, _)| format!("{}/*", major));

        let scheme_matches = |entry: &CatalogEntry| {
            entry.schemes.is_empty()
                || scheme.is_some_and(|s| entry.schemes.iter().any(|e| e == s))
        };

        let find = |pattern: &str| {
            self.entries
                .iter()
                .find(|entry| entry.content_type == pattern && scheme_matches(entry))
        };

        find(content_type)
            .or_else(|| supertype.as_deref().and_then(|s| find(s)))
            .or_else(|| find("*/*"))
    }
}

impl ComponentCatalog for StaticCatalog {
    fn query(&self, query: &CatalogQuery<'_>) -> CatalogResult {
        let mut result = match self.lookup(query.content_type, query.uri_scheme) {
            Some(entry) => CatalogResult {
                candidates: entry.views.clone(),
                default_iid: entry
                    .default_iid
                    .clone()
                    .or_else(|| entry.views.first().map(|v| v.iid.clone())),
            },
            None => CatalogResult::default(),
        };

        for iid in query.explicit_iids {
            if result.candidates.iter().any(|v| &v.iid == iid) {
                continue;
            }
            if let Some(name) = self.names.get(iid) {
                result.candidates.push(ViewIdentifier::new(iid, name));
            }
        }

        result
    }
}
