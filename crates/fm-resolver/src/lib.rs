//! fm Resolver
//!
//! Turns a requested location into a [`NavigationInfo`]: content type,
//! ordered candidate content views, the view to start with, and the meta
//! views to show alongside.
//!
//! # Collaborators
//! - [`FileInfoService`] answers "what is at this URI"
//! - [`MetadataStore`] remembers per-location view choices
//! - [`ComponentCatalog`] maps content types to viewer components
//! - [`Preferences`] decides which meta views are enabled
//!
//! [`NavigationInfo`]: fm_core::NavigationInfo

pub mod catalog;
pub mod config;
pub mod memory;
pub mod resolver;
pub mod services;

pub use catalog::{CatalogQuery, CatalogResult, ComponentCatalog, StaticCatalog};
pub use config::{CatalogEntry, ConfigError, ResolverConfig};
pub use memory::{MemoryFileInfo, MemoryMetadataStore, MemoryPreferences};
pub use resolver::{
    choose_initial_view, LocationMetadata, NavigationResolver, ResolveHandle, ResolveRequest,
    ResolverServices,
};
pub use services::{
    meta_view_pref_key, FileInfo, FileInfoError, FileInfoService, MetadataStore, Preferences,
    CONTENT_VIEWS_KEY, INITIAL_VIEW_KEY,
};
