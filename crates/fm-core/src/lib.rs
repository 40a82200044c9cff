//! fm Core
//!
//! Data model shared by the navigation resolver, the view frames and the
//! window state machine.
//!
//! # Contents
//! - [`Location`] and URI helpers
//! - [`NavigationInfo`], the resolved outcome of one location change
//! - [`Bookmark`] and the process-wide [`HistoryList`]

pub mod history;
pub mod location;
pub mod navigation;

pub use history::{Bookmark, HistoryList, SubscriptionId};
pub use location::{display_name, normalize_uri, parent_uri, uri_scheme, Location};
pub use navigation::{
    LocationChangeKind, NavigationInfo, NavigationResult, ResolutionError, SelectionInfo,
    ViewIdentifier,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
