//! Window errors

use fm_core::LocationChangeKind;

/// Caller mistakes rejected by a window
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("No {kind:?} entry at distance {distance} (list holds {len})")]
    NoSuchHistoryEntry {
        kind: LocationChangeKind,
        distance: usize,
        len: usize,
    },

    #[error("{0:?} is not a back or forward move")]
    NotAHistoryMove(LocationChangeKind),

    #[error("Window has no current location")]
    NoCurrentLocation,

    #[error("{0} has no parent location")]
    NoParentLocation(String),

    #[error("{0} is not a view for the current location")]
    UnknownView(String),

    #[error("Window is closed")]
    Closed,
}
