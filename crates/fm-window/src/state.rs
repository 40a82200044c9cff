//! Load State
//!
//! Event vocabulary and per-request bookkeeping of the window state machine.

use fm_core::{LocationChangeKind, NavigationInfo};
use fm_view::ViewFrameId;

/// Where a window is in its request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No request in flight
    Idle,
    /// Waiting for the resolver
    Resolving,
    /// Navigation info present, views activating or loading
    LoadingViews,
}

/// Events applied to the window state with
/// [`Window::set_state_info`](crate::Window::set_state_info)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    NavigationInfoReceived(NavigationInfo),
    /// A pending or committed view failed or died
    ViewError(ViewFrameId),
    NewContentViewActivated(ViewFrameId),
    NewMetaViewActivated(ViewFrameId),
    ProgressInitial,
    ProgressError,
    ProgressDone,
    /// Abandon in-flight work
    ResetToIdle,
    /// Settle now instead of at the next dispatch
    SyncState,
}

/// A location change that has begun
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Request {
    pub uri: String,
    pub kind: LocationChangeKind,
    pub distance: usize,
    /// View that asked for the change
    pub origin: Option<ViewFrameId>,
}

/// Bookkeeping for the request in flight
#[derive(Debug, Default)]
pub(crate) struct LoadState {
    pub request: Option<Request>,
    pub pending_info: Option<NavigationInfo>,
    pub new_content_view: Option<ViewFrameId>,
    pub new_meta_views: Vec<ViewFrameId>,
    /// Views that reported an error, not yet handled
    pub error_views: Vec<ViewFrameId>,
    /// Title asked for by the new content view before commit
    pub pending_title: Option<String>,

    pub cv_progress_initial: bool,
    pub cv_progress_done: bool,
    pub cv_progress_error: bool,
    pub view_bombed_out: bool,
    pub view_activation_complete: bool,
    pub sent_update_view: bool,
    pub views_shown: bool,
    pub reset_to_idle: bool,
}

impl LoadState {
    pub fn phase(&self) -> Phase {
        match (&self.request, &self.pending_info) {
            (None, _) => Phase::Idle,
            (Some(_), None) if !self.view_activation_complete => Phase::Resolving,
            (Some(_), _) => Phase::LoadingViews,
        }
    }

    /// Finished with done and no error
    pub fn completed_cleanly(&self) -> bool {
        self.cv_progress_done && !self.cv_progress_error
    }

    /// Whether `frame` is part of the request in flight
    pub fn is_pending_view(&self, frame: ViewFrameId) -> bool {
        self.new_content_view == Some(frame) || self.new_meta_views.contains(&frame)
    }
}
