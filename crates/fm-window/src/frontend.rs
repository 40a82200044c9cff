//! Window Frontend
//!
//! The UI side of a window. Every method has a no-op default so a frontend
//! only implements what it draws.

use fm_core::ViewIdentifier;
use fm_view::{ViewFrame, ViewFrameId};

/// Host UI driven by the window state machine
pub trait WindowFrontend {
    fn set_title(&mut self, _title: &str) {}

    /// Text of the location bar
    fn set_location_text(&mut self, _uri: &str) {}

    fn set_status(&mut self, _status: &str) {}

    fn allow_stop(&mut self, _allowed: bool) {}

    fn allow_back(&mut self, _allowed: bool) {}

    fn allow_forward(&mut self, _allowed: bool) {}

    fn allow_up(&mut self, _allowed: bool) {}

    /// Modal error message
    fn display_error(&mut self, _message: &str) {}

    /// "View as" menu
    fn set_view_menu(&mut self, _candidates: &[ViewIdentifier], _selected: Option<&str>) {}

    /// Content slot; `None` empties it
    fn set_content_view(&mut self, _frame: Option<&ViewFrame>) {}

    fn add_meta_view(&mut self, _frame: &ViewFrame) {}

    fn remove_meta_view(&mut self, _frame: ViewFrameId) {}

    /// Map the window; called on its first commit
    fn show(&mut self) {}

    fn close(&mut self) {}
}

/// Frontend that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFrontend;

impl WindowFrontend for NullFrontend {}
