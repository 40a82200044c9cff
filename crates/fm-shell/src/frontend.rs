//! Log Frontend
//!
//! Window frontend for running without a display: everything the UI would
//! draw goes to the log.

use fm_core::ViewIdentifier;
use fm_view::{ViewFrame, ViewFrameId};
use fm_window::WindowFrontend;

/// Frontend that logs UI updates for one window
#[derive(Debug)]
pub struct LogFrontend {
    window: u32,
}

impl LogFrontend {
    pub fn new(window: u32) -> Self {
        Self { window }
    }
}

impl WindowFrontend for LogFrontend {
    fn set_title(&mut self, title: &str) {
        tracing::debug!("[window {}] title: {}", self.window, title);
    }

    fn set_location_text(&mut self, uri: &str) {
        tracing::debug!("[window {}] location: {}", self.window, uri);
    }

    fn set_status(&mut self, status: &str) {
        tracing::info!("[window {}] {}", self.window, status);
    }

    fn display_error(&mut self, message: &str) {
        tracing::error!("[window {}] {}", self.window, message);
    }

    fn set_view_menu(&mut self, candidates: &[ViewIdentifier], selected: Option<&str>) {
        let names: Vec<&str> = candidates.iter().map(|view| view.name.as_str()).collect();
        tracing::debug!(
            "[window {}] view as: {} (selected {})",
            self.window,
            names.join(", "),
            selected.unwrap_or("none")
        );
    }

    fn set_content_view(&mut self, frame: Option<&ViewFrame>) {
        match frame {
            Some(frame) => tracing::debug!("[window {}] content view {}", self.window, frame.iid()),
            None => tracing::debug!("[window {}] content view cleared", self.window),
        }
    }

    fn add_meta_view(&mut self, frame: &ViewFrame) {
        let label = frame.label().unwrap_or(frame.iid());
        tracing::debug!("[window {}] sidebar panel {}", self.window, label);
    }

    fn remove_meta_view(&mut self, frame: ViewFrameId) {
        tracing::debug!("[window {}] sidebar panel {} removed", self.window, frame);
    }

    fn show(&mut self) {
        tracing::info!("[window {}] shown", self.window);
    }

    fn close(&mut self) {
        tracing::info!("[window {}] closed", self.window);
    }
}
