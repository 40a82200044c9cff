//! View Signals
//!
//! Requests and reports flowing from a component back to its window.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use fm_core::{Bookmark, HistoryList};

use crate::component::ViewFrameId;

/// Load progress reported by a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressKind {
    /// Started loading; enough to show the view
    Underway,
    /// Finished loading
    DoneOk,
    /// Gave up loading
    DoneError,
}

/// One message from a view frame to its window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Progress(ProgressKind),
    TitleChange(String),
    StatusChange(String),
    SelectionChange(Vec<String>),
    LocationChange(String),
    /// The component died
    Destroyed,
}

/// Receiver of view events, implemented by the window
pub trait ViewEventSink {
    fn emit(&self, frame: ViewFrameId, event: ViewEvent);
}

/// Signal connection handed to a component at activation.
///
/// Clones share one connection; once the frame is destroyed every clone
/// goes quiet.
#[derive(Clone)]
pub struct ViewSignals {
    frame: ViewFrameId,
    sink: Rc<dyn ViewEventSink>,
    connected: Rc<Cell<bool>>,
    history: Rc<HistoryList>,
}

impl ViewSignals {
    pub fn new(frame: ViewFrameId, sink: Rc<dyn ViewEventSink>, history: Rc<HistoryList>) -> Self {
        Self {
            frame,
            sink,
            connected: Rc::new(Cell::new(true)),
            history,
        }
    }

    pub fn frame(&self) -> ViewFrameId {
        self.frame
    }

    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }

    /// Cut the connection for every clone
    pub(crate) fn disconnect(&self) {
        self.connected.set(false);
    }

    fn send(&self, event: ViewEvent) {
        if self.connected.get() {
            self.sink.emit(self.frame, event);
        } else {
            tracing::trace!("Dropping {:?} from disconnected {}", event, self.frame);
        }
    }

    pub fn report_progress(&self, progress: ProgressKind) {
        self.send(ViewEvent::Progress(progress));
    }

    /// Only honoured for the content view
    pub fn request_title_change(&self, title: &str) {
        self.send(ViewEvent::TitleChange(title.to_string()));
    }

    pub fn request_status_change(&self, status: &str) {
        self.send(ViewEvent::StatusChange(status.to_string()));
    }

    pub fn request_selection_change(&self, uris: &[String]) {
        self.send(ViewEvent::SelectionChange(uris.to_vec()));
    }

    pub fn request_location_change(&self, uri: &str) {
        self.send(ViewEvent::LocationChange(uri.to_string()));
    }

    pub fn report_destroyed(&self) {
        self.send(ViewEvent::Destroyed);
    }

    /// Snapshot of the process history, most recent first
    pub fn history(&self) -> Vec<Rc<Bookmark>> {
        self.history.entries()
    }
}

impl fmt::Debug for ViewSignals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSignals")
            .field("frame", &self.frame)
            .field("connected", &self.connected.get())
            .finish()
    }
}
