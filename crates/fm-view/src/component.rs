//! View Components
//!
//! The two ways a view can be hosted, closed over in [`ViewComponent`].

use std::fmt;

use fm_core::{NavigationInfo, SelectionInfo};

use crate::error::ControlError;

/// Window-local id of a view frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewFrameId(pub u64);

impl fmt::Display for ViewFrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// Slot a frame occupies in its window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewRole {
    /// The single primary view of a location
    Content,
    /// Auxiliary view shown next to the content view
    Meta,
}

/// In-process view
pub trait NativeView {
    /// Show a newly resolved location.
    ///
    /// `self_originated` is set when this view asked for the change.
    fn notify_location_change(&mut self, info: &NavigationInfo, self_originated: bool);

    fn notify_selection_change(&mut self, _selection: &SelectionInfo) {}

    /// Abandon any in-progress load
    fn stop_location_change(&mut self) {}

    /// Component "label" property
    fn label(&self) -> Option<String> {
        None
    }
}

/// Hosted control that only knows how to load a URI
pub trait ForeignControl {
    fn load_uri(&mut self, uri: &str) -> Result<(), ControlError>;

    fn label(&self) -> Option<String> {
        None
    }
}

/// An activated component, resolved once at load time
pub enum ViewComponent {
    Native(Box<dyn NativeView>),
    Control(Box<dyn ForeignControl>),
}

impl ViewComponent {
    pub fn native<V: NativeView + 'static>(view: V) -> Self {
        ViewComponent::Native(Box::new(view))
    }

    pub fn control<C: ForeignControl + 'static>(control: C) -> Self {
        ViewComponent::Control(Box::new(control))
    }

    pub fn label(&self) -> Option<String> {
        match self {
            ViewComponent::Native(view) => view.label(),
            ViewComponent::Control(control) => control.label(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, ViewComponent::Native(_))
    }
}

impl fmt::Debug for ViewComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewComponent::Native(_) => f.write_str("Native"),
            ViewComponent::Control(_) => f.write_str("Control"),
        }
    }
}
