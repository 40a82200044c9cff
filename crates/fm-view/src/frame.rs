//! View Frame
//!
//! One live component instance inside a window.

use std::fmt;
use std::rc::Rc;

use fm_core::{HistoryList, NavigationInfo, SelectionInfo};

use crate::component::{ViewComponent, ViewFrameId, ViewRole};
use crate::error::LoadFailure;
use crate::host::ViewHost;
use crate::signals::{ProgressKind, ViewEventSink, ViewSignals};

/// An activated view component and its signal connection
pub struct ViewFrame {
    id: ViewFrameId,
    iid: String,
    role: ViewRole,
    /// `None` once destroyed
    component: Option<ViewComponent>,
    signals: ViewSignals,
    label: Option<String>,
    /// URI last pushed into the view
    location: Option<String>,
}

impl ViewFrame {
    /// Activate component `iid` and wire it to `sink`
    pub fn load(
        host: &dyn ViewHost,
        id: ViewFrameId,
        iid: &str,
        role: ViewRole,
        sink: Rc<dyn ViewEventSink>,
        history: Rc<HistoryList>,
    ) -> Result<Self, LoadFailure> {
        let signals = ViewSignals::new(id, sink, history);

        match host.activate(iid, signals.clone()) {
            Ok(component) => {
                let label = component.label();
                tracing::debug!("Loaded {} as {} ({:?})", iid, id, role);
                Ok(Self {
                    id,
                    iid: iid.to_string(),
                    role,
                    component: Some(component),
                    signals,
                    label,
                    location: None,
                })
            }
            Err(source) => {
                signals.disconnect();
                tracing::warn!("Failed to activate {}: {}", iid, source);
                Err(LoadFailure {
                    iid: iid.to_string(),
                    source,
                })
            }
        }
    }

    pub fn id(&self) -> ViewFrameId {
        self.id
    }

    /// Component id
    pub fn iid(&self) -> &str {
        &self.iid
    }

    pub fn role(&self) -> ViewRole {
        self.role
    }

    pub fn set_role(&mut self, role: ViewRole) {
        self.role = role;
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn is_alive(&self) -> bool {
        self.component.is_some()
    }

    /// Push a resolved location into the view.
    ///
    /// A foreign control is handed the URI and the frame reports progress
    /// for it. Failures surface later as progress or destroy events.
    pub fn notify_location(&mut self, info: &NavigationInfo, self_originated: bool) {
        let uri = info.actual.uri.clone();
        match self.component.as_mut() {
            Some(ViewComponent::Native(view)) => {
                view.notify_location_change(info, self_originated);
            }
            Some(ViewComponent::Control(control)) => {
                self.signals.report_progress(ProgressKind::Underway);
                match control.load_uri(&uri) {
                    Ok(()) => self.signals.report_progress(ProgressKind::DoneOk),
                    Err(err) => {
                        tracing::warn!("{} could not load {}: {}", self.iid, uri, err);
                        self.signals.report_progress(ProgressKind::DoneError);
                    }
                }
            }
            None => {
                tracing::trace!("Location sent to destroyed {}", self.id);
                return;
            }
        }
        self.location = Some(uri);
    }

    /// Push the window selection; foreign controls have no selection
    pub fn notify_selection(&mut self, selection: &SelectionInfo) {
        if let Some(ViewComponent::Native(view)) = self.component.as_mut() {
            view.notify_selection_change(selection);
        }
    }

    pub fn stop_loading(&mut self) {
        if let Some(ViewComponent::Native(view)) = self.component.as_mut() {
            view.stop_location_change();
        }
    }

    /// Release the component and disconnect its signals; idempotent
    pub fn destroy(&mut self) {
        if let Some(component) = self.component.take() {
            self.signals.disconnect();
            drop(component);
            tracing::debug!("Destroyed {} ({})", self.id, self.iid);
        }
    }
}

impl Drop for ViewFrame {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for ViewFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewFrame")
            .field("id", &self.id)
            .field("iid", &self.iid)
            .field("role", &self.role)
            .field("alive", &self.is_alive())
            .field("location", &self.location)
            .finish()
    }
}
