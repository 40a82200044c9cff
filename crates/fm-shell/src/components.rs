//! Demo Components
//!
//! Text-only stand-ins for the real viewers, one per component id in the
//! default catalog. They report progress the way the real ones would so the
//! window state machine sees a full load cycle.

use std::cell::Cell;
use std::io;
use std::rc::Rc;

use fm_core::NavigationInfo;
use fm_view::{
    ComponentRegistry, ControlError, ForeignControl, NativeView, ProgressKind, ViewComponent,
    ViewSignals,
};
use smol::stream::StreamExt;
use smol::{LocalExecutor, Task};
use url::Url;

/// Directory listing in one of two styles
struct DirectoryView {
    style: &'static str,
    signals: ViewSignals,
    executor: Rc<LocalExecutor<'static>>,
    entries: Rc<Cell<usize>>,
    /// Listing in flight; dropping it cancels
    listing: Option<Task<()>>,
}

impl DirectoryView {
    fn new(style: &'static str, signals: ViewSignals, executor: Rc<LocalExecutor<'static>>) -> Self {
        Self {
            style,
            signals,
            executor,
            entries: Rc::default(),
            listing: None,
        }
    }
}

async fn count_entries(uri: &str) -> io::Result<usize> {
    let path = Url::parse(uri)
        .ok()
        .and_then(|url| url.to_file_path().ok())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "not a local path"))?;

    let mut dir = smol::fs::read_dir(path).await?;
    let mut count = 0;
    while let Some(entry) = dir.next().await {
        entry?;
        count += 1;
    }
    Ok(count)
}

impl NativeView for DirectoryView {
    // progress is reported once the listing finishes, so an unreadable
    // directory fails before the window commits to it
    fn notify_location_change(&mut self, info: &NavigationInfo, _self_originated: bool) {
        let style = self.style;
        let uri = info.actual.uri.clone();
        let signals = self.signals.clone();
        let entries = Rc::clone(&self.entries);
        self.listing = Some(self.executor.spawn(async move {
            match count_entries(&uri).await {
                Ok(count) => {
                    entries.set(count);
                    signals.report_progress(ProgressKind::Underway);
                    signals.request_status_change(&format!("{} items", count));
                    signals.report_progress(ProgressKind::DoneOk);
                }
                Err(err) => {
                    tracing::warn!("{} view cannot list {}: {}", style, uri, err);
                    signals.report_progress(ProgressKind::DoneError);
                }
            }
        }));
    }

    fn stop_location_change(&mut self) {
        self.listing = None;
    }

    fn label(&self) -> Option<String> {
        Some(format!("{} ({} items)", self.style, self.entries.get()))
    }
}

/// Any single-document viewer
struct DocumentView {
    name: &'static str,
    signals: ViewSignals,
}

impl NativeView for DocumentView {
    fn notify_location_change(&mut self, info: &NavigationInfo, _self_originated: bool) {
        self.signals.report_progress(ProgressKind::Underway);
        let content_type = info.content_type().unwrap_or("unknown type");
        self.signals
            .request_status_change(&format!("{}: {}", self.name, content_type));
        self.signals.report_progress(ProgressKind::DoneOk);
    }

    fn label(&self) -> Option<String> {
        Some(self.name.to_string())
    }
}

/// Diagnostic view dumping what it was given
struct SampleView {
    signals: ViewSignals,
}

impl NativeView for SampleView {
    fn notify_location_change(&mut self, info: &NavigationInfo, self_originated: bool) {
        tracing::info!(
            "Sample view: {} ({}), requested {}, self originated {}",
            info.actual.uri,
            info.content_type().unwrap_or("?"),
            info.requested.uri,
            self_originated
        );
        self.signals.report_progress(ProgressKind::DoneOk);
    }
}

/// Browser control; loads anything that parses as a URL
struct WebControl;

impl ForeignControl for WebControl {
    fn load_uri(&mut self, uri: &str) -> Result<(), ControlError> {
        Url::parse(uri).map_err(|err| ControlError(format!("{}: {}", uri, err)))?;
        tracing::debug!("Web view loading {}", uri);
        Ok(())
    }

    fn label(&self) -> Option<String> {
        Some("Web Page".to_string())
    }
}

/// Sidebar listing recently visited locations
struct HistorySidebar {
    signals: ViewSignals,
    shown: usize,
}

impl NativeView for HistorySidebar {
    fn notify_location_change(&mut self, _info: &NavigationInfo, _self_originated: bool) {
        self.shown = self.signals.history().len();
    }

    fn label(&self) -> Option<String> {
        Some(format!("History ({} entries)", self.shown))
    }
}

/// Sidebar for per-location notes
struct NotesSidebar {
    location: Option<String>,
}

impl NativeView for NotesSidebar {
    fn notify_location_change(&mut self, info: &NavigationInfo, _self_originated: bool) {
        self.location = Some(info.actual.uri.clone());
    }

    fn label(&self) -> Option<String> {
        match &self.location {
            Some(uri) => Some(format!("Notes on {}", uri)),
            None => Some("Notes".to_string()),
        }
    }
}

/// Registry with a demo component for every id of the default catalog.
///
/// Directory views list on `executor`.
pub fn demo_registry(executor: &Rc<LocalExecutor<'static>>) -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();

    for (iid, style) in [("ICON_VIEW", "Icons"), ("LIST_VIEW", "List")] {
        let executor = Rc::clone(executor);
        registry.register(iid, move |signals| {
            Ok(ViewComponent::native(DirectoryView::new(
                style,
                signals,
                Rc::clone(&executor),
            )))
        });
    }

    let documents = [
        ("TEXT_VIEW", "Text"),
        ("IMAGE_VIEW", "Image"),
        ("HARDWARE_VIEW", "Hardware"),
        ("SERVICE_VIEW", "Services"),
        ("HELP_VIEW", "Help"),
    ];
    for (iid, name) in documents {
        registry.register(iid, move |signals| {
            Ok(ViewComponent::native(DocumentView { name, signals }))
        });
    }

    registry.register("SAMPLE_VIEW", |signals| {
        Ok(ViewComponent::native(SampleView { signals }))
    });
    registry.register("WEB_VIEW", |_| Ok(ViewComponent::control(WebControl)));
    registry.register("HISTORY_VIEW", |signals| {
        Ok(ViewComponent::native(HistorySidebar { signals, shown: 0 }))
    });
    registry.register("NOTES_VIEW", |_| {
        Ok(ViewComponent::native(NotesSidebar { location: None }))
    });

    registry
}
