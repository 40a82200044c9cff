//! Window navigation tests
//!
//! Runs a window against the in-memory resolver services and a registry of
//! scripted views, driving the executor and the window mailbox until both
//! are idle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use fm_core::{HistoryList, LocationChangeKind, NavigationInfo, SelectionInfo};
use fm_resolver::{
    CatalogEntry, MemoryFileInfo, MemoryMetadataStore, MemoryPreferences, NavigationResolver,
    ResolverConfig, ResolverServices, INITIAL_VIEW_KEY,
};
use fm_view::{
    ComponentRegistry, ControlError, ForeignControl, NativeView, ProgressKind, ViewComponent,
    ViewFrame, ViewFrameId, ViewSignals,
};
use fm_window::{Phase, StateChange, Window, WindowContext, WindowError, WindowFrontend};
use smol::LocalExecutor;

// ============================================================================
// SCRIPTED VIEWS
// ============================================================================

#[derive(Clone, Copy)]
enum Script {
    /// Underway then done
    Complete,
    /// Underway only
    Slow,
    /// Never reports
    Stall,
    /// Dies on the first location
    Crash,
    /// Reports a load error
    Fail,
}

type Log = Rc<RefCell<Vec<String>>>;
type Remotes = Rc<RefCell<HashMap<String, ViewSignals>>>;

struct ScriptedView {
    iid: String,
    script: Script,
    log: Log,
    signals: ViewSignals,
}

impl NativeView for ScriptedView {
    fn notify_location_change(&mut self, info: &NavigationInfo, _self_originated: bool) {
        self.log
            .borrow_mut()
            .push(format!("{} location {}", self.iid, info.actual.uri));
        match self.script {
            Script::Complete => {
                self.signals.report_progress(ProgressKind::Underway);
                self.signals.report_progress(ProgressKind::DoneOk);
            }
            Script::Slow => self.signals.report_progress(ProgressKind::Underway),
            Script::Stall => {}
            Script::Crash => self.signals.report_destroyed(),
            Script::Fail => self.signals.report_progress(ProgressKind::DoneError),
        }
    }

    fn notify_selection_change(&mut self, selection: &SelectionInfo) {
        self.log.borrow_mut().push(format!(
            "{} selection {} {}",
            self.iid,
            selection.selected_uris.len(),
            selection.self_originated
        ));
    }

    fn stop_location_change(&mut self) {
        self.log.borrow_mut().push(format!("{} stop", self.iid));
    }
}

struct Browser;

impl ForeignControl for Browser {
    fn load_uri(&mut self, _uri: &str) -> Result<(), ControlError> {
        Ok(())
    }
}

// ============================================================================
// FRONTEND
// ============================================================================

#[derive(Default)]
struct Ui {
    errors: Vec<String>,
    titles: Vec<String>,
    status: String,
    location_text: String,
    stop_allowed: bool,
    back_allowed: bool,
    up_allowed: bool,
    shown: usize,
    closed: bool,
    content_slot: Option<ViewFrameId>,
    meta_slots: Vec<ViewFrameId>,
}

struct RecordingFrontend(Rc<RefCell<Ui>>);

impl WindowFrontend for RecordingFrontend {
    fn set_title(&mut self, title: &str) {
        self.0.borrow_mut().titles.push(title.to_string());
    }

    fn set_location_text(&mut self, uri: &str) {
        self.0.borrow_mut().location_text = uri.to_string();
    }

    fn set_status(&mut self, status: &str) {
        self.0.borrow_mut().status = status.to_string();
    }

    fn allow_stop(&mut self, allowed: bool) {
        self.0.borrow_mut().stop_allowed = allowed;
    }

    fn allow_back(&mut self, allowed: bool) {
        self.0.borrow_mut().back_allowed = allowed;
    }

    fn allow_up(&mut self, allowed: bool) {
        self.0.borrow_mut().up_allowed = allowed;
    }

    fn display_error(&mut self, message: &str) {
        self.0.borrow_mut().errors.push(message.to_string());
    }

    fn set_content_view(&mut self, frame: Option<&ViewFrame>) {
        self.0.borrow_mut().content_slot = frame.map(ViewFrame::id);
    }

    fn add_meta_view(&mut self, frame: &ViewFrame) {
        self.0.borrow_mut().meta_slots.push(frame.id());
    }

    fn remove_meta_view(&mut self, frame: ViewFrameId) {
        self.0.borrow_mut().meta_slots.retain(|id| *id != frame);
    }

    fn show(&mut self) {
        self.0.borrow_mut().shown += 1;
    }

    fn close(&mut self) {
        self.0.borrow_mut().closed = true;
    }
}

// ============================================================================
// HARNESS
// ============================================================================

const A: &str = "file:///a/";
const B: &str = "file:///b/";
const C: &str = "file:///c/";
const D: &str = "file:///d/";
const LINK: &str = "file:///link/";

struct Harness {
    executor: Rc<LocalExecutor<'static>>,
    window: Window,
    history: Rc<HistoryList>,
    metadata: Rc<MemoryMetadataStore>,
    ui: Rc<RefCell<Ui>>,
    log: Log,
    remotes: Remotes,
}

fn config() -> ResolverConfig {
    ResolverConfig {
        catalog: vec![
            CatalogEntry::new(
                "x-directory/normal",
                &[("ICONVIEW", "Icons"), ("LISTVIEW", "List")],
                Some("ICONVIEW"),
            ),
            CatalogEntry::new(
                "text/html",
                &[("WEBVIEW", "Web Page"), ("TEXTVIEW", "Text")],
                Some("WEBVIEW"),
            ),
            CatalogEntry::new("text/x-crash", &[("CRASHVIEW", "Crash")], None),
            CatalogEntry::new("text/x-slow", &[("SLOWVIEW", "Slow")], None),
            CatalogEntry::new("text/x-stall", &[("STALLVIEW", "Stall")], None),
            CatalogEntry::new("text/x-fail", &[("FAILVIEW", "Fail")], None),
            CatalogEntry::new("application/x-broken", &[("BROKENVIEW", "Broken")], None),
        ],
        meta_views: vec!["HISTORYVIEW".to_string()],
        sample_view: None,
        ..ResolverConfig::default()
    }
}

fn registry(log: &Log, remotes: &Remotes) -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    let scripted = [
        ("ICONVIEW", Script::Complete),
        ("LISTVIEW", Script::Complete),
        ("TEXTVIEW", Script::Complete),
        ("CRASHVIEW", Script::Crash),
        ("SLOWVIEW", Script::Slow),
        ("STALLVIEW", Script::Stall),
        ("FAILVIEW", Script::Fail),
        // meta view progress is never honoured
        ("HISTORYVIEW", Script::Fail),
    ];
    for (iid, script) in scripted {
        let log = Rc::clone(log);
        let remotes = Rc::clone(remotes);
        registry.register(iid, move |signals: ViewSignals| {
            remotes
                .borrow_mut()
                .insert(iid.to_string(), signals.clone());
            Ok(ViewComponent::native(ScriptedView {
                iid: iid.to_string(),
                script,
                log: Rc::clone(&log),
                signals,
            }))
        });
    }
    registry.register("WEBVIEW", |_| Ok(ViewComponent::control(Browser)));
    registry
}

impl Harness {
    fn new() -> Self {
        let executor = Rc::new(LocalExecutor::new());
        let files = Rc::new(MemoryFileInfo::new());
        for uri in [A, B, C, D, "file:///a/b/"] {
            files.insert(uri, "x-directory/normal");
        }
        files.insert("file:///page.html", "text/html");
        files.insert("file:///crash.txt", "text/x-crash");
        files.insert("file:///slow.txt", "text/x-slow");
        files.insert("file:///stall.txt", "text/x-stall");
        files.insert("file:///fail.txt", "text/x-fail");
        files.insert("file:///broken.bin", "application/x-broken");
        files.insert_redirect(LINK, A, "x-directory/normal");

        let metadata = Rc::new(MemoryMetadataStore::new());
        let config = config();
        let services = ResolverServices {
            file_info: files,
            metadata: metadata.clone(),
            catalog: Rc::new(config.static_catalog()),
            preferences: Rc::new(MemoryPreferences::new()),
        };
        let resolver = NavigationResolver::new(Rc::clone(&executor), services, config);

        let log: Log = Rc::default();
        let remotes: Remotes = Rc::default();
        let history = Rc::new(HistoryList::new());
        let ui = Rc::new(RefCell::new(Ui::default()));
        let ctx = WindowContext {
            resolver,
            host: Rc::new(registry(&log, &remotes)),
            history: Rc::clone(&history),
            home_uri: A.to_string(),
        };
        let window = Window::new(ctx, Box::new(RecordingFrontend(Rc::clone(&ui))));

        Self {
            executor,
            window,
            history,
            metadata,
            ui,
            log,
            remotes,
        }
    }

    /// Harness already showing `A`
    fn at_a() -> Self {
        let mut harness = Self::new();
        harness.go(A);
        harness
    }

    fn settle(&mut self) {
        loop {
            let ticked = self.executor.try_tick();
            let dispatched = self.window.dispatch();
            if !ticked && !dispatched {
                break;
            }
        }
        assert_eq!(self.window.settle_depth(), 0);
    }

    fn go(&mut self, uri: &str) {
        self.window.open_location(uri).unwrap();
        self.settle();
    }

    fn remote(&self, iid: &str) -> ViewSignals {
        self.remotes.borrow()[iid].clone()
    }

    fn logged(&self, entry: &str) -> usize {
        self.log.borrow().iter().filter(|e| e.as_str() == entry).count()
    }
}

fn uris(list: &[Rc<fm_core::Bookmark>]) -> Vec<&str> {
    list.iter().map(|b| b.uri()).collect()
}

// ============================================================================
// COMMIT
// ============================================================================

#[test]
fn test_first_navigation_commits_and_shows() {
    let h = Harness::at_a();
    let w = &h.window;

    assert_eq!(w.current_location(), Some(A));
    assert_eq!(w.content_view_iid(), Some("ICONVIEW"));
    assert_eq!(w.phase(), Phase::Idle);
    assert!(w.is_shown());
    assert_eq!(h.ui.borrow().shown, 1);
    assert!(!h.ui.borrow().stop_allowed);
    assert_eq!(h.ui.borrow().location_text, A);
    assert_eq!(w.title(), "a");
    assert_eq!(h.ui.borrow().content_slot, w.content_view().map(ViewFrame::id));
    assert!(h.history.contains_location(A));
}

#[test]
fn test_meta_progress_ignored() {
    // the history meta view reports an error on every location
    let h = Harness::at_a();
    let metas = h.window.meta_views();
    assert_eq!(metas.len(), 1);
    assert_eq!(metas[0].iid(), "HISTORYVIEW");
    assert_eq!(metas[0].location(), Some(A));
    assert_eq!(h.ui.borrow().meta_slots, vec![metas[0].id()]);
    assert_eq!(h.window.current_location(), Some(A));
}

#[test]
fn test_foreign_control_commits() {
    let mut h = Harness::at_a();
    h.go("file:///page.html");

    assert_eq!(h.window.current_location(), Some("file:///page.html"));
    assert_eq!(h.window.content_view_iid(), Some("WEBVIEW"));
    assert_eq!(h.window.phase(), Phase::Idle);
}

#[test]
fn test_views_reused_across_locations() {
    let mut h = Harness::at_a();
    let content = h.window.content_view().map(ViewFrame::id);
    let meta = h.window.meta_views()[0].id();

    h.go(B);
    assert_eq!(h.window.content_view().map(ViewFrame::id), content);
    assert_eq!(h.window.meta_views()[0].id(), meta);
    assert_eq!(h.window.frame_count(), 2);
    assert_eq!(h.logged("ICONVIEW location file:///b/"), 1);
}

#[test]
fn test_commit_before_done_keeps_loading() {
    let mut h = Harness::at_a();
    h.go("file:///slow.txt");

    assert_eq!(h.window.current_location(), Some("file:///slow.txt"));
    assert_eq!(h.window.phase(), Phase::LoadingViews);
    assert!(h.ui.borrow().stop_allowed);

    h.window.stop();
    assert_eq!(h.window.phase(), Phase::Idle);
    assert_eq!(h.window.current_location(), Some("file:///slow.txt"));
    assert_eq!(h.logged("SLOWVIEW stop"), 1);
    assert!(!h.ui.borrow().stop_allowed);
}

#[test]
fn test_load_error_before_commit_rolls_back() {
    let mut h = Harness::at_a();
    h.go("file:///fail.txt");

    // FAILVIEW reports an error without any initial progress
    assert_eq!(h.window.current_location(), Some(A));
    assert_eq!(h.window.content_view_iid(), Some("ICONVIEW"));
}

// ============================================================================
// BACK / FORWARD
// ============================================================================

#[test]
fn test_standard_navigation_updates_lists() {
    let mut h = Harness::at_a();
    h.go(B);
    h.go(C);

    assert_eq!(uris(&h.window.back_list()), vec![B, A]);
    assert!(h.window.forward_list().is_empty());
    assert!(h.ui.borrow().back_allowed);
    assert_eq!(h.history.len(), 3);
}

#[test]
fn test_back_forward_round_trip() {
    let mut h = Harness::at_a();
    h.go(B);
    let b = h.window.current_bookmark().unwrap();

    h.window.go_back().unwrap();
    h.settle();
    assert_eq!(h.window.current_location(), Some(A));
    assert!(h.window.back_list().is_empty());
    assert_eq!(uris(&h.window.forward_list()), vec![B]);

    h.window.go_forward().unwrap();
    h.settle();
    assert_eq!(h.window.current_location(), Some(B));
    assert!(h.window.forward_list().is_empty());
    assert_eq!(uris(&h.window.back_list()), vec![A]);
    assert!(Rc::ptr_eq(&h.window.current_bookmark().unwrap(), &b));
}

#[test]
fn test_back_by_distance() {
    let mut h = Harness::at_a();
    h.go(B);
    h.go(C);
    h.go(D);

    h.window
        .back_or_forward(LocationChangeKind::Back, 2)
        .unwrap();
    h.settle();

    assert_eq!(h.window.current_location(), Some(A));
    assert!(h.window.back_list().is_empty());
    assert_eq!(uris(&h.window.forward_list()), vec![B, C, D]);
    assert_eq!(h.window.base_page_index(), 3);
}

#[test]
fn test_history_distance_validated() {
    let mut h = Harness::at_a();
    h.go(B);

    assert_eq!(
        h.window.back_or_forward(LocationChangeKind::Back, 1),
        Err(WindowError::NoSuchHistoryEntry {
            kind: LocationChangeKind::Back,
            distance: 1,
            len: 1,
        })
    );
    assert!(matches!(
        h.window.go_forward(),
        Err(WindowError::NoSuchHistoryEntry { len: 0, .. })
    ));
    assert_eq!(
        h.window.back_or_forward(LocationChangeKind::Reload, 0),
        Err(WindowError::NotAHistoryMove(LocationChangeKind::Reload))
    );
    assert_eq!(h.window.phase(), Phase::Idle);
}

#[test]
fn test_noop_navigation_keeps_lists() {
    let mut h = Harness::at_a();
    h.go(B);
    let b = h.window.current_bookmark().unwrap();

    h.go(B);
    assert_eq!(h.window.back_list().len(), 1);
    assert!(h.window.forward_list().is_empty());
    assert!(Rc::ptr_eq(&h.window.current_bookmark().unwrap(), &b));
}

#[test]
fn test_reload_keeps_lists() {
    let mut h = Harness::at_a();
    h.go(B);
    h.window.go_back().unwrap();
    h.settle();

    h.window.reload().unwrap();
    h.settle();
    assert_eq!(h.window.current_location(), Some(A));
    assert!(h.window.back_list().is_empty());
    assert_eq!(uris(&h.window.forward_list()), vec![B]);
}

#[test]
fn test_clear_lists() {
    let mut h = Harness::at_a();
    h.go(B);
    h.go(C);
    h.window.go_back().unwrap();
    h.settle();

    h.window.clear_forward_list();
    assert!(h.window.forward_list().is_empty());
    h.window.clear_back_list();
    assert!(h.window.back_list().is_empty());
    assert!(!h.ui.borrow().back_allowed);
    assert_eq!(h.window.base_page_index(), 0);
}

#[test]
fn test_double_begin_commits_once() {
    let mut h = Harness::at_a();
    h.window.open_location(B).unwrap();
    h.window.open_location(B).unwrap();
    h.settle();

    assert_eq!(h.window.current_location(), Some(B));
    assert_eq!(uris(&h.window.back_list()), vec![A]);
    assert_eq!(h.logged("ICONVIEW location file:///b/"), 1);
    assert_eq!(h.history.len(), 2);
}

#[test]
fn test_superseded_request_never_commits() {
    let mut h = Harness::at_a();
    h.window.open_location(B).unwrap();
    h.window.open_location(C).unwrap();
    h.settle();

    assert_eq!(h.window.current_location(), Some(C));
    assert_eq!(uris(&h.window.back_list()), vec![A]);
    assert_eq!(h.logged("ICONVIEW location file:///b/"), 0);
}

// ============================================================================
// ROLLBACK AND FAILURES
// ============================================================================

#[test]
fn test_view_error_rolls_back() {
    let mut h = Harness::at_a();
    let bookmark = h.window.current_bookmark().unwrap();
    let content = h.window.content_view().map(ViewFrame::id);
    let frames = h.window.frame_count();

    h.go("file:///crash.txt");

    assert_eq!(h.window.current_location(), Some(A));
    assert!(Rc::ptr_eq(&h.window.current_bookmark().unwrap(), &bookmark));
    assert_eq!(h.window.content_view().map(ViewFrame::id), content);
    assert_eq!(h.window.frame_count(), frames);
    assert!(h.window.back_list().is_empty());
    assert_eq!(h.window.phase(), Phase::Idle);
    assert!(h.ui.borrow().errors.is_empty());
    assert!(!h.ui.borrow().stop_allowed);
    assert_eq!(h.ui.borrow().location_text, A);
    // the reused meta view was put back on the old location
    assert_eq!(h.window.meta_views()[0].location(), Some(A));
}

#[test]
fn test_activation_failure_rolls_back() {
    let mut h = Harness::at_a();
    h.go("file:///broken.bin");

    assert_eq!(h.window.current_location(), Some(A));
    assert!(h.ui.borrow().errors.is_empty());
    assert_eq!(h.window.phase(), Phase::Idle);
}

#[test]
fn test_stop_before_commit_reverts() {
    let mut h = Harness::at_a();
    let frames = h.window.frame_count();
    h.window.open_location("file:///stall.txt").unwrap();
    h.settle();
    assert_eq!(h.window.phase(), Phase::LoadingViews);
    assert_eq!(h.window.pending_uri(), Some("file:///stall.txt"));

    h.window.stop();
    assert_eq!(h.window.phase(), Phase::Idle);
    assert_eq!(h.window.current_location(), Some(A));
    assert_eq!(h.window.frame_count(), frames);
    assert_eq!(h.logged("ICONVIEW stop"), 1);
}

#[test]
fn test_resolution_failure_shows_error() {
    let mut h = Harness::at_a();
    h.go("file:///missing");

    assert!(!h.window.is_closed());
    assert_eq!(h.window.current_location(), Some(A));
    assert_eq!(
        h.ui.borrow().errors,
        vec!["Couldn't find \"file:///missing\". Please check the spelling and try again."]
    );
    assert!(!h.ui.borrow().stop_allowed);
}

#[test]
fn test_first_navigation_failure_closes_window() {
    let mut h = Harness::new();
    h.go("file:///missing");

    assert!(h.window.is_closed());
    assert!(h.ui.borrow().closed);
    assert_eq!(h.ui.borrow().shown, 0);
    assert_eq!(h.window.open_location(A), Err(WindowError::Closed));
}

#[test]
fn test_deferred_events_wait_for_dispatch() {
    let mut h = Harness::at_a();
    h.window.set_state_info(StateChange::ResetToIdle);
    assert!(h.window.has_pending_work());

    assert!(h.window.dispatch());
    assert!(!h.window.has_pending_work());
    assert_eq!(h.window.settle_depth(), 0);
}

// ============================================================================
// VIEW REQUESTS
// ============================================================================

#[test]
fn test_view_requests_location() {
    let mut h = Harness::at_a();
    h.remote("ICONVIEW").request_location_change(B);
    h.settle();

    assert_eq!(h.window.current_location(), Some(B));
    assert_eq!(uris(&h.window.back_list()), vec![A]);
}

#[test]
fn test_title_only_from_content_view() {
    let mut h = Harness::at_a();
    h.remote("HISTORYVIEW").request_title_change("Sidebar");
    h.settle();
    assert_eq!(h.window.title(), "a");

    h.remote("ICONVIEW").request_title_change("Home");
    h.settle();
    assert_eq!(h.window.title(), "Home");
    assert_eq!(h.window.current_bookmark().unwrap().name(), "Home");
    assert_eq!(h.ui.borrow().titles.last().map(String::as_str), Some("Home"));
}

#[test]
fn test_status_and_selection() {
    let mut h = Harness::at_a();
    h.remote("HISTORYVIEW").request_status_change("3 items");
    h.remote("ICONVIEW").request_selection_change(&["file:///a/x".to_string()]);
    h.settle();

    assert_eq!(h.ui.borrow().status, "3 items");
    assert_eq!(h.window.selection(), ["file:///a/x".to_string()]);
    assert_eq!(h.logged("ICONVIEW selection 1 true"), 1);
    assert_eq!(h.logged("HISTORYVIEW selection 1 false"), 1);
}

#[test]
fn test_view_destroyed_while_idle() {
    let mut h = Harness::at_a();
    h.remote("ICONVIEW").report_destroyed();
    h.settle();

    assert!(h.window.content_view().is_none());
    assert_eq!(h.ui.borrow().content_slot, None);
    assert_eq!(h.window.current_location(), Some(A));
    assert_eq!(h.window.phase(), Phase::Idle);
}

#[test]
fn test_meta_view_destroyed_while_idle() {
    let mut h = Harness::at_a();
    h.remote("HISTORYVIEW").report_destroyed();
    h.settle();

    let metas: Vec<&str> = h.window.meta_views().iter().map(|frame| frame.iid()).collect();
    assert!(!metas.contains(&"HISTORYVIEW"));
    assert_eq!(h.window.content_view_iid(), Some("ICONVIEW"));
    assert_eq!(h.logged("ICONVIEW stop"), 0);
    assert_eq!(h.window.current_location(), Some(A));
    assert_eq!(h.window.phase(), Phase::Idle);
}

// ============================================================================
// OTHER OPERATIONS
// ============================================================================

#[test]
fn test_switch_content_view() {
    let mut h = Harness::at_a();
    h.window.switch_content_view("LISTVIEW").unwrap();
    h.settle();

    assert_eq!(h.window.content_view_iid(), Some("LISTVIEW"));
    assert_eq!(h.window.current_location(), Some(A));
    assert!(h.window.back_list().is_empty());
    assert_eq!(
        h.metadata.get(A, INITIAL_VIEW_KEY).as_deref(),
        Some("LISTVIEW")
    );
    assert_eq!(
        h.window.switch_content_view("WEBVIEW"),
        Err(WindowError::UnknownView("WEBVIEW".to_string()))
    );

    // the next visit starts with the remembered view
    h.go("file:///page.html");
    h.go(A);
    assert_eq!(h.window.content_view_iid(), Some("LISTVIEW"));
}

#[test]
fn test_switch_content_view_through_redirect() {
    let mut h = Harness::new();
    h.go(LINK);
    assert_eq!(h.window.current_location(), Some(A));
    h.window.switch_content_view("LISTVIEW").unwrap();
    h.settle();

    assert_eq!(h.metadata.get(LINK, INITIAL_VIEW_KEY).as_deref(), Some("LISTVIEW"));
    assert_eq!(h.metadata.get(A, INITIAL_VIEW_KEY).as_deref(), Some("LISTVIEW"));

    h.go("file:///page.html");
    h.go(LINK);
    assert_eq!(h.window.content_view_iid(), Some("LISTVIEW"));
}

#[test]
fn test_go_up_and_home() {
    let mut h = Harness::new();
    h.go("file:///a/b/");
    assert!(h.ui.borrow().up_allowed);

    h.window.go_up().unwrap();
    h.settle();
    assert_eq!(h.window.current_location(), Some(A));

    h.go(C);
    h.window.go_home().unwrap();
    h.settle();
    assert_eq!(h.window.current_location(), Some(A));
}

#[test]
fn test_reload_without_location() {
    let mut h = Harness::new();
    assert_eq!(h.window.reload(), Err(WindowError::NoCurrentLocation));
    assert_eq!(h.window.go_up(), Err(WindowError::NoCurrentLocation));
}

#[test]
fn test_close_releases_views() {
    let mut h = Harness::at_a();
    let signals = h.remote("ICONVIEW");
    h.window.close();

    assert!(h.window.is_closed());
    assert_eq!(h.window.frame_count(), 0);
    assert!(!signals.is_connected());
    assert_eq!(h.window.go_home(), Err(WindowError::Closed));
}
