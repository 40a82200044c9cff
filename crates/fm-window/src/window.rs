//! Window State Machine
//!
//! A window moves through IDLE, RESOLVING and LOADING_VIEWS for each
//! location change. Events are recorded with [`Window::set_state_info`] and
//! acted on by a settle pass that runs a fixed list of rules until none of
//! them fires:
//!
//! 1. Detach views that reported an error
//! 2. Roll back when a reset is pending
//! 3. Activate the views named by the pending navigation info
//! 4. Push the location into freshly activated views
//! 5. Commit once the new content view shows progress
//! 6. Reset when the content view finished, successfully or not
//!
//! A clean finish and an error both end in the reset of rule 2; the
//! `cv_progress_done` and `cv_progress_error` flags stay distinct so the
//! reset can tell them apart. Views that were never shown are reverted to
//! the committed location, and any reset other than a clean finish stops
//! the committed content view.

use std::collections::BTreeMap;
use std::rc::Rc;

use fm_core::{
    display_name, normalize_uri, parent_uri, Bookmark, HistoryList, LocationChangeKind,
    NavigationInfo, SelectionInfo,
};
use fm_resolver::{NavigationResolver, ResolveHandle, INITIAL_VIEW_KEY};
use fm_view::{ProgressKind, ViewEvent, ViewEventSink, ViewFrame, ViewFrameId, ViewHost, ViewRole};

use crate::error::WindowError;
use crate::frontend::WindowFrontend;
use crate::lists::BackForwardLists;
use crate::mailbox::{post_resolved, Mailbox, WindowMessage};
use crate::state::{LoadState, Phase, Request, StateChange};

/// Services a window is built with
#[derive(Clone)]
pub struct WindowContext {
    pub resolver: NavigationResolver,
    pub host: Rc<dyn ViewHost>,
    /// Process-wide history list
    pub history: Rc<HistoryList>,
    pub home_uri: String,
}

/// One file-manager window
pub struct Window {
    ctx: WindowContext,
    frontend: Box<dyn WindowFrontend>,
    mailbox: Mailbox,
    sink: Rc<dyn ViewEventSink>,

    /// Every live frame, pending or committed
    frames: BTreeMap<ViewFrameId, ViewFrame>,
    next_frame: u64,

    // Committed state
    current_info: Option<NavigationInfo>,
    current_bookmark: Option<Rc<Bookmark>>,
    content_view: Option<ViewFrameId>,
    meta_views: Vec<ViewFrameId>,
    lists: BackForwardLists,
    selection: Vec<String>,
    title: String,

    // Request in flight
    load: LoadState,
    resolve: Option<ResolveHandle>,
    serial: u64,

    /// Settle depth; never above one
    making_changes: u32,
    /// Changes recorded since the last settle pass
    made_changes: u32,
    shown: bool,
    closed: bool,
}

impl Window {
    pub fn new(ctx: WindowContext, frontend: Box<dyn WindowFrontend>) -> Self {
        let mailbox = Mailbox::new();
        let sink: Rc<dyn ViewEventSink> = Rc::new(mailbox.sink());
        Self {
            ctx,
            frontend,
            mailbox,
            sink,
            frames: BTreeMap::new(),
            next_frame: 1,
            current_info: None,
            current_bookmark: None,
            content_view: None,
            meta_views: Vec::new(),
            lists: BackForwardLists::new(),
            selection: Vec::new(),
            title: String::new(),
            load: LoadState::default(),
            resolve: None,
            serial: 0,
            making_changes: 0,
            made_changes: 0,
            shown: false,
            closed: false,
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Standard navigation to `uri`
    pub fn open_location(&mut self, uri: &str) -> Result<(), WindowError> {
        self.begin_location_change(uri, LocationChangeKind::Standard, 0, None)
    }

    pub fn go_back(&mut self) -> Result<(), WindowError> {
        self.back_or_forward(LocationChangeKind::Back, 0)
    }

    pub fn go_forward(&mut self) -> Result<(), WindowError> {
        self.back_or_forward(LocationChangeKind::Forward, 0)
    }

    /// Jump to the back or forward entry at `distance` (0 is the nearest)
    pub fn back_or_forward(
        &mut self,
        kind: LocationChangeKind,
        distance: usize,
    ) -> Result<(), WindowError> {
        self.ensure_open()?;
        let list = match kind {
            LocationChangeKind::Back => self.lists.back(),
            LocationChangeKind::Forward => self.lists.forward(),
            other => return Err(WindowError::NotAHistoryMove(other)),
        };
        let uri = list
            .get(distance)
            .map(|bookmark| bookmark.uri().to_string())
            .ok_or(WindowError::NoSuchHistoryEntry {
                kind,
                distance,
                len: list.len(),
            })?;
        self.begin_location_change(&uri, kind, distance, None)
    }

    pub fn reload(&mut self) -> Result<(), WindowError> {
        self.ensure_open()?;
        let uri = self
            .current_location()
            .ok_or(WindowError::NoCurrentLocation)?
            .to_string();
        self.begin_location_change(&uri, LocationChangeKind::Reload, 0, None)
    }

    /// Navigate to the parent of the current location
    pub fn go_up(&mut self) -> Result<(), WindowError> {
        self.ensure_open()?;
        let uri = self
            .current_location()
            .ok_or(WindowError::NoCurrentLocation)?
            .to_string();
        let parent = parent_uri(&uri).ok_or(WindowError::NoParentLocation(uri))?;
        self.open_location(&parent)
    }

    pub fn go_home(&mut self) -> Result<(), WindowError> {
        let home = self.ctx.home_uri.clone();
        self.open_location(&home)
    }

    /// Abandon the request in flight
    pub fn stop(&mut self) {
        if self.closed {
            return;
        }
        self.set_state_info(StateChange::ResetToIdle);
        self.set_state_info(StateChange::SyncState);
    }

    /// Show the current location with another candidate view.
    ///
    /// The choice is remembered in the location's metadata so the next
    /// visit starts with it.
    pub fn switch_content_view(&mut self, iid: &str) -> Result<(), WindowError> {
        self.ensure_open()?;
        let mut info = self
            .current_info
            .clone()
            .ok_or(WindowError::NoCurrentLocation)?;
        if !info.has_candidate(iid) {
            return Err(WindowError::UnknownView(iid.to_string()));
        }

        // resolves read metadata under the requested location
        let metadata = self.ctx.resolver.metadata();
        metadata.set_metadata(&info.requested.uri, INITIAL_VIEW_KEY, Some(iid));
        if info.actual.uri != info.requested.uri {
            metadata.set_metadata(&info.actual.uri, INITIAL_VIEW_KEY, Some(iid));
        }
        if self.content_view_iid() == Some(iid) {
            return Ok(());
        }

        tracing::info!("Switching {} to view {}", info.actual.uri, iid);
        self.supersede();
        self.start_request(Request {
            uri: info.actual.uri.clone(),
            kind: LocationChangeKind::Reload,
            distance: 0,
            origin: None,
        });
        info.initial_content_iid = Some(iid.to_string());
        self.set_state_info(StateChange::NavigationInfoReceived(info));
        Ok(())
    }

    fn begin_location_change(
        &mut self,
        uri: &str,
        kind: LocationChangeKind,
        distance: usize,
        origin: Option<ViewFrameId>,
    ) -> Result<(), WindowError> {
        self.ensure_open()?;
        debug_assert_eq!(self.making_changes, 0, "location change begun while settling");

        let uri = normalize_uri(uri);
        tracing::info!("Beginning {:?} location change to {}", kind, uri);

        self.supersede();
        self.start_request(Request {
            uri: uri.clone(),
            kind,
            distance,
            origin,
        });

        let sender = self.mailbox.sender();
        let serial = self.serial;
        let referring_iid = self.content_view_iid().map(str::to_string);
        let handle = self.ctx.resolver.resolve(
            &uri,
            self.current_info.as_ref(),
            referring_iid.as_deref(),
            move |info| post_resolved(&sender, serial, info),
        );
        self.resolve = Some(handle);
        Ok(())
    }

    /// Roll back any request in flight before starting another
    fn supersede(&mut self) {
        if self.load.request.is_some() {
            tracing::debug!("Superseding request for {}", self.pending_uri().unwrap_or("?"));
            self.set_state_info(StateChange::ResetToIdle);
            self.set_state_info(StateChange::SyncState);
        }
    }

    fn start_request(&mut self, request: Request) {
        self.serial += 1;
        self.frontend.set_location_text(&request.uri);
        self.frontend.allow_stop(true);
        self.load.request = Some(request);
    }

    fn ensure_open(&self) -> Result<(), WindowError> {
        if self.closed {
            Err(WindowError::Closed)
        } else {
            Ok(())
        }
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Record an event.
    ///
    /// The settle pass runs at the next [`dispatch`](Self::dispatch), or
    /// right away for [`StateChange::SyncState`].
    pub fn set_state_info(&mut self, change: StateChange) {
        let sync = change == StateChange::SyncState;
        self.apply(change);
        self.made_changes += 1;
        if sync {
            self.update_state();
        }
    }

    fn apply(&mut self, change: StateChange) {
        let load = &mut self.load;
        match change {
            StateChange::NavigationInfoReceived(info) => load.pending_info = Some(info),
            StateChange::ViewError(frame) => {
                if !load.error_views.contains(&frame) {
                    load.error_views.push(frame);
                }
            }
            StateChange::NewContentViewActivated(frame) => load.new_content_view = Some(frame),
            StateChange::NewMetaViewActivated(frame) => {
                if !load.new_meta_views.contains(&frame) {
                    load.new_meta_views.push(frame);
                }
            }
            StateChange::ProgressInitial => load.cv_progress_initial = true,
            StateChange::ProgressError => load.cv_progress_error = true,
            StateChange::ProgressDone => load.cv_progress_done = true,
            StateChange::ResetToIdle => load.reset_to_idle = true,
            StateChange::SyncState => {}
        }
    }

    /// Apply queued messages and settle.
    ///
    /// Returns whether anything was processed.
    pub fn dispatch(&mut self) -> bool {
        let mut progressed = false;
        loop {
            while let Some(message) = self.mailbox.try_recv() {
                progressed = true;
                self.handle_message(message);
            }
            if self.made_changes == 0 {
                break;
            }
            progressed = true;
            self.update_state();
        }
        progressed
    }

    fn handle_message(&mut self, message: WindowMessage) {
        if self.closed {
            tracing::trace!("Closed window dropping {:?}", message);
            return;
        }
        match message {
            WindowMessage::Resolved { serial, info } => self.handle_resolved(serial, info),
            WindowMessage::View { frame, event } => self.handle_view_event(frame, event),
        }
    }

    fn handle_resolved(&mut self, serial: u64, info: NavigationInfo) {
        if serial != self.serial || self.load.request.is_none() || self.load.pending_info.is_some() {
            tracing::trace!("Ignoring stale resolve result for {}", info.uri());
            return;
        }
        self.resolve = None;

        match info.error() {
            None => self.set_state_info(StateChange::NavigationInfoReceived(info)),
            Some(error) => {
                self.frontend.display_error(&error.to_string());
                if self.shown {
                    self.set_state_info(StateChange::ResetToIdle);
                } else {
                    tracing::info!("First location of window failed, closing it");
                    self.close();
                }
            }
        }
    }

    fn handle_view_event(&mut self, frame: ViewFrameId, event: ViewEvent) {
        if !self.frames.contains_key(&frame) {
            tracing::trace!("Ignoring {:?} from released {}", event, frame);
            return;
        }

        match event {
            ViewEvent::Progress(progress) => {
                if self.load.new_content_view != Some(frame) {
                    tracing::trace!("Ignoring progress from inactive {}", frame);
                    return;
                }
                let change = match progress {
                    ProgressKind::Underway => StateChange::ProgressInitial,
                    ProgressKind::DoneOk => StateChange::ProgressDone,
                    ProgressKind::DoneError => {
                        tracing::warn!("{} failed to load its location", frame);
                        StateChange::ProgressError
                    }
                };
                self.set_state_info(change);
            }
            ViewEvent::TitleChange(title) => {
                if self.content_view == Some(frame) {
                    self.set_title(&title);
                } else if self.load.new_content_view == Some(frame) {
                    self.load.pending_title = Some(title);
                } else {
                    tracing::trace!("Ignoring title from {}", frame);
                }
            }
            ViewEvent::StatusChange(status) => self.frontend.set_status(&status),
            ViewEvent::SelectionChange(uris) => self.set_selection(uris, Some(frame)),
            ViewEvent::LocationChange(uri) => {
                if let Err(err) =
                    self.begin_location_change(&uri, LocationChangeKind::Standard, 0, Some(frame))
                {
                    tracing::warn!("Location request from {} refused: {}", frame, err);
                }
            }
            ViewEvent::Destroyed => self.set_state_info(StateChange::ViewError(frame)),
        }
    }

    /// Replace the selection and push it into every live view
    pub fn set_selection(&mut self, uris: Vec<String>, origin: Option<ViewFrameId>) {
        for (id, frame) in self.frames.iter_mut() {
            frame.notify_selection(&SelectionInfo {
                selected_uris: uris.clone(),
                self_originated: origin == Some(*id),
            });
        }
        self.selection = uris;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.frontend.set_title(title);
        if let Some(bookmark) = &self.current_bookmark {
            bookmark.set_name(title);
        }
    }

    // ------------------------------------------------------------------
    // Settling
    // ------------------------------------------------------------------

    fn update_state(&mut self) {
        if self.making_changes > 0 {
            self.made_changes += 1;
            return;
        }

        self.making_changes += 1;
        while self.made_changes > 0 {
            self.made_changes = 0;
            self.settle_pass();
        }
        self.making_changes -= 1;
    }

    fn settle_pass(&mut self) {
        if !self.load.error_views.is_empty() {
            self.detach_failed_views();
            self.made_changes += 1;
        }

        if self.load.reset_to_idle {
            self.rollback();
            self.made_changes += 1;
        }

        if self.load.pending_info.is_some()
            && !self.load.view_activation_complete
            && !self.load.view_bombed_out
        {
            self.activate_views();
            self.made_changes += 1;
        }

        if self.load.view_activation_complete
            && !self.load.sent_update_view
            && !self.load.view_bombed_out
        {
            self.update_views();
            self.made_changes += 1;
        }

        if self.load.view_activation_complete
            && !self.load.view_bombed_out
            && !self.load.cv_progress_error
            && (self.load.cv_progress_initial || self.load.cv_progress_done)
            && !self.load.views_shown
        {
            self.commit();
            self.made_changes += 1;
        }

        if (self.load.cv_progress_done || self.load.cv_progress_error) && !self.load.reset_to_idle {
            self.load.reset_to_idle = true;
            self.made_changes += 1;
        }
    }

    fn detach_failed_views(&mut self) {
        for frame in std::mem::take(&mut self.load.error_views) {
            let pending = self.load.is_pending_view(frame);
            let committed = self.is_committed(frame);
            if !pending && !committed {
                tracing::trace!("Error from unknown {}", frame);
                continue;
            }
            tracing::warn!("View {} failed", frame);

            if self.load.new_content_view == Some(frame) {
                self.load.new_content_view = None;
                self.load.reset_to_idle = true;
            }
            self.load.new_meta_views.retain(|id| *id != frame);

            if self.content_view == Some(frame) {
                self.content_view = None;
                self.frontend.set_content_view(None);
            }
            if let Some(index) = self.meta_views.iter().position(|id| *id == frame) {
                self.meta_views.remove(index);
                self.frontend.remove_meta_view(frame);
            }
            self.release_frame(frame);

            self.load.cv_progress_error = true;
            self.load.view_bombed_out = true;
        }
    }

    fn rollback(&mut self) {
        if let Some(mut handle) = self.resolve.take() {
            handle.cancel();
        }
        let load = std::mem::take(&mut self.load);
        tracing::debug!(
            "Resetting to idle (done: {}, error: {}, shown: {})",
            load.cv_progress_done,
            load.cv_progress_error,
            load.views_shown
        );

        if !load.views_shown {
            let old = self.current_info.clone();
            let touched = load
                .new_content_view
                .iter()
                .chain(load.new_meta_views.iter())
                .copied();
            for frame in touched {
                if !self.is_committed(frame) {
                    self.release_frame(frame);
                } else if load.sent_update_view {
                    if let (Some(info), Some(view)) = (&old, self.frames.get_mut(&frame)) {
                        view.notify_location(info, false);
                    }
                }
            }

            if load.request.is_some() {
                let uri = self.current_location().unwrap_or_default().to_string();
                let selected = self.content_view_iid().map(str::to_string);
                self.frontend.set_location_text(&uri);
                self.frontend.set_title(&self.title);
                if let Some(info) = &self.current_info {
                    self.frontend
                        .set_view_menu(&info.content_identifiers, selected.as_deref());
                }
            }
        }

        // an idle sidebar failure leaves the content view alone
        let in_flight = load.request.is_some() || load.view_activation_complete;
        if in_flight && !load.completed_cleanly() {
            if let Some(view) = self.content_view.and_then(|id| self.frames.get_mut(&id)) {
                view.stop_loading();
            }
        }

        self.frontend.allow_stop(false);
        self.update_affordances();
    }

    fn activate_views(&mut self) {
        self.load.view_activation_complete = true;
        let Some(info) = self.load.pending_info.clone() else {
            return;
        };

        let initial = info
            .initial_content_iid
            .clone()
            .or_else(|| info.content_identifiers.first().map(|view| view.iid.clone()));
        debug_assert!(initial.is_some(), "navigation info for {} names no content view", info.uri());
        self.frontend
            .set_view_menu(&info.content_identifiers, initial.as_deref());

        match initial.and_then(|iid| self.obtain_frame(&iid, ViewRole::Content)) {
            Some(frame) => self.apply(StateChange::NewContentViewActivated(frame)),
            None => self.mark_bombed_out(),
        }

        for iid in &info.meta_iids {
            match self.obtain_frame(iid, ViewRole::Meta) {
                Some(frame) => self.apply(StateChange::NewMetaViewActivated(frame)),
                None => self.mark_bombed_out(),
            }
        }
    }

    /// Reuse a committed frame showing `iid`, else load a new one
    fn obtain_frame(&mut self, iid: &str, role: ViewRole) -> Option<ViewFrameId> {
        let shows = |id: &ViewFrameId| self.frames.get(id).is_some_and(|frame| frame.iid() == iid);
        let reusable = match role {
            ViewRole::Content => self.content_view.filter(|id| shows(id)),
            ViewRole::Meta => self.meta_views.iter().copied().find(|id| shows(id)),
        };
        if let Some(id) = reusable {
            tracing::debug!("Reusing {} for {}", id, iid);
            return Some(id);
        }

        let id = ViewFrameId(self.next_frame);
        self.next_frame += 1;
        match ViewFrame::load(
            self.ctx.host.as_ref(),
            id,
            iid,
            role,
            Rc::clone(&self.sink),
            Rc::clone(&self.ctx.history),
        ) {
            Ok(frame) => {
                self.frames.insert(id, frame);
                Some(id)
            }
            Err(err) => {
                tracing::warn!("{}", err);
                None
            }
        }
    }

    fn mark_bombed_out(&mut self) {
        self.load.view_bombed_out = true;
        self.load.cv_progress_error = true;
    }

    fn update_views(&mut self) {
        self.load.sent_update_view = true;
        let Some(info) = self
            .load
            .pending_info
            .clone()
            .or_else(|| self.current_info.clone())
        else {
            return;
        };

        let origin = self.load.request.as_ref().and_then(|request| request.origin);
        let targets: Vec<ViewFrameId> = self
            .load
            .new_content_view
            .iter()
            .chain(self.load.new_meta_views.iter())
            .copied()
            .collect();
        for id in targets {
            if let Some(frame) = self.frames.get_mut(&id) {
                frame.notify_location(&info, origin == Some(id));
            }
        }
    }

    fn commit(&mut self) {
        self.load.views_shown = true;
        let Some(info) = self.load.pending_info.take() else {
            return;
        };

        if let Some(new) = self.load.new_content_view {
            if self.content_view != Some(new) {
                if let Some(old) = self.content_view.take() {
                    self.release_frame(old);
                }
                self.content_view = Some(new);
                self.frontend.set_content_view(self.frames.get(&new));
            }
        }

        let kept = self.load.new_meta_views.clone();
        let old_meta = std::mem::replace(&mut self.meta_views, kept.clone());
        for id in old_meta.iter().filter(|id| !kept.contains(id)) {
            self.frontend.remove_meta_view(*id);
            self.release_frame(*id);
        }
        for id in kept.iter().filter(|id| !old_meta.contains(id)) {
            if let Some(frame) = self.frames.get(id) {
                self.frontend.add_meta_view(frame);
            }
        }

        let (kind, distance) = self
            .load
            .request
            .as_ref()
            .map_or((LocationChangeKind::Standard, 0), |r| (r.kind, r.distance));
        let bookmark = self.advance_history(kind, distance, &info.actual.uri);
        self.ctx.history.add(&bookmark);
        self.current_bookmark = Some(bookmark);

        tracing::info!(
            "Committed {} with {}",
            info.actual.uri,
            self.content_view_iid().unwrap_or("no view")
        );
        self.frontend.set_location_text(&info.actual.uri);
        self.current_info = Some(info);

        let title = match self.load.pending_title.take() {
            Some(title) => title,
            None => self
                .current_bookmark
                .as_ref()
                .map(|bookmark| bookmark.name())
                .unwrap_or_default(),
        };
        self.set_title(&title);
        self.update_affordances();

        if !self.shown {
            self.shown = true;
            self.frontend.show();
        }
    }

    /// Update the back/forward lists for a committed request and return
    /// the bookmark for the new current location
    fn advance_history(&mut self, kind: LocationChangeKind, distance: usize, uri: &str) -> Rc<Bookmark> {
        let current = self.current_bookmark.clone();
        let moved = match kind {
            LocationChangeKind::Back => self.lists.go_back(current.clone(), distance),
            LocationChangeKind::Forward => self.lists.go_forward(current.clone(), distance),
            LocationChangeKind::Standard | LocationChangeKind::Reload => None,
        };
        if let Some(bookmark) = moved {
            return bookmark;
        }
        if matches!(kind, LocationChangeKind::Back | LocationChangeKind::Forward) {
            tracing::warn!("History entry {} vanished, recording {} as a new visit", distance, uri);
        }

        match current {
            Some(bookmark) if bookmark.uri() == uri => bookmark,
            outgoing => {
                if kind != LocationChangeKind::Reload {
                    self.lists.push(outgoing);
                }
                Bookmark::new(uri, &display_name(uri))
            }
        }
    }

    fn update_affordances(&mut self) {
        let can_go_up = self.current_location().and_then(parent_uri).is_some();
        self.frontend.allow_back(self.lists.can_go_back());
        self.frontend.allow_forward(self.lists.can_go_forward());
        self.frontend.allow_up(can_go_up);
    }

    fn is_committed(&self, frame: ViewFrameId) -> bool {
        self.content_view == Some(frame) || self.meta_views.contains(&frame)
    }

    fn release_frame(&mut self, frame: ViewFrameId) {
        if let Some(mut view) = self.frames.remove(&frame) {
            view.destroy();
        }
    }

    // ------------------------------------------------------------------
    // Lists and lifecycle
    // ------------------------------------------------------------------

    pub fn clear_back_list(&mut self) {
        self.lists.clear_back();
        self.update_affordances();
    }

    pub fn clear_forward_list(&mut self) {
        self.lists.clear_forward();
        self.update_affordances();
    }

    /// Back list, nearest first
    pub fn back_list(&self) -> Vec<Rc<Bookmark>> {
        self.lists.back().iter().cloned().collect()
    }

    /// Forward list, nearest first
    pub fn forward_list(&self) -> Vec<Rc<Bookmark>> {
        self.lists.forward().iter().cloned().collect()
    }

    /// Index of the current location in the combined forward + back list
    pub fn base_page_index(&self) -> usize {
        self.lists.forward().len()
    }

    /// Release every view and close the frontend
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        if let Some(mut handle) = self.resolve.take() {
            handle.cancel();
        }
        self.load = LoadState::default();
        self.made_changes = 0;
        self.content_view = None;
        self.meta_views.clear();
        for (_, mut frame) in std::mem::take(&mut self.frames) {
            frame.destroy();
        }
        self.closed = true;
        self.frontend.close();
        tracing::info!("Window closed");
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.load.phase()
    }

    /// Committed location
    pub fn current_location(&self) -> Option<&str> {
        self.current_info.as_ref().map(|info| info.actual.uri.as_str())
    }

    pub fn current_info(&self) -> Option<&NavigationInfo> {
        self.current_info.as_ref()
    }

    pub fn current_bookmark(&self) -> Option<Rc<Bookmark>> {
        self.current_bookmark.clone()
    }

    /// Location of the request in flight
    pub fn pending_uri(&self) -> Option<&str> {
        self.load.request.as_ref().map(|request| request.uri.as_str())
    }

    pub fn content_view(&self) -> Option<&ViewFrame> {
        self.content_view.and_then(|id| self.frames.get(&id))
    }

    pub fn content_view_iid(&self) -> Option<&str> {
        self.content_view().map(ViewFrame::iid)
    }

    pub fn meta_views(&self) -> Vec<&ViewFrame> {
        self.meta_views
            .iter()
            .filter_map(|id| self.frames.get(id))
            .collect()
    }

    pub fn frame(&self, id: ViewFrameId) -> Option<&ViewFrame> {
        self.frames.get(&id)
    }

    /// Live frames, pending ones included
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Current settle nesting depth
    pub fn settle_depth(&self) -> u32 {
        self.making_changes
    }

    /// Whether a dispatch has work to do
    pub fn has_pending_work(&self) -> bool {
        self.made_changes > 0 || !self.mailbox.is_empty()
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("location", &self.current_location())
            .field("phase", &self.phase())
            .field("frames", &self.frames.len())
            .field("shown", &self.shown)
            .field("closed", &self.closed)
            .finish()
    }
}
