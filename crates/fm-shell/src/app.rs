//! Application
//!
//! Process-wide services and the windows sharing them, driven by one
//! single-threaded executor.

use std::collections::BTreeMap;
use std::rc::Rc;

use fm_core::HistoryList;
use fm_resolver::{
    meta_view_pref_key, FileInfoService, MemoryMetadataStore, MemoryPreferences,
    NavigationResolver, ResolverServices,
};
use fm_view::ComponentRegistry;
use fm_window::{Phase, Window, WindowContext, WindowError, WindowFrontend};
use smol::LocalExecutor;

use crate::components::demo_registry;
use crate::config::ShellConfig;
use crate::frontend::LogFrontend;
use crate::fs::FsFileInfo;

/// Window ID type
pub type WindowId = u32;

/// Shell error
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("No window {0}")]
    UnknownWindow(WindowId),

    #[error(transparent)]
    Window(#[from] WindowError),
}

/// Executor plus the loop that feeds windows their messages
pub struct MainLoop {
    executor: Rc<LocalExecutor<'static>>,
}

impl MainLoop {
    pub fn new() -> Self {
        Self {
            executor: Rc::new(LocalExecutor::new()),
        }
    }

    pub fn executor(&self) -> &Rc<LocalExecutor<'static>> {
        &self.executor
    }

    /// Run every ready task, then let each window dispatch.
    ///
    /// Returns whether anything happened.
    pub fn iterate<'a, I>(&self, windows: I) -> bool
    where
        I: IntoIterator<Item = &'a mut Window>,
    {
        let mut progressed = false;
        while self.executor.try_tick() {
            progressed = true;
        }
        for window in windows {
            progressed |= window.dispatch();
        }
        progressed
    }

    /// Block until the executor has run one more task
    pub fn wait(&self) {
        smol::block_on(self.executor.tick());
    }
}

impl Default for MainLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// The file-manager process
pub struct Application {
    main_loop: MainLoop,
    config: ShellConfig,
    history: Rc<HistoryList>,
    preferences: Rc<MemoryPreferences>,
    metadata: Rc<MemoryMetadataStore>,
    resolver: NavigationResolver,
    registry: Rc<ComponentRegistry>,
    windows: BTreeMap<WindowId, Window>,
    next_window: WindowId,
}

impl Application {
    /// Application over the local filesystem with the demo components
    pub fn new(config: ShellConfig) -> Self {
        let main_loop = MainLoop::new();
        let registry = demo_registry(main_loop.executor());
        Self::with_services(main_loop, config, Rc::new(FsFileInfo::new()), registry)
    }

    pub fn with_services(
        main_loop: MainLoop,
        config: ShellConfig,
        file_info: Rc<dyn FileInfoService>,
        registry: ComponentRegistry,
    ) -> Self {
        let preferences = Rc::new(MemoryPreferences::new());
        for iid in &config.disabled_meta_views {
            preferences.set_boolean(&meta_view_pref_key(iid), false);
        }
        let metadata = Rc::new(MemoryMetadataStore::new());

        let services = ResolverServices {
            file_info,
            metadata: metadata.clone(),
            catalog: Rc::new(config.resolver.static_catalog()),
            preferences: preferences.clone(),
        };
        let resolver = NavigationResolver::new(
            Rc::clone(main_loop.executor()),
            services,
            config.resolver.clone(),
        );
        tracing::info!(
            "Shell ready: {} components, home {}",
            registry.len(),
            config.home_uri
        );

        Self {
            main_loop,
            config,
            history: Rc::new(HistoryList::new()),
            preferences,
            metadata,
            resolver,
            registry: Rc::new(registry),
            windows: BTreeMap::new(),
            next_window: 1,
        }
    }

    /// Open a window on `uri`, logging its UI updates
    pub fn open_window(&mut self, uri: &str) -> Result<WindowId, ShellError> {
        let id = self.next_window;
        self.open_window_with(uri, Box::new(LogFrontend::new(id)))
    }

    /// Open a window on `uri` with a caller-provided frontend
    pub fn open_window_with(
        &mut self,
        uri: &str,
        frontend: Box<dyn WindowFrontend>,
    ) -> Result<WindowId, ShellError> {
        let id = self.next_window;
        self.next_window += 1;

        let ctx = WindowContext {
            resolver: self.resolver.clone(),
            host: self.registry.clone(),
            history: Rc::clone(&self.history),
            home_uri: self.config.home_uri.clone(),
        };
        let mut window = Window::new(ctx, frontend);
        window.open_location(uri)?;
        self.windows.insert(id, window);
        tracing::debug!("Opened window {} on {}", id, uri);
        Ok(id)
    }

    /// Standard navigation in window `id`
    pub fn navigate(&mut self, id: WindowId, uri: &str) -> Result<(), ShellError> {
        self.window_mut(id)
            .ok_or(ShellError::UnknownWindow(id))?
            .open_location(uri)?;
        Ok(())
    }

    pub fn close_window(&mut self, id: WindowId) -> Result<(), ShellError> {
        let mut window = self.windows.remove(&id).ok_or(ShellError::UnknownWindow(id))?;
        window.close();
        Ok(())
    }

    /// Clear the history list and every window's back/forward lists.
    ///
    /// Each window's current location goes back in, so the history still
    /// names what is on screen.
    pub fn forget_history(&mut self) {
        self.history.forget();
        for window in self.windows.values_mut() {
            window.clear_back_list();
            window.clear_forward_list();
            if let Some(bookmark) = window.current_bookmark() {
                self.history.add(&bookmark);
            }
        }
    }

    /// One main-loop iteration; closed windows are dropped afterwards
    pub fn iterate(&mut self) -> bool {
        let progressed = self.main_loop.iterate(self.windows.values_mut());
        self.windows.retain(|id, window| {
            if window.is_closed() {
                tracing::debug!("Dropping closed window {}", id);
            }
            !window.is_closed()
        });
        progressed
    }

    /// Iterate until nothing is runnable and every window is idle.
    ///
    /// Blocks while a window waits on a resolve or a view load, so every
    /// registered view must eventually report progress.
    pub fn run_until_idle(&mut self) {
        loop {
            if self.iterate() {
                continue;
            }
            let busy = self
                .windows
                .values()
                .any(|window| window.phase() != Phase::Idle);
            if !busy {
                break;
            }
            // file info or a listing is still on a blocking thread
            self.main_loop.wait();
        }
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn history(&self) -> &Rc<HistoryList> {
        &self.history
    }

    pub fn preferences(&self) -> &Rc<MemoryPreferences> {
        &self.preferences
    }

    pub fn metadata(&self) -> &Rc<MemoryMetadataStore> {
        &self.metadata
    }
}
