//! Navigation Resolver
//!
//! Resolves a requested URI into a [`NavigationInfo`]. One call issues a
//! file-info query (skipped for special schemes) and a metadata fetch, then
//! composes the candidate list and picks the initial content view.

use std::cell::Cell;
use std::rc::Rc;

use fm_core::{uri_scheme, Location, NavigationInfo, NavigationResult, ViewIdentifier};
use smol::future::{self, BoxedLocal, FutureExt};
use smol::{LocalExecutor, Task};
use url::Url;

use crate::catalog::{CatalogQuery, ComponentCatalog};
use crate::config::ResolverConfig;
use crate::services::{
    meta_view_pref_key, FileInfo, FileInfoError, FileInfoService, MetadataStore, Preferences,
    CONTENT_VIEWS_KEY, INITIAL_VIEW_KEY,
};

/// Collaborators a resolver talks to
#[derive(Clone)]
pub struct ResolverServices {
    pub file_info: Rc<dyn FileInfoService>,
    pub metadata: Rc<dyn MetadataStore>,
    pub catalog: Rc<dyn ComponentCatalog>,
    pub preferences: Rc<dyn Preferences>,
}

/// One resolve request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub uri: String,
    /// Location the window was showing
    pub referring: Option<Location>,
    /// Content view active when the request was made
    pub referring_iid: Option<String>,
}

impl ResolveRequest {
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            referring: None,
            referring_iid: None,
        }
    }
}

/// What the metadata store remembers about a location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationMetadata {
    /// Extra content views, from `label=component-id` lines
    pub extra_views: Vec<ViewIdentifier>,
    /// Content view last chosen for the location
    pub initial_view: Option<String>,
}

impl LocationMetadata {
    /// Parse the stored values of both keys
    pub fn parse(content_views: Option<&str>, initial_view: Option<&str>) -> Self {
        let extra_views = content_views
            .map(|text| {
                text.lines()
                    .filter_map(|line| {
                        let line = line.trim();
                        if line.is_empty() {
                            return None;
                        }
                        let (label, iid) = line.split_once('=').unwrap_or((line, line));
                        let (label, iid) = (label.trim(), iid.trim());
                        if iid.is_empty() {
                            return None;
                        }
                        let label = if label.is_empty() { iid } else { label };
                        Some(ViewIdentifier::new(iid, label))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            extra_views,
            initial_view: initial_view
                .map(str::trim)
                .filter(|iid| !iid.is_empty())
                .map(str::to_string),
        }
    }

    /// Fetch both keys concurrently
    pub async fn fetch(store: &dyn MetadataStore, uri: &str) -> Self {
        let (views, initial) = future::zip(
            store.get_metadata(uri, CONTENT_VIEWS_KEY),
            store.get_metadata(uri, INITIAL_VIEW_KEY),
        )
        .await;
        Self::parse(views.as_deref(), initial.as_deref())
    }

    /// Component ids named by the extra list
    pub fn extra_iids(&self) -> Vec<String> {
        self.extra_views.iter().map(|view| view.iid.clone()).collect()
    }
}

/// Pick the content view to activate first.
///
/// Remembered id if it is a candidate, else the referring view if it is a
/// candidate, else the fallback.
pub fn choose_initial_view(
    candidates: &[ViewIdentifier],
    remembered: Option<&str>,
    referring: Option<&str>,
    fallback: Option<&str>,
) -> Option<String> {
    let is_candidate = |iid: &str| candidates.iter().any(|view| view.iid == iid);

    if let Some(iid) = remembered {
        if is_candidate(iid) {
            return Some(iid.to_string());
        }
        tracing::debug!("Remembered view {} is not a candidate, ignoring it", iid);
    }

    if let Some(iid) = referring.filter(|&iid| is_candidate(iid)) {
        return Some(iid.to_string());
    }

    fallback.map(str::to_string)
}

/// Handle on an in-flight resolve.
///
/// Cancelling suppresses `on_complete` even when the result has already
/// been computed. Dropping the handle cancels.
pub struct ResolveHandle {
    task: Option<Task<()>>,
    cancelled: Rc<Cell<bool>>,
    uri: String,
}

impl ResolveHandle {
    /// Requested URI
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Whether the completion callback has run or been suppressed
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(Task::is_finished)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Stop the resolve; safe to call any number of times
    pub fn cancel(&mut self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::debug!("Cancelled resolve of {}", self.uri);
            }
            // dropping an unfinished task cancels it
            drop(task);
        }
    }
}

impl Drop for ResolveHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for ResolveHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveHandle")
            .field("uri", &self.uri)
            .field("cancelled", &self.cancelled.get())
            .field("finished", &self.is_finished())
            .finish()
    }
}

struct Inner {
    services: ResolverServices,
    config: ResolverConfig,
}

/// Asynchronous location resolver
#[derive(Clone)]
pub struct NavigationResolver {
    inner: Rc<Inner>,
    executor: Rc<LocalExecutor<'static>>,
}

impl NavigationResolver {
    pub fn new(
        executor: Rc<LocalExecutor<'static>>,
        services: ResolverServices,
        config: ResolverConfig,
    ) -> Self {
        Self {
            inner: Rc::new(Inner { services, config }),
            executor,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.inner.config
    }

    /// Metadata store shared with windows that record view choices
    pub fn metadata(&self) -> Rc<dyn MetadataStore> {
        Rc::clone(&self.inner.services.metadata)
    }

    /// Preferences the resolver consults
    pub fn preferences(&self) -> Rc<dyn Preferences> {
        Rc::clone(&self.inner.services.preferences)
    }

    /// Start resolving `uri`.
    ///
    /// `on_complete` always runs from the executor, never from inside this
    /// call, and never after the returned handle is cancelled or dropped.
    pub fn resolve<F>(
        &self,
        uri: &str,
        previous: Option<&NavigationInfo>,
        referring_iid: Option<&str>,
        on_complete: F,
    ) -> ResolveHandle
    where
        F: FnOnce(NavigationInfo) + 'static,
    {
        let request = ResolveRequest {
            uri: uri.to_string(),
            referring: previous.map(|info| info.actual.clone()),
            referring_iid: referring_iid.map(str::to_string),
        };

        let cancelled = Rc::new(Cell::new(false));
        let suppressed = Rc::clone(&cancelled);
        let inner = Rc::clone(&self.inner);

        let task = self.executor.spawn(async move {
            let info = inner.run(&request).await;

            // result is ready; give a pending cancel the chance to land
            future::yield_now().await;
            if suppressed.get() {
                tracing::trace!("Dropping resolve result for {}", request.uri);
                return;
            }

            if !info.result.is_ok() {
                tracing::warn!("Resolving {} failed: {:?}", request.uri, info.result);
            }
            on_complete(info);
        });

        ResolveHandle {
            task: Some(task),
            cancelled,
            uri: uri.to_string(),
        }
    }

    /// Build the navigation info from a file-info answer and metadata.
    ///
    /// Pure: the same inputs always give the same output.
    pub fn compose(
        &self,
        request: &ResolveRequest,
        answer: Result<FileInfo, FileInfoError>,
        metadata: &LocationMetadata,
    ) -> NavigationInfo {
        self.inner.compose(request, answer, metadata)
    }
}

impl Inner {
    async fn run(&self, request: &ResolveRequest) -> NavigationInfo {
        let scheme = match Url::parse(&request.uri) {
            Ok(url) => url.scheme().to_string(),
            Err(err) => {
                tracing::debug!("Cannot parse {}: {}", request.uri, err);
                return NavigationInfo::failed(
                    &request.uri,
                    NavigationResult::InvalidUri,
                    request.referring.clone(),
                );
            }
        };

        let file_info: BoxedLocal<Result<FileInfo, FileInfoError>> =
            match self.config.special_content_type(&scheme) {
                Some(content_type) => future::ready(Ok(FileInfo::new(content_type))).boxed_local(),
                None => self.services.file_info.get_file_info(&request.uri),
            };
        let metadata = LocationMetadata::fetch(self.services.metadata.as_ref(), &request.uri);

        let (answer, metadata) = future::zip(file_info, metadata).await;
        self.compose(request, answer, &metadata)
    }

    fn compose(
        &self,
        request: &ResolveRequest,
        answer: Result<FileInfo, FileInfoError>,
        metadata: &LocationMetadata,
    ) -> NavigationInfo {
        let file_info = match answer {
            Ok(file_info) => file_info,
            Err(err) => {
                return NavigationInfo::failed(
                    &request.uri,
                    err.to_result(&request.uri),
                    request.referring.clone(),
                );
            }
        };

        let content_type = file_info.mime_type.as_str();
        let actual_uri = file_info.actual_uri.as_deref().unwrap_or(&request.uri);
        let scheme = uri_scheme(&request.uri);
        let explicit = metadata.extra_iids();

        let found = self.services.catalog.query(&CatalogQuery {
            content_type,
            uri_scheme: scheme.as_deref(),
            explicit_iids: &explicit,
        });

        let mut candidates = found.candidates;
        for view in &metadata.extra_views {
            if !candidates.iter().any(|known| known.iid == view.iid) {
                candidates.push(view.clone());
            }
        }

        if candidates.is_empty() {
            let mut info = NavigationInfo::failed(
                &request.uri,
                NavigationResult::NoHandlerForType,
                request.referring.clone(),
            );
            info.requested.content_type = Some(content_type.to_string());
            info.actual = Location::with_content_type(actual_uri, content_type);
            return info;
        }

        let fallback = found
            .default_iid
            .filter(|iid| candidates.iter().any(|view| &view.iid == iid))
            .unwrap_or_else(|| candidates[0].iid.clone());

        if let Some(sample) = &self.config.sample_view {
            if !candidates.iter().any(|view| view.iid == sample.iid) {
                candidates.push(sample.clone());
            }
        }

        let initial = choose_initial_view(
            &candidates,
            metadata.initial_view.as_deref(),
            request.referring_iid.as_deref(),
            Some(&fallback),
        );

        let meta_iids = self
            .config
            .meta_views
            .iter()
            .filter(|iid| {
                self.services
                    .preferences
                    .get_boolean(&meta_view_pref_key(iid), true)
            })
            .cloned()
            .collect();

        NavigationInfo {
            requested: Location::with_content_type(&request.uri, content_type),
            actual: Location::with_content_type(actual_uri, content_type),
            referring: request.referring.clone(),
            content_identifiers: candidates,
            meta_iids,
            default_content_iid: Some(fallback),
            initial_content_iid: initial,
            result: NavigationResult::Ok,
        }
    }
}
