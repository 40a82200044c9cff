//! In-Memory Services
//!
//! Process-local implementations of the resolver's collaborators. The shell
//! uses the metadata store and preferences directly; the file-info table is
//! used for virtual locations and by tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use smol::future::{self, BoxedLocal, FutureExt};

use crate::services::{FileInfo, FileInfoError, FileInfoService, MetadataStore, Preferences};

/// Future that yields to the executor `ticks` times before completing
async fn after_ticks<T>(ticks: usize, value: T) -> T {
    for _ in 0..ticks {
        future::yield_now().await;
    }
    value
}

/// File-info table keyed by URI
#[derive(Debug, Default)]
pub struct MemoryFileInfo {
    entries: RefCell<HashMap<String, Result<FileInfo, FileInfoError>>>,
    /// Executor iterations each answer takes
    latency: Cell<usize>,
}

impl MemoryFileInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location with its MIME type
    pub fn insert(&self, uri: &str, mime_type: &str) {
        self.entries
            .borrow_mut()
            .insert(uri.to_string(), Ok(FileInfo::new(mime_type)));
    }

    /// Register a location that resolves to another URI
    pub fn insert_redirect(&self, uri: &str, actual_uri: &str, mime_type: &str) {
        let info = FileInfo {
            mime_type: mime_type.to_string(),
            actual_uri: Some(actual_uri.to_string()),
        };
        self.entries.borrow_mut().insert(uri.to_string(), Ok(info));
    }

    /// Register a location whose query fails
    pub fn insert_error(&self, uri: &str, error: FileInfoError) {
        self.entries.borrow_mut().insert(uri.to_string(), Err(error));
    }

    pub fn remove(&self, uri: &str) {
        self.entries.borrow_mut().remove(uri);
    }

    pub fn set_latency(&self, ticks: usize) {
        self.latency.set(ticks);
    }
}

impl FileInfoService for MemoryFileInfo {
    fn get_file_info(&self, uri: &str) -> BoxedLocal<Result<FileInfo, FileInfoError>> {
        let answer = self
            .entries
            .borrow()
            .get(uri)
            .cloned()
            .unwrap_or(Err(FileInfoError::NotFound));
        after_ticks(self.latency.get(), answer).boxed_local()
    }
}

type MetadataListener = Box<dyn Fn(&str)>;

/// Metadata store keyed by (URI, key)
#[derive(Default)]
pub struct MemoryMetadataStore {
    values: RefCell<HashMap<(String, String), String>>,
    listeners: RefCell<Vec<MetadataListener>>,
}

impl MemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synchronous read
    pub fn get(&self, uri: &str, key: &str) -> Option<String> {
        self.values
            .borrow()
            .get(&(uri.to_string(), key.to_string()))
            .cloned()
    }
}

impl MetadataStore for MemoryMetadataStore {
    fn get_metadata(&self, uri: &str, key: &str) -> BoxedLocal<Option<String>> {
        future::ready(self.get(uri, key)).boxed_local()
    }

    fn set_metadata(&self, uri: &str, key: &str, value: Option<&str>) {
        {
            let mut values = self.values.borrow_mut();
            let slot = (uri.to_string(), key.to_string());
            match value {
                Some(value) => {
                    values.insert(slot, value.to_string());
                }
                None => {
                    values.remove(&slot);
                }
            }
        }
        for listener in self.listeners.borrow().iter() {
            listener(uri);
        }
    }

    fn add_changed_listener(&self, listener: MetadataListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

impl std::fmt::Debug for MemoryMetadataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryMetadataStore")
            .field("values", &self.values.borrow().len())
            .finish()
    }
}

type PreferenceCallback = Box<dyn Fn(&str)>;

/// Preference store with change callbacks
#[derive(Default)]
pub struct MemoryPreferences {
    booleans: RefCell<HashMap<String, bool>>,
    strings: RefCell<HashMap<String, String>>,
    callbacks: RefCell<Vec<(String, PreferenceCallback)>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_boolean(&self, key: &str, value: bool) {
        self.booleans.borrow_mut().insert(key.to_string(), value);
        self.changed(key);
    }

    pub fn set_string(&self, key: &str, value: &str) {
        self.strings
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.changed(key);
    }

    fn changed(&self, key: &str) {
        for (watched, callback) in self.callbacks.borrow().iter() {
            if watched == key {
                callback(key);
            }
        }
    }
}

impl Preferences for MemoryPreferences {
    fn get_boolean(&self, key: &str, default: bool) -> bool {
        self.booleans.borrow().get(key).copied().unwrap_or(default)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.strings.borrow().get(key).cloned()
    }

    fn add_callback(&self, key: &str, callback: Box<dyn Fn(&str)>) {
        self.callbacks.borrow_mut().push((key.to_string(), callback));
    }
}

impl std::fmt::Debug for MemoryPreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryPreferences")
            .field("booleans", &self.booleans.borrow())
            .field("strings", &self.strings.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_file_info_lookup() {
        let files = MemoryFileInfo::new();
        files.insert("file:///a.txt", "text/plain");
        files.insert_error("file:///locked", FileInfoError::Other { code: 13, message: "denied".into() });

        smol::block_on(async {
            assert_eq!(
                files.get_file_info("file:///a.txt").await,
                Ok(FileInfo::new("text/plain"))
            );
            assert_eq!(
                files.get_file_info("file:///missing").await,
                Err(FileInfoError::NotFound)
            );
            assert!(matches!(
                files.get_file_info("file:///locked").await,
                Err(FileInfoError::Other { code: 13, .. })
            ));
        });
    }

    #[test]
    fn test_file_info_latency() {
        let files = MemoryFileInfo::new();
        files.insert("file:///a.txt", "text/plain");
        files.set_latency(3);

        let mut query = files.get_file_info("file:///a.txt");
        let mut polls = 0;
        let answer = smol::block_on(future::poll_fn(|cx| {
            polls += 1;
            std::future::Future::poll(query.as_mut(), cx)
        }));
        assert!(answer.is_ok());
        assert!(polls > 3);
    }

    #[test]
    fn test_metadata_roundtrip_and_notify() {
        let store = MemoryMetadataStore::new();
        let changed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changed);
        store.add_changed_listener(Box::new(move |uri| sink.borrow_mut().push(uri.to_string())));

        store.set_metadata("file:///d/", "initial_view", Some("LIST_VIEW"));
        assert_eq!(
            smol::block_on(store.get_metadata("file:///d/", "initial_view")),
            Some("LIST_VIEW".to_string())
        );

        store.set_metadata("file:///d/", "initial_view", None);
        assert_eq!(store.get("file:///d/", "initial_view"), None);
        assert_eq!(changed.borrow().len(), 2);
    }

    #[test]
    fn test_preference_callbacks() {
        let prefs = MemoryPreferences::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        prefs.add_callback("meta-views/NOTES_VIEW", Box::new(move |_| counter.set(counter.get() + 1)));

        assert!(prefs.get_boolean("meta-views/NOTES_VIEW", true));
        prefs.set_boolean("meta-views/NOTES_VIEW", false);
        prefs.set_boolean("meta-views/HISTORY_VIEW", false);
        assert!(!prefs.get_boolean("meta-views/NOTES_VIEW", true));
        assert_eq!(hits.get(), 1);

        prefs.set_string("home", "file:///home/user/");
        assert_eq!(prefs.get_string("home").as_deref(), Some("file:///home/user/"));
    }
}
