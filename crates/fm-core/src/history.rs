//! Location History
//!
//! Bookmarks for visited locations and the history list shared by every
//! window of the process.
//!
//! The history list is a plain service object: the shell constructs one at
//! startup and hands an `Rc` to each window. Everything runs on the single
//! main-loop thread, so interior mutability through `RefCell` is enough;
//! a multi-threaded host would have to wrap it in a lock.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// A bookmark for a visited location.
///
/// Bookmarks are shared between the history list and the per-window
/// back/forward lists. Two handles are the *same* bookmark when
/// `Rc::ptr_eq` holds; they point at the same *location* when
/// [`Bookmark::same_location`] does.
#[derive(Debug)]
pub struct Bookmark {
    uri: String,
    name: RefCell<String>,
}

impl Bookmark {
    /// Create a new shared bookmark
    pub fn new(uri: &str, name: &str) -> Rc<Self> {
        Rc::new(Self {
            uri: uri.to_string(),
            name: RefCell::new(name.to_string()),
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    /// Rename in place; every list holding this bookmark sees the new name
    pub fn set_name(&self, name: &str) {
        *self.name.borrow_mut() = name.to_string();
    }

    pub fn same_location(&self, other: &Bookmark) -> bool {
        self.uri == other.uri
    }
}

/// Handle returned by [`HistoryList::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&HistoryList)>;

/// Process-wide list of recently visited locations, most recent first
#[derive(Default)]
pub struct HistoryList {
    entries: RefCell<VecDeque<Rc<Bookmark>>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a bookmark.
    ///
    /// An existing entry for the same location is removed first, so the list
    /// never holds two bookmarks for one location.
    pub fn add(&self, bookmark: &Rc<Bookmark>) {
        {
            let mut entries = self.entries.borrow_mut();
            entries.retain(|b| !b.same_location(bookmark));
            entries.push_front(Rc::clone(bookmark));
        }
        tracing::debug!("History: added {}", bookmark.uri());
        self.notify_changed();
    }

    /// Remove one bookmark (by identity)
    pub fn remove(&self, bookmark: &Rc<Bookmark>) -> bool {
        let removed = {
            let mut entries = self.entries.borrow_mut();
            let before = entries.len();
            entries.retain(|b| !Rc::ptr_eq(b, bookmark));
            entries.len() != before
        };
        if removed {
            self.notify_changed();
        }
        removed
    }

    /// Clear the whole list
    pub fn forget(&self) {
        self.entries.borrow_mut().clear();
        tracing::info!("History forgotten");
        self.notify_changed();
    }

    /// Snapshot of the entries, most recent first
    pub fn entries(&self) -> Vec<Rc<Bookmark>> {
        self.entries.borrow().iter().cloned().collect()
    }

    /// Most recent entry
    pub fn first(&self) -> Option<Rc<Bookmark>> {
        self.entries.borrow().front().cloned()
    }

    pub fn contains_location(&self, uri: &str) -> bool {
        self.entries.borrow().iter().any(|b| b.uri() == uri)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Register a "changed" listener.
    ///
    /// Listeners may read the list but must not subscribe or unsubscribe
    /// from inside the callback.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&HistoryList) + 'static,
    {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sub, _)| *sub != id);
    }

    fn notify_changed(&self) {
        let listeners = self.listeners.borrow();
        for (_, listener) in listeners.iter() {
            listener(self);
        }
    }
}

impl std::fmt::Debug for HistoryList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryList")
            .field("entries", &self.entries.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
