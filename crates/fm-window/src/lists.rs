//! Back/Forward Lists
//!
//! Per-window lists of bookmarks, nearest entry first.

use std::collections::VecDeque;
use std::rc::Rc;

use fm_core::Bookmark;

/// Back and forward lists of one window
#[derive(Debug, Default)]
pub struct BackForwardLists {
    /// Back stack, nearest first
    back: VecDeque<Rc<Bookmark>>,
    /// Forward stack, nearest first
    forward: VecDeque<Rc<Bookmark>>,
}

impl BackForwardLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard navigation away from `outgoing`
    pub fn push(&mut self, outgoing: Option<Rc<Bookmark>>) {
        if let Some(bookmark) = outgoing {
            self.back.push_front(bookmark);
        }
        self.forward.clear();
    }

    /// Move back by `distance + 1` entries.
    ///
    /// `current` goes to the forward list, `distance` entries follow it and
    /// the next back entry is returned as the new current bookmark.
    pub fn go_back(&mut self, current: Option<Rc<Bookmark>>, distance: usize) -> Option<Rc<Bookmark>> {
        Self::shift(&mut self.back, &mut self.forward, current, distance)
    }

    /// Mirror of [`go_back`](Self::go_back)
    pub fn go_forward(&mut self, current: Option<Rc<Bookmark>>, distance: usize) -> Option<Rc<Bookmark>> {
        Self::shift(&mut self.forward, &mut self.back, current, distance)
    }

    fn shift(
        from: &mut VecDeque<Rc<Bookmark>>,
        to: &mut VecDeque<Rc<Bookmark>>,
        current: Option<Rc<Bookmark>>,
        distance: usize,
    ) -> Option<Rc<Bookmark>> {
        if distance >= from.len() {
            return None;
        }
        if let Some(bookmark) = current {
            to.push_front(bookmark);
        }
        for _ in 0..distance {
            if let Some(bookmark) = from.pop_front() {
                to.push_front(bookmark);
            }
        }
        from.pop_front()
    }

    pub fn back(&self) -> &VecDeque<Rc<Bookmark>> {
        &self.back
    }

    pub fn forward(&self) -> &VecDeque<Rc<Bookmark>> {
        &self.forward
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    pub fn clear_back(&mut self) {
        self.back.clear();
    }

    pub fn clear_forward(&mut self) {
        self.forward.clear();
    }
}
