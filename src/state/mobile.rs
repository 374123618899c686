use crate::constants::INITIAL_TRACKED_CAPACITY;
use notify_manager_util::NotificationId;
use std::collections::VecDeque;

/// Tracks which notifications shown in mobile mode are still on screen.
///
/// Entries are kept oldest first. The visible mobile count is the number of
/// live entries, so releasing an unknown id can never push it below zero.
#[derive(Debug)]
pub struct MobileTracker {
    live: VecDeque<NotificationId>,
    next_id: u64,
}

impl MobileTracker {
    pub fn new() -> Self {
        Self {
            live: VecDeque::with_capacity(INITIAL_TRACKED_CAPACITY),
            next_id: 1,
        }
    }

    /// Hand out the handle for the next notification
    pub fn allocate_id(&mut self) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn track(&mut self, id: NotificationId) {
        if !self.live.contains(&id) {
            self.live.push_back(id);
        }
    }

    /// Forget a notification that closed. Returns false if it was not tracked.
    pub fn release(&mut self, id: NotificationId) -> bool {
        match self.live.iter().position(|n| *n == id) {
            Some(pos) => {
                self.live.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drop tracked ids that are no longer mounted
    ///
    /// Returns how many were dropped.
    pub fn retain_mounted(&mut self, mounted: &[NotificationId]) -> usize {
        let before = self.live.len();
        self.live.retain(|id| mounted.contains(id));
        before - self.live.len()
    }

    /// Account for an evicted element.
    ///
    /// Releases `removed` if it is tracked, otherwise gives up the oldest
    /// tracked slot so the count still drops by one.
    pub fn evicted(&mut self, removed: NotificationId) -> Option<NotificationId> {
        if self.release(removed) {
            Some(removed)
        } else {
            self.live.pop_front()
        }
    }

    pub fn count(&self) -> usize {
        self.live.len()
    }
}

impl Default for MobileTracker {
    fn default() -> Self {
        Self::new()
    }
}
