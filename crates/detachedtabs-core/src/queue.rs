//! Deferred activations
//!
//! A surface cannot call back into the strip while a projection is running.
//! It pushes the tab it wants onto the strip's queue instead; the strip
//! runs queued activations once the outer call has finished restyling.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use detachedtabs_registry::TabId;

/// Upper bound on queued activations processed per outer call
pub const MAX_QUEUED_ACTIVATIONS: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct ActivationQueue {
    pending: Arc<Mutex<VecDeque<TabId>>>,
}

impl ActivationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for `tab_id` to be activated after the current operation
    pub fn request(&self, tab_id: TabId) {
        tracing::debug!(tab_id = %tab_id, "Queued activation");
        self.pending.lock().push_back(tab_id);
    }

    pub(crate) fn pop(&self) -> Option<TabId> {
        self.pending.lock().pop_front()
    }

    /// Drop everything still pending, returning how many were dropped
    pub(crate) fn discard(&self) -> usize {
        let mut pending = self.pending.lock();
        let dropped = pending.len();
        pending.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}
