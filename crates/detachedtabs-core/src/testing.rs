//! Test doubles

use detachedtabs_registry::TabId;

use crate::projector::ContentSurface;
use crate::queue::ActivationQueue;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent<C> {
    Clear,
    Show(C),
}

/// Surface that records every call and what ends up displayed.
///
/// With a queue attached, showing content listed in `redirects` requests
/// activation of the paired tab, the way a content callback would.
#[derive(Debug)]
pub struct RecordingSurface<C> {
    pub events: Vec<SurfaceEvent<C>>,
    pub displayed: Vec<C>,
    pub redirects: Vec<(C, TabId)>,
    pub queue: Option<ActivationQueue>,
}

impl<C> RecordingSurface<C> {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            displayed: Vec::new(),
            redirects: Vec::new(),
            queue: None,
        }
    }

    pub fn shows(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Show(_)))
            .count()
    }
}

impl<C: Clone + PartialEq> ContentSurface for RecordingSurface<C> {
    type Content = C;

    fn clear(&mut self) {
        self.events.push(SurfaceEvent::Clear);
        self.displayed.clear();
    }

    fn show(&mut self, content: &C) {
        self.events.push(SurfaceEvent::Show(content.clone()));
        self.displayed.push(content.clone());

        if let Some(queue) = &self.queue {
            for (trigger, target) in &self.redirects {
                if trigger == content {
                    queue.request(*target);
                }
            }
        }
    }
}
