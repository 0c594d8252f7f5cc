//! Content projection
//!
//! The content surface is the external container that shows the selected
//! tab's content. Projection always replaces everything on it: clear, then
//! show. There is no diffing and no short-circuit when the same content is
//! projected twice.

use detachedtabs_registry::TabRegistry;

/// External container acting as the sheet for the tabs
pub trait ContentSurface {
    type Content;

    /// Remove everything currently displayed
    fn clear(&mut self);

    /// Display `content`
    fn show(&mut self, content: &Self::Content);
}

#[derive(Debug)]
pub struct ContentProjector<S> {
    surface: S,
    projections: u64,
}

impl<S: ContentSurface> ContentProjector<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            projections: 0,
        }
    }

    /// Replace the surface's contents with exactly `content`
    pub fn project(&mut self, content: &S::Content) {
        self.surface.clear();
        self.surface.show(content);
        self.projections += 1;

        tracing::debug!(projections = self.projections, "Projected content");
    }

    /// Project the registry's selected tab.
    ///
    /// Returns `false` and leaves the surface untouched when nothing is
    /// selected.
    pub fn project_selected(&mut self, registry: &TabRegistry<S::Content>) -> bool {
        match registry.selected_tab() {
            Some(tab) => {
                tracing::debug!(tab_id = %tab.id(), caption = %tab.caption(), "Projecting tab");
                self.project(tab.content());
                true
            }
            None => false,
        }
    }

    /// Number of projections performed so far
    pub fn projections(&self) -> u64 {
        self.projections
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSurface, SurfaceEvent};

    #[test]
    fn test_project_clears_then_shows() {
        let mut projector = ContentProjector::new(RecordingSurface::<&str>::new());
        projector.project(&"a");
        projector.project(&"b");

        assert_eq!(
            projector.surface().events,
            vec![
                SurfaceEvent::Clear,
                SurfaceEvent::Show("a"),
                SurfaceEvent::Clear,
                SurfaceEvent::Show("b"),
            ]
        );
        assert_eq!(projector.surface().displayed, vec!["b"]);
        assert_eq!(projector.projections(), 2);
    }

    #[test]
    fn test_same_content_is_projected_again() {
        let mut projector = ContentProjector::new(RecordingSurface::<&str>::new());
        projector.project(&"a");
        projector.project(&"a");

        assert_eq!(projector.projections(), 2);
        assert_eq!(projector.surface().events.len(), 4);
        assert_eq!(projector.surface().displayed, vec!["a"]);
    }

    #[test]
    fn test_project_selected() {
        let mut registry = TabRegistry::new();
        let mut projector = ContentProjector::new(RecordingSurface::<&str>::new());

        let a = registry.add_tab("a", "A").unwrap();
        assert!(!projector.project_selected(&registry));
        assert!(projector.surface().events.is_empty());

        registry.select(a).unwrap();
        assert!(projector.project_selected(&registry));
        assert_eq!(projector.into_surface().displayed, vec!["a"]);
    }
}
