//! Tab Strip
//!
//! The presentation-facing controller. It owns the registry, keeps one
//! [`TabControl`] per tab in sync with the registry's order and selection,
//! and projects the selected tab's content onto the external surface.
//!
//! Every mutating call runs to completion in this order: registry update,
//! projection, restyle of every control, then any activations the surface
//! queued while that projection ran. Requests already pending before the
//! call are stale and dropped; a call that projects nothing runs none.

use serde::Serialize;

use detachedtabs_registry::{TabId, TabRegistry};

use crate::config::Config;
use crate::control::TabControl;
use crate::error::StripError;
use crate::orientation::{Axis, Orientation};
use crate::projector::{ContentProjector, ContentSurface};
use crate::queue::{ActivationQueue, MAX_QUEUED_ACTIVATIONS};
use crate::size::Size;
use crate::style::{self, StyleClasses};
use crate::Result;

pub struct TabStrip<S: ContentSurface> {
    /// Fixed for the strip's lifetime
    orientation: Orientation,
    registry: TabRegistry<S::Content>,
    projector: ContentProjector<S>,
    /// Controls in the same order as the registry's tabs
    controls: Vec<TabControl>,
    width: Size,
    height: Size,
    queue: ActivationQueue,
}

/// Renderer-facing view of the whole strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripSnapshot {
    pub orientation: Orientation,
    pub classes: StyleClasses,
    pub width: Size,
    pub height: Size,
    pub selected: Option<TabId>,
    pub tabs: Vec<TabControl>,
}

impl StripSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub struct TabStripBuilder<S> {
    surface: Option<S>,
    orientation: Option<Orientation>,
    orientation_name: Option<String>,
    config: Config,
    queue: Option<ActivationQueue>,
}

impl<S: ContentSurface> TabStripBuilder<S> {
    pub fn new() -> Self {
        Self {
            surface: None,
            orientation: None,
            orientation_name: None,
            config: Config::default(),
            queue: None,
        }
    }

    /// Surface that will act as the sheet for the tabs
    pub fn surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Orientation by name (`"horizontal"`, `"vertical"`), resolved in `build`
    pub fn orientation_name(mut self, name: impl Into<String>) -> Self {
        self.orientation_name = Some(name.into());
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Share an existing queue, typically one the surface already holds
    pub fn activation_queue(mut self, queue: ActivationQueue) -> Self {
        self.queue = Some(queue);
        self
    }

    pub fn build(self) -> Result<TabStrip<S>> {
        let surface = self
            .surface
            .ok_or_else(|| StripError::InvalidArgument("surface is required".to_string()))?;
        let orientation = match (self.orientation, self.orientation_name) {
            (Some(orientation), _) => orientation,
            (None, Some(name)) => name.parse()?,
            (None, None) => {
                return Err(StripError::InvalidArgument(
                    "orientation is required".to_string(),
                ))
            }
        };
        self.config.validate()?;

        Ok(TabStrip::assemble(
            surface,
            orientation,
            &self.config,
            self.queue.unwrap_or_default(),
        ))
    }
}

impl<S: ContentSurface> Default for TabStripBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ContentSurface> TabStrip<S> {
    pub fn builder() -> TabStripBuilder<S> {
        TabStripBuilder::new()
    }

    pub fn horizontal(surface: S) -> Self {
        Self::assemble(
            surface,
            Orientation::Horizontal,
            &Config::default(),
            ActivationQueue::new(),
        )
    }

    pub fn vertical(surface: S) -> Self {
        Self::assemble(
            surface,
            Orientation::Vertical,
            &Config::default(),
            ActivationQueue::new(),
        )
    }

    fn assemble(
        surface: S,
        orientation: Orientation,
        config: &Config,
        queue: ActivationQueue,
    ) -> Self {
        let (width, height) = match orientation {
            Orientation::Horizontal => (Size::FULL, config.horizontal_height),
            Orientation::Vertical => (config.vertical_width, Size::FULL),
        };

        tracing::debug!(
            orientation = %orientation,
            width = %width,
            height = %height,
            "Created tab strip"
        );

        Self {
            orientation,
            registry: TabRegistry::new(),
            projector: ContentProjector::new(surface),
            controls: Vec::new(),
            width,
            height,
            queue,
        }
    }

    /// Add a tab at the end of the strip.
    ///
    /// The first tab ever added is selected and projected right away; later
    /// tabs leave the selection alone.
    pub fn add_tab(&mut self, content: S::Content, caption: impl Into<String>) -> Result<TabId> {
        let first = self.registry.state().is_empty();
        let caption = caption.into();

        let id = self.registry.add_tab(content, caption.clone())?;

        let cross = self.orientation.cross_axis();
        let mut control = TabControl::new(id, caption, Size::FULL, Size::FULL);
        control.set_size(cross, self.size(cross));

        tracing::info!(
            tab_id = %id,
            caption = %control.caption,
            orientation = %self.orientation,
            "Added tab"
        );

        self.controls.push(control);

        if first {
            self.registry.select(id)?;
            self.drop_stale_requests();
            self.projector.project_selected(&self.registry);
            self.restyle();
            self.run_queued();
        } else {
            self.restyle();
        }

        Ok(id)
    }

    /// Select `tab_id` and show its content.
    ///
    /// The content is projected even when the tab is already selected.
    pub fn activate(&mut self, tab_id: TabId) -> Result<()> {
        self.registry.select(tab_id)?;
        self.drop_stale_requests();
        self.projector.project_selected(&self.registry);
        self.restyle();
        self.run_queued();
        Ok(())
    }

    fn switch_to(&mut self, tab_id: TabId) -> Result<()> {
        self.registry.select(tab_id)?;
        self.projector.project_selected(&self.registry);
        self.restyle();
        Ok(())
    }

    /// Forget requests made outside a projection
    fn drop_stale_requests(&mut self) {
        let dropped = self.queue.discard();
        if dropped > 0 {
            tracing::warn!(dropped, "Dropped activations requested outside a projection");
        }
    }

    /// Run activations the surface queued during projection, oldest first
    fn run_queued(&mut self) {
        let mut processed = 0;

        while let Some(tab_id) = self.queue.pop() {
            if processed == MAX_QUEUED_ACTIVATIONS {
                let dropped = self.queue.discard() + 1;
                tracing::warn!(dropped, "Too many queued activations, dropping the rest");
                break;
            }
            processed += 1;

            if let Err(e) = self.switch_to(tab_id) {
                tracing::warn!(tab_id = %tab_id, error = %e, "Dropped queued activation");
            }
        }
    }

    /// Recompute classes on every control; adding a tab moves the last marker
    fn restyle(&mut self) {
        for control in &mut self.controls {
            control.classes = style::classes_for(&self.registry, control.id).unwrap_or_default();
        }

        tracing::debug!(
            tabs = self.controls.len(),
            selected = ?self.registry.selected(),
            "Restyled tabs"
        );
    }

    pub fn style_classes_for(&self, tab_id: TabId) -> Result<StyleClasses> {
        Ok(style::classes_for(&self.registry, tab_id)?)
    }

    pub fn strip_classes(&self) -> StyleClasses {
        style::strip_classes(self.orientation)
    }

    /// Set the strip's size along `axis`.
    ///
    /// A cross-axis size is copied to every existing tab control; a main-axis
    /// size only affects the strip.
    pub fn set_size(&mut self, axis: Axis, size: Size) -> Result<()> {
        let size = size.validate()?;

        match axis {
            Axis::Width => self.width = size,
            Axis::Height => self.height = size,
        }

        if axis == self.orientation.cross_axis() {
            for control in &mut self.controls {
                control.set_size(axis, size);
            }

            tracing::debug!(
                axis = %axis,
                size = %size,
                tabs = self.controls.len(),
                "Propagated size to tabs"
            );
        }

        Ok(())
    }

    pub fn set_width(&mut self, width: Size) -> Result<()> {
        self.set_size(Axis::Width, width)
    }

    pub fn set_height(&mut self, height: Size) -> Result<()> {
        self.set_size(Axis::Height, height)
    }

    pub fn size(&self, axis: Axis) -> Size {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    pub fn width(&self) -> Size {
        self.width
    }

    pub fn height(&self) -> Size {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn selected(&self) -> Option<TabId> {
        self.registry.selected()
    }

    /// Read-only access to the tabs and selection
    pub fn registry(&self) -> &TabRegistry<S::Content> {
        &self.registry
    }

    pub fn controls(&self) -> &[TabControl] {
        &self.controls
    }

    pub fn control(&self, tab_id: TabId) -> Option<&TabControl> {
        self.registry
            .position(tab_id)
            .and_then(|i| self.controls.get(i))
    }

    /// Handle a surface can use to request activations during projection
    pub fn activation_queue(&self) -> ActivationQueue {
        self.queue.clone()
    }

    pub fn surface(&self) -> &S {
        self.projector.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.projector.surface_mut()
    }

    /// Number of projections performed so far
    pub fn projections(&self) -> u64 {
        self.projector.projections()
    }

    pub fn snapshot(&self) -> StripSnapshot {
        StripSnapshot {
            orientation: self.orientation,
            classes: self.strip_classes(),
            width: self.width,
            height: self.height,
            selected: self.registry.selected(),
            tabs: self.controls.clone(),
        }
    }
}
