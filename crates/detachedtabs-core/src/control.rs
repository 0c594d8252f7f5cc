//! Tab controls handed to a renderer
//!
//! One control per tab. The renderer draws the caption with the given
//! classes and size, and wires a click on it to `TabStrip::activate(id)`.

use serde::Serialize;

use detachedtabs_registry::TabId;

use crate::orientation::Axis;
use crate::size::Size;
use crate::style::StyleClasses;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabControl {
    pub id: TabId,
    pub caption: String,
    pub classes: StyleClasses,
    pub width: Size,
    pub height: Size,
}

impl TabControl {
    pub(crate) fn new(id: TabId, caption: String, width: Size, height: Size) -> Self {
        Self {
            id,
            caption,
            classes: StyleClasses::new(),
            width,
            height,
        }
    }

    pub fn size(&self, axis: Axis) -> Size {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    pub(crate) fn set_size(&mut self, axis: Axis, size: Size) {
        match axis {
            Axis::Width => self.width = size,
            Axis::Height => self.height = size,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}
