//! Detached Tabs Core
//!
//! A tab strip detached from its content pane. The strip of tabs and the
//! surface that shows the selected tab's content are placed independently;
//! they are linked only through [`TabStrip`], which keeps selection, tab
//! styling and sizing consistent and projects content onto the surface.

mod config;
mod control;
mod error;
mod orientation;
mod projector;
mod queue;
mod size;
mod strip;
mod style;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use control::TabControl;
pub use error::StripError;
pub use orientation::{Axis, Orientation};
pub use projector::{ContentProjector, ContentSurface};
pub use queue::{ActivationQueue, MAX_QUEUED_ACTIVATIONS};
pub use size::{Size, Unit};
pub use strip::{StripSnapshot, TabStrip, TabStripBuilder};
pub use style::{
    StyleClasses, STRIP_CLASS, STRIP_HORIZONTAL_CLASS, STRIP_VERTICAL_CLASS, TAB_CLASS,
    TAB_FIRST_CLASS, TAB_LAST_CLASS, TAB_SELECTED_CLASS,
};

// Re-export registry types
pub use detachedtabs_registry::{RegistryState, Tab, TabError, TabId, TabRegistry};

pub type Result<T> = std::result::Result<T, StripError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
