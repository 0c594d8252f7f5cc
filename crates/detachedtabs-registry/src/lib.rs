//! Detached Tabs Registry
//!
//! The ordered set of tabs behind a tab strip, each tab's content handle,
//! and which tab is currently selected. Tabs are append-only: once added a
//! tab lives as long as the registry.

mod error;
mod registry;
mod state;
mod tab;

pub use error::TabError;
pub use registry::TabRegistry;
pub use state::RegistryState;
pub use tab::{Tab, TabId};

pub type Result<T> = std::result::Result<T, TabError>;
