//! Registry State Machine
//!
//! ```text
//! Empty
//!   ↓ add tab (first tab is auto-selected)
//! HasTabs(selected)
//!   ↺ add tab (selection unchanged)
//!   ↺ select(t) (selection moves to t)
//! ```
//!
//! Nothing leads back to `Empty`: tabs are never removed and selection is
//! never cleared.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tab::TabId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RegistryState {
    /// Nothing selected yet. Through a tab strip this means no tab
    /// exists; a bare registry stays here until its first `select`.
    #[default]
    Empty,
    /// At least one tab exists and exactly one of them is selected
    HasTabs { selected: TabId },
}

impl RegistryState {
    pub fn is_empty(&self) -> bool {
        matches!(self, RegistryState::Empty)
    }

    pub fn selected(&self) -> Option<TabId> {
        match self {
            RegistryState::Empty => None,
            RegistryState::HasTabs { selected } => Some(*selected),
        }
    }

    /// Check if moving to `target` is a legal transition
    pub fn can_transition_to(&self, target: RegistryState) -> bool {
        !matches!(
            (self, target),
            (RegistryState::HasTabs { .. }, RegistryState::Empty)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryState::Empty => "empty",
            RegistryState::HasTabs { .. } => "has_tabs",
        }
    }
}

impl fmt::Display for RegistryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryState::Empty => write!(f, "empty"),
            RegistryState::HasTabs { selected } => write!(f, "has_tabs({})", selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        let a = TabId::new();
        let b = TabId::new();

        // Empty -> HasTabs (first tab)
        assert!(RegistryState::Empty.can_transition_to(RegistryState::HasTabs { selected: a }));
        // HasTabs -> HasTabs (add or select)
        assert!(RegistryState::HasTabs { selected: a }
            .can_transition_to(RegistryState::HasTabs { selected: b }));
        assert!(RegistryState::Empty.can_transition_to(RegistryState::Empty));
    }

    #[test]
    fn test_never_returns_to_empty() {
        let a = TabId::new();
        assert!(!RegistryState::HasTabs { selected: a }.can_transition_to(RegistryState::Empty));
    }

    #[test]
    fn test_selected() {
        let a = TabId::new();
        assert_eq!(RegistryState::Empty.selected(), None);
        assert_eq!(RegistryState::HasTabs { selected: a }.selected(), Some(a));
        assert!(RegistryState::default().is_empty());
    }
}
