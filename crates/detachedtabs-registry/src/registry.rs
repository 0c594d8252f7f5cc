//! Tab Registry
//!
//! Ordered, append-only storage of tabs plus the single selection.

use std::collections::HashMap;

use crate::error::TabError;
use crate::state::RegistryState;
use crate::tab::{Tab, TabId};
use crate::Result;

#[derive(Debug, Clone)]
pub struct TabRegistry<C> {
    /// Tabs in insertion order
    tabs: Vec<Tab<C>>,
    /// Position of each tab in `tabs`
    index: HashMap<TabId, usize>,
    /// Currently selected tab
    selected: Option<TabId>,
}

impl<C> TabRegistry<C> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            index: HashMap::new(),
            selected: None,
        }
    }

    /// Append a new, unselected tab
    pub fn add_tab(&mut self, content: C, caption: impl Into<String>) -> Result<TabId> {
        let tab = Tab::new(content, caption.into())?;
        let id = tab.id();

        tracing::debug!(
            tab_id = %id,
            caption = %tab.caption(),
            position = self.tabs.len(),
            "Registered tab"
        );

        self.index.insert(id, self.tabs.len());
        self.tabs.push(tab);

        Ok(id)
    }

    /// Make `tab_id` the selected tab.
    ///
    /// Returns `false` when the tab was already selected, in which case
    /// nothing changes.
    pub fn select(&mut self, tab_id: TabId) -> Result<bool> {
        let target = self.position(tab_id).ok_or(TabError::UnknownTab(tab_id))?;

        if self.selected == Some(tab_id) {
            return Ok(false);
        }

        let next = RegistryState::HasTabs { selected: tab_id };
        debug_assert!(self.state().can_transition_to(next));

        if let Some(previous) = self.selected.and_then(|id| self.position(id)) {
            self.tabs[previous].mark_deselected();
        }
        self.tabs[target].mark_selected();

        tracing::debug!(
            tab_id = %tab_id,
            from = %self.state(),
            "Tab selected"
        );

        self.selected = Some(tab_id);

        Ok(true)
    }

    pub fn first_tab(&self) -> Option<TabId> {
        self.tabs.first().map(Tab::id)
    }

    pub fn last_tab(&self) -> Option<TabId> {
        self.tabs.last().map(Tab::id)
    }

    pub fn selected(&self) -> Option<TabId> {
        self.selected
    }

    /// Selected tab together with its content
    pub fn selected_tab(&self) -> Option<&Tab<C>> {
        self.selected.and_then(|id| self.get(id))
    }

    /// All tabs in insertion order
    pub fn all(&self) -> &[Tab<C>] {
        &self.tabs
    }

    pub fn get(&self, tab_id: TabId) -> Option<&Tab<C>> {
        self.position(tab_id).map(|i| &self.tabs[i])
    }

    pub fn position(&self, tab_id: TabId) -> Option<usize> {
        self.index.get(&tab_id).copied()
    }

    pub fn contains(&self, tab_id: TabId) -> bool {
        self.index.contains_key(&tab_id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn state(&self) -> RegistryState {
        match self.selected {
            Some(selected) => RegistryState::HasTabs { selected },
            None => RegistryState::Empty,
        }
    }
}

impl<C> Default for TabRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_count<C>(registry: &TabRegistry<C>) -> usize {
        registry.all().iter().filter(|t| t.is_selected()).count()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut registry = TabRegistry::new();
        let ids: Vec<TabId> = (0..5)
            .map(|i| registry.add_tab(i, format!("Tab {}", i)).unwrap())
            .collect();

        assert_eq!(registry.len(), 5);
        let stored: Vec<TabId> = registry.all().iter().map(Tab::id).collect();
        assert_eq!(stored, ids);
        assert_eq!(registry.first_tab(), Some(ids[0]));
        assert_eq!(registry.last_tab(), Some(ids[4]));
        assert_eq!(registry.position(ids[3]), Some(3));
    }

    #[test]
    fn test_add_does_not_select() {
        let mut registry = TabRegistry::new();
        registry.add_tab("a", "A").unwrap();

        assert_eq!(registry.selected(), None);
        assert_eq!(registry.state(), RegistryState::Empty);
        assert_eq!(selected_count(&registry), 0);
    }

    #[test]
    fn test_empty_registry() {
        let registry: TabRegistry<()> = TabRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.first_tab(), None);
        assert_eq!(registry.last_tab(), None);
        assert_eq!(registry.selected(), None);
        assert!(registry.selected_tab().is_none());
    }

    #[test]
    fn test_duplicate_captions_allowed() {
        let mut registry = TabRegistry::new();
        let a = registry.add_tab(1, "Same").unwrap();
        let b = registry.add_tab(2, "Same").unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_invalid_add_leaves_registry_unchanged() {
        let mut registry = TabRegistry::new();
        let a = registry.add_tab("a", "A").unwrap();
        registry.select(a).unwrap();

        let result = registry.add_tab("b", "");
        assert!(matches!(result, Err(TabError::InvalidArgument(_))));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.last_tab(), Some(a));
        assert_eq!(registry.selected(), Some(a));
    }

    #[test]
    fn test_select_moves_selection() {
        let mut registry = TabRegistry::new();
        let a = registry.add_tab("a", "A").unwrap();
        let b = registry.add_tab("b", "B").unwrap();

        assert!(registry.select(a).unwrap());
        assert!(registry.get(a).unwrap().is_selected());
        assert_eq!(registry.state(), RegistryState::HasTabs { selected: a });

        assert!(registry.select(b).unwrap());
        assert!(!registry.get(a).unwrap().is_selected());
        assert!(registry.get(b).unwrap().is_selected());
        assert_eq!(registry.selected_tab().map(|t| *t.content()), Some("b"));
        assert_eq!(selected_count(&registry), 1);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut registry = TabRegistry::new();
        let a = registry.add_tab("a", "A").unwrap();
        registry.add_tab("b", "B").unwrap();

        assert!(registry.select(a).unwrap());
        let selected_at = registry.get(a).unwrap().selected_at();

        assert!(!registry.select(a).unwrap());
        assert_eq!(registry.selected(), Some(a));
        assert_eq!(registry.get(a).unwrap().selected_at(), selected_at);
        assert_eq!(selected_count(&registry), 1);
    }

    #[test]
    fn test_select_unknown_tab() {
        let mut registry = TabRegistry::new();
        let a = registry.add_tab("a", "A").unwrap();
        registry.select(a).unwrap();

        let stranger = TabId::new();
        let result = registry.select(stranger);
        assert_eq!(result, Err(TabError::UnknownTab(stranger)));
        assert_eq!(registry.selected(), Some(a));
        assert_eq!(selected_count(&registry), 1);
    }

    #[test]
    fn test_at_most_one_selected_through_sequence() {
        let mut registry = TabRegistry::new();
        let ids: Vec<TabId> = (0..4)
            .map(|i| registry.add_tab(i, format!("{}", i)).unwrap())
            .collect();

        for id in [ids[2], ids[0], ids[3], ids[3], ids[1]] {
            registry.select(id).unwrap();
            assert_eq!(selected_count(&registry), 1);
            assert_eq!(registry.selected(), Some(id));
        }
    }
}
