//! Style classes derived from registry state

use std::collections::BTreeSet;

use detachedtabs_registry::{TabError, TabId, TabRegistry};

use crate::orientation::Orientation;

pub const STRIP_CLASS: &str = "detachedtabs";
pub const STRIP_HORIZONTAL_CLASS: &str = "detachedtabs-horizontal";
pub const STRIP_VERTICAL_CLASS: &str = "detachedtabs-vertical";

pub const TAB_CLASS: &str = "tab";
pub const TAB_FIRST_CLASS: &str = "tab-first";
pub const TAB_LAST_CLASS: &str = "tab-last";
pub const TAB_SELECTED_CLASS: &str = "tab-selected";

pub type StyleClasses = BTreeSet<&'static str>;

/// Classes a tab carries given the current order and selection.
///
/// A single tab is both first and last.
pub fn classes_for<C>(registry: &TabRegistry<C>, tab_id: TabId) -> Result<StyleClasses, TabError> {
    if !registry.contains(tab_id) {
        return Err(TabError::UnknownTab(tab_id));
    }

    let mut classes = StyleClasses::new();
    classes.insert(TAB_CLASS);
    if registry.first_tab() == Some(tab_id) {
        classes.insert(TAB_FIRST_CLASS);
    }
    if registry.last_tab() == Some(tab_id) {
        classes.insert(TAB_LAST_CLASS);
    }
    if registry.selected() == Some(tab_id) {
        classes.insert(TAB_SELECTED_CLASS);
    }

    Ok(classes)
}

/// Classes on the strip itself
pub fn strip_classes(orientation: Orientation) -> StyleClasses {
    let orientation_class = match orientation {
        Orientation::Horizontal => STRIP_HORIZONTAL_CLASS,
        Orientation::Vertical => STRIP_VERTICAL_CLASS,
    };
    [STRIP_CLASS, orientation_class].into_iter().collect()
}
