//! Tab data structure
//!
//! A tab pairs a caption with the content shown while it is selected.
//! Its identity is a [`TabId`], independent of its position in the strip.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TabError;
use crate::Result;

/// Stable identity of a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TabId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Tab<C> {
    id: TabId,
    caption: String,
    content: C,
    selected: bool,
    created_at: DateTime<Utc>,
    selected_at: Option<DateTime<Utc>>,
}

impl<C> Tab<C> {
    pub(crate) fn new(content: C, caption: String) -> Result<Self> {
        if caption.is_empty() {
            return Err(TabError::InvalidArgument(
                "caption cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: TabId::new(),
            caption,
            content,
            selected: false,
            created_at: Utc::now(),
            selected_at: None,
        })
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Handle to whatever is displayed while this tab is selected
    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last time this tab became the selected one
    pub fn selected_at(&self) -> Option<DateTime<Utc>> {
        self.selected_at
    }

    pub(crate) fn mark_selected(&mut self) {
        self.selected = true;
        self.selected_at = Some(Utc::now());
    }

    pub(crate) fn mark_deselected(&mut self) {
        self.selected = false;
    }
}
