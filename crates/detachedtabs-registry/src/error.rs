//! Registry error types

use thiserror::Error;

use crate::tab::TabId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(TabId),
}
