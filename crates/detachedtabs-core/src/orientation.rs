//! Strip orientation and the axes it selects
//!
//! A horizontal strip lays tabs out along the width, so its cross axis is the
//! height; a vertical strip is the other way around. Only the cross axis is
//! propagated from the strip to its tab controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StripError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

impl Orientation {
    /// Axis the tabs are laid out along
    pub fn main_axis(&self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Width,
            Orientation::Vertical => Axis::Height,
        }
    }

    /// Axis whose size is propagated to every tab control
    pub fn cross_axis(&self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Height,
            Orientation::Vertical => Axis::Width,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = StripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(StripError::UnsupportedOrientation(s.to_string())),
        }
    }
}
