//! CSS-like sizes (`40px`, `100%`, `2.5em`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StripError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Px,
    Percent,
    Em,
    Ex,
    Pt,
    Pc,
    Cm,
    Mm,
    In,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Em => "em",
            Unit::Ex => "ex",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        let unit = match s {
            // A bare number is pixels
            "" | "px" => Unit::Px,
            "%" => Unit::Percent,
            "em" => Unit::Em,
            "ex" => Unit::Ex,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "cm" => Unit::Cm,
            "mm" => Unit::Mm,
            "in" => Unit::In,
            _ => return None,
        };
        Some(unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub value: f32,
    pub unit: Unit,
}

impl Size {
    /// Fill the parent along an axis
    pub const FULL: Size = Size::percent(100.0);

    pub const fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, Unit::Px)
    }

    pub const fn percent(value: f32) -> Self {
        Self::new(value, Unit::Percent)
    }

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    /// Reject sizes no renderer can apply
    pub fn validate(self) -> Result<Self, StripError> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(StripError::InvalidSize(self.to_string()));
        }
        Ok(self)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}

impl FromStr for Size {
    type Err = StripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split);

        let value: f32 = number
            .parse()
            .map_err(|_| StripError::InvalidSize(s.to_string()))?;
        let unit = Unit::parse(&unit.trim().to_lowercase())
            .ok_or_else(|| StripError::InvalidSize(s.to_string()))?;

        Size::new(value, unit)
            .validate()
            .map_err(|_| StripError::InvalidSize(s.to_string()))
    }
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
