//! Strip configuration

use serde::{Deserialize, Serialize};

use crate::error::StripError;
use crate::size::Size;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Height of a freshly built horizontal strip
    pub horizontal_height: Size,
    /// Width of a freshly built vertical strip
    pub vertical_width: Size,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, size) in [
            ("horizontal_height", self.horizontal_height),
            ("vertical_width", self.vertical_width),
        ] {
            size.validate()
                .map_err(|_| StripError::Config(format!("{} is invalid: {}", name, size)))?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            horizontal_height: Size::px(30.0),
            vertical_width: Size::px(100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.horizontal_height.to_string(), "30px");
        assert_eq!(config.vertical_width.to_string(), "100px");
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{ "horizontal_height": "2em" }"#).unwrap();
        assert_eq!(config.horizontal_height.to_string(), "2em");
        assert_eq!(config.vertical_width, Config::default().vertical_width);
    }

    #[test]
    fn test_from_json_rejects_bad_size() {
        let result = Config::from_json(r#"{ "vertical_width": "wide" }"#);
        assert!(matches!(result, Err(StripError::Serialization(_))));
    }

    #[test]
    fn test_validate_rejects_negative() {
        let config = Config {
            horizontal_height: Size::px(-1.0),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(StripError::Config(_))));
    }
}
