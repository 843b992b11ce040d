//! Conversion settings for the cascade engine
//!
//! Settings load from JSON; any field left out takes its default.

use crate::Result;
use serde::{Deserialize, Serialize};

/// How tables are flattened to text
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TableMode {
    /// ASCII box with detected borders when the table shows any, tabs otherwise
    #[default]
    Auto,
    /// ASCII box with every border drawn
    Ascii,
    /// Tab-separated cells
    Tabs,
    /// Cells separated by two spaces
    Plain,
}

/// Cascade engine settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CascadeConfig {
    /// Table flattening mode
    pub table_mode: TableMode,
    /// Glyph for bullet levels whose level text is empty
    pub default_bullet: String,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            table_mode: TableMode::Auto,
            default_bullet: "\u{2022}".to_string(),
        }
    }
}

impl CascadeConfig {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        tracing::debug!(target: "cascade::config", ?config, "loaded cascade config");
        Ok(config)
    }

    /// Set the table mode
    pub fn with_table_mode(mut self, mode: TableMode) -> Self {
        self.table_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CascadeError;

    #[test]
    fn test_defaults() {
        let config = CascadeConfig::default();
        assert_eq!(config.table_mode, TableMode::Auto);
        assert_eq!(config.default_bullet, "\u{2022}");
    }

    #[test]
    fn test_from_json_partial() {
        let config = CascadeConfig::from_json(r#"{"table_mode": "tabs"}"#).unwrap();
        assert_eq!(config.table_mode, TableMode::Tabs);
        assert_eq!(config.default_bullet, "\u{2022}");

        let config = CascadeConfig::from_json("{}").unwrap();
        assert_eq!(config, CascadeConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_mode() {
        let err = CascadeConfig::from_json(r#"{"table_mode": "html"}"#).unwrap_err();
        assert!(matches!(err, CascadeError::Config(_)));
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
