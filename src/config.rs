//! Grid game configuration.
//!
//! A `GridConfig` describes the geometry of a gravity-drop board: its
//! dimensions and the run length needed to win. It can be built in code
//! with the `with_*` methods or parsed from TOML:
//!
//! ```
//! use board_rules::config::GridConfig;
//!
//! let config = GridConfig::from_toml_str("rows = 5\ncolumns = 5\nconnect = 3").unwrap();
//! assert_eq!(config.rows, 5);
//! assert_eq!(config.connect, 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Geometry of a gravity-drop grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of rows (row 0 is the top).
    pub rows: usize,

    /// Number of columns a piece can be dropped into.
    pub columns: usize,

    /// Consecutive same-player cells needed to win.
    pub connect: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 7,
            connect: 4,
        }
    }
}

impl GridConfig {
    /// Create the classic 6 × 7, connect-4 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the winning run length.
    #[must_use]
    pub fn with_connect(mut self, connect: usize) -> Self {
        self.connect = connect;
        self
    }

    /// Check that the geometry describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".to_string()));
        }
        if self.columns == 0 {
            return Err(ConfigError::Validation("columns must be > 0".to_string()));
        }
        if self.connect == 0 {
            return Err(ConfigError::Validation("connect must be > 0".to_string()));
        }
        if self.connect > self.rows.max(self.columns) {
            return Err(ConfigError::Validation(format!(
                "connect {} does not fit on a {}x{} board",
                self.connect, self.rows, self.columns
            )));
        }
        Ok(())
    }

    /// Parse a configuration from TOML and validate it.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GridConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_board() {
        let config = GridConfig::default();
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 7);
        assert_eq!(config.connect, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GridConfig::new().with_rows(4).with_columns(5).with_connect(3);
        assert_eq!(config, GridConfig { rows: 4, columns: 5, connect: 3 });
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GridConfig::from_toml_str("columns = 9").unwrap();
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 9);
        assert_eq!(config.connect, 4);
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            GridConfig::new().with_rows(0).validate(),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            GridConfig::new().with_columns(0).validate(),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            GridConfig::new().with_connect(0).validate(),
            Err(ConfigError::Validation(_))
        ));

        let err = GridConfig::new()
            .with_rows(3)
            .with_columns(3)
            .with_connect(4)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: connect 4 does not fit on a 3x3 board"
        );
    }

    #[test]
    fn test_invalid_toml() {
        let result = GridConfig::from_toml_str("rows = \"six\"");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_toml_validation_runs() {
        let result = GridConfig::from_toml_str("rows = 0");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
