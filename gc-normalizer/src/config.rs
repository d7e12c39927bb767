//! Optional TOML configuration for the normalizer
//!
//! ```toml
//! output_sheet = "Feuille1"
//!
//! [constraints]
//! Bloc_Notes = 500
//! Commentaire = 200
//! ```
//!
//! Entries under `[constraints]` override a built-in limit in place, or are
//! appended after the built-in columns in file order.

use std::path::Path;

use serde::Deserialize;

use crate::error::{NormalizeError, Result};
use crate::normalize::COLUMN_CONSTRAINTS;

/// Default name of the single output sheet
pub const DEFAULT_OUTPUT_SHEET: &str = "Feuille1";

/// Raw file layout
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output_sheet: Option<String>,
    #[serde(default)]
    constraints: toml::Table,
}

/// Resolved normalizer settings
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeConfig {
    /// Ordered (column, max length) pairs applied after the fixed steps
    pub constraints: Vec<(String, usize)>,
    /// Sheet name used when writing the output workbook
    pub output_sheet: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            constraints: COLUMN_CONSTRAINTS
                .iter()
                .map(|(name, max)| (name.to_string(), *max))
                .collect(),
            output_sheet: DEFAULT_OUTPUT_SHEET.to_string(),
        }
    }
}

impl NormalizeConfig {
    /// Load a config file and merge it over the built-in defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NormalizeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            NormalizeError::Config { message, .. } => NormalizeError::Config {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse config text and merge it over the built-in defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| NormalizeError::Config {
            path: Default::default(),
            message: e.to_string(),
        })?;

        let mut config = Self::default();
        if let Some(sheet) = file.output_sheet {
            config.output_sheet = sheet;
        }

        for (column, value) in &file.constraints {
            let max = value
                .as_integer()
                .and_then(|i| usize::try_from(i).ok())
                .ok_or_else(|| NormalizeError::Config {
                    path: Default::default(),
                    message: format!(
                        "constraint for '{}' must be a non-negative integer, got {}",
                        column, value
                    ),
                })?;
            config.set_constraint(column, max);
        }

        Ok(config)
    }

    /// Override an existing limit or append a new constrained column
    pub fn set_constraint(&mut self, column: &str, max: usize) {
        match self.constraints.iter_mut().find(|(name, _)| name == column) {
            Some(entry) => entry.1 = max,
            None => self.constraints.push((column.to_string(), max)),
        }
    }
}
