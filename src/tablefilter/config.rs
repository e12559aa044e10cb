use crate::error::{Result, TableFilterError};
use crate::filter::BarVisibility;
use crate::screens::ScreenConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CELL_WIDTH: usize = 32;

/// Configuration for tablefilter, stored in .tablefilter/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TableFilterConfig {
    /// Whether idle screens still show their filter bar
    #[serde(default)]
    pub bar_visibility: BarVisibility,

    /// Widest a table cell renders before truncation
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,

    /// Screens that replace or extend the built-in ones
    #[serde(default)]
    pub screens: Vec<ScreenConfig>,
}

fn default_cell_width() -> usize {
    DEFAULT_CELL_WIDTH
}

impl Default for TableFilterConfig {
    fn default() -> Self {
        Self {
            bar_visibility: BarVisibility::default(),
            cell_width: DEFAULT_CELL_WIDTH,
            screens: Vec::new(),
        }
    }
}

/// Scalar keys the `config` command can read and write.
pub const CONFIG_KEYS: &[&str] = &["bar-visibility", "cell-width"];

impl TableFilterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TableFilterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "bar-visibility" => Ok(self.bar_visibility.to_string()),
            "cell-width" => Ok(self.cell_width.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "bar-visibility" => {
                self.bar_visibility = value.parse().map_err(TableFilterError::Config)?;
            }
            "cell-width" => {
                let width: usize = value.parse().map_err(|_| {
                    TableFilterError::Config(format!(
                        "cell-width must be a number, got '{}'",
                        value
                    ))
                })?;
                if width < 4 {
                    return Err(TableFilterError::Config(
                        "cell-width must be at least 4".to_string(),
                    ));
                }
                self.cell_width = width;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> TableFilterError {
    TableFilterError::Config(format!(
        "Unknown config key '{}' (known: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
