use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{MenuError, Result};
use crate::layout::ViewConfig;
use crate::option::{duplicate_values, SelectOption};

/// Configuration for the selectmenu tools
///
/// ```toml
/// [menu]
/// title = "Pick a region"
/// width = 40
/// height = 16
/// header_height = 3
///
/// [logging]
/// level = "debug"
/// file = "/tmp/selectmenu.log"
///
/// [[options]]
/// value = "eu-central"
/// label = "Frankfurt"
/// description = "Europe (Central)"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub menu: ViewConfig,
    pub logging: LoggingConfig,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log filter when RUST_LOG is unset
    pub level: Option<String>,
    /// Log file, `~/.selectmenu/selectmenu.log` when unset
    pub file: Option<PathBuf>,
}

/// Options file layout for TOML (`[[options]]`) and JSON (`{"options": [...]}`)
#[derive(Debug, Deserialize)]
struct OptionsDocument {
    options: Vec<SelectOption>,
}

/// JSON options files may also be a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonOptions {
    List(Vec<SelectOption>),
    Document(OptionsDocument),
}

impl MenuConfig {
    /// Load config from ~/.selectmenu/config.toml
    ///
    /// A missing file is not an error: the defaults apply.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    ///
    /// Parsing logs nothing: config is read before logging is configured, so
    /// callers log what was loaded with [`MenuConfig::report`] afterwards.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| MenuError::toml(path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Log where the config came from and warn about duplicate option values
    pub fn report(&self, path: &Path) {
        if path.exists() {
            info!(
                "Loaded config from {:?} ({} options)",
                path,
                self.options.len()
            );
        } else {
            info!("No config at {:?}, using defaults", path);
        }
        warn_duplicates(&self.options, path);
    }

    /// Get config file path: ~/.selectmenu/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".selectmenu/config.toml")
    }

    /// Reject settings that cannot produce a usable pane
    pub fn validate(&self) -> Result<()> {
        if self.menu.width == 0 {
            return Err(MenuError::config("menu.width must be greater than zero"));
        }
        if self.menu.height == 0 {
            return Err(MenuError::config("menu.height must be greater than zero"));
        }
        Ok(())
    }
}

/// Load options from a `.toml` or `.json` file
pub fn load_options(path: &Path) -> Result<Vec<SelectOption>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let content = fs::read_to_string(path)?;

    let options = match extension.as_deref() {
        Some("toml") => {
            toml::from_str::<OptionsDocument>(&content)
                .map_err(|e| MenuError::toml(path, e))?
                .options
        }
        Some("json") => match serde_json::from_str::<JsonOptions>(&content)
            .map_err(|e| MenuError::json(path, e))?
        {
            JsonOptions::List(options) => options,
            JsonOptions::Document(doc) => doc.options,
        },
        other => {
            return Err(MenuError::invalid_format(
                path,
                format!("unsupported extension {:?} (expected .toml or .json)", other),
            ))
        }
    };

    if options.is_empty() {
        return Err(MenuError::empty_options(path));
    }

    warn_duplicates(&options, path);
    debug!("Loaded {} options from {:?}", options.len(), path);

    Ok(options)
}

fn warn_duplicates(options: &[SelectOption], path: &Path) {
    for value in duplicate_values(options) {
        warn!(
            "Duplicate option value '{}' in {:?}; only the first entry is navigable",
            value, path
        );
    }
}
