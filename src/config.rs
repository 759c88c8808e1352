//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/netinv/netinv.toml`
//! 3. Environment variables: `NETINV_*` prefix

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::{ApplicationError, ApplicationResult};

/// How tree diagrams are drawn on the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    /// `+-` / `\-` branches, the canonical format
    #[default]
    Ascii,
    /// Box-drawing characters
    Unicode,
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub inventory: Option<PathBuf>,
    pub style: Option<TreeStyle>,
}

/// Unified configuration for netinv.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Manifest used when a command is given no file
    pub inventory: Option<PathBuf>,
    /// Diagram style for `render` and `find`
    pub style: TreeStyle,
}

/// Get the XDG config directory for netinv.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "netinv").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("netinv.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(raw.as_ref()) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(e) => {
            warn!(
                "cannot expand ${} in {}: {}, using path as given",
                e.var_name,
                path.display(),
                e.cause
            );
            path.to_path_buf()
        }
    }
}

impl Settings {
    /// Load settings from defaults, the global config file and `NETINV_*`.
    pub fn load() -> ApplicationResult<Self> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Same as [`Settings::load`] with an explicit global config location.
    pub fn load_from(global_path: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                debug!("loading global config: {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();
        Ok(current)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            inventory: overlay
                .inventory
                .clone()
                .or_else(|| self.inventory.clone()),
            style: overlay.style.unwrap_or(self.style),
        }
    }

    /// Apply NETINV_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NETINV")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("inventory") {
            settings.inventory = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("style") {
            settings.style = TreeStyle::from_str(&val, true).map_err(|e| ApplicationError::Config {
                message: format!("NETINV_STYLE: {e}"),
            })?;
        }
        Ok(settings)
    }

    fn expand_paths(&mut self) {
        if let Some(inventory) = &self.inventory {
            self.inventory = Some(expand_path(inventory));
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# netinv configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/netinv/netinv.toml
#   Env:    NETINV_* environment variables (NETINV_INVENTORY, NETINV_STYLE)

# Inventory manifest used when no file is given on the command line
# inventory = "~/inventory/network.toml"

# Diagram style: "ascii" (+- / \-) or "unicode" (box drawing)
# style = "ascii"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
