//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <path>`, else `$XDG_CONFIG_HOME/replace/replace.toml`
//! 3. Environment variables: `REPLACE_*` prefix
//!
//! Command line flags (`--mapfile`, `--order`) override all layers.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, IoResultExt};
use crate::domain::{expand_env_vars, ApplyOrder};

/// Prefix of environment variables overriding settings.
pub const ENV_PREFIX: &str = "REPLACE";

/// Unified configuration for replace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Mapping file merged over flag pairs when `--mapfile` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapfile: Option<PathBuf>,
    /// Order in which mapping pairs are applied
    pub order: ApplyOrder,
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub mapfile: Option<PathBuf>,
    pub order: Option<ApplyOrder>,
}

/// Get the XDG config directory for replace.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "replace").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("replace.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).with_path_context(path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(mapfile) = &self.mapfile {
            let expanded = expand_env_vars(mapfile.to_string_lossy().as_ref());
            self.mapfile = Some(PathBuf::from(expanded));
        }
    }

    /// Merge overlay config onto self (base): overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            mapfile: overlay.mapfile.clone().or_else(|| self.mapfile.clone()),
            order: overlay.order.unwrap_or(self.order),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; must exist. When `None`, the
    ///   global config file is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        match config_file {
            Some(path) => {
                debug!("load: explicit config {}", path.display());
                current = current.merge_with(&load_raw_settings(path)?);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        debug!("load: global config {}", global_path.display());
                        current = current.merge_with(&load_raw_settings(&global_path)?);
                    }
                }
            }
        }

        current = Self::apply_env_overrides(current, Environment::with_prefix(ENV_PREFIX))?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply `REPLACE_*` environment variables as explicit overrides.
    ///
    /// Empty values are treated as unset.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("mapfile") {
            if !val.is_empty() {
                settings.mapfile = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = config.get_string("order") {
            if !val.is_empty() {
                settings.order = val
                    .parse()
                    .map_err(|message| ApplicationError::Config { message })?;
            }
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
