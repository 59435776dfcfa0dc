//! Config persistence and path resolution methods for `Config`.
//!
//! Covers `load_from` / `save_to` (YAML file I/O with atomic write) and the
//! XDG-style `config_path` / `config_dir` helpers.

use super::config_struct::Config;
use crate::error::ConfigError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing file is not an error: defaults are written to `path` and
    /// returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", path);

        if !path.exists() {
            log::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            return Ok(config);
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config = Self::from_yaml(&contents)?;
        log::info!(
            "Loaded config from {:?} (strategy={})",
            path,
            config.reply.reply_strategy.display_name()
        );
        Ok(config)
    }

    /// Parse a YAML document after `${VAR}` substitution, then validate it.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let allow_all = super::env_vars::pre_scan_allow_all_env_vars(contents);
        let contents = super::env_vars::substitute_variables_with_allowlist(contents, allow_all);
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Write to a temp file then rename so a crash never leaves a truncated config
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("chefbot")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/chefbot on every Unix, macOS included
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("chefbot")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
