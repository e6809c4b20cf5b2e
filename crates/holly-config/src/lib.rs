//! # holly-config
//!
//! Layered configuration loading for Hollytree using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HOLLY_*` prefix, `__` as separator)
//! 2. Project-level `.holly/config.toml`
//! 3. User-level `~/.config/holly/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HOLLY_SHEET__URL` -> `sheet.url`,
//! `HOLLY_GENERAL__DEFAULT_ROOM` -> `general.default_room`, etc.
//! The `__` (double underscore) separates nested config sections.

mod error;
mod general;
mod sheet;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use sheet::SheetConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HollyConfig {
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HollyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if figment extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if figment extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".holly/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("HOLLY_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("holly").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_points_at_the_deployed_sheet() {
        let config = HollyConfig::default();
        assert!(config.sheet.is_configured());
        assert_eq!(config.sheet.timeout_secs, 10);
        assert_eq!(config.general.default_limit, 20);
        assert!(config.general.default_room.is_empty());
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("HOLLY_SHEET__URL", "https://example.com/exec");
            jail.set_env("HOLLY_GENERAL__DEFAULT_ROOM", "2학년");

            let config: HollyConfig = HollyConfig::figment().extract()?;
            assert_eq!(config.sheet.url, "https://example.com/exec");
            assert_eq!(config.general.default_room, "2학년");
            Ok(())
        });
    }

    #[test]
    fn project_toml_overrides_defaults_and_env_wins() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".holly")?;
            jail.create_file(
                ".holly/config.toml",
                r#"
                [sheet]
                url = "https://from-toml.example/exec"
                timeout_secs = 5

                [general]
                default_limit = 50
                "#,
            )?;
            jail.set_env("HOLLY_SHEET__TIMEOUT_SECS", "3");

            let config: HollyConfig = HollyConfig::figment().extract()?;
            assert_eq!(config.sheet.url, "https://from-toml.example/exec");
            assert_eq!(config.sheet.timeout_secs, 3);
            assert_eq!(config.general.default_limit, 50);
            Ok(())
        });
    }
}
