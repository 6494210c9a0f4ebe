//! Configuration loading for the tweenlab demo gallery.
//!
//! Reads `config.toml` from the platform config directory
//! (`~/.config/tweenlab/` on Linux); every field has a default, and a
//! missing file simply means defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;
use tweenlab_anim::Easing;

/// Errors from loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file was read but is not valid config TOML.
    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
}

/// User configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Frame tick in milliseconds (the event-poll timeout).
    pub tick_ms: u64,
    /// Default transition duration for scene presets, in milliseconds.
    pub default_duration_ms: u64,
    /// Easing curve for preset transitions:
    /// `linear`, `ease-in`, `ease-out` or `ease-in-out`.
    pub easing: String,
    /// Draw the dashed curve behind the follow-path marker.
    pub trail: bool,
    /// Show the key-hint line at the bottom of each scene.
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 33,
            default_duration_ms: 1000,
            easing: "ease-in-out".to_string(),
            trail: true,
            show_help: true,
        }
    }
}

impl Config {
    /// Load the config from the platform config directory, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(dirs) = ProjectDirs::from("", "", "tweenlab") else {
            return Ok(Self::default());
        };
        let path = dirs.config_dir().join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load the config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// The configured easing curve; unknown names fall back to the default.
    pub fn easing(&self) -> Easing {
        Easing::from_name(&self.easing).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.tick_ms, 33);
        assert_eq!(config.default_duration_ms, 1000);
        assert_eq!(config.easing(), Easing::EaseInOut);
        assert!(config.trail);
        assert!(config.show_help);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("tick_ms = 16\neasing = \"linear\"").unwrap();
        assert_eq!(config.tick_ms, 16);
        assert_eq!(config.easing(), Easing::Linear);
        assert_eq!(config.default_duration_ms, 1000);
    }

    #[test]
    fn the_trail_can_be_turned_off() {
        let config: Config = toml::from_str("trail = false").unwrap();
        assert!(!config.trail);
        assert!(config.show_help);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("frame_rate = 60").is_err());
    }

    #[test]
    fn unknown_easing_names_fall_back() {
        let config: Config = toml::from_str("easing = \"bounce\"").unwrap();
        assert_eq!(config.easing(), Easing::EaseInOut);
    }
}
