//! Startup configuration loaded from `~/.config/retro-desk/config.toml`.
//!
//! Every section is optional; a missing file is the same as an empty one.
//!
//! ```toml
//! [desktop]
//! capacity = 8
//! welcome_window = "welcome"
//! open_welcome = true
//!
//! [cells]
//! cell_width = 8
//! cell_height = 16
//!
//! [[windows]]
//! id = "notes"
//! title = "NOTES"
//! icon = "document"
//! default_size = { width = 420, height = 320 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_WINDOWS, WELCOME_WINDOW_ID};
use crate::error::DeskError;
use crate::geometry::CellMetrics;
use crate::registry::{WindowConfig, WindowRegistry};

pub const APP_DIR: &str = "retro-desk";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub desktop: DesktopConfig,
    pub cells: CellMetrics,
    /// Extra or overriding window definitions, merged over the built-in ones.
    pub windows: Vec<WindowConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub capacity: usize,
    pub welcome_window: String,
    pub open_welcome: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_WINDOWS,
            welcome_window: WELCOME_WINDOW_ID.to_string(),
            open_welcome: true,
        }
    }
}

/// `<config_dir>/retro-desk/<file>`, if the platform has a config directory.
pub fn default_path(file: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(file))
}

impl DeskConfig {
    /// Load from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, DeskError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_path("config.toml") {
                Some(path) => path,
                None => {
                    tracing::info!("no config directory; using default configuration");
                    return Ok(Self::default());
                }
            },
        };
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "config file not found; using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(DeskError::io(&path, err)),
        };
        let config = Self::parse(&raw).map_err(|err| match err {
            DeskError::Config { source, .. } => DeskError::Config {
                path: path.clone(),
                source,
            },
            other => other,
        })?;
        tracing::info!(path = %path.display(), "configuration loaded");
        tracing::debug!(?config, "config");
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self, DeskError> {
        let config: Self = toml::from_str(raw).map_err(|source| DeskError::Config {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), DeskError> {
        if self.desktop.capacity == 0 {
            return Err(DeskError::InvalidConfig(
                "desktop.capacity must be at least 1".into(),
            ));
        }
        if self.cells.cell_width == 0 || self.cells.cell_height == 0 {
            return Err(DeskError::InvalidConfig(
                "cells.cell_width and cells.cell_height must be non-zero".into(),
            ));
        }
        if let Some(bad) = self.windows.iter().find(|w| w.id.trim().is_empty()) {
            return Err(DeskError::InvalidConfig(format!(
                "window '{}' has an empty id",
                bad.title
            )));
        }
        Ok(())
    }

    /// Built-in windows with this config's entries layered on top.
    pub fn registry(&self) -> WindowRegistry {
        let mut registry = WindowRegistry::builtin();
        for window in &self.windows {
            registry.insert(window.clone());
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use indoc::indoc;

    #[test]
    fn empty_config_is_default() {
        let config = DeskConfig::parse("").unwrap();
        assert_eq!(config, DeskConfig::default());
        assert_eq!(config.desktop.capacity, 8);
        assert!(config.desktop.open_welcome);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = DeskConfig::parse(indoc! {r#"
            [desktop]
            capacity = 3

            [cells]
            cell_height = 20
        "#})
        .unwrap();
        assert_eq!(config.desktop.capacity, 3);
        assert_eq!(config.desktop.welcome_window, "welcome");
        assert_eq!(config.cells.cell_width, 8);
        assert_eq!(config.cells.cell_height, 20);
    }

    #[test]
    fn window_overrides_merge_into_registry() {
        let config = DeskConfig::parse(indoc! {r#"
            [[windows]]
            id = "notes"
            title = "NOTES"
            icon = "document"
            default_size = { width = 420, height = 320 }

            [[windows]]
            id = "paint"
            title = "PAINT XL"
            icon = "paint"
            default_size = { width = 900, height = 700 }
        "#})
        .unwrap();
        let registry = config.registry();
        assert_eq!(registry.len(), 14);
        assert_eq!(
            registry.get("notes").unwrap().default_size,
            Size::new(420, 320)
        );
        assert_eq!(registry.get("paint").unwrap().title, "PAINT XL");
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = DeskConfig::parse("[desktop]\ncapacity = 0\n").unwrap_err();
        assert!(matches!(err, DeskError::InvalidConfig(_)));
    }

    #[test]
    fn load_reports_path_on_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[desktop\n").unwrap();
        match DeskConfig::load(Some(&path)) {
            Err(DeskError::Config { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeskConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, DeskConfig::default());
    }
}
