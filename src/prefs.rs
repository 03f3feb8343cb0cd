//! Theme and wallpaper preferences, the only state that survives a restart.
//!
//! Values live in a small string key/value store persisted as a JSON object,
//! under the fixed keys [`THEME_KEY`] and [`BACKGROUND_KEY`]. Reading never
//! fails: a missing or unreadable store yields the defaults.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::DeskError;

pub const THEME_KEY: &str = "os.theme";
pub const BACKGROUND_KEY: &str = "os.wallpaper";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Anything other than `dark` reads as the default light theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Background {
    WarmNeutral,
    CoolGray,
    Lavender,
    Forest,
    Sunset,
    #[default]
    Clouds,
    Street,
    Beach,
    Meadow,
    Night,
    RetroRoom,
    PixelSky,
    Vaporwave,
    CrtNoise,
    Minimal,
}

impl Background {
    pub const ALL: [Background; 15] = [
        Background::WarmNeutral,
        Background::CoolGray,
        Background::Lavender,
        Background::Forest,
        Background::Sunset,
        Background::Clouds,
        Background::Street,
        Background::Beach,
        Background::Meadow,
        Background::Night,
        Background::RetroRoom,
        Background::PixelSky,
        Background::Vaporwave,
        Background::CrtNoise,
        Background::Minimal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Background::WarmNeutral => "warm-neutral",
            Background::CoolGray => "cool-gray",
            Background::Lavender => "lavender",
            Background::Forest => "forest",
            Background::Sunset => "sunset",
            Background::Clouds => "clouds",
            Background::Street => "street",
            Background::Beach => "beach",
            Background::Meadow => "meadow",
            Background::Night => "night",
            Background::RetroRoom => "retro-room",
            Background::PixelSky => "pixel-sky",
            Background::Vaporwave => "vaporwave",
            Background::CrtNoise => "crt-noise",
            Background::Minimal => "minimal",
        }
    }

    /// Next background in display order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|b| *b == self).unwrap_or(0);
        Self::ALL
            .get((idx + 1) % Self::ALL.len())
            .copied()
            .unwrap_or_default()
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Background {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|b| b.as_str() == s).ok_or(())
    }
}

/// String key/value store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl PrefsStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DeskError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| DeskError::Prefs {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(DeskError::io(&path, err)),
        };
        Ok(Self { path, entries })
    }

    /// Open the store, falling back to an empty one on any error.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!(error = %err, "preferences unavailable; using defaults");
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set `key` and write the whole store back to disk.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), DeskError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn flush(&self) -> Result<(), DeskError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| DeskError::io(parent, err))?;
        }
        let raw = serde_json::to_string_pretty(&self.entries).map_err(DeskError::PrefsEncode)?;
        fs::write(&self.path, raw).map_err(|err| DeskError::io(&self.path, err))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub background: Background,
}

impl Preferences {
    pub fn load(store: &PrefsStore) -> Self {
        Self {
            theme: Theme::from_stored(store.get(THEME_KEY)),
            background: store
                .get(BACKGROUND_KEY)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
        }
    }

    pub fn save(&self, store: &mut PrefsStore) -> Result<(), DeskError> {
        store.set(THEME_KEY, self.theme.as_str())?;
        store.set(BACKGROUND_KEY, self.background.as_str())
    }
}
