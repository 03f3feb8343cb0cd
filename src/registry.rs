//! Static description of every window the desktop knows how to open, plus the
//! icon, dock and menu tables that emit `open` commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::keybindings::Action;

/// Display metadata for one kind of window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub default_size: Size,
}

impl WindowConfig {
    pub fn new(id: &str, title: &str, icon: &str, width: u32, height: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            default_size: Size::new(width, height),
        }
    }
}

/// Lookup table from window id to its [`WindowConfig`].
#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    entries: BTreeMap<String, WindowConfig>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every application window shipped with the desktop.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for config in [
            WindowConfig::new("about", "ABOUT - ANURAG TRIPATHI", "about", 700, 550),
            WindowConfig::new("settings", "SETTINGS - PREFERENCES", "settings", 350, 420),
            WindowConfig::new("my-computer", "MY COMPUTER - PORTFOLIO", "computer", 650, 500),
            WindowConfig::new("documents", "DOCUMENTS", "document", 450, 350),
            WindowConfig::new("music", "MUSIC PLAYER - RETRO JAMS", "music", 380, 420),
            WindowConfig::new("guestbook", "GUESTBOOK", "guestbook", 450, 400),
            WindowConfig::new("paint", "PAINT", "paint", 500, 400),
            WindowConfig::new("welcome", "WELCOME", "about", 500, 600),
            WindowConfig::new("snakegame", "SNACK GAME - RETRO ARCADE", "game", 400, 530),
            WindowConfig::new("help", "ANURAG HELP", "about", 550, 600),
            WindowConfig::new("assistant", "ANURAG OS ASSISTANT", "about", 500, 450),
            WindowConfig::new("demo", "AI PRODUCT INSIGHT ANALYZER", "computer", 800, 600),
            WindowConfig::new("browser", "INTERNET EXPLORER", "internet", 800, 600),
        ] {
            registry.insert(config);
        }
        registry
    }

    /// Add or replace an entry. Already-open windows keep the metadata they
    /// were created with.
    pub fn insert(&mut self, config: WindowConfig) {
        self.entries.insert(config.id.clone(), config);
    }

    pub fn get(&self, id: &str) -> Option<&WindowConfig> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a desktop icon does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTarget {
    Window(&'static str),
    Url(&'static str),
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopIcon {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub target: IconTarget,
    pub row: u16,
    pub col: u16,
}

const fn icon(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    target: IconTarget,
    row: u16,
    col: u16,
) -> DesktopIcon {
    DesktopIcon {
        id,
        label,
        icon,
        target,
        row,
        col,
    }
}

pub const DESKTOP_ICONS: &[DesktopIcon] = &[
    icon("my-computer", "MY COMPUTER", "computer", IconTarget::Window("my-computer"), 0, 0),
    icon("about", "ABOUT ME", "about", IconTarget::Window("about"), 0, 1),
    icon(
        "resume",
        "RESUME.PDF",
        "pdf",
        IconTarget::Url("/Anurag Tripatrhi_Tech Product Manager.pdf"),
        0,
        2,
    ),
    icon(
        "linkedin",
        "LINKEDIN",
        "linkedin",
        IconTarget::Url("https://www.linkedin.com/in/anuragtripathi-pm/"),
        0,
        3,
    ),
    icon("settings", "SETTINGS", "settings", IconTarget::Window("settings"), 1, 0),
    icon("guestbook", "GUESTBOOK", "guestbook", IconTarget::Window("guestbook"), 1, 1),
    icon("paint", "PAINT", "paint", IconTarget::Window("paint"), 1, 2),
    icon("music", "MUSIC", "music", IconTarget::Window("music"), 2, 0),
    icon("kickflip", "SNACK GAME", "game", IconTarget::Window("snakegame"), 2, 1),
    icon("demo", "AI DEMOS", "computer", IconTarget::Window("demo"), 2, 2),
    icon("browser", "INTERNET", "internet", IconTarget::Window("browser"), 2, 3),
    icon("trash", "TRASH", "trash", IconTarget::Nothing, 3, 0),
];

/// Dock entry that opens (or raises) a window on click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskbarItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub window_id: &'static str,
}

pub const TASKBAR_ITEMS: &[TaskbarItem] = &[
    TaskbarItem { id: "about", icon: "about", window_id: "about" },
    TaskbarItem { id: "my-computer", icon: "computer", window_id: "my-computer" },
    TaskbarItem { id: "settings", icon: "settings", window_id: "settings" },
    TaskbarItem { id: "guestbook", icon: "guestbook", window_id: "guestbook" },
    TaskbarItem { id: "paint", icon: "paint", window_id: "paint" },
    TaskbarItem { id: "snakegame", icon: "game", window_id: "snakegame" },
];

/// Effect of choosing a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    CloseActive,
    MinimizeActive,
    MaximizeActive,
    OpenHelp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    /// Action whose key binding is shown next to the entry.
    pub shortcut: Option<Action>,
    pub command: MenuCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub label: &'static str,
    pub entries: &'static [MenuEntry],
}

pub const MENUS: &[Menu] = &[
    Menu {
        label: "FILE",
        entries: &[MenuEntry {
            label: "Close Window",
            shortcut: Some(Action::CloseWindow),
            command: MenuCommand::CloseActive,
        }],
    },
    Menu {
        label: "VIEW",
        entries: &[MenuEntry {
            label: "Enter Full Screen",
            shortcut: Some(Action::ToggleMaximize),
            command: MenuCommand::MaximizeActive,
        }],
    },
    Menu {
        label: "WINDOW",
        entries: &[
            MenuEntry {
                label: "Minimize",
                shortcut: Some(Action::MinimizeWindow),
                command: MenuCommand::MinimizeActive,
            },
            MenuEntry {
                label: "Zoom",
                shortcut: None,
                command: MenuCommand::MaximizeActive,
            },
            MenuEntry {
                label: "Close",
                shortcut: Some(Action::CloseWindow),
                command: MenuCommand::CloseActive,
            },
        ],
    },
    Menu {
        label: "HELP",
        entries: &[MenuEntry {
            label: "Anurag Help",
            shortcut: Some(Action::OpenHelp),
            command: MenuCommand::OpenHelp,
        }],
    },
];
