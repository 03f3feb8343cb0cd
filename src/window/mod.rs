pub mod decorator;

mod store;

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::geometry::{Position, Size};
use crate::registry::WindowConfig;

pub use store::{Command, CommandContext, DeskState, WindowStore};

/// State of one open application window.
///
/// `position` and `size` are kept while the window is maximized so that
/// un-maximizing puts it back exactly where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub position: Position,
    pub size: Size,
    pub z_index: u64,
    pub minimized: bool,
    pub maximized: bool,
}

impl WindowRecord {
    fn from_config(config: &WindowConfig, position: Position, z_index: u64) -> Self {
        Self {
            id: config.id.clone(),
            title: config.title.clone(),
            icon: config.icon.clone(),
            position,
            size: config
                .default_size
                .at_least(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
            z_index,
            minimized: false,
            maximized: false,
        }
    }

    /// Whether the renderer should draw this window at all.
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}
