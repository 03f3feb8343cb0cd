//! Shared crate-wide constants.
//!
//! All geometry values are in viewport pixels. The terminal renderer maps
//! pixels onto character cells through [`crate::geometry::CellMetrics`].

/// Smallest width a window can be resized to.
pub const MIN_WINDOW_WIDTH: u32 = 300;

/// Smallest height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// Default number of windows that may be open at once. Opening one more
/// evicts the oldest.
pub const MAX_WINDOWS: usize = 8;

/// Stacking counter value before the first window is opened.
pub const INITIAL_Z_INDEX: u64 = 100;

/// Height of the menu bar strip along the top of the viewport.
pub const MENU_BAR_HEIGHT: i32 = 28;

/// Band at the bottom of the viewport kept clear for the dock.
pub const DOCK_RESERVE: i32 = 90;

/// Margin applied to cascaded windows from the viewport edges.
pub const CASCADE_PADDING: i32 = 20;

/// Diagonal offset between successive cascaded windows.
pub const CASCADE_OFFSET: i32 = 30;

/// Number of cascade steps before placement wraps back to the base position.
pub const CASCADE_WRAP: usize = 5;

/// Nominal window size used to anchor the cascade near the viewport center.
pub const CASCADE_NOMINAL_WIDTH: i32 = 500;
pub const CASCADE_NOMINAL_HEIGHT: i32 = 400;

/// Width of a dragged window that must stay reachable inside the viewport.
pub const DRAG_ANCHOR_WIDTH: i32 = 100;

/// Height of a dragged window that must stay reachable inside the viewport.
pub const DRAG_ANCHOR_HEIGHT: i32 = 50;

/// Window opened centered on startup.
pub const WELCOME_WINDOW_ID: &str = "welcome";

/// Window opened by the HELP menu and the help shortcut.
pub const HELP_WINDOW_ID: &str = "help";

/// Two presses on the same desktop icon within this many milliseconds count
/// as a double click.
pub const DOUBLE_CLICK_MS: u64 = 500;

/// Base for desktop icons that link to site-relative documents.
pub const SITE_URL: &str = "https://anuragtripathi.pro";
