use ratatui::prelude::Rect;

use crate::geometry::{CellMetrics, CellRect};
use crate::window::WindowRecord;

/// Rows taken by the menu bar along the top of the terminal.
pub const MENU_BAR_ROWS: u16 = 1;

/// Rows taken by the dock along the bottom of the terminal.
pub const TASKBAR_ROWS: u16 = 3;

/// Terminal area split into the three horizontal bands of the desktop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeskLayout {
    pub area: Rect,
    pub menu_bar: Rect,
    pub workspace: Rect,
    pub taskbar: Rect,
}

impl DeskLayout {
    /// Split `area` into:
    /// - the menu bar (top `MENU_BAR_ROWS` rows),
    /// - the taskbar (bottom `TASKBAR_ROWS` rows), and
    /// - the workspace in between, which maximized windows fill.
    ///
    /// On very short terminals the taskbar gives way first.
    pub fn split(area: Rect) -> Self {
        let top_h = MENU_BAR_ROWS.min(area.height);
        let bottom_h = TASKBAR_ROWS.min(area.height.saturating_sub(top_h));
        let menu_bar = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: top_h,
        };
        let taskbar = Rect {
            x: area.x,
            y: area.y.saturating_add(area.height).saturating_sub(bottom_h),
            width: area.width,
            height: bottom_h,
        };
        let workspace = Rect {
            x: area.x,
            y: area.y.saturating_add(top_h),
            width: area.width,
            height: area.height.saturating_sub(top_h).saturating_sub(bottom_h),
        };
        Self {
            area,
            menu_bar,
            workspace,
            taskbar,
        }
    }

    /// Cell rectangle a window occupies on screen.
    pub fn window_rect(&self, window: &WindowRecord, metrics: &CellMetrics) -> CellRect {
        if window.maximized {
            CellRect::from(self.workspace)
        } else {
            metrics.cells_for(window.position, window.size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Position, Size};

    fn record(maximized: bool) -> WindowRecord {
        WindowRecord {
            id: "paint".into(),
            title: "PAINT".into(),
            icon: "paint".into(),
            position: Position::new(80, 64),
            size: Size::new(400, 320),
            z_index: 101,
            minimized: false,
            maximized,
        }
    }

    #[test]
    fn split_reserves_menu_and_taskbar() {
        let layout = DeskLayout::split(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.menu_bar, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.taskbar, Rect::new(0, 37, 100, 3));
        assert_eq!(layout.workspace, Rect::new(0, 1, 100, 36));
    }

    #[test]
    fn split_tiny_terminal() {
        let layout = DeskLayout::split(Rect::new(0, 0, 10, 2));
        assert_eq!(layout.menu_bar.height, 1);
        assert_eq!(layout.taskbar.height, 1);
        assert_eq!(layout.workspace.height, 0);
    }

    #[test]
    fn maximized_window_fills_workspace() {
        let layout = DeskLayout::split(Rect::new(0, 0, 100, 40));
        let metrics = CellMetrics::default();
        assert_eq!(
            layout.window_rect(&record(true), &metrics),
            CellRect::from(layout.workspace)
        );
        let rect = layout.window_rect(&record(false), &metrics);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (10, 4, 50, 20));
    }
}
