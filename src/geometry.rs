//! Pixel geometry shared by the store, the controllers and the renderer.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Top-left corner of a window in viewport pixels. May be negative when a
/// caller repositions a window past the left or top edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Window extent in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Raise each axis to at least `min` on that axis.
    pub fn at_least(self, min: Size) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

/// Pointer location in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset of `self` from `origin`.
    pub fn delta_from(self, origin: Point) -> (i32, i32) {
        (
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
        )
    }
}

/// Size of the visible desktop in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width_i32(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    pub fn height_i32(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 800)
    }
}

/// How many pixels one terminal cell stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMetrics {
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8,
            cell_height: 16,
        }
    }
}

impl CellMetrics {
    fn cw(&self) -> i32 {
        i32::try_from(self.cell_width.max(1)).unwrap_or(i32::MAX)
    }

    fn ch(&self) -> i32 {
        i32::try_from(self.cell_height.max(1)).unwrap_or(i32::MAX)
    }

    /// Viewport covering a terminal of `columns` x `rows` cells.
    pub fn viewport_for(&self, columns: u16, rows: u16) -> Viewport {
        Viewport::new(
            u32::from(columns).saturating_mul(self.cell_width.max(1)),
            u32::from(rows).saturating_mul(self.cell_height.max(1)),
        )
    }

    /// Pixel point at the top-left corner of a cell.
    pub fn point_for_cell(&self, column: u16, row: u16) -> Point {
        Point::new(i32::from(column) * self.cw(), i32::from(row) * self.ch())
    }

    /// Cell rectangle covering a pixel rectangle. The origin may be negative
    /// when the window hangs off the left or top edge.
    pub fn cells_for(&self, position: Position, size: Size) -> CellRect {
        let width = i32::try_from(size.width).unwrap_or(i32::MAX);
        let height = i32::try_from(size.height).unwrap_or(i32::MAX);
        CellRect {
            x: position.x.div_euclid(self.cw()),
            y: position.y.div_euclid(self.ch()),
            width: (width / self.cw()).clamp(1, i32::from(u16::MAX)) as u16,
            height: (height / self.ch()).clamp(1, i32::from(u16::MAX)) as u16,
        }
    }
}

/// Signed cell rectangle with unsigned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    /// Part of the rectangle that falls inside `bounds`.
    pub fn visible_in(&self, bounds: Rect) -> Rect {
        let left = self.x.max(i32::from(bounds.x));
        let top = self.y.max(i32::from(bounds.y));
        let right = (self.x + i32::from(self.width)).min(i32::from(bounds.right()));
        let bottom = (self.y + i32::from(self.height)).min(i32::from(bounds.bottom()));
        if right <= left || bottom <= top {
            return Rect::default();
        }
        Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let c = i32::from(column);
        let r = i32::from(row);
        c >= self.x
            && c < self.x + i32::from(self.width)
            && r >= self.y
            && r < self.y + i32::from(self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + i32::from(self.width) - 1
    }

    pub fn bottom(&self) -> i32 {
        self.y + i32::from(self.height) - 1
    }
}

impl From<Rect> for CellRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: i32::from(rect.x),
            y: i32::from(rect.y),
            width: rect.width,
            height: rect.height,
        }
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
