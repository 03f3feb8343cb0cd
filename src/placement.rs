//! Initial position for a newly opened window.
//!
//! Cascaded placement is approximate and ignores the window size; centered
//! placement is exact and size-aware.

use crate::constants::{
    CASCADE_NOMINAL_HEIGHT, CASCADE_NOMINAL_WIDTH, CASCADE_OFFSET, CASCADE_PADDING, CASCADE_WRAP,
    DOCK_RESERVE, MENU_BAR_HEIGHT,
};
use crate::geometry::{Position, Size, Viewport};

/// Compute where the `window_index`-th open window should appear.
pub fn place(window_index: usize, window_size: Size, viewport: Viewport, centered: bool) -> Position {
    let vw = viewport.width_i32();
    let vh = viewport.height_i32();
    let ww = i32::try_from(window_size.width).unwrap_or(i32::MAX);
    let wh = i32::try_from(window_size.height).unwrap_or(i32::MAX);

    if centered {
        let x = (vw.saturating_sub(ww)).div_euclid(2).max(0);
        let workspace = vh - MENU_BAR_HEIGHT - DOCK_RESERVE;
        let y = (MENU_BAR_HEIGHT + (workspace.saturating_sub(wh)).div_euclid(2)).max(MENU_BAR_HEIGHT);
        return Position::new(x, y);
    }

    let base_x = ((vw - CASCADE_NOMINAL_WIDTH).div_euclid(2)).max(CASCADE_PADDING);
    let base_y = ((vh - CASCADE_NOMINAL_HEIGHT).div_euclid(2)).max(MENU_BAR_HEIGHT + CASCADE_PADDING);
    let step = (window_index % CASCADE_WRAP) as i32 * CASCADE_OFFSET;
    Position::new(base_x + step, base_y + step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_uses_workspace_band() {
        let pos = place(3, Size::new(500, 600), Viewport::new(1280, 800), true);
        // workspace = 800 - 28 - 90 = 682; (682 - 600) / 2 = 41
        assert_eq!(pos, Position::new(390, 28 + 41));
    }

    #[test]
    fn centered_never_goes_above_menu_bar_or_left_of_zero() {
        let pos = place(0, Size::new(900, 900), Viewport::new(640, 480), true);
        assert_eq!(pos, Position::new(0, MENU_BAR_HEIGHT));
    }

    #[test]
    fn cascade_steps_and_wraps_every_five() {
        let vp = Viewport::new(1280, 800);
        let size = Size::new(700, 550);
        let first = place(0, size, vp, false);
        assert_eq!(first, Position::new(390, 200));
        assert_eq!(place(2, size, vp, false), Position::new(450, 260));
        assert_eq!(place(5, size, vp, false), first);
        assert_eq!(place(7, Size::new(300, 200), vp, false), place(2, size, vp, false));
    }

    #[test]
    fn cascade_respects_padding_on_tiny_viewport() {
        let pos = place(0, Size::new(300, 200), Viewport::new(200, 100), false);
        assert_eq!(pos, Position::new(CASCADE_PADDING, MENU_BAR_HEIGHT + CASCADE_PADDING));
    }
}
