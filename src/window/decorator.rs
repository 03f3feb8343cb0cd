//! Window chrome: title bar with close / minimize / maximize buttons, a
//! border and a resize grip in the bottom-right corner.
//!
//! ```text
//! [x][-][+]      PAINT
//! │                          │
//! │                          │
//! └─────────────────────────◢┘
//! ```

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::geometry::CellRect;
use crate::theme::Palette;
use crate::ui::{UiFrame, centered};

const BUTTONS: [(&str, FrameHit); 3] = [
    ("[x]", FrameHit::Close),
    ("[-]", FrameHit::Minimize),
    ("[+]", FrameHit::Maximize),
];
const BUTTON_WIDTH: i32 = 3;
const RESIZE_GRIP: &str = "◢";

/// Part of a window frame under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHit {
    Close,
    Minimize,
    Maximize,
    /// Title bar outside the buttons.
    TitleBar,
    ResizeGrip,
    Body,
}

/// Which frame part of `rect` covers `(column, row)`, if any.
/// `resizable` is false for maximized windows, which have no grip.
pub fn hit_test(rect: CellRect, column: u16, row: u16, resizable: bool) -> Option<FrameHit> {
    if !rect.contains(column, row) {
        return None;
    }
    let col = i32::from(column);
    let row = i32::from(row);
    if row == rect.y {
        let offset = col - rect.x;
        return Some(
            BUTTONS
                .iter()
                .enumerate()
                .find(|(idx, _)| {
                    let start = *idx as i32 * BUTTON_WIDTH;
                    offset >= start && offset < start + BUTTON_WIDTH
                })
                .map(|(_, (_, hit))| *hit)
                .unwrap_or(FrameHit::TitleBar),
        );
    }
    if resizable && row == rect.bottom() && col >= rect.right() - 1 {
        return Some(FrameHit::ResizeGrip);
    }
    Some(FrameHit::Body)
}

/// Area inside the border and below the title bar.
pub fn content_area(rect: CellRect, bounds: Rect) -> Rect {
    let inner = CellRect {
        x: rect.x + 1,
        y: rect.y + 1,
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    };
    if inner.width == 0 || inner.height == 0 {
        return Rect::default();
    }
    inner.visible_in(bounds)
}

#[derive(Debug, Clone, Copy)]
pub struct FrameStyle<'a> {
    pub title: &'a str,
    pub active: bool,
    pub resizable: bool,
}

/// Draw the frame of one window. Everything under `rect` is cleared first so
/// windows lower in the stack never show through.
pub fn render_frame(
    frame: &mut UiFrame<'_>,
    rect: CellRect,
    bounds: Rect,
    palette: &Palette,
    style: FrameStyle<'_>,
) {
    let visible = rect.visible_in(bounds);
    if visible.width == 0 || visible.height == 0 {
        return;
    }
    frame.fill(visible, palette.window());

    let header = palette.header(style.active);
    let border = palette.border();
    let width = usize::from(rect.width);

    // Title bar
    let title_row = CellRect {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: 1,
    };
    frame.fill(title_row.visible_in(bounds), header);
    let buttons_width = BUTTONS.len() * BUTTON_WIDTH as usize;
    let (offset, title) = centered(style.title, width.saturating_sub(buttons_width * 2));
    put(
        frame,
        visible,
        rect.x + (buttons_width + offset) as i32,
        rect.y,
        &title,
        header,
    );
    let button_colors = [
        palette.button_close,
        palette.button_minimize,
        palette.button_maximize,
    ];
    for (idx, ((glyph, _), color)) in BUTTONS.iter().zip(button_colors).enumerate() {
        if (idx + 1) * BUTTON_WIDTH as usize > width {
            break;
        }
        put(
            frame,
            visible,
            rect.x + idx as i32 * BUTTON_WIDTH,
            rect.y,
            glyph,
            header.fg(color).add_modifier(Modifier::BOLD),
        );
    }

    // Sides and bottom
    let right = rect.right();
    let bottom = rect.bottom();
    if rect.height > 1 {
        for y in rect.y + 1..bottom {
            put(frame, visible, rect.x, y, "│", border);
            put(frame, visible, right, y, "│", border);
        }
        let mut line = String::with_capacity(width * 3);
        line.push('└');
        for _ in 1..width.saturating_sub(1) {
            line.push('─');
        }
        if width > 1 {
            line.push('┘');
        }
        put(frame, visible, rect.x, bottom, &line, border);
        if style.resizable && width > 2 {
            put(frame, visible, right - 1, bottom, RESIZE_GRIP, border);
        }
    }
}

/// Write `text` at a signed cell coordinate. Characters left of column zero
/// are dropped; rows above zero are skipped.
fn put(frame: &mut UiFrame<'_>, bounds: Rect, x: i32, y: i32, text: &str, style: Style) {
    let Ok(y) = u16::try_from(y) else {
        return;
    };
    let skip = usize::try_from(x.saturating_neg()).unwrap_or(0);
    let text: String = text.chars().skip(skip).collect();
    let x = u16::try_from(x.max(0)).unwrap_or(u16::MAX);
    frame.put_str(bounds, x, y, &text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::headless::buffer_row;
    use ratatui::buffer::Buffer;

    fn rect(x: i32, y: i32, width: u16, height: u16) -> CellRect {
        CellRect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn hit_test_buttons_title_grip_and_body() {
        let r = rect(10, 5, 30, 10);
        assert_eq!(hit_test(r, 10, 5, true), Some(FrameHit::Close));
        assert_eq!(hit_test(r, 12, 5, true), Some(FrameHit::Close));
        assert_eq!(hit_test(r, 13, 5, true), Some(FrameHit::Minimize));
        assert_eq!(hit_test(r, 16, 5, true), Some(FrameHit::Maximize));
        assert_eq!(hit_test(r, 25, 5, true), Some(FrameHit::TitleBar));
        assert_eq!(hit_test(r, 39, 14, true), Some(FrameHit::ResizeGrip));
        assert_eq!(hit_test(r, 38, 14, true), Some(FrameHit::ResizeGrip));
        assert_eq!(hit_test(r, 39, 14, false), Some(FrameHit::Body));
        assert_eq!(hit_test(r, 20, 8, true), Some(FrameHit::Body));
        assert_eq!(hit_test(r, 40, 8, true), None);
    }

    #[test]
    fn hit_test_window_hanging_off_left_edge() {
        let r = rect(-5, 2, 20, 6);
        assert_eq!(hit_test(r, 0, 2, true), Some(FrameHit::Minimize));
        assert_eq!(hit_test(r, 5, 2, true), Some(FrameHit::TitleBar));
        assert_eq!(hit_test(r, 14, 7, true), Some(FrameHit::ResizeGrip));
    }

    #[test]
    fn content_area_excludes_chrome() {
        let bounds = Rect::new(0, 0, 80, 24);
        assert_eq!(content_area(rect(2, 3, 20, 8), bounds), Rect::new(3, 4, 18, 6));
        assert_eq!(content_area(rect(-4, 3, 20, 8), bounds), Rect::new(0, 4, 15, 6));
    }

    #[test]
    fn render_frame_draws_buttons_title_and_grip() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        render_frame(
            &mut ui,
            rect(0, 0, 30, 5),
            area,
            &Palette::default(),
            FrameStyle {
                title: "PAINT",
                active: true,
                resizable: true,
            },
        );
        let top = buffer_row(&buf, 0);
        assert!(top.starts_with("[x][-][+]"));
        assert!(top.contains("PAINT"));
        assert_eq!(buffer_row(&buf, 2), format!("│{}│", " ".repeat(28)));
        assert_eq!(buffer_row(&buf, 4), format!("└{}◢┘", "─".repeat(27)));
        assert_eq!(buffer_row(&buf, 5), " ".repeat(30));
    }

    #[test]
    fn render_frame_offscreen_is_noop() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        render_frame(
            &mut ui,
            rect(-40, -40, 20, 6),
            area,
            &Palette::default(),
            FrameStyle {
                title: "X",
                active: false,
                resizable: true,
            },
        );
        assert_eq!(buffer_row(&buf, 0), " ".repeat(10));
    }
}
