use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::{Component, ComponentContext};
use crate::constants::DOUBLE_CLICK_MS;
use crate::geometry::rect_contains;
use crate::registry::{DESKTOP_ICONS, DesktopIcon, IconTarget};
use crate::ui::{UiFrame, centered};

const SLOT_WIDTH: u16 = 13;
const SLOT_HEIGHT: u16 = 3;

/// What a double-clicked icon asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconActivation {
    Window(&'static str),
    Url(&'static str),
}

fn activation(icon: &DesktopIcon) -> Option<IconActivation> {
    match icon.target {
        IconTarget::Window(id) => Some(IconActivation::Window(id)),
        IconTarget::Url(url) => Some(IconActivation::Url(url)),
        IconTarget::Nothing => None,
    }
}

fn glyph(icon: &str) -> &'static str {
    match icon {
        "computer" => "[=]",
        "about" => "[i]",
        "pdf" => "[¶]",
        "linkedin" => "[in]",
        "settings" => "[*]",
        "guestbook" => "[@]",
        "paint" => "[~]",
        "music" => "[♪]",
        "game" => "[>]",
        "internet" => "[e]",
        "trash" => "[#]",
        _ => "[ ]",
    }
}

/// Grid of icons in the top-left of the workspace.
#[derive(Debug, Default)]
pub struct DesktopIcons {
    origin: Rect,
    selected: Option<&'static str>,
    last_press: Option<(&'static str, Instant)>,
}

impl DesktopIcons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    fn slot(&self, icon: &DesktopIcon) -> Rect {
        Rect {
            x: self
                .origin
                .x
                .saturating_add(1)
                .saturating_add(icon.col.saturating_mul(SLOT_WIDTH)),
            y: self
                .origin
                .y
                .saturating_add(1)
                .saturating_add(icon.row.saturating_mul(SLOT_HEIGHT)),
            width: SLOT_WIDTH,
            height: SLOT_HEIGHT - 1,
        }
        .intersection(self.origin)
    }

    /// Icon id under `(column, row)` in the last drawn layout.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&'static DesktopIcon> {
        DESKTOP_ICONS
            .iter()
            .find(|icon| rect_contains(self.slot(icon), column, row))
    }

    /// Register a press at `(column, row)`. The first press selects an icon;
    /// a second press on the same icon within the double-click window
    /// activates it. Presses on empty desktop clear the selection.
    pub fn press(&mut self, column: u16, row: u16, now: Instant) -> Option<IconActivation> {
        let Some(icon) = self.hit_test(column, row) else {
            self.selected = None;
            self.last_press = None;
            return None;
        };
        self.selected = Some(icon.id);
        let window = Duration::from_millis(DOUBLE_CLICK_MS);
        let double = self
            .last_press
            .is_some_and(|(id, at)| id == icon.id && now.saturating_duration_since(at) <= window);
        if !double {
            self.last_press = Some((icon.id, now));
            return None;
        }
        self.last_press = None;
        activation(icon)
    }

    /// Activate the selected icon from the keyboard, as a double-click on
    /// it would. The selection is kept.
    pub fn activate_selected(&mut self) -> Option<IconActivation> {
        let id = self.selected?;
        let icon = DESKTOP_ICONS.iter().find(|icon| icon.id == id)?;
        self.last_press = None;
        activation(icon)
    }
}

impl Component for DesktopIcons {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.origin = area;
        let palette = ctx.palette();
        let normal = ratatui::style::Style::default().fg(palette.icon_fg);
        let selected = normal.bg(palette.icon_selected_bg);
        for icon in DESKTOP_ICONS {
            let slot = self.slot(icon);
            if slot.width == 0 || slot.height == 0 {
                continue;
            }
            let style = if self.selected == Some(icon.id) {
                selected
            } else {
                normal
            };
            let width = usize::from(slot.width);
            let (offset, text) = centered(glyph(icon.icon), width);
            frame.put_str(slot, slot.x + offset as u16, slot.y, &text, style);
            if slot.height > 1 {
                let (offset, text) = centered(icon.label, width);
                frame.put_str(slot, slot.x + offset as u16, slot.y + 1, &text, style);
            }
        }
    }
}
