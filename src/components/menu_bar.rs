use ratatui::layout::Rect;
use ratatui::style::Modifier;

use super::{Component, ComponentContext};
use crate::geometry::rect_contains;
use crate::keybindings::KeyBindings;
use crate::registry::{MENUS, MenuCommand};
use crate::ui::{UiFrame, truncate_to_width};

const LOGO: &str = " ◆ ";
const FALLBACK_TITLE: &str = "ANURAG";

/// What a click on the menu bar or its open dropdown landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHit {
    /// A menu label; index into `MENUS`.
    Label(usize),
    Entry(MenuCommand),
    /// Inside the bar or dropdown but on nothing actionable.
    Inert,
}

#[derive(Debug, Clone, Copy)]
struct EntryHit {
    command: MenuCommand,
    rect: Rect,
}

/// Top bar with the application menus on the left and the active window's
/// title on the right. Hit regions are recorded while rendering, so hit
/// tests reflect the last drawn frame.
#[derive(Debug, Default)]
pub struct MenuBar {
    bindings: KeyBindings,
    title: Option<String>,
    open: Option<usize>,
    area: Rect,
    label_hits: Vec<(usize, Rect)>,
    entry_hits: Vec<EntryHit>,
    dropdown: Option<Rect>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dropdown entries show the first combo bound to their action.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Title shown on the right; `None` shows the desktop's name.
    pub fn set_title(&mut self, title: Option<&str>) {
        self.title = title.map(str::to_string);
    }

    pub fn open_menu(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open menu `index`, or close it if it is already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) || index >= MENUS.len() {
            None
        } else {
            Some(index)
        };
        self.dropdown = None;
        self.entry_hits.clear();
    }

    pub fn close(&mut self) {
        self.open = None;
        self.dropdown = None;
        self.entry_hits.clear();
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<MenuHit> {
        if let Some(hit) = self
            .entry_hits
            .iter()
            .find(|hit| rect_contains(hit.rect, column, row))
        {
            return Some(MenuHit::Entry(hit.command));
        }
        if self
            .dropdown
            .is_some_and(|rect| rect_contains(rect, column, row))
        {
            return Some(MenuHit::Inert);
        }
        if let Some((index, _)) = self
            .label_hits
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
        {
            return Some(MenuHit::Label(*index));
        }
        rect_contains(self.area, column, row).then_some(MenuHit::Inert)
    }

    /// Draw the open menu's entries below its label. Call after everything
    /// the dropdown should cover has been drawn.
    pub fn render_dropdown(&mut self, frame: &mut UiFrame<'_>, bounds: Rect, ctx: &ComponentContext) {
        self.dropdown = None;
        self.entry_hits.clear();
        let Some(index) = self.open else {
            return;
        };
        let (Some(menu), Some((_, anchor))) = (
            MENUS.get(index),
            self.label_hits.iter().find(|(i, _)| *i == index),
        ) else {
            return;
        };
        let rows: Vec<(String, MenuCommand)> = menu
            .entries
            .iter()
            .map(|entry| {
                let shortcut = entry
                    .shortcut
                    .and_then(|action| self.bindings.combos_for(action).into_iter().next());
                let label = match shortcut {
                    Some(shortcut) => format!(" {:<18}{:>7} ", entry.label, shortcut),
                    None => format!(" {:<25} ", entry.label),
                };
                (label, entry.command)
            })
            .collect();
        let width = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let rect = Rect {
            x: anchor.x,
            y: anchor.y.saturating_add(1),
            width,
            height: rows.len() as u16,
        }
        .intersection(bounds);
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let palette = ctx.palette();
        frame.fill(rect, palette.menu());
        for (offset, (label, command)) in rows.iter().enumerate() {
            let y = rect.y.saturating_add(offset as u16);
            if y >= rect.bottom() {
                break;
            }
            frame.put_str(rect, rect.x, y, label, palette.menu());
            self.entry_hits.push(EntryHit {
                command: *command,
                rect: Rect {
                    x: rect.x,
                    y,
                    width: rect.width,
                    height: 1,
                },
            });
        }
        self.dropdown = Some(rect);
    }
}

impl Component for MenuBar {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.area = area;
        self.label_hits.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }
        let palette = ctx.palette();
        let bar = Rect { height: 1, ..area };
        frame.fill(bar, palette.menu());

        let max_x = area.right();
        let mut x = area.x;
        frame.put_str(bar, x, area.y, LOGO, palette.menu().add_modifier(Modifier::BOLD));
        x = x.saturating_add(LOGO.chars().count() as u16);
        for (index, menu) in MENUS.iter().enumerate() {
            let label = format!(" {} ", menu.label);
            let width = label.chars().count() as u16;
            if x.saturating_add(width) > max_x {
                break;
            }
            let style = if self.open == Some(index) {
                palette.menu_selected()
            } else {
                palette.menu()
            };
            frame.put_str(bar, x, area.y, &label, style);
            self.label_hits.push((
                index,
                Rect {
                    x,
                    y: area.y,
                    width,
                    height: 1,
                },
            ));
            x = x.saturating_add(width);
        }

        let title = self.title.as_deref().unwrap_or(FALLBACK_TITLE);
        let available = max_x.saturating_sub(x).saturating_sub(1) as usize;
        let title = truncate_to_width(title, available);
        let title_width = title.chars().count() as u16;
        if title_width > 0 {
            let start = max_x.saturating_sub(title_width).saturating_sub(1);
            frame.put_str(bar, start, area.y, &title, palette.menu().add_modifier(Modifier::BOLD));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::headless::buffer_row;
    use crate::keybindings::{Action, KeyCombo};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::buffer::Buffer;

    fn draw(bar: &mut MenuBar, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 8);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        let ctx = ComponentContext::default();
        bar.render(&mut ui, Rect::new(0, 0, width, 1), &ctx);
        bar.render_dropdown(&mut ui, area, &ctx);
        buf
    }

    #[test]
    fn renders_menus_and_fallback_title() {
        let mut bar = MenuBar::new();
        let buf = draw(&mut bar, 60);
        let row = buffer_row(&buf, 0);
        assert!(row.starts_with(" ◆  FILE  VIEW  WINDOW  HELP "));
        assert!(row.trim_end().ends_with("ANURAG"));
    }

    #[test]
    fn active_title_replaces_fallback() {
        let mut bar = MenuBar::new();
        bar.set_title(Some("PAINT"));
        let buf = draw(&mut bar, 60);
        assert!(buffer_row(&buf, 0).trim_end().ends_with("PAINT"));
    }

    #[test]
    fn label_click_opens_dropdown_with_entries() {
        let mut bar = MenuBar::new();
        draw(&mut bar, 60);
        // " ◆ " is 3 cells, " FILE " spans 3..9, " VIEW " 9..15, " WINDOW " 15..23
        assert_eq!(bar.hit_test(17, 0), Some(MenuHit::Label(2)));
        bar.toggle(2);
        let buf = draw(&mut bar, 60);
        assert!(buffer_row(&buf, 1).contains("Minimize"));
        assert!(buffer_row(&buf, 3).contains("Close"));
        assert_eq!(bar.hit_test(16, 1), Some(MenuHit::Entry(MenuCommand::MinimizeActive)));
        assert_eq!(bar.hit_test(16, 2), Some(MenuHit::Entry(MenuCommand::MaximizeActive)));
        assert_eq!(bar.hit_test(50, 5), None);
        assert_eq!(bar.hit_test(50, 0), Some(MenuHit::Inert));
    }

    #[test]
    fn dropdown_shortcuts_follow_key_bindings() {
        let mut bar = MenuBar::new();
        draw(&mut bar, 60);
        bar.toggle(2);
        let buf = draw(&mut bar, 60);
        assert!(buffer_row(&buf, 1).contains("Ctrl+M"));
        assert!(buffer_row(&buf, 3).contains("Esc"));

        let mut bindings = KeyBindings::new();
        bindings.add(
            Action::MinimizeWindow,
            KeyCombo::new(KeyCode::F(9), KeyModifiers::NONE),
        );
        let mut bar = MenuBar::with_bindings(bindings);
        draw(&mut bar, 60);
        bar.toggle(2);
        let buf = draw(&mut bar, 60);
        assert!(buffer_row(&buf, 1).contains("F9"));
        assert!(!buffer_row(&buf, 1).contains("Ctrl+M"));
        // unbound actions show no shortcut
        assert!(!buffer_row(&buf, 3).contains("Esc"));
    }

    #[test]
    fn toggling_same_menu_closes_it() {
        let mut bar = MenuBar::new();
        bar.toggle(0);
        assert_eq!(bar.open_menu(), Some(0));
        bar.toggle(0);
        assert!(!bar.is_open());
    }
}
