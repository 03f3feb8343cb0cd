use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::{Block, BorderType, Borders};

use super::{Component, ComponentContext};
use crate::geometry::rect_contains;
use crate::registry::{TASKBAR_ITEMS, TaskbarItem};
use crate::ui::UiFrame;

const RUNNING_MARK: &str = "•";

/// Dock centered along the bottom edge. Items for open windows carry a
/// running mark; the active window's item is highlighted.
#[derive(Debug, Default)]
pub struct Taskbar {
    open: Vec<String>,
    active: Option<String>,
    hits: Vec<(&'static str, Rect)>,
}

fn label(item: &TaskbarItem) -> String {
    format!(" {} ", item.icon.to_uppercase())
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record which windows are open and which one is active.
    pub fn sync<'a>(&mut self, open: impl IntoIterator<Item = &'a str>, active: Option<&str>) {
        self.open = open.into_iter().map(str::to_string).collect();
        self.active = active.map(str::to_string);
    }

    /// Window id of the dock item under `(column, row)`.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&'static str> {
        self.hits
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(id, _)| *id)
    }
}

impl Component for Taskbar {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.hits.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }
        let palette = ctx.palette();
        let labels: Vec<String> = TASKBAR_ITEMS.iter().map(label).collect();
        let inner_width: u16 = labels
            .iter()
            .map(|l| l.chars().count() as u16 + 1)
            .sum::<u16>()
            .saturating_add(1);
        let width = inner_width.saturating_add(2).min(area.width);
        let dock = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height: area.height,
        };
        frame.fill(dock, palette.dock());
        if dock.height >= 3 {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(palette.dock());
            frame.render_widget(block, dock);
        }
        let row = if dock.height >= 3 { dock.y + 1 } else { dock.y };
        let mut x = dock.x.saturating_add(if dock.height >= 3 { 2 } else { 0 });
        let max_x = dock.right().saturating_sub(1);
        for (item, text) in TASKBAR_ITEMS.iter().zip(&labels) {
            let w = text.chars().count() as u16;
            if x.saturating_add(w) > max_x {
                break;
            }
            let running = self.open.iter().any(|id| id == item.window_id);
            let active = self.active.as_deref() == Some(item.window_id);
            let style = if active {
                palette.menu_selected().add_modifier(Modifier::BOLD)
            } else {
                palette.dock()
            };
            frame.put_str(dock, x, row, text, style);
            if running && dock.height >= 3 {
                let mark_x = x + w / 2;
                frame.put_str(
                    dock,
                    mark_x,
                    dock.bottom() - 1,
                    RUNNING_MARK,
                    palette.dock().fg(palette.dock_running),
                );
            }
            self.hits.push((
                item.window_id,
                Rect {
                    x,
                    y: dock.y,
                    width: w,
                    height: dock.height,
                },
            ));
            x = x.saturating_add(w + 1);
        }
    }
}
