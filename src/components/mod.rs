use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod content;
pub mod desktop_icons;
pub mod menu_bar;
pub mod taskbar;

pub use content::{ContentAction, WindowContent};
pub use desktop_icons::{DesktopIcons, IconActivation};
pub use menu_bar::{MenuBar, MenuHit};
pub use taskbar::Taskbar;

pub use crate::component_context::ComponentContext;

pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }
}
