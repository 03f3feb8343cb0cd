//! The desktop: owns the window store and every on-screen component, turns
//! terminal events into store commands and draws a frame from the store.
//!
//! Hit regions are recorded while drawing, so pointer events are resolved
//! against the last rendered frame. Draw at least once before feeding
//! pointer events.

use std::collections::HashMap;
use std::io;
use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::components::{
    Component, ComponentContext, ContentAction, DesktopIcons, IconActivation, MenuBar, MenuHit,
    Taskbar, WindowContent,
};
use crate::constants::{HELP_WINDOW_ID, SITE_URL};
use crate::error::DeskError;
use crate::event_loop::ControlFlow;
use crate::geometry::{CellMetrics, rect_contains};
use crate::gesture::GestureController;
use crate::keybindings::KeyBindings;
use crate::layout::DeskLayout;
use crate::prefs::{Preferences, PrefsStore};
use crate::registry::MenuCommand;
use crate::shortcuts::{ShortcutDispatcher, ShortcutOutcome};
use crate::theme::{Palette, background_color};
use crate::ui::UiFrame;
use crate::window::WindowRecord;
use crate::window::WindowStore;
use crate::window::decorator::{self, FrameHit, FrameStyle};

/// Opens an external link on the host.
pub type UrlOpener = Box<dyn FnMut(&str) -> io::Result<()>>;

/// Absolute form of an icon link. Site-relative paths are joined onto
/// [`SITE_URL`].
pub fn resolve_url(url: &str) -> String {
    if url.starts_with('/') {
        format!("{SITE_URL}{}", url.replace(' ', "%20"))
    } else {
        url.to_string()
    }
}

fn content_for<'a>(
    contents: &'a mut HashMap<String, WindowContent>,
    window: &WindowRecord,
) -> &'a mut WindowContent {
    contents
        .entry(window.id.clone())
        .or_insert_with(|| WindowContent::for_window(&window.id, &window.title))
}

pub struct Desktop {
    store: WindowStore,
    gestures: GestureController,
    shortcuts: ShortcutDispatcher,
    metrics: CellMetrics,
    prefs: Preferences,
    prefs_store: Option<PrefsStore>,
    contents: HashMap<String, WindowContent>,
    menu_bar: MenuBar,
    taskbar: Taskbar,
    icons: DesktopIcons,
    layout: DeskLayout,
    open_url: UrlOpener,
}

impl Desktop {
    /// Preferences are read from `prefs_store` when given; without a store
    /// they stay at their defaults and changes are not persisted.
    pub fn new(store: WindowStore, metrics: CellMetrics, prefs_store: Option<PrefsStore>) -> Self {
        let prefs = prefs_store
            .as_ref()
            .map(Preferences::load)
            .unwrap_or_default();
        let bindings = KeyBindings::default();
        Self {
            store,
            gestures: GestureController::new(),
            shortcuts: ShortcutDispatcher::new(bindings.clone()),
            metrics,
            prefs,
            prefs_store,
            contents: HashMap::new(),
            menu_bar: MenuBar::with_bindings(bindings),
            taskbar: Taskbar::new(),
            icons: DesktopIcons::new(),
            layout: DeskLayout::default(),
            open_url: Box::new(|url| webbrowser::open(url)),
        }
    }

    /// Replace how external links are opened.
    pub fn with_url_opener(mut self, opener: impl FnMut(&str) -> io::Result<()> + 'static) -> Self {
        self.open_url = Box::new(opener);
        self
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WindowStore {
        &mut self.store
    }

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    pub fn shortcuts(&self) -> &ShortcutDispatcher {
        &self.shortcuts
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn layout(&self) -> DeskLayout {
        self.layout
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn menu_bar(&self) -> &MenuBar {
        &self.menu_bar
    }

    pub fn icons(&self) -> &DesktopIcons {
        &self.icons
    }

    /// Content of window `id`, once it has been drawn or sent a key.
    pub fn content(&self, id: &str) -> Option<&WindowContent> {
        self.contents.get(id)
    }

    /// Open (or raise) window `id` outside of event handling, keeping the
    /// shortcut scope in step.
    pub fn open(&mut self, id: &str) -> bool {
        let changed = self.store.open(id);
        self.shortcuts.resubscribe(self.store.active_id());
        changed
    }

    /// Recompute the layout and the store's viewport for a terminal of
    /// `columns` x `rows` cells.
    pub fn resize_terminal(&mut self, columns: u16, rows: u16) {
        self.layout = DeskLayout::split(Rect::new(0, 0, columns, rows));
        self.store
            .set_viewport(self.metrics.viewport_for(columns, rows));
    }

    /// Handle one terminal event. Shortcuts are re-pointed at the active
    /// window afterwards.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> ControlFlow {
        let flow = match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse, now);
                ControlFlow::Continue
            }
            Event::Resize(columns, rows) => {
                self.resize_terminal(*columns, *rows);
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        };
        self.shortcuts.resubscribe(self.store.active_id());
        flow
    }

    /// Frame tick: apply the coalesced drag move, if any.
    pub fn tick(&mut self) -> bool {
        self.gestures.flush_frame(&mut self.store)
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        if self.menu_bar.is_open() && key.code == KeyCode::Esc {
            self.menu_bar.close();
            return ControlFlow::Continue;
        }
        match self.shortcuts.dispatch(key, &mut self.store) {
            ShortcutOutcome::Quit => ControlFlow::Quit,
            ShortcutOutcome::Applied(action) => {
                tracing::trace!(%action, "shortcut applied");
                ControlFlow::Continue
            }
            ShortcutOutcome::Ignored(_) => ControlFlow::Continue,
            ShortcutOutcome::Unbound => {
                let activates_icon = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
                    && key.modifiers.is_empty()
                    && self.store.active_id().is_none();
                if activates_icon {
                    let activation = self.icons.activate_selected();
                    self.activate_icon(activation);
                } else {
                    self.forward_to_active(&Event::Key(*key));
                }
                ControlFlow::Continue
            }
        }
    }

    fn forward_to_active(&mut self, event: &Event) {
        let Some(id) = self.store.active_id().map(str::to_string) else {
            return;
        };
        self.forward_to(&id, event);
    }

    fn forward_to(&mut self, id: &str, event: &Event) {
        let Some(window) = self.store.window(id) else {
            return;
        };
        let focused = self.store.active_id() == Some(id);
        let ctx = ComponentContext::new(focused, Palette::for_theme(self.prefs.theme));
        let content = content_for(&mut self.contents, window);
        if !content.handle_event(event, &ctx) {
            return;
        }
        if let Some(action) = content.take_action() {
            self.apply_content_action(action);
        }
    }

    fn apply_content_action(&mut self, action: ContentAction) {
        match action {
            ContentAction::ToggleTheme => self.prefs.theme = self.prefs.theme.toggled(),
            ContentAction::CycleBackground => {
                self.prefs.background = self.prefs.background.next();
            }
        }
        tracing::debug!(
            theme = self.prefs.theme.as_str(),
            background = self.prefs.background.as_str(),
            "preferences changed"
        );
        if let Some(store) = self.prefs_store.as_mut()
            && let Err(err) = self.prefs.save(store)
        {
            tracing::warn!(error = %err, "could not save preferences");
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, now: Instant) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press(column, row, now),
            MouseEventKind::Drag(MouseButton::Left) => {
                let pointer = self.metrics.point_for_cell(column, row);
                self.gestures.pointer_move(&mut self.store, pointer);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.gestures.flush_frame(&mut self.store);
                self.gestures.pointer_up();
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let code = if mouse.kind == MouseEventKind::ScrollUp {
                    KeyCode::Up
                } else {
                    KeyCode::Down
                };
                // the wheel scrolls whatever window is under the pointer
                if let Some((id, _)) = self.window_at(column, row) {
                    self.forward_to(&id, &Event::Key(KeyEvent::from(code)));
                }
            }
            _ => {}
        }
    }

    fn press(&mut self, column: u16, row: u16, now: Instant) {
        if self.menu_bar.is_open() {
            match self.menu_bar.hit_test(column, row) {
                Some(MenuHit::Entry(command)) => {
                    self.menu_bar.close();
                    self.run_menu_command(command);
                }
                Some(MenuHit::Label(index)) => self.menu_bar.toggle(index),
                Some(MenuHit::Inert) => {}
                None => self.menu_bar.close(),
            }
            return;
        }
        if let Some(MenuHit::Label(index)) = self.menu_bar.hit_test(column, row) {
            self.menu_bar.toggle(index);
            return;
        }
        if rect_contains(self.layout.menu_bar, column, row) {
            return;
        }
        if let Some(id) = self.taskbar.hit_test(column, row) {
            self.store.open(id);
            return;
        }
        if self.press_window(column, row) {
            return;
        }
        let activation = self.icons.press(column, row, now);
        self.activate_icon(activation);
    }

    fn activate_icon(&mut self, activation: Option<IconActivation>) {
        match activation {
            Some(IconActivation::Window(id)) => {
                self.store.open(id);
            }
            Some(IconActivation::Url(url)) => self.open_link(url),
            None => {}
        }
    }

    /// Topmost visible window under `(column, row)` and the part of its
    /// frame that was hit.
    fn window_at(&self, column: u16, row: u16) -> Option<(String, FrameHit)> {
        self.store.draw_order().into_iter().rev().find_map(|window| {
            let rect = self.layout.window_rect(window, &self.metrics);
            decorator::hit_test(rect, column, row, !window.maximized)
                .map(|hit| (window.id.clone(), hit))
        })
    }

    /// Route a press to the topmost window under the pointer. Returns
    /// whether a window took it.
    fn press_window(&mut self, column: u16, row: u16) -> bool {
        let Some((id, hit)) = self.window_at(column, row) else {
            return false;
        };
        let pointer = self.metrics.point_for_cell(column, row);
        match hit {
            FrameHit::Close => {
                self.store.close(&id);
            }
            FrameHit::Minimize => {
                self.store.minimize(&id);
            }
            FrameHit::Maximize => {
                self.store.maximize(&id);
            }
            FrameHit::TitleBar => {
                if !self.gestures.begin_drag(&mut self.store, &id, pointer) {
                    self.store.focus(&id);
                }
            }
            FrameHit::ResizeGrip => {
                if !self.gestures.begin_resize(&mut self.store, &id, pointer) {
                    self.store.focus(&id);
                }
            }
            FrameHit::Body => {
                self.store.focus(&id);
            }
        }
        true
    }

    fn run_menu_command(&mut self, command: MenuCommand) {
        let active = self.store.active_id().map(str::to_string);
        let changed = match (command, active.as_deref()) {
            (MenuCommand::OpenHelp, _) => self.store.open(HELP_WINDOW_ID),
            (_, None) => false,
            (MenuCommand::CloseActive, Some(id)) => self.store.close(id),
            (MenuCommand::MinimizeActive, Some(id)) => self.store.minimize(id),
            (MenuCommand::MaximizeActive, Some(id)) => self.store.maximize(id),
        };
        tracing::trace!(?command, changed, "menu command");
    }

    fn open_link(&mut self, url: &str) {
        let url = resolve_url(url);
        tracing::info!(%url, "opening link");
        if let Err(source) = (self.open_url)(&url) {
            let err = DeskError::Browser { url, source };
            tracing::warn!(error = %err, "link not opened");
        }
    }

    /// Draw the whole desktop, bottom to top: background and icons, windows
    /// in stacking order, the dock, the menu bar and finally any open menu.
    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        if self.layout.area != area {
            self.layout = DeskLayout::split(area);
            self.store
                .set_viewport(self.metrics.viewport_for(area.width, area.height));
        }
        let palette = Palette::for_theme(self.prefs.theme);
        let ctx = ComponentContext::new(false, palette);

        frame.fill(
            area,
            Style::default().bg(background_color(self.prefs.background)),
        );
        self.icons.render(frame, self.layout.workspace, &ctx);

        let store = &self.store;
        self.contents.retain(|id, _| store.is_open(id));
        let active = self.store.active_id();
        for window in self.store.draw_order() {
            let rect = self.layout.window_rect(window, &self.metrics);
            let is_active = active == Some(window.id.as_str());
            decorator::render_frame(
                frame,
                rect,
                area,
                &palette,
                FrameStyle {
                    title: &window.title,
                    active: is_active,
                    resizable: !window.maximized,
                },
            );
            let inner = decorator::content_area(rect, area);
            let content = content_for(&mut self.contents, window);
            content.sync_preferences(self.prefs);
            content.render(frame, inner, &ctx.with_focus(is_active));
        }

        self.taskbar.sync(
            self.store.windows().iter().map(|w| w.id.as_str()),
            active,
        );
        self.taskbar.render(frame, self.layout.taskbar, &ctx);
        self.menu_bar
            .set_title(self.store.active_window().map(|w| w.title.as_str()));
        self.menu_bar.render(frame, self.layout.menu_bar, &ctx);
        self.menu_bar.render_dropdown(frame, area, &ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::headless::buffer_row;
    use crate::geometry::{Position, Viewport};
    use crate::registry::WindowRegistry;
    use crossterm::event::KeyModifiers;
    use ratatui::buffer::Buffer;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    const COLS: u16 = 160;
    const ROWS: u16 = 50;

    fn desktop() -> Desktop {
        let store = WindowStore::new(WindowRegistry::builtin(), Viewport::default());
        let mut desktop = Desktop::new(store, CellMetrics::default(), None)
            .with_url_opener(|_| Ok(()));
        desktop.resize_terminal(COLS, ROWS);
        desktop
    }

    fn draw(desktop: &mut Desktop) -> Buffer {
        let area = Rect::new(0, 0, COLS, ROWS);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        desktop.render(&mut ui);
        buf
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn click(desktop: &mut Desktop, column: u16, row: u16, now: Instant) {
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), column, row), now);
        desktop.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), column, row), now);
    }

    fn title_cell(desktop: &Desktop, id: &str) -> (u16, u16) {
        let window = desktop.store().window(id).unwrap();
        let rect = desktop.layout().window_rect(window, &desktop.metrics());
        // past the three buttons
        ((rect.x + 12) as u16, rect.y as u16)
    }

    #[test]
    fn resolve_url_joins_site_relative_paths() {
        assert_eq!(resolve_url("/a b.pdf"), format!("{SITE_URL}/a%20b.pdf"));
        assert_eq!(resolve_url("https://example.com/x"), "https://example.com/x");
    }

    #[test]
    fn resize_sets_viewport_in_pixels() {
        let desktop = desktop();
        assert_eq!(desktop.store().viewport(), Viewport::new(1280, 800));
        assert_eq!(desktop.layout().workspace.height, ROWS - 4);
    }

    #[test]
    fn close_button_closes_window() {
        let mut desktop = desktop();
        desktop.store_mut().open("about");
        draw(&mut desktop);
        let (col, row) = title_cell(&desktop, "about");
        click(&mut desktop, col - 12, row, Instant::now());
        assert!(!desktop.store().is_open("about"));
    }

    #[test]
    fn title_drag_moves_window_on_tick() {
        let mut desktop = desktop();
        desktop.store_mut().open("about");
        draw(&mut desktop);
        let start = desktop.store().window("about").unwrap().position;
        let (col, row) = title_cell(&desktop, "about");
        let now = Instant::now();
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), col, row), now);
        assert_eq!(desktop.gestures().lease(), Some("about"));
        desktop.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), col + 2, row + 1), now);
        // coalesced until the frame tick
        assert_eq!(desktop.store().window("about").unwrap().position, start);
        assert!(desktop.tick());
        assert_eq!(
            desktop.store().window("about").unwrap().position,
            Position::new(start.x + 16, start.y + 16)
        );
        desktop.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), col + 2, row + 1), now);
        assert!(!desktop.gestures().is_active());
    }

    #[test]
    fn release_applies_pending_drag_move() {
        let mut desktop = desktop();
        desktop.store_mut().open("about");
        draw(&mut desktop);
        let start = desktop.store().window("about").unwrap().position;
        let (col, row) = title_cell(&desktop, "about");
        let now = Instant::now();
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), col, row), now);
        desktop.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), col + 1, row), now);
        desktop.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), col + 1, row), now);
        assert_eq!(
            desktop.store().window("about").unwrap().position,
            Position::new(start.x + 8, start.y)
        );
    }

    #[test]
    fn icon_double_click_opens_window() {
        let mut desktop = desktop();
        draw(&mut desktop);
        let now = Instant::now();
        // SETTINGS: row 1, column 0 of the icon grid
        click(&mut desktop, 5, 5, now);
        assert!(!desktop.store().is_open("settings"));
        click(&mut desktop, 5, 5, now + Duration::from_millis(100));
        assert_eq!(desktop.store().active_id(), Some("settings"));
    }

    #[test]
    fn url_icon_uses_opener() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        let store = WindowStore::new(WindowRegistry::builtin(), Viewport::default());
        let mut desktop = Desktop::new(store, CellMetrics::default(), None).with_url_opener(
            move |url| {
                sink.borrow_mut().push(url.to_string());
                Err(io::Error::other("no browser"))
            },
        );
        draw(&mut desktop);
        let now = Instant::now();
        // RESUME.PDF: row 0, column 2
        click(&mut desktop, 32, 2, now);
        click(&mut desktop, 32, 2, now);
        let opened = opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with(SITE_URL));
        assert!(desktop.store().windows().is_empty());
    }

    #[test]
    fn enter_opens_selected_icon_when_no_window_is_active() {
        let mut desktop = desktop();
        draw(&mut desktop);
        // single click on SETTINGS only selects it
        click(&mut desktop, 5, 5, Instant::now());
        assert_eq!(desktop.icons().selected(), Some("settings"));
        assert!(desktop.store().windows().is_empty());
        desktop.handle_event(&Event::Key(KeyEvent::from(KeyCode::Enter)), Instant::now());
        assert_eq!(desktop.store().active_id(), Some("settings"));
        assert_eq!(desktop.shortcuts().scope(), Some("settings"));
    }

    #[test]
    fn space_opens_selected_link_and_enter_goes_to_active_window() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        let store = WindowStore::new(WindowRegistry::builtin(), Viewport::default());
        let mut desktop = Desktop::new(store, CellMetrics::default(), None)
            .with_url_opener(move |url| {
                sink.borrow_mut().push(url.to_string());
                Ok(())
            });
        desktop.resize_terminal(COLS, ROWS);
        draw(&mut desktop);
        // RESUME.PDF: row 0, column 2
        click(&mut desktop, 32, 2, Instant::now());
        desktop.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char(' '))), Instant::now());
        assert_eq!(opened.borrow().len(), 1);

        // with a window focused the key belongs to that window
        desktop.open("paint");
        desktop.handle_event(&Event::Key(KeyEvent::from(KeyCode::Enter)), Instant::now());
        assert_eq!(opened.borrow().len(), 1);
        assert_eq!(desktop.store().windows().len(), 1);
    }

    #[test]
    fn wheel_scrolls_window_under_pointer() {
        let mut desktop = desktop();
        desktop.open("help");
        desktop.open("about");
        draw(&mut desktop);
        let help = desktop.store().window("help").unwrap();
        let rect = desktop.layout().window_rect(help, &desktop.metrics());
        // just inside help's frame, left of and above the about window
        let (col, row) = ((rect.x + 1) as u16, (rect.y + 1) as u16);
        let now = Instant::now();
        desktop.handle_event(&mouse(MouseEventKind::ScrollDown, col, row), now);
        desktop.handle_event(&mouse(MouseEventKind::ScrollDown, col, row), now);
        assert_eq!(desktop.content("help").map(WindowContent::scroll), Some(2));
        assert_eq!(desktop.content("about").map(WindowContent::scroll), Some(0));
        assert_eq!(desktop.store().active_id(), Some("about"));

        // bare desktop right of every window
        desktop.handle_event(&mouse(MouseEventKind::ScrollUp, 150, 20), now);
        assert_eq!(desktop.content("help").map(WindowContent::scroll), Some(2));
        assert_eq!(desktop.content("about").map(WindowContent::scroll), Some(0));
    }

    #[test]
    fn menu_entry_acts_on_active_window() {
        let mut desktop = desktop();
        desktop.store_mut().open("paint");
        draw(&mut desktop);
        let now = Instant::now();
        // WINDOW label, then its first entry (Minimize)
        click(&mut desktop, 17, 0, now);
        assert!(desktop.menu_bar().is_open());
        draw(&mut desktop);
        click(&mut desktop, 17, 1, now);
        assert!(!desktop.menu_bar().is_open());
        assert!(desktop.store().window("paint").unwrap().minimized);
        assert_eq!(desktop.store().active_id(), None);
    }

    #[test]
    fn click_outside_open_menu_only_closes_it() {
        let mut desktop = desktop();
        draw(&mut desktop);
        let now = Instant::now();
        click(&mut desktop, 5, 0, now);
        draw(&mut desktop);
        click(&mut desktop, 5, 5, now);
        click(&mut desktop, 5, 5, now);
        assert!(!desktop.menu_bar().is_open());
        // first click was swallowed by the menu, so no double-click
        assert!(!desktop.store().is_open("settings"));
    }

    #[test]
    fn shortcuts_follow_active_window() {
        let mut desktop = desktop();
        desktop.open("about");
        desktop.open("paint");
        assert_eq!(desktop.shortcuts().scope(), Some("paint"));
        let esc = Event::Key(KeyEvent::from(KeyCode::Esc));
        desktop.handle_event(&esc, Instant::now());
        assert_eq!(desktop.shortcuts().scope(), Some("about"));
        assert!(!desktop.store().is_open("paint"));
        desktop.handle_event(&esc, Instant::now());
        assert!(desktop.store().windows().is_empty());
        assert_eq!(desktop.shortcuts().scope(), None);
    }

    #[test]
    fn ctrl_q_quits() {
        let mut desktop = desktop();
        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(desktop.handle_event(&quit, Instant::now()), ControlFlow::Quit);
    }

    #[test]
    fn settings_keys_change_preferences() {
        let mut desktop = desktop();
        desktop.store_mut().open("settings");
        let before = desktop.preferences();
        desktop.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('t'))), Instant::now());
        desktop.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('b'))), Instant::now());
        let after = desktop.preferences();
        assert_eq!(after.theme, before.theme.toggled());
        assert_eq!(after.background, before.background.next());
        let buf = draw(&mut desktop);
        let text: String = (0..ROWS).map(|y| buffer_row(&buf, y)).collect();
        assert!(text.contains(&after.background.as_str().to_uppercase()));
    }

    #[test]
    fn render_shows_active_title_and_prunes_closed_content() {
        let mut desktop = desktop();
        desktop.store_mut().open("paint");
        let buf = draw(&mut desktop);
        assert!(buffer_row(&buf, 0).trim_end().ends_with("PAINT"));
        assert!(desktop.content("paint").is_some());
        desktop.store_mut().close("paint");
        draw(&mut desktop);
        assert!(desktop.content("paint").is_none());
    }
}
