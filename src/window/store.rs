use super::WindowRecord;

use crate::constants::{
    INITIAL_Z_INDEX, MAX_WINDOWS, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WELCOME_WINDOW_ID,
};
use crate::geometry::{Position, Size, Viewport};
use crate::placement;
use crate::registry::WindowRegistry;

/// A single mutation request against the window collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(String),
    Close(String),
    Focus(String),
    Minimize(String),
    Maximize(String),
    Restore(String),
    Reposition { id: String, position: Position },
    Resize { id: String, size: Size },
    CycleFocus { forward: bool },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Open(_) => "open",
            Command::Close(_) => "close",
            Command::Focus(_) => "focus",
            Command::Minimize(_) => "minimize",
            Command::Maximize(_) => "maximize",
            Command::Restore(_) => "restore",
            Command::Reposition { .. } => "reposition",
            Command::Resize { .. } => "resize",
            Command::CycleFocus { .. } => "cycle_focus",
        }
    }

    /// Window the command is addressed to, if it names one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Command::Open(id)
            | Command::Close(id)
            | Command::Focus(id)
            | Command::Minimize(id)
            | Command::Maximize(id)
            | Command::Restore(id)
            | Command::Reposition { id, .. }
            | Command::Resize { id, .. } => Some(id),
            Command::CycleFocus { .. } => None,
        }
    }
}

/// Everything outside [`DeskState`] that a transition may read.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    pub registry: &'a WindowRegistry,
    pub viewport: Viewport,
    pub capacity: usize,
    pub welcome_id: &'a str,
}

/// The open windows in open order, the focused window and the stacking
/// counter.
///
/// Invariants kept by [`DeskState::apply`]:
/// - ids are unique and there are never more than `capacity` records;
/// - every record has a distinct `z_index` no greater than `max_z`;
///   the counter is a `u64` bumped once per raise, so it cannot be
///   exhausted by any reachable command sequence;
/// - `active`, when set, names a present window that is not minimized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskState {
    windows: Vec<WindowRecord>,
    active: Option<String>,
    max_z: u64,
}

impl Default for DeskState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            max_z: INITIAL_Z_INDEX,
        }
    }
}

impl DeskState {
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn max_z(&self) -> u64 {
        self.max_z
    }

    pub fn window(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn window_mut(&mut self, id: &str) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Pure transition: the state after `command`, or `None` if the command
    /// leaves the state unchanged (including unknown ids).
    pub fn apply(&self, ctx: &CommandContext<'_>, command: &Command) -> Option<DeskState> {
        let mut next = self.clone();
        match command {
            Command::Open(id) => next.open(ctx, id),
            Command::Close(id) => next.close(id),
            Command::Focus(id) => next.focus(id),
            Command::Minimize(id) => next.minimize(id),
            Command::Maximize(id) => next.toggle_maximize(id),
            Command::Restore(id) => next.restore(id),
            Command::Reposition { id, position } => {
                if let Some(window) = next.window_mut(id) {
                    window.position = *position;
                }
            }
            Command::Resize { id, size } => {
                if let Some(window) = next.window_mut(id) {
                    window.size = size.at_least(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
                }
            }
            Command::CycleFocus { forward } => next.cycle_focus(*forward),
        }
        (next != *self).then_some(next)
    }

    /// Move `id` to the top of the stack and make it the active window.
    fn raise(&mut self, id: &str) {
        let z = self.max_z.saturating_add(1);
        let Some(window) = self.window_mut(id) else {
            return;
        };
        window.z_index = z;
        window.minimized = false;
        self.max_z = z;
        self.active = Some(id.to_string());
    }

    fn open(&mut self, ctx: &CommandContext<'_>, id: &str) {
        let Some(config) = ctx.registry.get(id) else {
            return;
        };
        if self.window(id).is_some() {
            self.raise(id);
            return;
        }
        while self.windows.len() >= ctx.capacity.max(1) {
            let evicted = self.windows.remove(0);
            tracing::debug!(window_id = %evicted.id, "evicted oldest window at capacity");
            if self.active.as_deref() == Some(evicted.id.as_str()) {
                self.active = None;
            }
        }
        let position = placement::place(
            self.windows.len(),
            config.default_size,
            ctx.viewport,
            id == ctx.welcome_id,
        );
        let z = self.max_z.saturating_add(1);
        self.windows
            .push(WindowRecord::from_config(config, position, z));
        self.max_z = z;
        self.active = Some(id.to_string());
    }

    fn close(&mut self, id: &str) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() == before {
            return;
        }
        if self.active.as_deref() == Some(id) {
            self.active = self
                .windows
                .iter()
                .rev()
                .find(|w| !w.minimized)
                .map(|w| w.id.clone());
        }
    }

    fn focus(&mut self, id: &str) {
        self.raise(id);
    }

    fn minimize(&mut self, id: &str) {
        let Some(window) = self.window_mut(id) else {
            return;
        };
        window.minimized = true;
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
    }

    fn toggle_maximize(&mut self, id: &str) {
        let Some(window) = self.window_mut(id) else {
            return;
        };
        window.maximized = !window.maximized;
        self.raise(id);
    }

    fn restore(&mut self, id: &str) {
        let Some(window) = self.window_mut(id) else {
            return;
        };
        window.maximized = false;
        self.raise(id);
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order: Vec<&str> = self
            .windows
            .iter()
            .filter(|w| !w.minimized)
            .map(|w| w.id.as_str())
            .collect();
        if order.is_empty() {
            return;
        }
        let next = match self
            .active
            .as_deref()
            .and_then(|active| order.iter().position(|id| *id == active))
        {
            Some(_) if order.len() == 1 => return,
            Some(idx) => {
                let step = if forward { 1isize } else { -1isize };
                (idx as isize + step).rem_euclid(order.len() as isize) as usize
            }
            None if forward => 0,
            None => order.len() - 1,
        };
        let Some(target) = order.get(next).map(|id| id.to_string()) else {
            return;
        };
        self.raise(&target);
    }
}

/// Sole owner of the window collection.
///
/// Every mutation goes through [`WindowStore::dispatch`], which runs the pure
/// transition and swaps the result in whole, so a command is either applied
/// completely or not at all.
#[derive(Debug, Clone)]
pub struct WindowStore {
    state: DeskState,
    registry: WindowRegistry,
    viewport: Viewport,
    capacity: usize,
    welcome_id: String,
    revision: u64,
}

impl WindowStore {
    pub fn new(registry: WindowRegistry, viewport: Viewport) -> Self {
        Self {
            state: DeskState::default(),
            registry,
            viewport,
            capacity: MAX_WINDOWS,
            welcome_id: WELCOME_WINDOW_ID.to_string(),
            revision: 0,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn with_welcome_id(mut self, id: impl Into<String>) -> Self {
        self.welcome_id = id.into();
        self
    }

    /// Apply `command`; returns whether anything changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let ctx = CommandContext {
            registry: &self.registry,
            viewport: self.viewport,
            capacity: self.capacity,
            welcome_id: &self.welcome_id,
        };
        let Some(next) = self.state.apply(&ctx, &command) else {
            tracing::trace!(command = command.name(), window_id = ?command.target(), "window command had no effect");
            return false;
        };
        self.state = next;
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(
            command = command.name(),
            window_id = ?command.target(),
            active = ?self.state.active_id(),
            max_z = self.state.max_z(),
            open = self.state.windows().len(),
            "applied window command"
        );
        true
    }

    pub fn open(&mut self, id: &str) -> bool {
        self.dispatch(Command::Open(id.to_string()))
    }

    pub fn close(&mut self, id: &str) -> bool {
        self.dispatch(Command::Close(id.to_string()))
    }

    pub fn focus(&mut self, id: &str) -> bool {
        self.dispatch(Command::Focus(id.to_string()))
    }

    pub fn minimize(&mut self, id: &str) -> bool {
        self.dispatch(Command::Minimize(id.to_string()))
    }

    pub fn maximize(&mut self, id: &str) -> bool {
        self.dispatch(Command::Maximize(id.to_string()))
    }

    pub fn restore(&mut self, id: &str) -> bool {
        self.dispatch(Command::Restore(id.to_string()))
    }

    pub fn reposition(&mut self, id: &str, position: Position) -> bool {
        self.dispatch(Command::Reposition {
            id: id.to_string(),
            position,
        })
    }

    pub fn resize(&mut self, id: &str, size: Size) -> bool {
        self.dispatch(Command::Resize {
            id: id.to_string(),
            size,
        })
    }

    pub fn cycle_focus(&mut self, forward: bool) -> bool {
        self.dispatch(Command::CycleFocus { forward })
    }

    pub fn state(&self) -> &DeskState {
        &self.state
    }

    pub fn windows(&self) -> &[WindowRecord] {
        self.state.windows()
    }

    pub fn window(&self, id: &str) -> Option<&WindowRecord> {
        self.state.window(id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.state.window(id).is_some()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.state.active_id()
    }

    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.active_id().and_then(|id| self.window(id))
    }

    pub fn max_z(&self) -> u64 {
        self.state.max_z()
    }

    /// Visible windows from bottom to top.
    pub fn draw_order(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows().iter().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record the current viewport. Open windows keep their geometry.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            tracing::debug!(width = viewport.width, height = viewport.height, "viewport changed");
            self.viewport = viewport;
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bumped on every effective command so renderers can skip redundant
    /// frames.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
