//! Global keyboard shortcuts routed to the window store.
//!
//! Window-scoped actions act on the window the dispatcher is currently
//! subscribed to. The owner calls [`ShortcutDispatcher::resubscribe`] after
//! every event so the scope always tracks the store's active window; a scope
//! that no longer matches is treated as stale and ignored.

use crossterm::event::KeyEvent;

use crate::constants::HELP_WINDOW_ID;
use crate::keybindings::{Action, KeyBindings};
use crate::window::WindowStore;

/// What happened to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// No binding matched; the key belongs to the focused content.
    Unbound,
    /// A binding matched but had nothing to act on.
    Ignored(Action),
    /// A binding matched and changed the store.
    Applied(Action),
    /// The desktop should shut down.
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct ShortcutDispatcher {
    bindings: KeyBindings,
    scope: Option<String>,
}

impl ShortcutDispatcher {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            scope: None,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Point window-scoped shortcuts at `active`. Returns whether the scope
    /// changed.
    pub fn resubscribe(&mut self, active: Option<&str>) -> bool {
        if self.scope.as_deref() == active {
            return false;
        }
        tracing::debug!(from = ?self.scope, to = ?active, "shortcut scope changed");
        self.scope = active.map(str::to_string);
        true
    }

    pub fn dispatch(&self, key: &KeyEvent, store: &mut WindowStore) -> ShortcutOutcome {
        let Some(action) = self.bindings.action_for_key(key) else {
            return ShortcutOutcome::Unbound;
        };
        let applied = match action {
            Action::Quit => return ShortcutOutcome::Quit,
            Action::OpenHelp => store.open(HELP_WINDOW_ID),
            Action::CycleNextWindow => store.cycle_focus(true),
            Action::CyclePrevWindow => store.cycle_focus(false),
            Action::CloseWindow | Action::MinimizeWindow | Action::ToggleMaximize => {
                let Some(id) = self.scope.as_deref() else {
                    return ShortcutOutcome::Ignored(action);
                };
                if store.active_id() != Some(id) {
                    tracing::warn!(scope = %id, active = ?store.active_id(), "stale shortcut scope");
                    return ShortcutOutcome::Ignored(action);
                }
                match action {
                    Action::CloseWindow => store.close(id),
                    Action::MinimizeWindow => store.minimize(id),
                    _ => store.maximize(id),
                }
            }
        };
        if applied {
            ShortcutOutcome::Applied(action)
        } else {
            ShortcutOutcome::Ignored(action)
        }
    }
}
