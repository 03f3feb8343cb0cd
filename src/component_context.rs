//! Shared component rendering context
//!
//! `ComponentContext` carries what a component needs to know about its
//! surroundings while rendering or handling input: whether it has focus and
//! which palette the desktop is drawn with.

use crate::theme::Palette;

#[derive(Debug, Clone, Copy)]
pub struct ComponentContext {
    focused: bool,
    palette: Palette,
}

impl ComponentContext {
    pub const fn new(focused: bool, palette: Palette) -> Self {
        Self { focused, palette }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Return a new `ComponentContext` with a modified `focused` flag.
    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self::new(false, Palette::default())
    }
}
