//! Pointer gestures that move and resize windows.
//!
//! A gesture is a short-lived session opened by a pointer press on a title
//! bar or resize handle, fed by pointer moves and closed by the release.
//! [`GestureController`] owns at most one session at a time, which acts as an
//! exclusive lease: a second press cannot start a competing drag or resize
//! until the first one is released.

use crate::constants::{DRAG_ANCHOR_HEIGHT, DRAG_ANCHOR_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::geometry::{Point, Position, Size, Viewport};
use crate::window::WindowStore;

/// Position for a drag that started at `start` and has moved by `delta`,
/// keeping at least an anchor strip of the window inside the viewport.
pub fn clamp_drag(start: Position, delta: (i32, i32), viewport: Viewport) -> Position {
    let x = start
        .x
        .saturating_add(delta.0)
        .min(viewport.width_i32() - DRAG_ANCHOR_WIDTH)
        .max(0);
    let y = start
        .y
        .saturating_add(delta.1)
        .min(viewport.height_i32() - DRAG_ANCHOR_HEIGHT)
        .max(0);
    Position::new(x, y)
}

/// Size for a resize that started at `start` and has moved by `delta`.
pub fn resize_from_drag(start: Size, delta: (i32, i32)) -> Size {
    let grow = |base: u32, by: i32, min: u32| -> u32 {
        let value = i64::from(base) + i64::from(by);
        value.clamp(i64::from(min), i64::from(u32::MAX)) as u32
    };
    Size::new(
        grow(start.width, delta.0, MIN_WINDOW_WIDTH),
        grow(start.height, delta.1, MIN_WINDOW_HEIGHT),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub id: String,
    pub start_pointer: Point,
    pub start_position: Position,
    pending: Option<Point>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub id: String,
    pub start_pointer: Point,
    pub start_size: Size,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl Gesture {
    pub fn window_id(&self) -> &str {
        match self {
            Gesture::Drag(drag) => &drag.id,
            Gesture::Resize(resize) => &resize.id,
        }
    }
}

/// Window may be moved or resized right now.
fn accepts_gesture(store: &WindowStore, id: &str) -> bool {
    store
        .window(id)
        .is_some_and(|w| !w.maximized && !w.minimized)
}

#[derive(Debug, Default)]
pub struct GestureController {
    session: Option<Gesture>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Gesture> {
        self.session.as_ref()
    }

    /// Window currently holding the gesture lease.
    pub fn lease(&self) -> Option<&str> {
        self.session.as_ref().map(Gesture::window_id)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start dragging `id` by its title bar. Brings the window to the front.
    /// Returns `false` when the window cannot be dragged or another gesture
    /// holds the lease.
    pub fn begin_drag(&mut self, store: &mut WindowStore, id: &str, pointer: Point) -> bool {
        if let Some(holder) = self.lease() {
            tracing::debug!(window_id = %id, holder = %holder, "drag refused: gesture lease held");
            return false;
        }
        if !accepts_gesture(store, id) {
            return false;
        }
        store.focus(id);
        let Some(window) = store.window(id) else {
            return false;
        };
        self.session = Some(Gesture::Drag(DragSession {
            id: id.to_string(),
            start_pointer: pointer,
            start_position: window.position,
            pending: None,
        }));
        tracing::debug!(window_id = %id, "drag started");
        true
    }

    /// Start resizing `id` from its resize handle.
    pub fn begin_resize(&mut self, store: &mut WindowStore, id: &str, pointer: Point) -> bool {
        if let Some(holder) = self.lease() {
            tracing::debug!(window_id = %id, holder = %holder, "resize refused: gesture lease held");
            return false;
        }
        if !accepts_gesture(store, id) {
            return false;
        }
        let Some(window) = store.window(id) else {
            return false;
        };
        self.session = Some(Gesture::Resize(ResizeSession {
            id: id.to_string(),
            start_pointer: pointer,
            start_size: window.size,
        }));
        tracing::debug!(window_id = %id, "resize started");
        true
    }

    /// Feed a pointer move. Drag moves are held until the next
    /// [`flush_frame`](Self::flush_frame); resize moves apply immediately.
    /// Returns whether the store changed.
    pub fn pointer_move(&mut self, store: &mut WindowStore, pointer: Point) -> bool {
        let Some(id) = self.lease() else {
            return false;
        };
        if !accepts_gesture(store, id) {
            tracing::debug!(window_id = %id, "gesture target gone; ending session");
            self.session = None;
            return false;
        }
        match self.session.as_mut() {
            Some(Gesture::Drag(drag)) => {
                drag.pending = Some(pointer);
                false
            }
            Some(Gesture::Resize(resize)) => {
                let size = resize_from_drag(resize.start_size, pointer.delta_from(resize.start_pointer));
                store.resize(&resize.id, size)
            }
            None => false,
        }
    }

    /// Apply at most one coalesced drag move. Called once per rendered frame.
    pub fn flush_frame(&mut self, store: &mut WindowStore) -> bool {
        let Some(Gesture::Drag(drag)) = self.session.as_mut() else {
            return false;
        };
        let Some(pointer) = drag.pending.take() else {
            return false;
        };
        if !accepts_gesture(store, &drag.id) {
            self.session = None;
            return false;
        }
        let position = clamp_drag(
            drag.start_position,
            pointer.delta_from(drag.start_pointer),
            store.viewport(),
        );
        let id = drag.id.clone();
        store.reposition(&id, position)
    }

    /// End the current gesture. Any move not yet flushed is dropped.
    pub fn pointer_up(&mut self) -> bool {
        match self.session.take() {
            Some(gesture) => {
                tracing::debug!(window_id = %gesture.window_id(), "gesture ended");
                true
            }
            None => false,
        }
    }
}
