//! Widget trait: the per-type behavior behind every component.
//!
//! The [`Tree`](crate::tree::Tree) owns the shared state (geometry, style,
//! flags) and hands it to the widget for drawing, key handling and layout.

use crate::event::ComponentEvent;
use crate::key::KeyEvent;
use crate::layout::Rect;
use crate::screen::Screen;
use crate::tree::{ChildMeasure, ComponentState};
use std::any::Any;

/// Upcast to [`Any`] for typed widget access.
pub trait AsAny: Any {
    /// Borrow as `Any`.
    fn as_any(&self) -> &dyn Any;
    /// Mutably borrow as `Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Drawing, input and layout behavior of a component.
pub trait Widget: AsAny {
    /// Draw this widget. `state` carries the absolute position and style.
    fn render(&self, state: &ComponentState, screen: &mut dyn Screen);

    /// Handle a key press.
    ///
    /// Returns `true` if the key was consumed.
    fn handle_key(&mut self, _state: &ComponentState, _key: KeyEvent) -> bool {
        false
    }

    /// Place children.
    ///
    /// `None` leaves child bounds alone and lays out every child.
    /// `Some(rects)` assigns local bounds to the first `rects.len()`
    /// children; the rest are skipped.
    fn arrange(&self, _state: &ComponentState, _children: &ChildMeasure<'_>) -> Option<Vec<Rect>> {
        None
    }

    /// Called after the component's bounds change.
    fn resized(&mut self, _width: u16, _height: u16) {}

    /// Rows this widget needs when given `width` columns, if it knows.
    fn content_height(&self, _width: u16) -> Option<u16> {
        None
    }

    /// Whether components of this widget are always focusable.
    fn focusable(&self) -> bool {
        false
    }

    /// Drain notifications raised since the last call.
    fn take_events(&mut self) -> Vec<ComponentEvent> {
        Vec::new()
    }
}
