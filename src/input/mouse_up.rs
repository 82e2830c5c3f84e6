//! Pointer-release handling: capture exit, change detection, cancellation.

use crate::events::LayerEvent;
use crate::geometry::Point;
use crate::handles::CursorIcon;
use crate::input::InputState;
use crate::layer::SupportImageLayer;

impl SupportImageLayer {
    /// Pointer released. Compares the bounds captured at pointer-down with
    /// the final bounds; `Moved`/`Resized` fire only when they differ.
    pub fn pointer_up(&mut self, position: Point) {
        self.last_pointer = Some(position);
        self.set_cursor(CursorIcon::Default);
        self.restore_host();

        match std::mem::take(&mut self.state) {
            InputState::DraggingImage { id } => {
                if let Some(image) = self.image_mut(id) {
                    image.set_dragging(false);
                }
                self.update_spatial(id);
                let after = self.image(id).map(|image| image.bounds);
                if let (Some(before), Some(after)) = (self.capture_bounds, after)
                    && before != after
                {
                    self.emit(LayerEvent::Moved { id, before, after });
                }
            }
            InputState::ResizingImage { id, .. } => {
                self.update_spatial(id);
                let after = self.image(id).map(|image| image.bounds);
                if let (Some(before), Some(after)) = (self.capture_bounds, after)
                    && before != after
                {
                    self.emit(LayerEvent::Resized { id, before, after });
                }
            }
            InputState::Idle => {}
        }

        self.mark_dirty();
    }

    /// Forces the controller back to idle without emitting gesture events.
    /// For hosts whose surface goes away mid-gesture; capture and the
    /// canvas guard still have to be released.
    pub fn cancel_gesture(&mut self) {
        match self.state {
            InputState::DraggingImage { id } => {
                if let Some(image) = self.image_mut(id) {
                    image.set_dragging(false);
                }
                // The bounds keep whatever the gesture did so far; the
                // index has to follow them like on a normal release.
                self.update_spatial(id);
            }
            InputState::ResizingImage { id, .. } => {
                self.update_spatial(id);
            }
            InputState::Idle => {}
        }
        self.state.reset();
        self.restore_host();
        self.set_cursor(CursorIcon::Default);
        self.last_pointer = None;
    }
}
