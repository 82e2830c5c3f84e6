//! Pointer-move handling: hover cursor, plain moves, resize dispatch.

use crate::geometry::Point;
use crate::handles::CursorIcon;
use crate::input::InputState;
use crate::layer::SupportImageLayer;
use crate::resize::{PointerModifiers, resize_bounds};

impl SupportImageLayer {
    /// Pointer moved to a container-relative position.
    ///
    /// Deltas are taken between consecutive pointer positions, projected
    /// into model space, so the math is independent of event frequency.
    pub fn pointer_move(&mut self, position: Point, modifiers: PointerModifiers) {
        // Hover hinting runs whenever no handle has captured the pointer;
        // during a resize the capture's cursor stays put.
        if !self.state.is_resizing() {
            let icon = if self.selected_image().is_some() {
                let model = self.viewport.rendered_to_model(position);
                self.handles
                    .hit_test(model)
                    .map(|kind| kind.cursor())
                    .unwrap_or_default()
            } else {
                CursorIcon::Default
            };
            self.set_cursor(icon);
        }

        let Some(last) = self.last_pointer else {
            self.last_pointer = Some(position);
            return;
        };
        let viewport = self.viewport;
        let p1 = viewport.rendered_to_model(last);
        let p2 = viewport.rendered_to_model(position);
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;

        match self.state {
            InputState::DraggingImage { id } => {
                if let Some(image) = self.image_mut(id)
                    && image.is_dragging()
                {
                    image.bounds.translate(dx, dy);
                }
                self.relayout_handles();
                self.mark_dirty();
            }
            InputState::ResizingImage { id, kind, snapshot } => {
                let mut snapshot = snapshot;
                if let Some(image) = self.image_mut(id) {
                    let mut bounds = image.bounds;
                    resize_bounds(
                        kind,
                        &mut bounds,
                        dx,
                        dy,
                        modifiers,
                        &mut snapshot,
                        viewport.zoom(),
                    );
                    image.bounds = bounds;
                }
                self.state = InputState::ResizingImage { id, kind, snapshot };
                self.relayout_handles();
                self.mark_dirty();
            }
            InputState::Idle => {}
        }

        self.last_pointer = Some(position);
    }
}
