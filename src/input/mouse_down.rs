//! Pointer-down handling: hit testing, selection, capture entry.

use crate::geometry::Point;
use crate::layer::{HitTarget, SupportImageLayer};
use crate::resize::{DragSnapshot, PointerModifiers};

impl SupportImageLayer {
    /// Pointer pressed at a container-relative position.
    ///
    /// A hit on a resize handle enters the resize capture; a hit on an
    /// image selects it (if it wasn't) and enters the drag capture; an
    /// empty-canvas hit clears the selection and leaves the pointer to
    /// the host.
    pub fn pointer_down(&mut self, position: Point, modifiers: PointerModifiers) {
        self.last_pointer = Some(position);
        let model = self.viewport.rendered_to_model(position);

        match self.hit_test(model) {
            HitTarget::Handle(kind) => {
                let Some(image) = self.selected_image() else {
                    // Handles only hit-test with a live selection; this
                    // path means the two fell out of sync.
                    tracing::error!(?kind, "resize handle hit with no selected image");
                    return;
                };
                let id = image.id;
                let bounds = image.bounds;
                self.suspend_host();
                self.set_cursor(kind.cursor());
                self.capture_bounds = Some(bounds);
                let snapshot = DragSnapshot::capture(&bounds, modifiers);
                self.state.start_resizing(id, kind, snapshot);
                self.mark_dirty();
            }
            HitTarget::Image(id) => {
                self.suspend_host();
                let already_selected = self
                    .image(id)
                    .is_some_and(|image| image.is_selected());
                if already_selected {
                    // Keep the selection; refresh the change-detection
                    // snapshot for this gesture.
                    self.capture_bounds = self.image(id).map(|image| image.bounds);
                } else {
                    self.select_image(id);
                }
                if let Some(image) = self.image_mut(id) {
                    image.set_dragging(true);
                }
                self.state.start_dragging(id);
                self.mark_dirty();
            }
            HitTarget::Canvas => {
                self.clear_selection();
                self.state.reset();
            }
        }
    }
}
