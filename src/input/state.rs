//! Capture state machine for the pointer lifecycle.
//!
//! Transitions:
//!
//! ```text
//! Idle --pointer_down on image--> DraggingImage
//! Idle --pointer_down on handle--> ResizingImage
//! DraggingImage | ResizingImage --pointer_up / cancel--> Idle
//! ```

use uuid::Uuid;

use crate::handles::HandleKind;
use crate::resize::DragSnapshot;

/// At most one capture is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    #[default]
    Idle,
    /// Translating an image by raw pointer deltas, unclamped.
    DraggingImage { id: Uuid },
    /// Feeding deltas through the resize engine for one handle.
    ResizingImage {
        id: Uuid,
        kind: HandleKind,
        snapshot: DragSnapshot,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InputState::Idle)
    }

    /// Any active capture, drag or resize.
    pub fn is_capturing(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_dragging_image(&self) -> bool {
        matches!(self, InputState::DraggingImage { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, InputState::ResizingImage { .. })
    }

    pub fn dragging_image(&self) -> Option<Uuid> {
        match self {
            InputState::DraggingImage { id } => Some(*id),
            _ => None,
        }
    }

    pub fn resizing_image(&self) -> Option<(Uuid, HandleKind)> {
        match self {
            InputState::ResizingImage { id, kind, .. } => Some((*id, *kind)),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = InputState::Idle;
    }

    pub fn start_dragging(&mut self, id: Uuid) {
        *self = InputState::DraggingImage { id };
    }

    pub fn start_resizing(&mut self, id: Uuid, kind: HandleKind, snapshot: DragSnapshot) {
        *self = InputState::ResizingImage { id, kind, snapshot };
    }
}
