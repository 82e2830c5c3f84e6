//! Domain notifications and the host-canvas gesture guard.

use uuid::Uuid;

use crate::geometry::Rect;

/// Notifications for external collaborators, drained from the layer's
/// queue after each operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerEvent {
    Selected {
        id: Uuid,
    },
    Deselected {
        id: Uuid,
    },
    /// The gesture's final bounds differ from the bounds captured at
    /// pointer-down. Emitted on release, not per step.
    Moved {
        id: Uuid,
        before: Rect,
        after: Rect,
    },
    Resized {
        id: Uuid,
        before: Rect,
        after: Rect,
    },
    /// Lock, visibility, or z-order changed.
    Changed {
        id: Uuid,
    },
    Added {
        id: Uuid,
    },
    Removed {
        id: Uuid,
    },
}

/// Host hook that suppresses the canvas's own pointer behavior (panning,
/// box selection) while a gesture here has captured the pointer.
///
/// `suspend` is called once when a capture begins on an image or handle,
/// and `restore` exactly once when the gesture ends, including forced
/// cancellation. Empty-canvas clicks never touch the guard.
pub trait CanvasGuard {
    fn suspend(&mut self);
    fn restore(&mut self);
}

/// Guard for hosts with nothing to suppress.
#[derive(Debug, Default)]
pub struct NoopGuard;

impl CanvasGuard for NoopGuard {
    fn suspend(&mut self) {}
    fn restore(&mut self) {}
}
