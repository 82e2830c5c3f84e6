//! Resize handles: the eight grab squares around a selected image, their
//! layout, the clamp anchors derived from a drag snapshot, and the pointer
//! icons they advertise.

use crate::constants::HANDLE_SIZE;
use crate::geometry::{Point, Rect, point};

/// The eight resize handles, named by the edge or corner they sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    TopLeft,
    TopMiddle,
    TopRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
    MiddleLeft,
    MiddleRight,
}

impl HandleKind {
    pub const ALL: [HandleKind; 8] = [
        HandleKind::TopLeft,
        HandleKind::TopMiddle,
        HandleKind::TopRight,
        HandleKind::BottomLeft,
        HandleKind::BottomMiddle,
        HandleKind::BottomRight,
        HandleKind::MiddleLeft,
        HandleKind::MiddleRight,
    ];

    /// Directional pointer icon shown when hovering this handle.
    pub fn cursor(self) -> CursorIcon {
        match self {
            HandleKind::TopLeft => CursorIcon::NwResize,
            HandleKind::TopMiddle => CursorIcon::NResize,
            HandleKind::TopRight => CursorIcon::NeResize,
            HandleKind::BottomLeft => CursorIcon::SwResize,
            HandleKind::BottomMiddle => CursorIcon::SResize,
            HandleKind::BottomRight => CursorIcon::SeResize,
            HandleKind::MiddleLeft => CursorIcon::WResize,
            HandleKind::MiddleRight => CursorIcon::EResize,
        }
    }
}

/// Pointer icon the host should apply to the canvas element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    NwResize,
    NResize,
    NeResize,
    SwResize,
    SResize,
    SeResize,
    WResize,
    EResize,
}

/// Handle edge length in model units at the given zoom. Shrinks with zoom
/// so handles keep a constant on-screen size, floored at `HANDLE_SIZE`.
pub fn handle_size(zoom: f64) -> f64 {
    let size = HANDLE_SIZE / zoom;
    if size < HANDLE_SIZE { HANDLE_SIZE } else { size }
}

/// One positioned handle.
#[derive(Debug, Clone, Copy)]
pub struct ResizeHandle {
    pub kind: HandleKind,
    pub rect: Rect,
}

/// The full set of eight handles. Repositioned in place on selection,
/// zoom changes, and every resize step; cleared to zero-sized (inert)
/// rects when nothing is selected.
#[derive(Debug, Clone)]
pub struct HandleSet {
    handles: [ResizeHandle; 8],
}

impl Default for HandleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleSet {
    pub fn new() -> Self {
        Self {
            handles: HandleKind::ALL.map(|kind| ResizeHandle {
                kind,
                rect: Rect::default(),
            }),
        }
    }

    /// Positions all eight handles around `bounds`, centered on its corners
    /// and edge midpoints.
    pub fn layout(&mut self, bounds: &Rect, zoom: f64) {
        let c = handle_size(zoom);
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = *bounds;
        for handle in &mut self.handles {
            let (hx, hy) = match handle.kind {
                HandleKind::TopLeft => (x - c / 2.0, y - c / 2.0),
                HandleKind::TopMiddle => (x + w / 2.0 - c / 2.0, y - c / 2.0),
                HandleKind::TopRight => (x + w - c / 2.0, y - c / 2.0),
                HandleKind::BottomLeft => (x - c / 2.0, y + h - c / 2.0),
                HandleKind::BottomMiddle => (x + w / 2.0 - c / 2.0, y + h - c / 2.0),
                HandleKind::BottomRight => (x + w - c / 2.0, y + h - c / 2.0),
                HandleKind::MiddleLeft => (x - c / 2.0, y + h / 2.0 - c / 2.0),
                HandleKind::MiddleRight => (x + w - c / 2.0, y + h / 2.0 - c / 2.0),
            };
            handle.rect.set(hx, hy, c, c);
        }
    }

    /// Zeroes all handles. An inert set hits nothing.
    pub fn clear(&mut self) {
        for handle in &mut self.handles {
            handle.rect = Rect::default();
        }
    }

    /// First handle containing the model-space point, if any.
    pub fn hit_test(&self, p: Point) -> Option<HandleKind> {
        self.handles
            .iter()
            .find(|h| h.rect.width > 0.0 && h.rect.contains_point(p.x, p.y))
            .map(|h| h.kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResizeHandle> {
        self.handles.iter()
    }

    pub fn get(&self, kind: HandleKind) -> &ResizeHandle {
        // ALL and the handle array share ordering.
        let idx = HandleKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
        &self.handles[idx]
    }
}

/// Clamp anchors for one resize gesture.
///
/// Derived from the bounds captured when the gesture (or the last modifier
/// toggle) began, never from the live bounds, so opposite-edge limits stay
/// fixed while the box shrinks toward them.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub top_left: Point,
    pub top_middle: Point,
    pub top_right: Point,
    pub middle_left: Point,
    pub middle_right: Point,
    pub bottom_left: Point,
    pub bottom_middle: Point,
    pub bottom_right: Point,
    pub center: Point,
}

impl Limits {
    pub fn for_snapshot(x: f64, y: f64, w: f64, h: f64, zoom: f64) -> Self {
        let c = handle_size(zoom);
        Self {
            top_left: point(x - c / 2.0, y - c / 2.0),
            top_middle: point(x + w / 2.0 - c / 2.0, y - c / 2.0),
            top_right: point(x + w - c / 2.0, y - c / 2.0),
            middle_left: point(x - c / 2.0, y + h / 2.0 - c / 2.0),
            middle_right: point(x + w - c / 2.0, y + h / 2.0 - c / 2.0),
            bottom_left: point(x - c / 2.0, y + h - c / 2.0),
            bottom_middle: point(x + w / 2.0 - c / 2.0, y + h - c / 2.0),
            bottom_right: point(x + w - c / 2.0, y + h - c / 2.0),
            center: point(x + w / 2.0 - c / 2.0, y + h / 2.0 - c / 2.0),
        }
    }
}
