//! `underlay` pins support images under a zoomable, pannable graph canvas
//! and makes them draggable and resizable.
//!
//! The host owns rendering, resource loading, and the event loop; this
//! crate owns the model. Feed it pointer events in container-relative
//! coordinates plus the host's zoom/pan, and it maintains image bounds,
//! selection, the eight resize handles, cursor hints, a repaint dirty
//! flag, and a queue of domain events.
//!
//! The resize engine supports two modifiers: ctrl locks the aspect ratio
//! (corner handles follow the dominant delta component), shift resizes
//! symmetrically about the box center. Both dimensions are clamped to a
//! zoom-dependent minimum so a box can never collapse past its handles.

pub mod constants;
pub mod debounce;
pub mod error;
pub mod events;
pub mod geometry;
pub mod handles;
pub mod image;
pub mod input;
pub mod layer;
pub mod persist;
pub mod resize;
pub mod spatial_index;
pub mod viewport;

pub use error::{LayerError, LayerResult};
pub use events::{CanvasGuard, LayerEvent, NoopGuard};
pub use geometry::{Point, Rect, point};
pub use handles::{CursorIcon, HandleKind, HandleSet, Limits, ResizeHandle};
pub use image::SupportImage;
pub use input::InputState;
pub use layer::{HitTarget, LayerOptions, SupportImageLayer};
pub use persist::LayerState;
pub use resize::{DragSnapshot, PointerModifiers, resize_bounds};
pub use viewport::Viewport;
