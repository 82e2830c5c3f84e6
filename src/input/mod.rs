//! Pointer lifecycle for the layer.
//!
//! Split by event:
//! - `state`: the capture state machine
//! - `mouse_down`: hit testing, selection, capture entry
//! - `drag`: hover cursor, moves, resize dispatch
//! - `mouse_up`: release, change detection, cancellation

mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use state::InputState;
