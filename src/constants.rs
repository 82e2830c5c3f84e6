//! Layer-wide constants.
//!
//! Centralizes the magic numbers shared between the handle layout, the
//! resize engine, and the refresh debouncer.

/// Resize handle edge length in container pixels at zoom 1.0.
///
/// Handles never render smaller than this: zooming out past 1.0 grows them
/// in model units so they stay grabbable on screen.
pub const HANDLE_SIZE: f64 = 5.0;

/// Quiet period for the container-resize refresh debounce, in milliseconds.
pub const REFRESH_DEBOUNCE_MS: u64 = 100;

/// Default zoom level.
pub const DEFAULT_ZOOM: f64 = 1.0;
