//! Coordinate projection between the host container and model space.
//!
//! The layer mirrors three values from the host graph view: the zoom
//! scalar, the pan offset (both in container pixels), and the container's
//! origin in client coordinates. All interaction math happens in model
//! space; pointer positions arrive container-relative and are projected
//! here.

use crate::constants::DEFAULT_ZOOM;
use crate::geometry::{Point, point};

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    zoom: f64,
    pan: Point,
    container_origin: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: Point::default(),
            container_origin: Point::default(),
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Non-finite or non-positive zoom values are ignored; the host owns
    /// the zoom range, this only defends the projection math.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() || zoom <= 0.0 {
            tracing::warn!(zoom, "ignoring invalid zoom level");
            return;
        }
        self.zoom = zoom;
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    pub fn container_origin(&self) -> Point {
        self.container_origin
    }

    pub fn set_container_origin(&mut self, origin: Point) {
        self.container_origin = origin;
    }

    /// Container-relative position to model space.
    pub fn rendered_to_model(&self, p: Point) -> Point {
        point((p.x - self.pan.x) / self.zoom, (p.y - self.pan.y) / self.zoom)
    }

    /// Model position to container-relative space.
    pub fn model_to_rendered(&self, p: Point) -> Point {
        point(p.x * self.zoom + self.pan.x, p.y * self.zoom + self.pan.y)
    }

    /// Client (page) position to model space: strip the container origin,
    /// then unproject.
    pub fn client_to_model(&self, p: Point) -> Point {
        self.rendered_to_model(point(
            p.x - self.container_origin.x,
            p.y - self.container_origin.y,
        ))
    }
}
