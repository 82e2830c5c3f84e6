//! The support image entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Point, Rect, point};
use crate::viewport::Viewport;

/// An image pinned under the host graph, positioned in model coordinates.
///
/// `selected` and `dragging` are interaction state and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportImage {
    pub id: Uuid,
    pub url: String,
    pub name: String,
    pub bounds: Rect,
    pub locked: bool,
    pub visible: bool,
    #[serde(skip)]
    selected: bool,
    #[serde(skip)]
    dragging: bool,
}

impl SupportImage {
    /// Creates an unlocked, visible image. The name defaults to the url.
    ///
    /// An empty url is reported but not rejected; the host renderer decides
    /// what a url-less image looks like.
    pub fn new(url: impl Into<String>, bounds: Rect) -> Self {
        let url = url.into();
        if url.is_empty() {
            tracing::error!("support image created without a url");
        }
        Self {
            id: Uuid::new_v4(),
            name: url.clone(),
            url,
            bounds,
            locked: false,
            visible: true,
            selected: false,
            dragging: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Center of the bounds in model space.
    pub fn position(&self) -> Point {
        self.bounds.center()
    }

    /// Center of the bounds projected into container-relative coordinates.
    pub fn rendered_position(&self, viewport: &Viewport) -> Point {
        let top_left = viewport.model_to_rendered(point(self.bounds.x, self.bounds.y));
        let zoom = viewport.zoom();
        point(
            top_left.x + self.bounds.width * zoom / 2.0,
            top_left.y + self.bounds.height * zoom / 2.0,
        )
    }
}
