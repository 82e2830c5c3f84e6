//! The support-image layer: owns the image list, the resize handles, the
//! viewport mirror, and the interaction controller state.
//!
//! Image order is paint order with index 0 on top; new images go to the
//! back (bottom of the z-order). Mutations mark the layer dirty for the
//! host to repaint and push domain events onto a drainable queue.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::constants::REFRESH_DEBOUNCE_MS;
use crate::debounce::Debouncer;
use crate::events::{CanvasGuard, LayerEvent, NoopGuard};
use crate::geometry::{Point, Rect};
use crate::handles::{CursorIcon, HandleKind, HandleSet};
use crate::image::SupportImage;
use crate::input::InputState;
use crate::spatial_index::SpatialIndex;
use crate::viewport::Viewport;

/// Tunables for one layer instance.
#[derive(Debug, Clone, Copy)]
pub struct LayerOptions {
    /// Quiet period for the container-resize refresh debounce.
    pub refresh_quiet: Duration,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            refresh_quiet: Duration::from_millis(REFRESH_DEBOUNCE_MS),
        }
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas (or only locked/invisible images).
    Canvas,
    Image(Uuid),
    Handle(HandleKind),
}

pub struct SupportImageLayer {
    pub(crate) images: Vec<SupportImage>,
    pub(crate) handles: HandleSet,
    pub(crate) viewport: Viewport,
    pub(crate) spatial: SpatialIndex,
    pub(crate) state: InputState,
    pub(crate) last_pointer: Option<Point>,
    /// Bounds as they stood when the current capture began; compared to the
    /// final bounds on release for `Moved`/`Resized` emission.
    pub(crate) capture_bounds: Option<Rect>,
    pub(crate) cursor: CursorIcon,
    pub(crate) guard: Box<dyn CanvasGuard>,
    pub(crate) guard_active: bool,
    pub(crate) events: VecDeque<LayerEvent>,
    pub(crate) dirty: bool,
    pub(crate) refresh: Debouncer,
}

impl Default for SupportImageLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportImageLayer {
    pub fn new() -> Self {
        Self::with_options(LayerOptions::default())
    }

    pub fn with_options(options: LayerOptions) -> Self {
        Self {
            images: Vec::new(),
            handles: HandleSet::new(),
            viewport: Viewport::new(),
            spatial: SpatialIndex::new(),
            state: InputState::Idle,
            last_pointer: None,
            capture_bounds: None,
            cursor: CursorIcon::Default,
            guard: Box::new(NoopGuard),
            guard_active: false,
            events: VecDeque::new(),
            dirty: false,
            refresh: Debouncer::new(options.refresh_quiet),
        }
    }

    /// Installs the host guard. Call before feeding pointer events.
    pub fn set_guard(&mut self, guard: Box<dyn CanvasGuard>) {
        self.guard = guard;
    }

    // ------------------------------------------------------------------
    // Image management
    // ------------------------------------------------------------------

    /// Images in paint order, index 0 topmost.
    pub fn images(&self) -> &[SupportImage] {
        &self.images
    }

    pub fn image(&self, id: Uuid) -> Option<&SupportImage> {
        self.images.iter().find(|img| img.id == id)
    }

    pub(crate) fn image_mut(&mut self, id: Uuid) -> Option<&mut SupportImage> {
        self.images.iter_mut().find(|img| img.id == id)
    }

    pub fn selected_image(&self) -> Option<&SupportImage> {
        self.images.iter().find(|img| img.is_selected())
    }

    /// Appends an image at the bottom of the z-order and returns its id.
    pub fn add_image(&mut self, image: SupportImage) -> Uuid {
        let id = image.id;
        self.spatial.insert(id, &image.bounds);
        self.images.push(image);
        self.emit(LayerEvent::Added { id });
        self.mark_dirty();
        id
    }

    /// Removes an image, cancelling any gesture that captured it.
    pub fn remove_image(&mut self, id: Uuid) -> Option<SupportImage> {
        let idx = self.images.iter().position(|img| img.id == id)?;
        let captured = matches!(
            self.state,
            InputState::DraggingImage { id: c } | InputState::ResizingImage { id: c, .. }
                if c == id
        );
        if captured {
            self.cancel_gesture();
        }
        let image = self.images.remove(idx);
        self.spatial.remove(id);
        if image.is_selected() {
            self.handles.clear();
        }
        self.emit(LayerEvent::Removed { id });
        self.mark_dirty();
        Some(image)
    }

    /// Selects an image, deselecting all others. No-ops on locked,
    /// invisible, or already-selected images.
    pub fn select_image(&mut self, id: Uuid) {
        let Some(idx) = self.images.iter().position(|img| img.id == id) else {
            tracing::warn!(%id, "select_image: unknown image");
            return;
        };
        {
            let image = &self.images[idx];
            if image.locked || !image.visible || image.is_selected() {
                return;
            }
        }
        let mut deselected = Vec::new();
        for image in &mut self.images {
            if image.is_selected() {
                deselected.push(image.id);
            }
            image.set_selected(false);
            image.set_dragging(false);
        }
        for prev in deselected {
            self.emit(LayerEvent::Deselected { id: prev });
        }

        let zoom = self.viewport.zoom();
        let image = &mut self.images[idx];
        image.set_selected(true);
        let bounds = image.bounds;
        self.handles.layout(&bounds, zoom);
        self.capture_bounds = Some(bounds);
        self.emit(LayerEvent::Selected { id });
        self.mark_dirty();
    }

    pub fn clear_selection(&mut self) {
        let mut deselected = Vec::new();
        for image in &mut self.images {
            if image.is_selected() {
                deselected.push(image.id);
            }
            image.set_selected(false);
            image.set_dragging(false);
        }
        for id in deselected {
            self.emit(LayerEvent::Deselected { id });
        }
        self.handles.clear();
        self.mark_dirty();
    }

    /// Locking drops the selected flag silently (no `Deselected` event).
    pub fn set_locked(&mut self, id: Uuid, locked: bool) {
        let Some(image) = self.image_mut(id) else {
            tracing::warn!(%id, "set_locked: unknown image");
            return;
        };
        image.locked = locked;
        let was_selected = image.is_selected();
        image.set_selected(false);
        if was_selected {
            self.handles.clear();
        }
        self.emit(LayerEvent::Changed { id });
        self.mark_dirty();
    }

    /// Hiding drops the selected flag silently, like locking.
    pub fn set_visible(&mut self, id: Uuid, visible: bool) {
        let Some(image) = self.image_mut(id) else {
            tracing::warn!(%id, "set_visible: unknown image");
            return;
        };
        image.visible = visible;
        let was_selected = image.is_selected();
        image.set_selected(false);
        if was_selected {
            self.handles.clear();
        }
        self.emit(LayerEvent::Changed { id });
        self.mark_dirty();
    }

    /// Swaps the image with its neighbor toward the top of the z-order.
    pub fn move_image_up(&mut self, id: Uuid) {
        let Some(idx) = self.images.iter().position(|img| img.id == id) else {
            tracing::warn!(%id, "move_image_up: unknown image");
            return;
        };
        if idx > 0 {
            self.images.swap(idx, idx - 1);
            self.emit(LayerEvent::Changed { id });
            self.mark_dirty();
        }
    }

    /// Swaps the image with its neighbor toward the bottom of the z-order.
    pub fn move_image_down(&mut self, id: Uuid) {
        let Some(idx) = self.images.iter().position(|img| img.id == id) else {
            tracing::warn!(%id, "move_image_down: unknown image");
            return;
        };
        if idx + 1 < self.images.len() {
            self.images.swap(idx, idx + 1);
            self.emit(LayerEvent::Changed { id });
            self.mark_dirty();
        }
    }

    /// Swaps in a whole new image list (deselected, spatial index rebuilt).
    pub(crate) fn replace_images(&mut self, images: Vec<SupportImage>) {
        self.images = images;
        self.spatial
            .rebuild(self.images.iter().map(|img| (img.id, img.bounds)));
        self.handles.clear();
        self.capture_bounds = None;
        self.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Viewport
    // ------------------------------------------------------------------

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mirrors the host's zoom and re-lays the handles, which change model
    /// size with zoom.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
        self.relayout_handles();
        self.mark_dirty();
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.viewport.set_pan(pan);
        self.mark_dirty();
    }

    pub fn set_container_origin(&mut self, origin: Point) {
        self.viewport.set_container_origin(origin);
    }

    /// Call when the host container resized; the actual refresh is
    /// debounced and happens in `poll_refresh`.
    pub fn notify_container_resized(&mut self, now: Instant) {
        self.refresh.request(now);
    }

    /// Runs the debounced refresh if its quiet period elapsed. Returns
    /// whether a refresh happened.
    pub fn poll_refresh(&mut self, now: Instant) -> bool {
        if self.refresh.fire_due(now) {
            self.relayout_handles();
            self.mark_dirty();
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------
    // Hit testing
    // ------------------------------------------------------------------

    /// Resolves a model-space point: resize handles of the selected image
    /// win, then images in paint order (index 0 first), skipping locked
    /// and invisible ones.
    pub fn hit_test(&self, model: Point) -> HitTarget {
        if self.selected_image().is_some()
            && let Some(kind) = self.handles.hit_test(model)
        {
            return HitTarget::Handle(kind);
        }
        let candidates: HashSet<Uuid> = self.spatial.query_point(model.x, model.y).into_iter().collect();
        for image in &self.images {
            if image.locked || !image.visible {
                continue;
            }
            if candidates.contains(&image.id) && image.bounds.contains_point(model.x, model.y) {
                return HitTarget::Image(image.id);
            }
        }
        HitTarget::Canvas
    }

    // ------------------------------------------------------------------
    // Notifications and repaint
    // ------------------------------------------------------------------

    /// Pointer icon the host should show.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub(crate) fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }

    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    /// Interaction state, for hosts that render capture feedback.
    pub fn input_state(&self) -> InputState {
        self.state
    }

    pub fn drain_events(&mut self) -> Vec<LayerEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn emit(&mut self, event: LayerEvent) {
        self.events.push_back(event);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consumes the repaint flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ------------------------------------------------------------------
    // Internal helpers shared with the input modules
    // ------------------------------------------------------------------

    pub(crate) fn relayout_handles(&mut self) {
        if let Some(image) = self.images.iter().find(|img| img.is_selected()) {
            let bounds = image.bounds;
            let zoom = self.viewport.zoom();
            self.handles.layout(&bounds, zoom);
        }
    }

    pub(crate) fn update_spatial(&mut self, id: Uuid) {
        if let Some(image) = self.image(id) {
            let bounds = image.bounds;
            self.spatial.insert(id, &bounds);
        }
    }

    pub(crate) fn suspend_host(&mut self) {
        if !self.guard_active {
            self.guard.suspend();
            self.guard_active = true;
        }
    }

    pub(crate) fn restore_host(&mut self) {
        if self.guard_active {
            self.guard.restore();
            self.guard_active = false;
        }
    }
}
