//! R-tree spatial index over image bounds.
//!
//! Hit testing asks the index for candidate ids at a point, then resolves
//! z-order against the paint list. Entries are refreshed when an image is
//! added, removed, or released at the end of a gesture, not on every drag
//! step.

use std::collections::HashMap;

use rstar::{AABB, RTree, RTreeObject};
use uuid::Uuid;

use crate::geometry::Rect;

/// One image's bounding box in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub id: Uuid,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    fn new(id: Uuid, bounds: &Rect) -> Self {
        Self {
            id,
            min_x: bounds.x,
            min_y: bounds.y,
            max_x: bounds.x + bounds.width,
            max_y: bounds.y + bounds.height,
        }
    }

    #[inline]
    fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Point and region queries over the image set in O(log n).
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<Uuid, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Inserts or refreshes one image's bounds.
    pub fn insert(&mut self, id: Uuid, bounds: &Rect) {
        if let Some(old) = self.entries.remove(&id) {
            self.tree.remove(&old);
        }
        let entry = SpatialEntry::new(id, bounds);
        self.tree.insert(entry);
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        if let Some(entry) = self.entries.remove(&id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Ids of all entries containing the point.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<Uuid> {
        let envelope = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.id)
            .collect()
    }

    /// Ids of all entries intersecting the region.
    pub fn query_rect(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<Uuid> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the whole index, bulk-loading the tree.
    pub fn rebuild<I>(&mut self, images: I)
    where
        I: Iterator<Item = (Uuid, Rect)>,
    {
        let entries: Vec<SpatialEntry> = images
            .map(|(id, bounds)| SpatialEntry::new(id, &bounds))
            .collect();
        self.entries = entries.iter().map(|e| (e.id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
