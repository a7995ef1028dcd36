//! Layout snapshot types.

use crate::engine::{get_allocated_indices, get_capacity, get_parent, get_x, get_y, height, width};
use crate::types::Coord;

/// Position and size of every object, indexed by object index.
///
/// Positions are relative to the parent's content origin. Slots of
/// unallocated indices are zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComputedLayout {
    pub x: Vec<Coord>,
    pub y: Vec<Coord>,
    pub width: Vec<Coord>,
    pub height: Vec<Coord>,
    /// Extent covered by root objects.
    pub content_width: Coord,
    pub content_height: Coord,
}

impl ComputedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(x, y, width, height)` of `index`, if it is in the snapshot.
    pub fn get(&self, index: usize) -> Option<(Coord, Coord, Coord, Coord)> {
        Some((
            *self.x.get(index)?,
            *self.y.get(index)?,
            *self.width.get(index)?,
            *self.height.get(index)?,
        ))
    }
}

/// Capture the current geometry of every allocated object.
pub fn snapshot_layout() -> ComputedLayout {
    let indices = get_allocated_indices();
    if indices.is_empty() {
        return ComputedLayout::new();
    }

    let size = get_capacity();
    let mut layout = ComputedLayout {
        x: vec![0; size],
        y: vec![0; size],
        width: vec![0; size],
        height: vec![0; size],
        content_width: 0,
        content_height: 0,
    };

    for index in indices {
        if index >= size {
            continue;
        }
        let (x, y, w, h) = (get_x(index), get_y(index), width(index), height(index));
        layout.x[index] = x;
        layout.y[index] = y;
        layout.width[index] = w;
        layout.height[index] = h;

        if get_parent(index).is_none() {
            layout.content_width = layout.content_width.max(x + w);
            layout.content_height = layout.content_height.max(y + h);
        }
    }

    layout
}
