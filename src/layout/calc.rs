//! Grid Calculator
//!
//! Resolves the offset and size of every track of a grid container.
//!
//! # Algorithm
//!
//! **Explicit axis** (declared tracks):
//! 1. One pass: sum fixed sizes and fr weights
//! 2. `free = content_extent - fixed_total` (clamped at 0)
//! 3. Each fr track gets `floor(free * weight / total_weight)`, or 0 when the
//!    container is auto sized on that axis (its size would depend on tracks
//!    that depend on its size)
//! 4. Offsets are the running prefix sum of sizes, starting at 0
//!
//! **Implicit axis** (no declared tracks):
//! 1. Track count is `ceil(items / explicit_tracks) + 1`
//! 2. Walk grid cells back-to-front with a cursor that advances along the
//!    explicit axis and wraps onto the next implicit track
//! 3. Each implicit track is as large as its largest item. A stretched item's
//!    size is not known yet, so its auto size is used instead

use crate::engine::arrays::{geometry, grid};
use crate::engine::{calc_auto_size, children, content_height, content_width, height, width};
use crate::types::{Axis, Coord};

use super::cell::GridAlign;
use super::config::{FrRemainder, grid_config};
use super::definition::GridShape;
use super::scratch::ScratchBuf;
use super::track::{TrackList, TrackSize};

/// Resolved track geometry of one container.
///
/// Offsets are relative to the container's content origin. Buffers go back
/// to the scratch pool when the calculation drops.
#[derive(Debug)]
pub struct GridCalc {
    x: ScratchBuf,
    w: ScratchBuf,
    y: ScratchBuf,
    h: ScratchBuf,
    grid_w: Coord,
    grid_h: Coord,
}

impl GridCalc {
    pub fn col_num(&self) -> usize {
        self.x.len()
    }

    pub fn row_num(&self) -> usize {
        self.y.len()
    }

    pub fn col_offsets(&self) -> &[Coord] {
        &self.x
    }

    pub fn col_sizes(&self) -> &[Coord] {
        &self.w
    }

    pub fn row_offsets(&self) -> &[Coord] {
        &self.y
    }

    pub fn row_sizes(&self) -> &[Coord] {
        &self.h
    }

    /// Extent from the first column's start to the last column's end.
    pub fn grid_w(&self) -> Coord {
        self.grid_w
    }

    /// Extent from the first row's start to the last row's end.
    pub fn grid_h(&self) -> Coord {
        self.grid_h
    }
}

/// Calculate the tracks of `cont`. `None` if it has no grid.
pub fn calculate(cont: usize) -> Option<GridCalc> {
    let definition = grid::get_grid(cont)?;
    let remainder = grid_config().fr_remainder;

    let auto_w = geometry::get_width_set(cont).is_auto();
    let auto_h = geometry::get_height_set(cont).is_auto();

    let ((x, w), (y, h)) = match definition.shape() {
        GridShape::Explicit { columns, rows } => (
            calc_explicit(columns, content_width(cont), auto_w, remainder),
            calc_explicit(rows, content_height(cont), auto_h, remainder),
        ),
        GridShape::ImplicitRows { columns } => (
            calc_explicit(columns, content_width(cont), auto_w, remainder),
            calc_implicit(cont, columns.len(), Axis::Row),
        ),
        GridShape::ImplicitColumns { rows } => (
            calc_implicit(cont, rows.len(), Axis::Column),
            calc_explicit(rows, content_height(cont), auto_h, remainder),
        ),
    };

    let grid_w = extent(&x, &w);
    let grid_h = extent(&y, &h);

    Some(GridCalc { x, w, y, h, grid_w, grid_h })
}

/// Resolve declared tracks against `available` space.
/// Returns `(offsets, sizes)`.
fn calc_explicit(
    tracks: &TrackList,
    available: Coord,
    auto: bool,
    remainder: FrRemainder,
) -> (ScratchBuf, ScratchBuf) {
    let mut sizes = ScratchBuf::acquire(tracks.len());

    let mut fixed_total: Coord = 0;
    let mut fr_total: i64 = 0;
    for (i, track) in tracks.iter().enumerate() {
        match track {
            TrackSize::Cells(size) => {
                sizes[i] = size;
                fixed_total = fixed_total.saturating_add(size);
            }
            TrackSize::Fr(weight) => fr_total += i64::from(weight),
        }
    }

    // Fr tracks stay 0 on an auto sized axis
    if !auto && fr_total > 0 {
        let free = available.saturating_sub(fixed_total).max(0);
        let mut assigned: Coord = 0;

        for (i, track) in tracks.iter().enumerate() {
            if let TrackSize::Fr(weight) = track {
                let share = (i64::from(free) * i64::from(weight) / fr_total) as Coord;
                sizes[i] = share;
                assigned += share;
            }
        }

        if remainder == FrRemainder::Distribute {
            // Less than one cell was lost per fr track, so one pass is enough
            let mut left = free - assigned;
            for (i, track) in tracks.iter().enumerate() {
                if left == 0 {
                    break;
                }
                if track.is_fr() {
                    sizes[i] += 1;
                    left -= 1;
                }
            }
        }
    }

    let offsets = prefix_offsets(&sizes);
    (offsets, sizes)
}

/// Synthesize tracks on the implicit `axis` from the grid cells of `cont`.
/// Returns `(offsets, sizes)`.
fn calc_implicit(cont: usize, explicit_count: usize, axis: Axis) -> (ScratchBuf, ScratchBuf) {
    let items: Vec<usize> = children(cont)
        .into_iter()
        .filter(|&child| grid::is_grid_cell(child))
        .collect();

    let explicit_count = explicit_count.max(1);
    // +1: the cursor moves to a fresh track right after filling the last one
    let count = items.len().div_ceil(explicit_count) + 1;
    let mut sizes = ScratchBuf::acquire(count);

    let mut along = 0;
    let mut track = 0;
    for item in items {
        let natural = natural_size(item, axis);
        if let Some(size) = sizes.get_mut(track) {
            *size = (*size).max(natural);
        }

        along += 1;
        if along == explicit_count {
            along = 0;
            track += 1;
        }
    }

    let offsets = prefix_offsets(&sizes);
    (offsets, sizes)
}

/// Size an item asks for along `axis`.
fn natural_size(item: usize, axis: Axis) -> Coord {
    match axis {
        Axis::Column => {
            let stretched = grid::get_cell_x(item).is_some_and(|c| c.align == GridAlign::Stretch);
            if stretched { calc_auto_size(item).0 } else { width(item) }
        }
        Axis::Row => {
            let stretched = grid::get_cell_y(item).is_some_and(|c| c.align == GridAlign::Stretch);
            if stretched { calc_auto_size(item).1 } else { height(item) }
        }
    }
}

/// `offset[0] = 0`, `offset[i + 1] = offset[i] + size[i]`.
fn prefix_offsets(sizes: &[Coord]) -> ScratchBuf {
    let mut offsets = ScratchBuf::acquire(sizes.len());
    let mut running: Coord = 0;
    for (offset, &size) in offsets.iter_mut().zip(sizes) {
        *offset = running;
        running = running.saturating_add(size);
    }
    offsets
}

fn extent(offsets: &[Coord], sizes: &[Coord]) -> Coord {
    match (offsets.first(), offsets.last(), sizes.last()) {
        (Some(first), Some(last), Some(size)) => last.saturating_add(*size) - first,
        _ => 0,
    }
}
