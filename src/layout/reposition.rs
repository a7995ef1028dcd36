//! Item Repositioner
//!
//! Places one grid cell inside the tracks of a [`GridCalc`]: picks its cell,
//! aligns it on each axis and applies the resulting size and position.
//!
//! During a container refresh a [`RepositionHint`] carries the auto-placement
//! cursor from item to item and the container's absolute content origin, so
//! items already in place are not moved again. Single-item repositioning
//! runs without a hint.

use crate::engine::arrays::{geometry, grid};
use crate::engine::{children, coords, height, move_to, resize, width};
use crate::types::{Coord, Dimension, Point};

use super::calc::GridCalc;
use super::cascade;
use super::cell::{GridAlign, GridCell};
use super::definition::{GridDefinition, GridShape};

// =============================================================================
// Hint
// =============================================================================

/// Cursor and origin shared across one container refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositionHint {
    pub next_col: usize,
    pub next_row: usize,
    /// Absolute content origin of the container.
    pub grid_origin: Point,
}

impl RepositionHint {
    pub fn new(grid_origin: Point) -> Self {
        Self { next_col: 0, next_row: 0, grid_origin }
    }

    /// Take the current cell and advance along the columns, wrapping onto
    /// the next row after `columns` cells.
    fn take_row_major(&mut self, columns: usize) -> (usize, usize) {
        let cell = (self.next_col, self.next_row);
        self.next_col += 1;
        if self.next_col >= columns {
            self.next_col = 0;
            self.next_row += 1;
        }
        cell
    }

    /// Take the current cell and advance along the rows, wrapping onto the
    /// next column after `rows` cells.
    fn take_column_major(&mut self, rows: usize) -> (usize, usize) {
        let cell = (self.next_col, self.next_row);
        self.next_row += 1;
        if self.next_row >= rows {
            self.next_row = 0;
            self.next_col += 1;
        }
        cell
    }
}

// =============================================================================
// Placement
// =============================================================================

/// Track range and alignment of an item on both axes.
struct Placement {
    col: GridCell,
    row: GridCell,
}

/// Reposition `item` inside `cont`. Returns true if it moved or resized.
///
/// No-op for children that aren't grid cells and for explicit placements
/// that fall outside the tracks.
pub(crate) fn reposition_item(
    cont: usize,
    item: usize,
    definition: &GridDefinition,
    calc: &GridCalc,
    mut hint: Option<&mut RepositionHint>,
) -> bool {
    let (Some(cell_x), Some(cell_y)) = (grid::get_cell_x(item), grid::get_cell_y(item)) else {
        return false;
    };

    let placement = match definition.shape() {
        GridShape::Explicit { .. } => Placement { col: cell_x, row: cell_y },
        GridShape::ImplicitRows { columns } => {
            let n = columns.len().max(1);
            let (col, row) = match hint.as_deref_mut() {
                Some(hint) => hint.take_row_major(n),
                None => {
                    let ordinal = ordinal(cont, item);
                    (ordinal % n, ordinal / n)
                }
            };
            auto_placement(col, row, cell_x.align, cell_y.align)
        }
        GridShape::ImplicitColumns { rows } => {
            let n = rows.len().max(1);
            let (col, row) = match hint.as_deref_mut() {
                Some(hint) => hint.take_column_major(n),
                None => {
                    let ordinal = ordinal(cont, item);
                    (ordinal / n, ordinal % n)
                }
            };
            auto_placement(col, row, cell_x.align, cell_y.align)
        }
    };

    let col = align_axis(calc.col_offsets(), calc.col_sizes(), placement.col, width(item));
    let row = align_axis(calc.row_offsets(), calc.row_sizes(), placement.row, height(item));
    let (Some((x, w)), Some((y, h))) = (col, row) else {
        tracing::trace!(cont, item, "grid cell outside the tracks");
        return false;
    };

    if placement.col.align == GridAlign::Stretch {
        geometry::set_width_set(item, Dimension::Stretch);
    }
    if placement.row.align == GridAlign::Stretch {
        geometry::set_height_set(item, Dimension::Stretch);
    }

    tracing::trace!(cont, item, x, y, w, h, "place grid item");

    let resized = resize(item, w, h);
    if resized {
        schedule_fr_grids(item);
    }

    let moved = match hint {
        Some(hint) => {
            let current = coords(item);
            let target = Point::new(hint.grid_origin.x + x, hint.grid_origin.y + y);
            if current.x1 == target.x && current.y1 == target.y {
                false
            } else {
                move_to(item, x, y)
            }
        }
        None => move_to(item, x, y),
    };

    resized || moved
}

fn auto_placement(col: usize, row: usize, col_align: GridAlign, row_align: GridAlign) -> Placement {
    let pos = |track: usize| u16::try_from(track).unwrap_or(u16::MAX);
    Placement {
        col: GridCell::at(pos(col), col_align),
        row: GridCell::at(pos(row), row_align),
    }
}

/// Position of `item` among the grid cells of `cont`.
fn ordinal(cont: usize, item: usize) -> usize {
    children(cont)
        .into_iter()
        .filter(|&child| grid::is_grid_cell(child))
        .position(|child| child == item)
        .unwrap_or(0)
}

/// Resolve `(position, size)` along one axis. `None` if the span runs past
/// the last track.
fn align_axis(offsets: &[Coord], sizes: &[Coord], cell: GridCell, natural: Coord) -> Option<(Coord, Coord)> {
    let start = *offsets.get(usize::from(cell.pos))?;
    let last = cell.last();
    let end = offsets.get(last)? + sizes.get(last)?;
    let span = end - start;

    Some(match cell.align {
        GridAlign::Start => (start, natural),
        GridAlign::Stretch => (start, span),
        GridAlign::Center => (start + (span - natural).div_euclid(2), natural),
        GridAlign::End => (end - natural, natural),
    })
}

/// Queue the fractional grids whose free space just changed: the item's own
/// and those of its direct children.
fn schedule_fr_grids(item: usize) {
    let has_fr = |index: usize| {
        grid::get_grid(index).is_some_and(|g| g.has_fr_columns() || g.has_fr_rows())
    };

    if has_fr(item) {
        cascade::schedule(item);
    }
    for child in children(item) {
        if has_fr(child) {
            cascade::schedule(child);
        }
    }
}
