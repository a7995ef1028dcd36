//! Grid Arrays
//!
//! - grid: Grid definition of a container (shared via `Rc`)
//! - cellX/cellY: Cell placement of a child on each axis
//!
//! A child is a grid cell only when both axes hold a placement.

use std::cell::RefCell;

use crate::layout::{GridCell, GridRef};

use super::{Column, clear, grow, read, reset as reset_column, write};

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    static GRID: Column<Option<GridRef>> = const { RefCell::new(Vec::new()) };
    static CELL_X: Column<Option<GridCell>> = const { RefCell::new(Vec::new()) };
    static CELL_Y: Column<Option<GridCell>> = const { RefCell::new(Vec::new()) };
}

// =============================================================================
// Capacity Management
// =============================================================================

pub fn ensure_capacity(index: usize) {
    grow(&GRID, index);
    grow(&CELL_X, index);
    grow(&CELL_Y, index);
}

pub fn clear_at_index(index: usize) {
    clear(&GRID, index);
    clear(&CELL_X, index);
    clear(&CELL_Y, index);
}

pub fn reset() {
    reset_column(&GRID);
    reset_column(&CELL_X);
    reset_column(&CELL_Y);
}

// =============================================================================
// Grid Definition
// =============================================================================

pub fn get_grid(index: usize) -> Option<GridRef> {
    read(&GRID, index)
}

pub fn set_grid(index: usize, grid: Option<GridRef>) {
    write(&GRID, index, grid);
}

pub fn has_grid(index: usize) -> bool {
    GRID.with(|arr| arr.borrow().get(index).is_some_and(Option::is_some))
}

// =============================================================================
// Cell Placement
// =============================================================================

pub fn get_cell_x(index: usize) -> Option<GridCell> {
    read(&CELL_X, index)
}

pub fn get_cell_y(index: usize) -> Option<GridCell> {
    read(&CELL_Y, index)
}

pub fn set_cell(index: usize, x: Option<GridCell>, y: Option<GridCell>) {
    write(&CELL_X, index, x);
    write(&CELL_Y, index, y);
}

/// Both axes carry a placement.
pub fn is_grid_cell(index: usize) -> bool {
    get_cell_x(index).is_some() && get_cell_y(index).is_some()
}
