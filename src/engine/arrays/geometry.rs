//! Geometry Arrays
//!
//! Where objects are and how their size is decided:
//! - coords: Absolute area (inclusive corners)
//! - widthSet/heightSet: Size mode per axis
//! - padding: Inner spacing around the content area
//! - scroll: Scroll offset of the content
//! - contentSize: Intrinsic content size used by auto sizing
//!
//! Raw storage only. Side effects (invalidation, notifications) live in
//! `engine::object`.

use std::cell::RefCell;

use crate::types::{Area, Coord, Dimension, Padding, Point};

use super::{Column, clear, grow, read, reset as reset_column, update, write};

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    static COORDS: Column<Area> = const { RefCell::new(Vec::new()) };
    static WIDTH_SET: Column<Dimension> = const { RefCell::new(Vec::new()) };
    static HEIGHT_SET: Column<Dimension> = const { RefCell::new(Vec::new()) };
    static PADDING: Column<Padding> = const { RefCell::new(Vec::new()) };
    static SCROLL: Column<Point> = const { RefCell::new(Vec::new()) };
    static CONTENT_SIZE: Column<Option<(Coord, Coord)>> = const { RefCell::new(Vec::new()) };
}

// =============================================================================
// Capacity Management
// =============================================================================

pub fn ensure_capacity(index: usize) {
    grow(&COORDS, index);
    grow(&WIDTH_SET, index);
    grow(&HEIGHT_SET, index);
    grow(&PADDING, index);
    grow(&SCROLL, index);
    grow(&CONTENT_SIZE, index);
}

pub fn clear_at_index(index: usize) {
    clear(&COORDS, index);
    clear(&WIDTH_SET, index);
    clear(&HEIGHT_SET, index);
    clear(&PADDING, index);
    clear(&SCROLL, index);
    clear(&CONTENT_SIZE, index);
}

pub fn reset() {
    reset_column(&COORDS);
    reset_column(&WIDTH_SET);
    reset_column(&HEIGHT_SET);
    reset_column(&PADDING);
    reset_column(&SCROLL);
    reset_column(&CONTENT_SIZE);
}

// =============================================================================
// Coords
// =============================================================================

pub fn get_coords(index: usize) -> Area {
    read(&COORDS, index)
}

pub fn set_coords(index: usize, area: Area) {
    write(&COORDS, index, area);
}

/// Mutate the area in place.
pub fn update_coords(index: usize, f: impl FnOnce(&mut Area)) {
    update(&COORDS, index, f);
}

// =============================================================================
// Size Modes
// =============================================================================

pub fn get_width_set(index: usize) -> Dimension {
    read(&WIDTH_SET, index)
}

pub fn set_width_set(index: usize, value: Dimension) {
    write(&WIDTH_SET, index, value);
}

pub fn get_height_set(index: usize) -> Dimension {
    read(&HEIGHT_SET, index)
}

pub fn set_height_set(index: usize, value: Dimension) {
    write(&HEIGHT_SET, index, value);
}

// =============================================================================
// Padding / Scroll / Content Size
// =============================================================================

pub fn get_padding(index: usize) -> Padding {
    read(&PADDING, index)
}

pub fn set_padding(index: usize, padding: Padding) {
    write(&PADDING, index, padding);
}

pub fn get_scroll(index: usize) -> Point {
    read(&SCROLL, index)
}

pub fn set_scroll(index: usize, scroll: Point) {
    write(&SCROLL, index, scroll);
}

pub fn get_content_size(index: usize) -> Option<(Coord, Coord)> {
    read(&CONTENT_SIZE, index)
}

pub fn set_content_size(index: usize, size: Option<(Coord, Coord)>) {
    write(&CONTENT_SIZE, index, size);
}
