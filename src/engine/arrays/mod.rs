//! Parallel Arrays
//!
//! All object state lives in these parallel arrays.
//! Each array index corresponds to one object.
//!
//! Arrays store plain values in `RefCell<Vec<T>>` columns. Reads past the end
//! return the column default, writes grow the column on demand.
//!
//! # Array Categories
//!
//! - **core**: Parent index, ordered child lists
//! - **geometry**: Area, size modes, padding, scroll, intrinsic content size
//! - **grid**: Grid definitions and per-axis cell placement

pub mod core;
pub mod geometry;
pub mod grid;

use std::cell::RefCell;
use std::thread::LocalKey;

use self::core as core_arrays;
use self::geometry as geometry_arrays;
use self::grid as grid_arrays;

/// One parallel array.
pub(crate) type Column<T> = RefCell<Vec<T>>;

/// Read the value at `index`, or the default past the end.
pub(crate) fn read<T: Clone + Default>(column: &'static LocalKey<Column<T>>, index: usize) -> T {
    column.with(|arr| arr.borrow().get(index).cloned().unwrap_or_default())
}

/// Write the value at `index`, growing the column if needed.
pub(crate) fn write<T: Default>(column: &'static LocalKey<Column<T>>, index: usize, value: T) {
    column.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize_with(index + 1, T::default);
        }
        arr[index] = value;
    });
}

/// Update the value at `index` in place, growing the column if needed.
pub(crate) fn update<T: Default, R>(
    column: &'static LocalKey<Column<T>>,
    index: usize,
    f: impl FnOnce(&mut T) -> R,
) -> R {
    column.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize_with(index + 1, T::default);
        }
        f(&mut arr[index])
    })
}

pub(crate) fn grow<T: Default>(column: &'static LocalKey<Column<T>>, index: usize) {
    column.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize_with(index + 1, T::default);
        }
    });
}

pub(crate) fn clear<T: Default>(column: &'static LocalKey<Column<T>>, index: usize) {
    column.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = T::default();
        }
    });
}

pub(crate) fn reset<T>(column: &'static LocalKey<Column<T>>) {
    column.with(|arr| arr.borrow_mut().clear());
}

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    geometry_arrays::ensure_capacity(index);
    grid_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    geometry_arrays::clear_at_index(index);
    grid_arrays::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
///
/// Called automatically when all objects are destroyed.
pub fn reset_all_arrays() {
    core_arrays::reset();
    geometry_arrays::reset();
    grid_arrays::reset();
}
