//! Core Arrays
//!
//! The object hierarchy:
//! - parentIndex: Parent in hierarchy
//! - children: Ordered child list, oldest first
//!
//! Child order is the canonical back-to-front order the grid walks when
//! auto-placing items.

use std::cell::RefCell;

use super::{Column, clear, grow, read, reset as reset_column, update};

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Parent object index (None for roots).
    static PARENT_INDEX: Column<Option<usize>> = const { RefCell::new(Vec::new()) };

    /// Children in creation order.
    static CHILDREN: Column<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    grow(&PARENT_INDEX, index);
    grow(&CHILDREN, index);
}

/// Clear values at index (called when releasing).
pub fn clear_at_index(index: usize) {
    clear(&PARENT_INDEX, index);
    clear(&CHILDREN, index);
}

/// Reset all arrays.
pub fn reset() {
    reset_column(&PARENT_INDEX);
    reset_column(&CHILDREN);
}

// =============================================================================
// Hierarchy
// =============================================================================

/// Get parent index at index.
pub fn get_parent_index(index: usize) -> Option<usize> {
    read(&PARENT_INDEX, index)
}

/// Children of `index`, oldest first (back-to-front).
pub fn children(index: usize) -> Vec<usize> {
    read(&CHILDREN, index)
}

/// Number of direct children.
pub fn child_count(index: usize) -> usize {
    CHILDREN.with(|arr| arr.borrow().get(index).map_or(0, Vec::len))
}

/// Append `child` as the newest child of `parent`.
///
/// Detaches `child` from its previous parent first.
pub fn attach(child: usize, parent: usize) {
    detach(child);
    update(&PARENT_INDEX, child, |slot| *slot = Some(parent));
    update(&CHILDREN, parent, |list| list.push(child));
}

/// Remove `child` from its parent's child list.
pub fn detach(child: usize) {
    let Some(parent) = get_parent_index(child) else { return };
    update(&CHILDREN, parent, |list| list.retain(|&c| c != child));
    update(&PARENT_INDEX, child, |slot| *slot = None);
}
