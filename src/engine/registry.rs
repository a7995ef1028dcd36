//! Object Registry - Index allocation for parallel arrays.
//!
//! Manages the lifecycle of object indices:
//! - Free index pool for O(1) reuse
//! - ReactiveSet for allocatedIndices (deriveds react to add/remove)
//! - Depth-first traversal over explicit roots

use std::cell::RefCell;
use spark_signals::ReactiveSet;

use super::arrays;
use super::events;
use super::invalidate;

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Set of currently allocated indices (for iteration).
    /// Using ReactiveSet so deriveds that iterate over this set
    /// automatically react when objects are added or removed.
    static ALLOCATED_INDICES: ReactiveSet<usize> = ReactiveSet::new();

    /// Pool of freed indices for reuse.
    static FREE_INDICES: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Next index to allocate if pool is empty.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };
}

// =============================================================================
// Index Allocation
// =============================================================================

/// Allocate an index for a new object.
///
/// The index is not attached to any parent yet; see `create_object`.
pub fn allocate_index() -> usize {
    // Reuse free index or allocate new
    let index = FREE_INDICES.with(|free| {
        let mut free = free.borrow_mut();
        if let Some(index) = free.pop() {
            index
        } else {
            NEXT_INDEX.with(|next| {
                let mut next = next.borrow_mut();
                let index = *next;
                *next += 1;
                index
            })
        }
    });

    ALLOCATED_INDICES.with(|set| {
        set.insert(index);
    });

    // Ensure arrays have capacity for this index
    arrays::ensure_all_capacity(index);

    index
}

/// Release an index back to the pool.
///
/// Also recursively releases all children!
pub fn release_index(index: usize) {
    if !is_allocated(index) {
        return;
    }

    // Children first, collected up front since releasing edits the child lists
    let children = arrays::core::children(index);
    for child in children {
        release_index(child);
    }

    arrays::core::detach(index);
    events::clear_callbacks(index);

    ALLOCATED_INDICES.with(|set| {
        set.remove(&index);
    });

    // Clear all array values at this index
    arrays::clear_all_at_index(index);

    // Return to pool for reuse
    FREE_INDICES.with(|free| {
        free.borrow_mut().push(index);
    });

    // AUTO-CLEANUP: When all objects are destroyed, reset all arrays to free memory
    let is_empty = ALLOCATED_INDICES.with(|set| set.is_empty());
    if is_empty {
        arrays::reset_all_arrays();
        FREE_INDICES.with(|free| {
            free.borrow_mut().clear();
        });
        NEXT_INDEX.with(|next| {
            *next.borrow_mut() = 0;
        });
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Get all currently allocated indices.
///
/// Note: This creates a reactive dependency when called from a derived/effect.
pub fn get_allocated_indices() -> Vec<usize> {
    ALLOCATED_INDICES.with(|set| set.iter())
}

/// Check if an index is currently allocated.
pub fn is_allocated(index: usize) -> bool {
    ALLOCATED_INDICES.with(|set| set.contains(&index))
}

/// Get the current capacity (highest index that would be allocated next).
pub fn get_capacity() -> usize {
    NEXT_INDEX.with(|next| *next.borrow())
}

/// Get the count of currently allocated objects.
pub fn get_allocated_count() -> usize {
    ALLOCATED_INDICES.with(|set| set.len())
}

// =============================================================================
// Traversal
// =============================================================================

/// Visit every object under `roots` depth-first, parents before children.
///
/// Child lists are snapshotted per node, so `visit` may move or resize
/// objects. Objects created by `visit` under an already visited node are
/// not visited.
pub fn walk_tree(roots: &[usize], mut visit: impl FnMut(usize)) {
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();

    while let Some(index) = stack.pop() {
        if !is_allocated(index) {
            continue;
        }
        visit(index);

        let children = arrays::core::children(index);
        stack.extend(children.into_iter().rev());
    }
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all registry state (for testing).
pub fn reset_registry() {
    ALLOCATED_INDICES.with(|set| set.clear());
    FREE_INDICES.with(|free| free.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    events::reset_events();
    invalidate::take_invalid_areas();
    arrays::reset_all_arrays();
    crate::pipeline::terminal::clear_screens();
}
