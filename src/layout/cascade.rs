//! Refresh cascade.
//!
//! A size change of a grid item changes the free space of any fractional
//! grid inside it, which may resize its items, and so on down the tree.
//! Containers that need a refresh are queued here and drained in FIFO order
//! by the outermost refresh call. Nested refresh calls only enqueue.
//!
//! A container is queued at most once at a time. One drain runs at most
//! `GridConfig::max_cascade_refreshes` refreshes; the rest of the queue is
//! dropped with a warning.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::config::grid_config;

thread_local! {
    static QUEUE: RefCell<VecDeque<usize>> = const { RefCell::new(VecDeque::new()) };
    static DRAINING: Cell<bool> = const { Cell::new(false) };
}

/// Queue `cont` for a refresh unless it is already pending.
pub(crate) fn schedule(cont: usize) {
    QUEUE.with(|queue| {
        let mut queue = queue.borrow_mut();
        if !queue.contains(&cont) {
            queue.push_back(cont);
        }
    });
}

/// Containers waiting for a refresh.
pub fn pending() -> usize {
    QUEUE.with(|queue| queue.borrow().len())
}

/// Run `refresh` on queued containers until the queue is empty.
///
/// Returns true if any refresh reported a change. Inside a running drain
/// this returns false immediately; the outer drain picks up whatever was
/// queued.
pub(crate) fn drain(mut refresh: impl FnMut(usize) -> bool) -> bool {
    if DRAINING.with(Cell::get) {
        return false;
    }
    let _guard = DrainGuard::enter();

    let limit = grid_config().max_cascade_refreshes;
    let mut runs = 0;
    let mut changed = false;

    while let Some(cont) = QUEUE.with(|queue| queue.borrow_mut().pop_front()) {
        if runs >= limit {
            let dropped = pending() + 1;
            tracing::warn!(limit, dropped, "grid refresh cascade limit reached");
            break;
        }
        runs += 1;
        changed |= refresh(cont);
    }

    if runs > 1 {
        tracing::debug!(runs, "grid refresh cascade");
    }
    changed
}

/// Marks a drain as running. Clears the queue on the way out, so a panic
/// inside a refresh doesn't leave stale entries behind.
struct DrainGuard;

impl DrainGuard {
    fn enter() -> Self {
        DRAINING.with(|d| d.set(true));
        Self
    }
}

impl Drop for DrainGuard {
    fn drop(&mut self) {
        let _ = QUEUE.try_with(|queue| queue.borrow_mut().clear());
        let _ = DRAINING.try_with(|d| d.set(false));
    }
}
