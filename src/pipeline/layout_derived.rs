//! Layout Derived - Reactive layout snapshot.
//!
//! Grid refreshes run eagerly when the tree changes. Whenever one moves or
//! resizes something the layout generation is bumped, and the derived
//! re-snapshots geometry when:
//! - The layout generation changes
//! - Terminal size changes
//! - Objects are added/removed

use spark_signals::{Derived, Signal, derived, signal};
use std::cell::RefCell;

use crate::layout::{ComputedLayout, snapshot_layout};
use super::terminal::{terminal_height_signal, terminal_width_signal};

thread_local! {
    static LAYOUT_GENERATION: RefCell<Signal<u64>> = RefCell::new(signal(0));
}

/// Current layout generation.
pub fn layout_generation() -> u64 {
    LAYOUT_GENERATION.with(|g| g.borrow().get())
}

/// Get the generation signal for reactive tracking.
pub fn layout_generation_signal() -> Signal<u64> {
    LAYOUT_GENERATION.with(|g| g.borrow().clone())
}

/// Mark the layout as changed.
pub(crate) fn bump_layout_generation() {
    LAYOUT_GENERATION.with(|g| {
        let g = g.borrow();
        let next = g.get().wrapping_add(1);
        g.set(next);
    });
}

/// Create the layout derived.
///
/// Returns a Derived that snapshots layout and automatically re-runs when
/// any dependency changes (generation, terminal size, allocated objects).
pub fn create_layout_derived() -> Derived<ComputedLayout, impl Fn() -> ComputedLayout> {
    let tw_signal = terminal_width_signal();
    let th_signal = terminal_height_signal();
    let generation = layout_generation_signal();

    derived(move || {
        // Read dependencies
        let _ = tw_signal.get();
        let _ = th_signal.get();
        let _ = generation.get();

        // Reads the allocated index set, so creating objects re-runs too
        snapshot_layout()
    })
}

// =============================================================================
// Tests
// =============================================================================
