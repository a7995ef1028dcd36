//! Refresh Orchestrator
//!
//! Entry points that tie the calculator and repositioner to the object tree:
//!
//! - [`full_refresh`]: relayout every grid cell of a container
//! - [`item_refresh_position`]: re-place a single item in its parent grid
//! - [`report_grid_change`]: relayout every container using a definition
//!
//! All three are silent no-ops for objects without a grid. Refreshes that
//! cascade into nested fractional grids are drained iteratively (see
//! `cascade`), and the layout generation is bumped once per call when any
//! geometry changed.

use std::rc::Rc;

use crate::engine::arrays::grid;
use crate::engine::{
    children, content_origin, coords, get_height_set, get_parent, get_width_set, is_allocated,
    refresh_self_size, walk_tree,
};
use crate::pipeline::layout_derived::bump_layout_generation;
use crate::pipeline::terminal::screens;

use super::calc::calculate;
use super::cascade;
use super::definition::GridRef;
use super::reposition::{RepositionHint, reposition_item};

// =============================================================================
// Grid Assignment
// =============================================================================

/// Attach a definition to `cont` (or detach with `None`) and relayout it.
///
/// Children keep their current places when the grid is removed.
pub fn set_grid(cont: usize, definition: Option<GridRef>) {
    if !is_allocated(cont) {
        return;
    }
    tracing::debug!(cont, attached = definition.is_some(), "set grid");
    grid::set_grid(cont, definition);
    full_refresh(cont);
}

pub fn get_grid(cont: usize) -> Option<GridRef> {
    grid::get_grid(cont)
}

/// True if the grid of `cont` has a fractional column.
pub fn has_fr_columns(cont: usize) -> bool {
    grid::get_grid(cont).is_some_and(|g| g.has_fr_columns())
}

/// True if the grid of `cont` has a fractional row.
pub fn has_fr_rows(cont: usize) -> bool {
    grid::get_grid(cont).is_some_and(|g| g.has_fr_rows())
}

// =============================================================================
// Refresh
// =============================================================================

/// Relayout every grid cell of `cont`, then any fractional grid whose space
/// changed as a result.
pub fn full_refresh(cont: usize) {
    if !grid::has_grid(cont) {
        return;
    }
    cascade::schedule(cont);
    if cascade::drain(refresh_container) {
        bump_layout_generation();
    }
}

/// Re-place `item` in its parent's grid without touching its siblings.
pub fn item_refresh_position(item: usize) {
    let Some(cont) = get_parent(item) else {
        return;
    };
    let Some(definition) = grid::get_grid(cont) else {
        return;
    };
    if !grid::is_grid_cell(item) {
        return;
    }

    let changed = match calculate(cont) {
        Some(calc) => reposition_item(cont, item, &definition, &calc, None),
        None => false,
    };
    let cascaded = cascade::drain(refresh_container);

    if changed || cascaded {
        bump_layout_generation();
    }
}

/// Relayout one container. Returns true if anything moved or resized,
/// the container included.
pub(crate) fn refresh_container(cont: usize) -> bool {
    let Some(definition) = grid::get_grid(cont) else {
        return false;
    };

    let mut changed = false;
    if let Some(calc) = calculate(cont) {
        tracing::debug!(
            cont,
            cols = calc.col_num(),
            rows = calc.row_num(),
            grid_w = calc.grid_w(),
            grid_h = calc.grid_h(),
            "grid refresh"
        );

        let mut hint = RepositionHint::new(content_origin(cont));
        for child in children(cont) {
            changed |= reposition_item(cont, child, &definition, &calc, Some(&mut hint));
        }
    }

    // Implicit tracks feed the content size of an auto sized container
    if get_width_set(cont).is_auto() || get_height_set(cont).is_auto() {
        let before = coords(cont);
        refresh_self_size(cont);
        changed |= coords(cont) != before;
    }

    changed
}

// =============================================================================
// Change Propagation
// =============================================================================

/// Relayout every container on every screen that uses `definition`, or every
/// grid container when `None`.
///
/// Call after changing something every grid depends on, such as
/// `GridConfig`.
pub fn report_grid_change(definition: Option<&GridRef>) {
    report_grid_change_from(&screens(), definition);
}

/// [`report_grid_change`] over the trees under `roots`.
pub fn report_grid_change_from(roots: &[usize], definition: Option<&GridRef>) {
    let mut targets = Vec::new();
    walk_tree(roots, |index| {
        if let Some(current) = grid::get_grid(index) {
            if definition.is_none_or(|d| Rc::ptr_eq(d, &current)) {
                targets.push(index);
            }
        }
    });

    tracing::debug!(containers = targets.len(), all = definition.is_none(), "grid change");

    for cont in targets {
        cascade::schedule(cont);
    }
    if cascade::drain(refresh_container) {
        bump_layout_generation();
    }
}
