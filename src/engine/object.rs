//! Object API - Tree building, geometry queries and geometry side effects.
//!
//! Positions passed in and returned by this module are relative to the
//! parent's content origin (its top-left corner plus padding, minus scroll).
//! The arrays store absolute areas.
//!
//! `move_to` and `resize` are the only functions that change an object's
//! area. Both are no-ops when nothing changes; otherwise they invalidate the
//! old and new area and emit a coordinate-change notification.

use crate::layout::{self, GridCell};
use crate::types::{Area, ChangeFlags, Coord, CoordChange, Dimension, Padding, Point};

use super::arrays::{core, geometry, grid};
use super::events::emit_coord_change;
use super::invalidate::invalidate;
use super::{allocate_index, is_allocated, release_index, walk_tree};

// =============================================================================
// Creation
// =============================================================================

/// Create an object, optionally as the newest child of `parent`.
///
/// New objects are zero sized with fixed (`Cells(0)`) size modes and sit at
/// the parent's content origin.
pub fn create_object(parent: Option<usize>) -> usize {
    let index = allocate_index();
    geometry::set_width_set(index, Dimension::Cells(0));
    geometry::set_height_set(index, Dimension::Cells(0));

    if let Some(parent) = parent.filter(|&p| is_allocated(p)) {
        core::attach(index, parent);
        let origin = content_origin(parent);
        geometry::set_coords(index, Area::from_size(origin.x, origin.y, 0, 0));
    }

    index
}

/// Delete an object and its subtree.
///
/// A grid parent is refreshed afterwards, since auto-placed siblings shift
/// into the freed cell.
pub fn delete_object(index: usize) {
    if !is_allocated(index) {
        return;
    }
    invalidate(index);

    let parent = get_parent(index);
    release_index(index);

    if let Some(parent) = parent {
        if grid::has_grid(parent) {
            layout::full_refresh(parent);
        }
    }
}

// =============================================================================
// Hierarchy
// =============================================================================

pub fn get_parent(index: usize) -> Option<usize> {
    core::get_parent_index(index)
}

/// Children oldest first (back-to-front).
pub fn children(index: usize) -> Vec<usize> {
    core::children(index)
}

pub fn child_count(index: usize) -> usize {
    core::child_count(index)
}

// =============================================================================
// Geometry Queries
// =============================================================================

/// Absolute area.
pub fn coords(index: usize) -> Area {
    geometry::get_coords(index)
}

pub fn width(index: usize) -> Coord {
    coords(index).width()
}

pub fn height(index: usize) -> Coord {
    coords(index).height()
}

/// X relative to the parent's content origin.
pub fn get_x(index: usize) -> Coord {
    let origin = parent_origin(index);
    coords(index).x1 - origin.x
}

/// Y relative to the parent's content origin.
pub fn get_y(index: usize) -> Coord {
    let origin = parent_origin(index);
    coords(index).y1 - origin.y
}

/// Width available to children (width minus horizontal padding).
pub fn content_width(index: usize) -> Coord {
    width(index) - geometry::get_padding(index).horizontal()
}

/// Height available to children (height minus vertical padding).
pub fn content_height(index: usize) -> Coord {
    height(index) - geometry::get_padding(index).vertical()
}

/// Absolute position children are laid out from: top-left corner plus
/// padding, minus the scroll offset.
pub fn content_origin(index: usize) -> Point {
    let area = coords(index);
    let pad = geometry::get_padding(index);
    let scroll = geometry::get_scroll(index);
    Point::new(area.x1 + pad.left - scroll.x, area.y1 + pad.top - scroll.y)
}

fn parent_origin(index: usize) -> Point {
    get_parent(index).map(content_origin).unwrap_or_default()
}

pub fn get_width_set(index: usize) -> Dimension {
    geometry::get_width_set(index)
}

pub fn get_height_set(index: usize) -> Dimension {
    geometry::get_height_set(index)
}

pub fn get_padding(index: usize) -> Padding {
    geometry::get_padding(index)
}

pub fn get_scroll(index: usize) -> Point {
    geometry::get_scroll(index)
}

/// Natural size of an object: its intrinsic content size or the bounding
/// box of its children, whichever is larger, plus padding.
pub fn calc_auto_size(index: usize) -> (Coord, Coord) {
    let origin = content_origin(index);
    let (mut w, mut h) = geometry::get_content_size(index).unwrap_or((0, 0));

    for child in children(index) {
        let area = coords(child);
        w = w.max(area.x2 - origin.x + 1);
        h = h.max(area.y2 - origin.y + 1);
    }

    let pad = geometry::get_padding(index);
    (w.max(0) + pad.horizontal(), h.max(0) + pad.vertical())
}

// =============================================================================
// Geometry Updates
// =============================================================================

/// Move an object to `(x, y)` relative to its parent's content origin.
pub fn set_pos(index: usize, x: Coord, y: Coord) {
    move_to(index, x, y);
}

/// Set both size modes and apply the resolved size.
///
/// `Auto` resolves through [`calc_auto_size`], `Stretch` keeps the current
/// extent (the parent layout owns it). When the size changes, the object's
/// own fractional grid is refreshed and, if it is a grid cell, its place in
/// the parent grid is recomputed. A parent grid with an implicit axis is
/// refreshed whole, since the item's size feeds its track sizes.
pub fn set_size(index: usize, w: Dimension, h: Dimension) {
    if !is_allocated(index) {
        return;
    }
    geometry::set_width_set(index, w);
    geometry::set_height_set(index, h);

    let auto = if w.is_auto() || h.is_auto() {
        calc_auto_size(index)
    } else {
        (0, 0)
    };
    let area = coords(index);
    let new_w = resolve(w, area.width(), auto.0);
    let new_h = resolve(h, area.height(), auto.1);

    if !resize(index, new_w, new_h) {
        return;
    }

    if layout::has_fr_columns(index) || layout::has_fr_rows(index) {
        layout::full_refresh(index);
    }
    if let Some(parent) = get_parent(index).filter(|_| grid::is_grid_cell(index)) {
        match grid::get_grid(parent) {
            // Implicit tracks are sized by every item, so siblings shift too
            Some(definition) if definition.has_implicit_axis() => layout::full_refresh(parent),
            Some(_) => layout::item_refresh_position(index),
            None => {}
        }
    }
}

fn resolve(set: Dimension, current: Coord, auto: Coord) -> Coord {
    match set {
        Dimension::Cells(n) => n.max(0),
        Dimension::Auto => auto,
        Dimension::Stretch => current,
    }
}

pub fn set_width(index: usize, w: Dimension) {
    set_size(index, w, get_height_set(index));
}

pub fn set_height(index: usize, h: Dimension) {
    set_size(index, get_width_set(index), h);
}

/// Re-resolve `Auto` axes against the current content.
pub fn refresh_self_size(index: usize) {
    set_size(index, get_width_set(index), get_height_set(index));
}

/// Change the padding. A grid container relays its children out.
pub fn set_padding(index: usize, padding: Padding) {
    if geometry::get_padding(index) == padding {
        return;
    }
    geometry::set_padding(index, padding);

    if grid::has_grid(index) {
        layout::full_refresh(index);
    } else if get_width_set(index).is_auto() || get_height_set(index).is_auto() {
        refresh_self_size(index);
    }
}

/// Scroll the content so `(x, y)` of it is at the content origin.
///
/// Children move by the scroll delta.
pub fn set_scroll(index: usize, x: Coord, y: Coord) {
    let old = geometry::get_scroll(index);
    if old == Point::new(x, y) {
        return;
    }
    geometry::set_scroll(index, Point::new(x, y));

    let (dx, dy) = (old.x - x, old.y - y);
    for child in children(index) {
        shift_subtree(child, dx, dy, true);
    }
}

/// Set the intrinsic content size used by auto sizing (`None` clears it).
pub fn set_content_size(index: usize, size: Option<(Coord, Coord)>) {
    geometry::set_content_size(index, size);
    if get_width_set(index).is_auto() || get_height_set(index).is_auto() {
        refresh_self_size(index);
    }
}

/// Assign or clear the grid placement of `index` on both axes.
///
/// Passing `None` on either axis takes the object out of grid layout.
/// The parent grid is refreshed, since auto-placement and implicit track
/// sizes depend on every grid cell.
pub fn set_grid_cell(index: usize, x: Option<GridCell>, y: Option<GridCell>) {
    grid::set_cell(index, x, y);

    if let Some(parent) = get_parent(index) {
        if grid::has_grid(parent) {
            layout::full_refresh(parent);
        }
    }
}

pub fn get_grid_cell(index: usize) -> (Option<GridCell>, Option<GridCell>) {
    (grid::get_cell_x(index), grid::get_cell_y(index))
}

pub fn is_grid_cell(index: usize) -> bool {
    grid::is_grid_cell(index)
}

// =============================================================================
// Primitives
// =============================================================================

/// Move an object (and its subtree) to `(x, y)` relative to the parent's
/// content origin. Returns true if it moved.
pub fn move_to(index: usize, x: Coord, y: Coord) -> bool {
    if !is_allocated(index) {
        return false;
    }
    let origin = parent_origin(index);
    let old = coords(index);
    let dx = origin.x + x - old.x1;
    let dy = origin.y + y - old.y1;
    if dx == 0 && dy == 0 {
        return false;
    }

    tracing::trace!(index, dx, dy, "move");

    invalidate(index);
    shift_subtree(index, dx, dy, false);
    invalidate(index);

    emit_coord_change(index, CoordChange {
        old,
        new: coords(index),
        flags: ChangeFlags::POSITION,
    });
    true
}

/// Set the size of an object keeping its top-left corner.
/// Returns true if the size changed.
pub fn resize(index: usize, w: Coord, h: Coord) -> bool {
    if !is_allocated(index) {
        return false;
    }
    let old = coords(index);
    if old.width() == w && old.height() == h {
        return false;
    }

    tracing::trace!(index, w, h, "resize");

    invalidate(index);
    geometry::update_coords(index, |area| {
        area.set_width(w);
        area.set_height(h);
    });
    invalidate(index);

    emit_coord_change(index, CoordChange {
        old,
        new: coords(index),
        flags: ChangeFlags::SIZE,
    });
    true
}

/// Translate `index` and every descendant. With `notify`, the root of the
/// shifted subtree is invalidated and notified (used by scrolling).
fn shift_subtree(index: usize, dx: Coord, dy: Coord, notify: bool) {
    let old = coords(index);
    if notify {
        invalidate(index);
    }

    walk_tree(&[index], |i| {
        geometry::update_coords(i, |area| area.translate(dx, dy));
    });

    if notify {
        invalidate(index);
        emit_coord_change(index, CoordChange {
            old,
            new: coords(index),
            flags: ChangeFlags::POSITION,
        });
    }
}
