//! Dirty-area log.
//!
//! Every move or resize invalidates the object's area before and after the
//! change. The renderer drains the log once per frame.

use std::cell::RefCell;

use crate::types::Area;

use super::arrays::geometry;
use super::is_allocated;

thread_local! {
    static INVALID_AREAS: RefCell<Vec<Area>> = const { RefCell::new(Vec::new()) };
}

/// Mark the current area of `index` as needing a redraw.
pub fn invalidate(index: usize) {
    if !is_allocated(index) {
        return;
    }
    let area = geometry::get_coords(index);
    if area.is_empty() {
        return;
    }
    invalidate_area(area);
}

/// Mark an arbitrary area as needing a redraw.
pub fn invalidate_area(area: Area) {
    INVALID_AREAS.with(|areas| areas.borrow_mut().push(area));
}

/// Drain the invalidated areas.
pub fn take_invalid_areas() -> Vec<Area> {
    INVALID_AREAS.with(|areas| std::mem::take(&mut *areas.borrow_mut()))
}

pub fn invalid_area_count() -> usize {
    INVALID_AREAS.with(|areas| areas.borrow().len())
}
