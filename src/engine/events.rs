//! Coordinate-change notifications.
//!
//! When the layout moves or resizes an object it notifies the callbacks
//! registered for that object, so dependent state (custom drawing, the
//! object's own content) can react.
//!
//! # Example
//!
//! ```ignore
//! use spark_grid::engine::events::on_coord_change;
//!
//! let cleanup = on_coord_change(button, |change| {
//!     println!("moved from {:?} to {:?}", change.old, change.new);
//! });
//! cleanup();
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::types::CoordChange;

type CoordCallback = Rc<dyn Fn(&CoordChange)>;

thread_local! {
    static COORD_CALLBACKS: RefCell<HashMap<usize, Vec<(usize, CoordCallback)>>> =
        RefCell::new(HashMap::new());

    static NEXT_CALLBACK_ID: Cell<usize> = const { Cell::new(0) };
}

/// Register a callback fired after `index` moves or changes size.
/// Returns cleanup function to unregister.
pub fn on_coord_change(index: usize, callback: impl Fn(&CoordChange) + 'static) -> impl FnOnce() {
    let id = NEXT_CALLBACK_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });

    COORD_CALLBACKS.with(|reg| {
        reg.borrow_mut()
            .entry(index)
            .or_default()
            .push((id, Rc::new(callback)));
    });

    move || {
        COORD_CALLBACKS.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(list) = reg.get_mut(&index) {
                list.retain(|(cb_id, _)| *cb_id != id);
                if list.is_empty() {
                    reg.remove(&index);
                }
            }
        });
    }
}

/// Notify every callback registered for `index`.
///
/// Callbacks run without the registry borrowed, so they may register or
/// remove callbacks and touch the object tree.
pub fn emit_coord_change(index: usize, change: CoordChange) {
    let callbacks: Vec<CoordCallback> = COORD_CALLBACKS.with(|reg| {
        reg.borrow()
            .get(&index)
            .map(|list| list.iter().map(|(_, cb)| cb.clone()).collect())
            .unwrap_or_default()
    });

    for callback in callbacks {
        callback(&change);
    }
}

/// Drop all callbacks of a released object.
pub(crate) fn clear_callbacks(index: usize) {
    COORD_CALLBACKS.with(|reg| {
        reg.borrow_mut().remove(&index);
    });
}

pub fn reset_events() {
    COORD_CALLBACKS.with(|reg| reg.borrow_mut().clear());
}
