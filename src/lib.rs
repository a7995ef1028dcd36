//! # spark-grid
//!
//! Grid layout engine for terminal UI object trees.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! the reactive layout snapshot.
//!
//! ## Architecture
//!
//! Objects are indices into columnar arrays rather than structs. A container
//! with a grid definition lays out its grid-cell children in tracks:
//! ```text
//! GridDefinition + GridCell → calc (tracks) → reposition (items) → layoutDerived
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Area, Dimension, Padding, ChangeFlags)
//! - [`engine`] - Object registry, parallel arrays, geometry side effects
//! - [`layout`] - Track calculation, item placement, refresh orchestration
//! - [`pipeline`] - Terminal screens and the reactive layout snapshot
//! - [`error`] - Grid definition errors

pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::GridError;

pub use engine::{
    create_object, delete_object, get_allocated_indices, is_allocated, reset_registry,
    set_grid_cell, set_padding, set_pos, set_scroll, set_size, walk_tree,
};

pub use layout::{
    ComputedLayout, FrRemainder, GridAlign, GridCalc, GridCell, GridConfig, GridDefinition,
    GridRef, GridShape, TrackList, TrackSize, calculate, fr, full_refresh, get_grid,
    item_refresh_position, report_grid_change, set_grid, snapshot_layout,
};

pub use pipeline::{
    create_layout_derived, create_screen, screens, set_terminal_size, terminal_height,
    terminal_width,
};
