//! Grid Layout
//!
//! CSS-grid-like placement of children inside a container.
//!
//! # Architecture
//!
//! A container holds a shared [`GridDefinition`]: column and/or row tracks,
//! each a fixed size or an `fr` weight. Children opt in with a [`GridCell`]
//! per axis (position, span, alignment). A refresh runs in two steps:
//!
//! 1. **calc** resolves every track to an offset and size ([`GridCalc`])
//! 2. **reposition** moves and resizes each grid cell into its tracks
//!
//! An axis without declared tracks is implicit: its tracks are synthesized
//! from the children and auto-placement fills the explicit axis first.
//!
//! Resizing an item can change the free space of fractional grids nested in
//! it; those are refreshed through a worklist instead of recursion.
//!
//! # Example
//!
//! ```ignore
//! use spark_grid::engine::{create_object, set_grid_cell, set_size};
//! use spark_grid::layout::{fr, set_grid, GridAlign, GridCell, GridDefinition, TrackList};
//! use spark_grid::types::Dimension;
//!
//! let cont = create_object(None);
//! set_size(cont, Dimension::Cells(80), Dimension::Cells(24));
//!
//! let grid = GridDefinition::columns(TrackList::new([fr(1), fr(2)]))?.into_ref();
//! set_grid(cont, Some(grid));
//!
//! let item = create_object(Some(cont));
//! let stretch = GridCell::at(0, GridAlign::Stretch);
//! set_grid_cell(item, Some(stretch), Some(stretch));
//! ```

pub mod calc;
pub mod cascade;
pub mod cell;
pub mod config;
pub mod definition;
mod refresh;
mod reposition;
pub mod scratch;
pub mod track;
mod types;

pub use calc::{GridCalc, calculate};
pub use cell::{CELL_MAX, GridAlign, GridCell, NOT_A_CELL};
pub use config::{FrRemainder, GridConfig, grid_config, reset_grid_config, set_grid_config};
pub use definition::{GridDefinition, GridRef, GridShape};
pub use refresh::{
    full_refresh, get_grid, has_fr_columns, has_fr_rows, item_refresh_position, report_grid_change,
    report_grid_change_from, set_grid,
};
pub use reposition::RepositionHint;
pub use scratch::{ScratchBuf, scratch_in_use};
pub use track::{FR_BASE, FR_MAX, TrackList, TrackSize, fr, is_fr_raw};
pub use types::{ComputedLayout, snapshot_layout};
