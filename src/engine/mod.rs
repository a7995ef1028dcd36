//! Object Engine - Index registry, parallel arrays and geometry side effects.
//!
//! The engine is the object tree the grid layout runs against:
//! - Registry: Index allocation, free-list reuse, tree traversal
//! - Arrays: Parallel arrays for hierarchy, geometry and grid placement
//! - Object: Geometry queries and the side-effecting move/resize primitives
//! - Events: Coordinate-change notifications
//! - Invalidate: Dirty-area log for the renderer
//!
//! # Architecture
//!
//! Objects are NOT structs. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Screen (parent=None, area=0,0..79,23, grid=Some(..))
//! Index 1: Label  (parent=0,    area=0,0..19,0,  cell_x=col 0, cell_y=row 0)
//! Index 2: Button (parent=0,    area=20,0..39,2, cell_x=col 1, cell_y=row 0)
//! ```

mod registry;
mod object;
pub mod arrays;
pub mod events;
pub mod invalidate;

pub use registry::*;
pub use object::*;
