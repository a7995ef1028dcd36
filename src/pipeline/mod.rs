//! Reactive Pipeline
//!
//! Connects the object tree to the terminal.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Terminal size → screens → grid refresh → layout generation → layoutDerived
//! ```
//!
//! ## Data Flow
//!
//! 1. **terminal** - Size signals; resizing the terminal resizes every screen
//! 2. **grid refresh** - Runs eagerly on tree changes and bumps the layout
//!    generation when geometry changed
//! 3. **layoutDerived** - Snapshots geometry whenever the generation or the
//!    terminal size changes

pub mod layout_derived;
pub mod terminal;

// Re-exports
pub use layout_derived::{create_layout_derived, layout_generation, layout_generation_signal};
pub use terminal::{
    create_screen, detect_terminal_size, remove_screen, screens, set_terminal_size, terminal_height,
    terminal_width,
};
