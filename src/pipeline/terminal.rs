//! Terminal state and screens.
//!
//! Terminal dimensions are root signals of the pipeline. Screens are the
//! root objects of the tree: each one is sized to the terminal, and grid
//! change propagation walks every screen.

use spark_signals::{Signal, signal};
use std::cell::RefCell;

use crate::engine::{create_object, is_allocated, set_size};
use crate::types::{Coord, Dimension};

// =============================================================================
// Terminal Size Signals
// =============================================================================

thread_local! {
    static TERMINAL_WIDTH: RefCell<Signal<u16>> = RefCell::new(signal(80));
    static TERMINAL_HEIGHT: RefCell<Signal<u16>> = RefCell::new(signal(24));
    static SCREENS: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Get the current terminal width.
pub fn terminal_width() -> u16 {
    TERMINAL_WIDTH.with(|w| w.borrow().get())
}

/// Get the current terminal height.
pub fn terminal_height() -> u16 {
    TERMINAL_HEIGHT.with(|h| h.borrow().get())
}

/// Set the terminal size (called on resize events).
///
/// Every screen is resized, which relays out screens that have a grid.
pub fn set_terminal_size(width: u16, height: u16) {
    TERMINAL_WIDTH.with(|w| w.borrow().set(width));
    TERMINAL_HEIGHT.with(|h| h.borrow().set(height));

    for screen in screens() {
        set_size(screen, cells(width), cells(height));
    }
}

/// Get the terminal width signal for reactive tracking.
pub fn terminal_width_signal() -> Signal<u16> {
    TERMINAL_WIDTH.with(|w| w.borrow().clone())
}

/// Get the terminal height signal for reactive tracking.
pub fn terminal_height_signal() -> Signal<u16> {
    TERMINAL_HEIGHT.with(|h| h.borrow().clone())
}

fn cells(n: u16) -> Dimension {
    Dimension::Cells(Coord::from(n))
}

// =============================================================================
// Screens
// =============================================================================

/// Create a root object covering the terminal.
pub fn create_screen() -> usize {
    let screen = create_object(None);
    set_size(screen, cells(terminal_width()), cells(terminal_height()));
    SCREENS.with(|s| s.borrow_mut().push(screen));
    tracing::debug!(screen, "create screen");
    screen
}

/// Live screens, oldest first.
pub fn screens() -> Vec<usize> {
    SCREENS.with(|s| s.borrow().iter().copied().filter(|&i| is_allocated(i)).collect())
}

/// Stop treating `screen` as a root. The object itself is left alone.
pub fn remove_screen(screen: usize) {
    SCREENS.with(|s| s.borrow_mut().retain(|&i| i != screen));
}

pub(crate) fn clear_screens() {
    SCREENS.with(|s| s.borrow_mut().clear());
}

// =============================================================================
// Terminal Detection
// =============================================================================

/// Detect and set the actual terminal size from the environment.
///
/// Uses crossterm to query the terminal dimensions.
pub fn detect_terminal_size() {
    match crossterm::terminal::size() {
        Ok((width, height)) => set_terminal_size(width, height),
        Err(err) => tracing::debug!(%err, "terminal size unavailable"),
    }
}

// =============================================================================
// Tests
// =============================================================================
