//! Grid layout settings.
//!
//! Per-thread, like the rest of the engine state. Change them before
//! building the tree; a change does not relayout existing grids (call
//! `report_grid_change(None)` for that).

use std::cell::Cell;

/// What happens to the pixels lost when free space doesn't split evenly
/// across fractional tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrRemainder {
    /// Every fr track gets `floor(free * weight / total)`; the rest stays free.
    #[default]
    Truncate,
    /// Leftover cells go one each to fr tracks in declaration order.
    Distribute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub fr_remainder: FrRemainder,
    /// Most container refreshes one cascade may run before the rest of the
    /// queue is dropped.
    pub max_cascade_refreshes: usize,
}

impl GridConfig {
    pub const DEFAULT: Self = Self {
        fr_remainder: FrRemainder::Truncate,
        max_cascade_refreshes: 4096,
    };
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

thread_local! {
    static GRID_CONFIG: Cell<GridConfig> = const { Cell::new(GridConfig::DEFAULT) };
}

/// Get the current settings.
pub fn grid_config() -> GridConfig {
    GRID_CONFIG.with(Cell::get)
}

/// Replace the settings.
pub fn set_grid_config(config: GridConfig) {
    GRID_CONFIG.with(|c| c.set(config));
}

pub fn reset_grid_config() {
    set_grid_config(GridConfig::DEFAULT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        set_grid_config(GridConfig {
            fr_remainder: FrRemainder::Distribute,
            max_cascade_refreshes: 8,
        });
        assert_eq!(grid_config().fr_remainder, FrRemainder::Distribute);
        assert_eq!(grid_config().max_cascade_refreshes, 8);

        reset_grid_config();
        assert_eq!(grid_config(), GridConfig::default());
    }
}
