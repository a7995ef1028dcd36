//! Grid definition errors.

use thiserror::Error;

use crate::types::{Axis, Coord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid needs explicit tracks on at least one axis")]
    NoExplicitAxis,

    #[error("{0} track list is empty")]
    EmptyTracks(Axis),

    #[error("{axis} track {index} has negative size {size}")]
    NegativeTrack { axis: Axis, index: usize, size: Coord },

    #[error("{axis} track {index} has size {size}, which is in the fr range")]
    TrackTooLarge { axis: Axis, index: usize, size: Coord },

    #[error("{axis} fixed tracks add up to {total}, more than a coordinate can hold")]
    FixedTracksOverflow { axis: Axis, total: i64 },

    #[error("{axis} track {index} has fr weight {weight}, expected 1..=100")]
    InvalidFrWeight { axis: Axis, index: usize, weight: Coord },
}
