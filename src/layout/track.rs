//! Track descriptors.
//!
//! A track is one column or row. Its declared size is either a fixed number
//! of cells or an `fr` weight: a share of the space left after fixed tracks.
//!
//! Tracks also have a raw `Coord` encoding. Fractional weights live in the
//! reserved range just below [`COORD_MAX`], so a raw value above [`FR_BASE`]
//! is `fr(raw - FR_BASE)`. A fixed size that reaches into that range is
//! rejected when a definition is built.

use crate::error::GridError;
use crate::types::{Axis, COORD_MAX, Coord};

/// Raw values above this are fractional weights.
pub const FR_BASE: Coord = COORD_MAX - 100;

/// Largest fractional weight.
pub const FR_MAX: u8 = 100;

/// Declared size of one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSize {
    /// Fixed size in cells.
    Cells(Coord),
    /// Weighted share of the free space.
    Fr(u8),
}

impl TrackSize {
    pub const fn to_raw(self) -> Coord {
        match self {
            Self::Cells(size) => size,
            Self::Fr(weight) => FR_BASE + weight as Coord,
        }
    }

    pub const fn from_raw(raw: Coord) -> Self {
        if is_fr_raw(raw) {
            let weight = raw - FR_BASE;
            // Out of range weights saturate and fail validation
            Self::Fr(if weight > u8::MAX as Coord { u8::MAX } else { weight as u8 })
        } else {
            Self::Cells(raw)
        }
    }

    pub const fn is_fr(self) -> bool {
        matches!(self, Self::Fr(_))
    }
}

/// `n` fr track.
pub const fn fr(weight: u8) -> TrackSize {
    TrackSize::Fr(weight)
}

/// True if a raw track value encodes an fr weight.
pub const fn is_fr_raw(raw: Coord) -> bool {
    raw > FR_BASE
}

/// Ordered track sizes for one axis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackList {
    tracks: Vec<TrackSize>,
}

impl TrackList {
    pub fn new(tracks: impl IntoIterator<Item = TrackSize>) -> Self {
        tracks.into_iter().collect()
    }

    /// Build from encoded values.
    pub fn from_raw(raw: impl IntoIterator<Item = Coord>) -> Self {
        raw.into_iter().map(TrackSize::from_raw).collect()
    }

    /// Encoded values, in order.
    pub fn raw(&self) -> Vec<Coord> {
        self.tracks.iter().map(|t| t.to_raw()).collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<TrackSize> {
        self.tracks.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = TrackSize> + '_ {
        self.tracks.iter().copied()
    }

    pub fn has_fr(&self) -> bool {
        self.tracks.iter().any(|t| t.is_fr())
    }

    /// Check every fixed size is in `0..FR_BASE`, every fr weight in
    /// `1..=100`, and the fixed sizes together fit in a `Coord`.
    pub(crate) fn validate(&self, axis: Axis) -> Result<(), GridError> {
        if self.tracks.is_empty() {
            return Err(GridError::EmptyTracks(axis));
        }

        let mut fixed_total: i64 = 0;
        for (index, &track) in self.tracks.iter().enumerate() {
            match track {
                TrackSize::Cells(size) if size < 0 => {
                    return Err(GridError::NegativeTrack { axis, index, size });
                }
                // Would read back as an fr weight
                TrackSize::Cells(size) if size >= FR_BASE => {
                    return Err(GridError::TrackTooLarge { axis, index, size });
                }
                TrackSize::Cells(size) => fixed_total += i64::from(size),
                TrackSize::Fr(weight) if weight == 0 || weight > FR_MAX => {
                    let weight = Coord::from(weight);
                    return Err(GridError::InvalidFrWeight { axis, index, weight });
                }
                TrackSize::Fr(_) => {}
            }
        }

        if fixed_total > i64::from(COORD_MAX) {
            return Err(GridError::FixedTracksOverflow { axis, total: fixed_total });
        }
        Ok(())
    }
}

impl FromIterator<TrackSize> for TrackList {
    fn from_iter<I: IntoIterator<Item = TrackSize>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_encoding() {
        assert_eq!(TrackSize::Cells(40).to_raw(), 40);
        assert!(is_fr_raw(fr(1).to_raw()));
        assert_eq!(TrackSize::from_raw(fr(3).to_raw()), TrackSize::Fr(3));
        assert_eq!(TrackSize::from_raw(12), TrackSize::Cells(12));
    }

    #[test]
    fn test_has_fr() {
        let fixed = TrackList::new([TrackSize::Cells(10), TrackSize::Cells(5)]);
        let mixed = TrackList::new([TrackSize::Cells(10), fr(1)]);
        assert!(!fixed.has_fr());
        assert!(mixed.has_fr());
        assert_eq!(mixed.get(1), Some(TrackSize::Fr(1)));
        assert_eq!(mixed.get(2), None);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            TrackList::default().validate(Axis::Row),
            Err(GridError::EmptyTracks(Axis::Row))
        );
        assert_eq!(
            TrackList::new([TrackSize::Cells(3), TrackSize::Cells(-1)]).validate(Axis::Column),
            Err(GridError::NegativeTrack { axis: Axis::Column, index: 1, size: -1 })
        );
        assert_eq!(
            TrackList::new([fr(0)]).validate(Axis::Column),
            Err(GridError::InvalidFrWeight { axis: Axis::Column, index: 0, weight: 0 })
        );
        assert_eq!(
            TrackList::new([fr(101)]).validate(Axis::Column),
            Err(GridError::InvalidFrWeight { axis: Axis::Column, index: 0, weight: 101 })
        );
        assert!(TrackList::new([fr(100), TrackSize::Cells(0)]).validate(Axis::Row).is_ok());
    }

    #[test]
    fn test_fixed_size_in_fr_range_rejected() {
        assert_eq!(
            TrackList::new([TrackSize::Cells(FR_BASE + 50)]).validate(Axis::Column),
            Err(GridError::TrackTooLarge { axis: Axis::Column, index: 0, size: FR_BASE + 50 })
        );
        assert_eq!(
            TrackList::new([TrackSize::Cells(1), TrackSize::Cells(FR_BASE)]).validate(Axis::Row),
            Err(GridError::TrackTooLarge { axis: Axis::Row, index: 1, size: FR_BASE })
        );
        assert!(TrackList::new([TrackSize::Cells(FR_BASE - 1)]).validate(Axis::Row).is_ok());
    }

    #[test]
    fn test_fixed_total_overflow_rejected() {
        let huge = TrackList::new([TrackSize::Cells(FR_BASE - 1); 5]);
        assert_eq!(
            huge.validate(Axis::Column),
            Err(GridError::FixedTracksOverflow {
                axis: Axis::Column,
                total: 5 * i64::from(FR_BASE - 1),
            })
        );
        // Fr tracks don't count towards the total
        let mixed = TrackList::new([TrackSize::Cells(FR_BASE - 1), fr(100), fr(100)]);
        assert!(mixed.validate(Axis::Column).is_ok());
    }

    #[test]
    fn test_raw_round_trip_of_list() {
        let list = TrackList::new([TrackSize::Cells(3), fr(2)]);
        assert_eq!(TrackList::from_raw(list.raw()), list);
    }
}
