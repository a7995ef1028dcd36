//! Grid definitions.
//!
//! A definition pairs a column and/or row track list. An axis left out is
//! implicit: its tracks are synthesized from the children. At least one axis
//! must be explicit, which the constructor enforces, so every definition is
//! one of the three [`GridShape`]s.

use std::rc::Rc;

use crate::error::GridError;
use crate::types::Axis;

use super::track::TrackList;

/// Shared handle to a definition. Containers hold one; several containers
/// may share the same definition and are refreshed together by
/// `report_grid_change`.
pub type GridRef = Rc<GridDefinition>;

/// Which axes are explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridShape {
    /// Both axes declared.
    Explicit { columns: TrackList, rows: TrackList },
    /// Columns declared, rows synthesized (row-major auto-placement).
    ImplicitRows { columns: TrackList },
    /// Rows declared, columns synthesized (column-major auto-placement).
    ImplicitColumns { rows: TrackList },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDefinition {
    shape: GridShape,
}

impl GridDefinition {
    /// Build a definition, validating both track lists.
    pub fn new(columns: Option<TrackList>, rows: Option<TrackList>) -> Result<Self, GridError> {
        if let Some(columns) = &columns {
            columns.validate(Axis::Column)?;
        }
        if let Some(rows) = &rows {
            rows.validate(Axis::Row)?;
        }

        let shape = match (columns, rows) {
            (Some(columns), Some(rows)) => GridShape::Explicit { columns, rows },
            (Some(columns), None) => GridShape::ImplicitRows { columns },
            (None, Some(rows)) => GridShape::ImplicitColumns { rows },
            (None, None) => return Err(GridError::NoExplicitAxis),
        };
        Ok(Self { shape })
    }

    /// Both axes explicit.
    pub fn explicit(columns: TrackList, rows: TrackList) -> Result<Self, GridError> {
        Self::new(Some(columns), Some(rows))
    }

    /// Explicit columns, rows added as items need them.
    pub fn columns(columns: TrackList) -> Result<Self, GridError> {
        Self::new(Some(columns), None)
    }

    /// Explicit rows, columns added as items need them.
    pub fn rows(rows: TrackList) -> Result<Self, GridError> {
        Self::new(None, Some(rows))
    }

    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    pub fn column_tracks(&self) -> Option<&TrackList> {
        match &self.shape {
            GridShape::Explicit { columns, .. } | GridShape::ImplicitRows { columns } => Some(columns),
            GridShape::ImplicitColumns { .. } => None,
        }
    }

    pub fn row_tracks(&self) -> Option<&TrackList> {
        match &self.shape {
            GridShape::Explicit { rows, .. } | GridShape::ImplicitColumns { rows } => Some(rows),
            GridShape::ImplicitRows { .. } => None,
        }
    }

    pub fn has_fr_columns(&self) -> bool {
        self.column_tracks().is_some_and(TrackList::has_fr)
    }

    pub fn has_fr_rows(&self) -> bool {
        self.row_tracks().is_some_and(TrackList::has_fr)
    }

    /// True unless both axes are declared.
    pub fn has_implicit_axis(&self) -> bool {
        !matches!(self.shape, GridShape::Explicit { .. })
    }

    pub fn into_ref(self) -> GridRef {
        Rc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::track::{TrackSize, fr};

    fn cells(sizes: &[i32]) -> TrackList {
        sizes.iter().map(|&s| TrackSize::Cells(s)).collect()
    }

    #[test]
    fn test_shapes() {
        let both = GridDefinition::explicit(cells(&[10]), cells(&[5])).unwrap();
        assert!(matches!(both.shape(), GridShape::Explicit { .. }));

        let cols = GridDefinition::columns(cells(&[10, 10])).unwrap();
        assert!(matches!(cols.shape(), GridShape::ImplicitRows { .. }));
        assert_eq!(cols.row_tracks(), None);

        let rows = GridDefinition::rows(cells(&[3])).unwrap();
        assert!(matches!(rows.shape(), GridShape::ImplicitColumns { .. }));
        assert_eq!(rows.column_tracks(), None);

        assert!(!both.has_implicit_axis());
        assert!(cols.has_implicit_axis());
        assert!(rows.has_implicit_axis());
    }

    #[test]
    fn test_both_implicit_rejected() {
        assert_eq!(GridDefinition::new(None, None), Err(GridError::NoExplicitAxis));
    }

    #[test]
    fn test_invalid_tracks_rejected() {
        assert_eq!(
            GridDefinition::columns(TrackList::default()),
            Err(GridError::EmptyTracks(Axis::Column))
        );
        assert!(GridDefinition::explicit(cells(&[1]), cells(&[-4])).is_err());
    }

    #[test]
    fn test_oversized_fixed_tracks_rejected() {
        use crate::layout::track::FR_BASE;

        assert!(matches!(
            GridDefinition::columns(cells(&[FR_BASE + 50])),
            Err(GridError::TrackTooLarge { axis: Axis::Column, .. })
        ));
        assert!(matches!(
            GridDefinition::explicit(cells(&[FR_BASE - 1; 5]), cells(&[1])),
            Err(GridError::FixedTracksOverflow { axis: Axis::Column, .. })
        ));
    }

    #[test]
    fn test_has_fr() {
        let grid = GridDefinition::explicit(TrackList::new([fr(1), TrackSize::Cells(4)]), cells(&[2]))
            .unwrap();
        assert!(grid.has_fr_columns());
        assert!(!grid.has_fr_rows());
    }
}
