//! Core types for spark-grid.
//!
//! Coordinates, areas and size modes shared by the object engine and the
//! grid layout core.

// =============================================================================
// Coordinates
// =============================================================================

/// Signed coordinate in terminal cells.
///
/// Signed because scrolled content and centered oversize items can land at
/// negative offsets relative to their parent.
pub type Coord = i32;

/// Largest coordinate value. The range just below it is reserved for
/// fractional track encoding (see [`crate::layout::FR_BASE`]).
pub const COORD_MAX: Coord = (1 << 29) - 1;

/// A point in absolute or relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Area
// =============================================================================

/// A rectangle with inclusive corners.
///
/// `x2`/`y2` are the last covered cell, so a 10 wide area starting at 0
/// has `x2 == 9`. A zero sized area has `x2 == x1 - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub x1: Coord,
    pub y1: Coord,
    pub x2: Coord,
    pub y2: Coord,
}

impl Area {
    pub const fn new(x1: Coord, y1: Coord, x2: Coord, y2: Coord) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create an area from its top-left corner and size.
    pub const fn from_size(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width - 1,
            y2: y + height - 1,
        }
    }

    #[inline]
    pub const fn width(&self) -> Coord {
        self.x2 - self.x1 + 1
    }

    #[inline]
    pub const fn height(&self) -> Coord {
        self.y2 - self.y1 + 1
    }

    /// Resize keeping the top-left corner.
    pub fn set_width(&mut self, width: Coord) {
        self.x2 = self.x1 + width - 1;
    }

    /// Resize keeping the top-left corner.
    pub fn set_height(&mut self, height: Coord) {
        self.y2 = self.y1 + height - 1;
    }

    /// Shift the area by a delta.
    pub fn translate(&mut self, dx: Coord, dy: Coord) {
        self.x1 += dx;
        self.x2 += dx;
        self.y1 += dy;
        self.y2 += dy;
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// True if the area covers no cell.
    pub const fn is_empty(&self) -> bool {
        self.x2 < self.x1 || self.y2 < self.y1
    }
}

impl Default for Area {
    /// Zero sized area at the origin.
    fn default() -> Self {
        Self::from_size(0, 0, 0, 0)
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// How an object's size along one axis is set.
///
/// - `Auto`: derived from content (see `calc_auto_size`)
/// - `Cells(n)`: fixed size in terminal cells
/// - `Stretch`: driven by the parent layout (a stretched grid cell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    /// Size follows content.
    #[default]
    Auto,
    /// Absolute size in terminal cells.
    Cells(Coord),
    /// Size is set by the parent's layout, not by the user.
    Stretch,
}

impl Dimension {
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl From<Coord> for Dimension {
    fn from(value: Coord) -> Self {
        Self::Cells(value.max(0))
    }
}

// =============================================================================
// Padding
// =============================================================================

/// Padding on the four sides of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: Coord,
    pub right: Coord,
    pub bottom: Coord,
    pub left: Coord,
}

impl Padding {
    pub const fn new(top: Coord, right: Coord, bottom: Coord, left: Coord) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same padding on all sides.
    pub const fn all(value: Coord) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn horizontal(&self) -> Coord {
        self.left + self.right
    }

    pub const fn vertical(&self) -> Coord {
        self.top + self.bottom
    }
}

// =============================================================================
// Axis
// =============================================================================

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis (columns).
    Column,
    /// Vertical axis (rows).
    Row,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Column => f.write_str("column"),
            Self::Row => f.write_str("row"),
        }
    }
}

// =============================================================================
// Change Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// What changed in a coordinate-change notification.
    ///
    /// Combine with bitwise OR: `ChangeFlags::SIZE | ChangeFlags::POSITION`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        const NONE = 0;
        const SIZE = 1 << 0;
        const POSITION = 1 << 1;
    }
}

/// Payload of a coordinate-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordChange {
    /// Area before the change.
    pub old: Area,
    /// Area after the change.
    pub new: Area,
    pub flags: ChangeFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_size() {
        let mut area = Area::from_size(5, 2, 10, 4);
        assert_eq!(area.x2, 14);
        assert_eq!(area.width(), 10);
        assert_eq!(area.height(), 4);

        area.set_width(0);
        assert_eq!(area.width(), 0);
        assert!(area.is_empty());
    }

    #[test]
    fn test_area_translate() {
        let mut area = Area::from_size(0, 0, 3, 3);
        area.translate(4, -1);
        assert_eq!(area, Area::new(4, -1, 6, 1));
        assert_eq!(area.origin(), Point::new(4, -1));
    }

    #[test]
    fn test_dimension_from_coord() {
        assert_eq!(Dimension::from(12), Dimension::Cells(12));
        assert_eq!(Dimension::from(-3), Dimension::Cells(0));
        assert!(Dimension::default().is_auto());
    }

    #[test]
    fn test_change_flags() {
        let flags = ChangeFlags::SIZE | ChangeFlags::POSITION;
        assert!(flags.contains(ChangeFlags::SIZE));
        assert!(!ChangeFlags::POSITION.contains(ChangeFlags::SIZE));
    }
}
