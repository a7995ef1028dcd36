//! Cell placement of grid items.
//!
//! Each child carries a placement per axis: track position, span and
//! alignment inside the spanned tracks. Objects store it as
//! `Option<GridCell>`. The packed `u32` form is a compact interchange
//! encoding of one placement, where [`NOT_A_CELL`] (`0`) means the child is
//! not a grid cell.
//!
//! ```text
//! bit 31      30..28  27..14  13..0
//! CELL_FLAG   align   span    pos
//! ```

/// Packed value of a child that is not a grid cell.
pub const NOT_A_CELL: u32 = 0;

const CELL_FLAG: u32 = 1 << 31;
const FIELD_BITS: u32 = 14;
const FIELD_MASK: u32 = (1 << FIELD_BITS) - 1;
const SPAN_SHIFT: u32 = FIELD_BITS;
const ALIGN_SHIFT: u32 = FIELD_BITS * 2;

/// Largest encodable position or span.
pub const CELL_MAX: u16 = FIELD_MASK as u16;

/// Where an item sits inside its cell along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum GridAlign {
    /// At the start of the span, natural size.
    #[default]
    Start = 0,
    /// Centered in the span, natural size.
    Center = 1,
    /// At the end of the span, natural size.
    End = 2,
    /// Fills the span.
    Stretch = 3,
}

impl From<u8> for GridAlign {
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0 => Self::Start,
            1 => Self::Center,
            2 => Self::End,
            _ => Self::Stretch,
        }
    }
}

/// Placement of an item along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// First track.
    pub pos: u16,
    /// Number of tracks covered (at least 1).
    pub span: u16,
    pub align: GridAlign,
}

impl GridCell {
    /// Placement at `pos` covering `span` tracks. Span 0 is treated as 1;
    /// both fields saturate at [`CELL_MAX`].
    pub const fn new(pos: u16, span: u16, align: GridAlign) -> Self {
        let pos = if pos > CELL_MAX { CELL_MAX } else { pos };
        let span = if span == 0 {
            1
        } else if span > CELL_MAX {
            CELL_MAX
        } else {
            span
        };
        Self { pos, span, align }
    }

    /// Single track placement.
    pub const fn at(pos: u16, align: GridAlign) -> Self {
        Self::new(pos, 1, align)
    }

    /// Last covered track.
    pub const fn last(&self) -> usize {
        self.pos as usize + self.span as usize - 1
    }

    pub const fn encode(self) -> u32 {
        CELL_FLAG
            | ((self.align as u32) << ALIGN_SHIFT)
            | ((self.span as u32 & FIELD_MASK) << SPAN_SHIFT)
            | (self.pos as u32 & FIELD_MASK)
    }

    /// Unpack a stored value; `None` for anything without the cell flag.
    pub fn decode(raw: u32) -> Option<Self> {
        if raw & CELL_FLAG == 0 {
            return None;
        }
        let pos = (raw & FIELD_MASK) as u16;
        let span = ((raw >> SPAN_SHIFT) & FIELD_MASK) as u16;
        let align = GridAlign::from(((raw >> ALIGN_SHIFT) & 0b11) as u8);
        Some(Self::new(pos, span, align))
    }
}
