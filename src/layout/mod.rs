//! Layout primitives: rectangles and padding in terminal cells.
//!
//! Coordinates are unsigned cell counts. Arithmetic that could go negative
//! saturates at zero instead of failing.

mod padding;
mod rect;

pub use padding::Padding;
pub use rect::Rect;

/// Horizontal alignment of a line of text within a width.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Align {
    /// Flush with the left edge.
    #[default]
    Left,
    /// Centered, rounding toward the left.
    Center,
    /// Flush with the right edge.
    Right,
}

impl Align {
    /// Column offset of a run `len` columns wide inside `width` columns.
    ///
    /// Runs wider than `width` start at offset 0.
    pub const fn offset(self, width: u16, len: u16) -> u16 {
        match self {
            Self::Left => 0,
            Self::Center => width.saturating_sub(len) / 2,
            Self::Right => width.saturating_sub(len),
        }
    }
}
