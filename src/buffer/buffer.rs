//! Buffer: A grid of cells representing the terminal screen.
//!
//! Cells are stored in row-major order in one contiguous `Vec`.

use super::cell::{Cell, Rgb};
use crate::screen::{CellStyle, Screen};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A grid of cells representing the terminal screen.
///
/// Access is in row-major order: `index = y * width + x`. The buffer is the
/// crate's own [`Screen`]: hosts render a component tree into it and hand
/// the cells to whatever backend they use.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells are initialized to empty (space with default colors).
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub const fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Clear the entire buffer (fill with empty cells).
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// The visible text of row `y`, continuation cells skipped.
    ///
    /// Returns an empty string for rows outside the buffer.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let width = self.width as usize;
        let start = (y as usize) * width;
        self.cells[start..start + width]
            .iter()
            .filter(|cell| !cell.is_wide_continuation())
            .map(Cell::symbol)
            .collect()
    }

    /// Resolve a draw style against the cell it lands on.
    fn styled(existing: &Cell, ch: char, style: &CellStyle) -> Cell {
        Cell::new(ch)
            .with_fg(style.fg.unwrap_or(Rgb::DEFAULT_FG))
            .with_bg(style.bg.unwrap_or_else(|| existing.bg()))
            .with_modifiers(style.modifiers)
    }
}

impl Screen for Buffer {
    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: &CellStyle) {
        let Some(idx) = self.index_of(x, y) else {
            return;
        };
        let cell = Self::styled(&self.cells[idx], ch, style);
        self.cells[idx] = cell;

        if cell.display_width() == 2 {
            if let Some(next) = self.index_of(x.saturating_add(1), y) {
                self.cells[next] = Cell::wide_continuation().with_bg(cell.bg());
            }
        }
    }

    fn write_text(&mut self, x: u16, y: u16, text: &str, style: &CellStyle) {
        let mut col = x;
        for grapheme in text.graphemes(true) {
            if col >= self.width {
                break;
            }
            let Some(ch) = grapheme.chars().next() else {
                continue;
            };
            self.set_cell(col, y, ch, style);
            #[allow(clippy::cast_possible_truncation)]
            let advance = grapheme.width().max(1) as u16;
            col = col.saturating_add(advance);
        }
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
