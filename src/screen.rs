//! Screen: the drawing surface contract components render against.
//!
//! A screen is addressed in absolute cell coordinates. Writes that fall
//! outside the surface are ignored by implementations, so widgets can draw
//! without clipping themselves first.

use crate::buffer::{Modifiers, Rgb};
use unicode_width::UnicodeWidthChar;

/// Colors and modifiers applied to one draw call.
///
/// `None` colors mean "leave whatever the surface already has", which lets a
/// text widget draw on top of a container background.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct CellStyle {
    /// Foreground color.
    pub fg: Option<Rgb>,
    /// Background color.
    pub bg: Option<Rgb>,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl CellStyle {
    /// A style with no colors and no modifiers.
    pub const PLAIN: Self = Self {
        fg: None,
        bg: None,
        modifiers: Modifiers::empty(),
    };

    /// Set the foreground color (builder pattern).
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Set the background color (builder pattern).
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Add modifiers (builder pattern).
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }
}

/// Box-drawing glyphs used by [`Screen::draw_box`]'s default body.
mod glyph {
    pub const TOP_LEFT: char = '┌';
    pub const TOP_RIGHT: char = '┐';
    pub const BOTTOM_LEFT: char = '└';
    pub const BOTTOM_RIGHT: char = '┘';
    pub const HORIZONTAL: char = '─';
    pub const VERTICAL: char = '│';
}

/// A cell-addressable drawing surface.
///
/// Only [`set_cell`](Screen::set_cell) is required; the other calls have
/// default bodies built on it that a backend may replace with faster paths.
pub trait Screen {
    /// Write one cell.
    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: &CellStyle);

    /// Write a horizontal run of text starting at `(x, y)`.
    fn write_text(&mut self, x: u16, y: u16, text: &str, style: &CellStyle) {
        let mut col = x;
        for ch in text.chars() {
            self.set_cell(col, y, ch, style);
            #[allow(clippy::cast_possible_truncation)]
            let advance = ch.width().unwrap_or(0).max(1) as u16;
            col = col.saturating_add(advance);
        }
    }

    /// Draw a rectangle outline.
    fn draw_box(&mut self, x: u16, y: u16, width: u16, height: u16, style: &CellStyle) {
        if width == 0 || height == 0 {
            return;
        }
        let right = x.saturating_add(width - 1);
        let bottom = y.saturating_add(height - 1);

        for col in x..=right {
            self.set_cell(col, y, glyph::HORIZONTAL, style);
            self.set_cell(col, bottom, glyph::HORIZONTAL, style);
        }
        for row in y..=bottom {
            self.set_cell(x, row, glyph::VERTICAL, style);
            self.set_cell(right, row, glyph::VERTICAL, style);
        }

        self.set_cell(x, y, glyph::TOP_LEFT, style);
        self.set_cell(right, y, glyph::TOP_RIGHT, style);
        self.set_cell(x, bottom, glyph::BOTTOM_LEFT, style);
        self.set_cell(right, bottom, glyph::BOTTOM_RIGHT, style);
    }
}
