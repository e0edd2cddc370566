//! Component styling and partial style updates.

use crate::buffer::{Modifiers, Rgb};
use crate::screen::CellStyle;

/// Visual style of a component.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Rgb>,
    /// Background color.
    pub bg: Option<Rgb>,
    /// Bold, dim and underline flags.
    pub modifiers: Modifiers,
    /// Whether a border is drawn around the component.
    pub border: bool,
    /// Border foreground; falls back to `fg`.
    pub border_fg: Option<Rgb>,
    /// Border background; falls back to `bg`.
    pub border_bg: Option<Rgb>,
}

impl Style {
    /// Style with a border enabled.
    #[must_use]
    pub const fn bordered() -> Self {
        Self {
            fg: None,
            bg: None,
            modifiers: Modifiers::empty(),
            border: true,
            border_fg: None,
            border_bg: None,
        }
    }

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

    /// Check whether text is bold.
    pub const fn is_bold(&self) -> bool {
        self.modifiers.contains(Modifiers::BOLD)
    }

    /// Shallow-merge a patch: every field the patch sets wins.
    pub fn merge(&mut self, patch: &StylePatch) {
        if let Some(fg) = patch.fg {
            self.fg = Some(fg);
        }
        if let Some(bg) = patch.bg {
            self.bg = Some(bg);
        }
        if let Some(bold) = patch.bold {
            self.modifiers.set(Modifiers::BOLD, bold);
        }
        if let Some(dim) = patch.dim {
            self.modifiers.set(Modifiers::DIM, dim);
        }
        if let Some(underline) = patch.underline {
            self.modifiers.set(Modifiers::UNDERLINE, underline);
        }
        if let Some(border) = patch.border {
            self.border = border;
        }
        if let Some(fg) = patch.border_fg {
            self.border_fg = Some(fg);
        }
        if let Some(bg) = patch.border_bg {
            self.border_bg = Some(bg);
        }
    }

    /// Draw style for content cells.
    pub const fn cell_style(&self) -> CellStyle {
        CellStyle {
            fg: self.fg,
            bg: self.bg,
            modifiers: self.modifiers,
        }
    }

    /// Draw style for the border outline.
    pub fn border_style(&self) -> CellStyle {
        CellStyle {
            fg: self.border_fg.or(self.fg),
            bg: self.border_bg.or(self.bg),
            modifiers: Modifiers::empty(),
        }
    }
}

/// A partial style; unset fields leave the target untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct StylePatch {
    /// New foreground color.
    pub fg: Option<Rgb>,
    /// New background color.
    pub bg: Option<Rgb>,
    /// Turn bold on or off.
    pub bold: Option<bool>,
    /// Turn dim on or off.
    pub dim: Option<bool>,
    /// Turn underline on or off.
    pub underline: Option<bool>,
    /// Turn the border on or off.
    pub border: Option<bool>,
    /// New border foreground.
    pub border_fg: Option<Rgb>,
    /// New border background.
    pub border_bg: Option<Rgb>,
}
