//! Padding: per-side insets for containers.

/// Insets applied inside a container's outer rectangle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Padding {
    /// Rows reserved at the top.
    pub top: u16,
    /// Columns reserved on the right.
    pub right: u16,
    /// Rows reserved at the bottom.
    pub bottom: u16,
    /// Columns reserved on the left.
    pub left: u16,
}

impl Padding {
    /// No padding on any side.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create padding in CSS order: top, right, bottom, left.
    #[inline]
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self { top, right, bottom, left }
    }

    /// The same inset on every side.
    #[inline]
    pub const fn uniform(n: u16) -> Self {
        Self::new(n, n, n, n)
    }

    /// Vertical and horizontal insets.
    #[inline]
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total columns consumed.
    #[inline]
    pub const fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Total rows consumed.
    #[inline]
    pub const fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}
