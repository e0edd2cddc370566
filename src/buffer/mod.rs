//! Buffer module: an in-memory cell grid that components draw into.
//!
//! This module contains:
//! - [`Cell`]: one terminal cell (symbol, colors, modifiers)
//! - [`Buffer`]: a grid of cells implementing [`Screen`](crate::screen::Screen)
//! - [`Rgb`]: True-color representation
//! - [`Modifiers`]: Text style bitflags
//!
//! Turning a buffer into terminal output belongs to the host's backend.

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use cell::{Cell, CellFlags, Modifiers, Rgb};
pub use buffer::Buffer;
