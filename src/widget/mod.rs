//! Widgets: the concrete component kinds.
//!
//! - [`Container`]: bordered, padded, titled region that stacks children
//! - [`Text`]: word-wrapped, aligned multi-line text
//! - [`Input`]: single-line editable field with a horizontally scrolling window
//!
//! Custom widgets implement [`Widget`] and are inserted into a
//! [`Tree`](crate::tree::Tree) like the built-in ones.

mod container;
mod input;
mod text;
mod traits;

pub use container::{Container, ContainerConfig};
pub use input::{Input, InputConfig};
pub use text::{wrap_lines, Text, TextConfig};
pub use traits::{AsAny, Widget};
