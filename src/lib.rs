//! # Tessera
//!
//! A retained-mode terminal component toolkit.
//!
//! Tessera keeps a tree of positioned, styled widgets and knows how to lay
//! them out, route keys to them and draw them into a cell grid. The host
//! owns the event loop: it decides when to call [`Tree::layout`] and
//! [`Tree::render`], and which component receives each key.
//!
//! ## Core Concepts
//!
//! - **Component tree**: an arena of components addressed by generational
//!   [`ComponentId`]s; stale ids turn every operation into a no-op
//! - **Stacking layout**: [`Container`] places children top to bottom inside
//!   its border and padding
//! - **Typed notifications**: subscribers receive [`ComponentEvent`]s over
//!   channels instead of string-keyed callbacks
//! - **Screen contract**: widgets draw through the [`Screen`] trait;
//!   [`Buffer`] is the in-memory implementation
//!
//! ## Example
//!
//! ```rust
//! use tessera::{Buffer, Container, ContainerConfig, Rect, Style, Text, Tree, ComponentConfig};
//!
//! let mut tree = Tree::new();
//! let root = tree.insert_with(
//!     Container::with_config(ContainerConfig {
//!         title: Some("Hello".to_string()),
//!         ..ContainerConfig::default()
//!     }),
//!     ComponentConfig::styled(Style::bordered()),
//! );
//! let greeting = tree.insert(Text::new("Hi there"));
//! tree.add_child(root, greeting).unwrap();
//!
//! tree.set_bounds(root, Rect::new(0, 0, 20, 3));
//! tree.layout(root);
//!
//! let mut buffer = Buffer::new(20, 3);
//! tree.render(root, &mut buffer);
//! assert_eq!(buffer.row_text(1), "│Hi there          │");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod event;
pub mod focus;
pub mod key;
pub mod layout;
pub mod screen;
pub mod style;
pub mod tree;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, CellFlags, Modifiers, Rgb};
pub use event::{ComponentEvent, EventKind, Notification};
pub use focus::FocusRing;
pub use key::{KeyCode, KeyEvent, KeyModifiers, ParseKeyError};
pub use layout::{Align, Padding, Rect};
pub use screen::{CellStyle, Screen};
pub use style::{Style, StylePatch};
pub use tree::{ChildMeasure, ComponentConfig, ComponentId, ComponentState, Tree, TreeError};
pub use widget::{Container, ContainerConfig, Input, InputConfig, Text, TextConfig, Widget};
