//! Container Widget: a padded, optionally bordered and titled region.
//!
//! Children are stacked top to bottom inside the content bounds. Each child
//! in insertion order claims its preferred height (or everything left) until
//! the space runs out; children past that point keep their old bounds.

use super::traits::Widget;
use crate::event::ComponentEvent;
use crate::layout::{Align, Padding, Rect};
use crate::screen::{CellStyle, Screen};
use crate::tree::{ChildMeasure, ComponentState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Construction options for [`Container`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Inner spacing between border and content.
    pub padding: Padding,
    /// Title drawn on the top border.
    pub title: Option<String>,
    /// Placement of the title along the top border.
    pub title_align: Align,
}

/// A rectangular region that stacks its children vertically.
#[derive(Debug, Default)]
pub struct Container {
    padding: Padding,
    title: Option<String>,
    title_align: Align,
    outbox: Vec<ComponentEvent>,
}

impl Container {
    /// A container without padding or title.
    pub fn new() -> Self {
        Self::default()
    }

    /// A container from explicit options.
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            padding: config.padding,
            title: config.title,
            title_align: config.title_align,
            outbox: Vec::new(),
        }
    }

    /// Current padding.
    pub const fn padding(&self) -> Padding {
        self.padding
    }

    /// Current title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Current title alignment.
    pub const fn title_align(&self) -> Align {
        self.title_align
    }

    /// Replace or remove the title.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title.clone_from(&title);
        self.outbox.push(ComponentEvent::TitleChange(title));
    }

    /// Change where the title sits.
    pub const fn set_title_align(&mut self, align: Align) {
        self.title_align = align;
    }

    /// Change the padding. Takes effect on the next layout.
    pub const fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    /// Usable interior, relative to the container's own origin.
    ///
    /// Outer bounds minus padding, minus one cell per side when bordered.
    /// Width and height never go below zero.
    pub fn content_bounds(&self, state: &ComponentState) -> Rect {
        let outer = Rect::from_size(state.width(), state.height());
        let inner = outer.inset(self.padding);
        if state.style().border {
            inner.shrink(1)
        } else {
            inner
        }
    }

    /// Title text and its column offset on a top border `width` wide.
    ///
    /// Titles wider than `width - 4` are cut and end in an ellipsis.
    fn title_placement(&self, width: u16) -> Option<(u16, String)> {
        let title = self.title.as_deref().filter(|t| !t.is_empty())?;
        let max = usize::from(width.saturating_sub(4));
        if max == 0 {
            return None;
        }

        let text = if title.width() <= max {
            title.to_string()
        } else {
            let mut cut = truncate_to_width(title, max.saturating_sub(ELLIPSIS.len()));
            cut.push_str(ELLIPSIS);
            truncate_to_width(&cut, max)
        };

        let len = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let offset = match self.title_align {
            Align::Left => 2,
            Align::Center => Align::Center.offset(width, len),
            Align::Right => width.saturating_sub(len).saturating_sub(2),
        };
        Some((offset, text))
    }
}

/// Longest prefix of `s` at most `max` columns wide.
fn truncate_to_width(s: &str, max: usize) -> String {
    let mut used = 0;
    s.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= max
        })
        .collect()
}

impl Widget for Container {
    fn render(&self, state: &ComponentState, screen: &mut dyn Screen) {
        let area = state.absolute_rect();
        let style = state.style();

        if let Some(bg) = style.bg {
            let fill = CellStyle::PLAIN.with_bg(bg);
            for row in area.y..area.bottom() {
                for col in area.x..area.right() {
                    screen.set_cell(col, row, ' ', &fill);
                }
            }
        }

        if !style.border {
            return;
        }
        let border = style.border_style();
        screen.draw_box(area.x, area.y, area.width, area.height, &border);

        if let Some((offset, text)) = self.title_placement(area.width) {
            let title_style = CellStyle {
                modifiers: style.modifiers,
                ..border
            };
            screen.write_text(area.x.saturating_add(offset), area.y, &text, &title_style);
        }
    }

    fn arrange(&self, state: &ComponentState, children: &ChildMeasure<'_>) -> Option<Vec<Rect>> {
        let content = self.content_bounds(state);
        let mut remaining = content.height;
        let mut offset = 0;
        let mut rects = Vec::with_capacity(children.len());

        for index in 0..children.len() {
            if remaining == 0 {
                break;
            }
            let wanted = children
                .height_hint(index, content.width)
                .filter(|h| *h > 0)
                .unwrap_or(remaining);
            let height = wanted.min(remaining);

            rects.push(Rect::new(
                content.x,
                content.y.saturating_add(offset),
                content.width,
                height,
            ));
            offset = offset.saturating_add(height);
            remaining -= height;
        }

        Some(rects)
    }

    fn take_events(&mut self) -> Vec<ComponentEvent> {
        std::mem::take(&mut self.outbox)
    }
}
