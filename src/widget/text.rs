//! Text Widget: word-wrapped, aligned multi-line text.
//!
//! The wrapped lines are cached and recomputed only when the content, the
//! wrap flag or the width changes. Alignment is applied at draw time, so
//! changing it never rewraps.

use super::traits::Widget;
use crate::event::ComponentEvent;
use crate::layout::Align;
use crate::screen::Screen;
use crate::tree::ComponentState;
use unicode_width::UnicodeWidthStr;

/// Break `content` into display lines no wider than `width` columns.
///
/// Explicit newlines always break, and an empty paragraph yields an empty
/// line. Within a paragraph, words (split on single spaces) are packed
/// greedily; a word wider than `width` gets a line of its own and is never
/// split. With `wrap` off, each newline-delimited segment is one line.
pub fn wrap_lines(content: &str, width: u16, wrap: bool) -> Vec<String> {
    if !wrap {
        return content.split('\n').map(str::to_string).collect();
    }

    let width = usize::from(width);
    let mut lines = Vec::new();

    for paragraph in content.split('\n') {
        let first = lines.len();
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ') {
            let word_width = word.width();
            let candidate = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if candidate <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = candidate;
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current.push_str(word);
                current_width = word_width;
            }
        }

        if !current.is_empty() || lines.len() == first {
            lines.push(current);
        }
    }

    lines
}

/// Construction options for [`Text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    /// Raw content; may contain newlines.
    pub content: String,
    /// Horizontal alignment of each line.
    pub align: Align,
    /// Word-wrap to the component width.
    pub wrap: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            content: String::new(),
            align: Align::Left,
            wrap: true,
        }
    }
}

/// Multi-line text that wraps to its width.
#[derive(Debug)]
pub struct Text {
    content: String,
    align: Align,
    wrap: bool,
    /// Width the cached lines were wrapped to.
    width: u16,
    lines: Vec<String>,
    outbox: Vec<ComponentEvent>,
}

impl Text {
    /// Left-aligned, wrapping text.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_config(TextConfig {
            content: content.into(),
            ..TextConfig::default()
        })
    }

    /// Text from explicit options.
    pub fn with_config(config: TextConfig) -> Self {
        let mut text = Self {
            content: config.content,
            align: config.align,
            wrap: config.wrap,
            width: 0,
            lines: Vec::new(),
            outbox: Vec::new(),
        };
        text.rewrap();
        text
    }

    /// Raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Current alignment.
    pub const fn align(&self) -> Align {
        self.align
    }

    /// Whether wrapping is on.
    pub const fn wrap(&self) -> bool {
        self.wrap
    }

    /// Display lines for the current content and width.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace the content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.rewrap();
        self.outbox.push(ComponentEvent::ContentChange);
    }

    /// Change the alignment. Lines are unaffected.
    pub const fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    /// Turn wrapping on or off.
    pub fn set_wrap(&mut self, wrap: bool) {
        if self.wrap != wrap {
            self.wrap = wrap;
            self.rewrap();
        }
    }

    fn rewrap(&mut self) {
        self.lines = wrap_lines(&self.content, self.width, self.wrap);
    }
}

impl Widget for Text {
    fn render(&self, state: &ComponentState, screen: &mut dyn Screen) {
        let area = state.absolute_rect();
        let style = state.style().cell_style();

        for (row, line) in self.lines.iter().take(usize::from(area.height)).enumerate() {
            let len = u16::try_from(line.width()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(self.align.offset(area.width, len));
            #[allow(clippy::cast_possible_truncation)]
            let y = area.y.saturating_add(row as u16);
            screen.write_text(x, y, line, &style);
        }
    }

    fn resized(&mut self, width: u16, _height: u16) {
        if self.width != width {
            self.width = width;
            self.rewrap();
        }
    }

    fn content_height(&self, width: u16) -> Option<u16> {
        let count = if width == self.width {
            self.lines.len()
        } else {
            wrap_lines(&self.content, width, self.wrap).len()
        };
        Some(u16::try_from(count).unwrap_or(u16::MAX))
    }

    fn take_events(&mut self) -> Vec<ComponentEvent> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::layout::Rect;
    use crate::tree::Tree;

    #[test]
    fn test_wrap_greedy() {
        assert_eq!(
            wrap_lines("The quick brown fox", 10, true),
            vec!["The quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_preserves_blank_lines() {
        for width in [0, 1, 5, 80] {
            assert_eq!(wrap_lines("A\n\nB", width, true), vec!["A", "", "B"]);
        }
    }

    #[test]
    fn test_wrap_never_splits_words() {
        let lines = wrap_lines("a extraordinarily long word", 6, true);
        assert_eq!(lines, vec!["a", "extraordinarily", "long", "word"]);
    }

    #[test]
    fn test_wrap_lines_fit_width() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do";
        for line in wrap_lines(text, 12, true) {
            assert!(line.width() <= 12, "{line:?} too wide");
        }
    }

    #[test]
    fn test_no_wrap_keeps_segments() {
        assert_eq!(
            wrap_lines("a long line that overflows\nnext", 4, false),
            vec!["a long line that overflows", "next"]
        );
    }

    #[test]
    fn test_empty_content_is_one_empty_line() {
        assert_eq!(wrap_lines("", 10, true), vec![""]);
    }

    #[test]
    fn test_lines_follow_setters() {
        let mut text = Text::new("one two three");
        text.resized(7, 3);
        assert_eq!(text.lines(), &["one two", "three"]);

        text.set_content("alpha beta");
        assert_eq!(text.lines(), &["alpha", "beta"]);

        text.set_wrap(false);
        assert_eq!(text.lines(), &["alpha beta"]);

        text.set_wrap(true);
        text.resized(20, 3);
        assert_eq!(text.lines(), &["alpha beta"]);
        assert_eq!(text.take_events(), vec![ComponentEvent::ContentChange]);
    }

    #[test]
    fn test_render_alignment_and_clipping() {
        let mut tree = Tree::new();
        let id = tree.insert(Text::with_config(TextConfig {
            content: "ab\ncd\nef".to_string(),
            align: Align::Right,
            wrap: true,
        }));
        tree.set_bounds(id, Rect::new(1, 0, 6, 2));

        let mut buffer = Buffer::new(8, 3);
        tree.render(id, &mut buffer);
        assert_eq!(buffer.row_text(0), "     ab ");
        assert_eq!(buffer.row_text(1), "     cd ");
        assert_eq!(buffer.row_text(2), "        ");

        tree.update(id, |t: &mut Text| t.set_align(Align::Center));
        buffer.clear();
        tree.render(id, &mut buffer);
        assert_eq!(buffer.row_text(0), "   ab   ");
    }

    #[test]
    fn test_set_content_notifies_through_tree() {
        let mut tree = Tree::new();
        let id = tree.insert(Text::new("x"));
        let rx = tree.subscribe(id).unwrap();

        tree.update(id, |t: &mut Text| t.set_content("y"));
        assert_eq!(rx.try_recv().unwrap().event, ComponentEvent::ContentChange);
    }
}
