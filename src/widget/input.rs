//! Input Widget: single-line editable text field.
//!
//! The field keeps a character cursor and a horizontal scroll offset. After
//! every cursor move or edit the offset is adjusted so the cursor stays in
//! the visible window, which is the field width minus one cell of margin on
//! each side. The window is measured in display columns, so wide characters
//! take two cells and the cursor lands on the column they are drawn at.

use super::traits::Widget;
use crate::buffer::{Modifiers, Rgb};
use crate::event::ComponentEvent;
use crate::key::{KeyCode, KeyEvent};
use crate::screen::{CellStyle, Screen};
use crate::tree::ComponentState;
use unicode_width::UnicodeWidthChar;

const MASK: char = '*';

/// Columns a character occupies in the field; never zero.
fn char_width(c: char) -> usize {
    c.width().unwrap_or(0).max(1)
}

/// Draw `chars` from `x`, stopping before the first one that would cross
/// `window` columns. Returns the columns used.
fn draw_clipped(
    screen: &mut dyn Screen,
    x: u16,
    y: u16,
    chars: impl Iterator<Item = char>,
    window: usize,
    style: &CellStyle,
) -> usize {
    let mut column = 0;
    for ch in chars {
        let width = char_width(ch);
        if column + width > window {
            break;
        }
        #[allow(clippy::cast_possible_truncation)]
        screen.set_cell(x.saturating_add(column as u16), y, ch, style);
        column += width;
    }
    column
}

/// Construction options for [`Input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    /// Initial value.
    pub value: String,
    /// Hint shown while the field is empty and unfocused.
    pub placeholder: String,
    /// Show every character as `*`.
    pub password: bool,
    /// Maximum number of characters.
    pub max_length: Option<usize>,
    /// Text color, unless the component style sets one.
    pub fg: Rgb,
    /// Background, unless the component style sets one.
    pub bg: Rgb,
    /// Background while focused.
    pub focus_bg: Rgb,
    /// Placeholder text color.
    pub placeholder_fg: Rgb,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            password: false,
            max_length: None,
            fg: Rgb::WHITE,
            bg: Rgb::new(30, 30, 30),
            focus_bg: Rgb::new(50, 50, 70),
            placeholder_fg: Rgb::new(100, 100, 100),
        }
    }
}

/// A single-line text field with cursor and horizontal scrolling.
#[derive(Debug)]
pub struct Input {
    value: String,
    /// Cursor position in characters, `0..=len`.
    cursor: usize,
    /// Index of the leftmost visible character.
    scroll_offset: usize,
    /// Field width in columns.
    width: u16,
    config: InputConfig,
    outbox: Vec<ComponentEvent>,
}

impl Input {
    /// An empty field with default colors.
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// A field from explicit options. The cursor starts at the end.
    pub fn with_config(config: InputConfig) -> Self {
        let mut input = Self {
            value: String::new(),
            cursor: 0,
            scroll_offset: 0,
            width: 0,
            config,
            outbox: Vec::new(),
        };
        let value = std::mem::take(&mut input.config.value);
        input.value = input.truncated(&value);
        input.cursor = input.len();
        input.rescroll();
        input
    }

    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of characters in the value.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Check if the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position in characters.
    pub const fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Index of the leftmost visible character.
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    /// Whether the value is masked.
    pub const fn is_password(&self) -> bool {
        self.config.password
    }

    /// Columns available for text: the width minus a cell on each side.
    ///
    /// Never below one, so there is always room for the cursor.
    pub fn visible_width(&self) -> usize {
        usize::from(self.width.saturating_sub(2)).max(1)
    }

    /// Replace the value and move the cursor to its end.
    ///
    /// Values longer than the maximum length are cut.
    pub fn set_value(&mut self, value: &str) {
        self.value = self.truncated(value);
        let old = self.cursor;
        self.cursor = self.len();
        self.rescroll();
        self.value_changed();
        if self.cursor != old {
            self.outbox.push(ComponentEvent::CursorMove(self.cursor));
        }
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.set_value("");
    }

    /// Change the placeholder.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.config.placeholder = placeholder.into();
    }

    fn truncated(&self, value: &str) -> String {
        match self.config.max_length {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        }
    }

    /// Byte offset of character index `idx`.
    fn byte_index(&self, idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Display widths of the shown characters, masked or not.
    fn widths(&self) -> Vec<usize> {
        if self.config.password {
            vec![1; self.len()]
        } else {
            self.value.chars().map(char_width).collect()
        }
    }

    /// Columns between the scroll offset and the cursor.
    fn cursor_column(&self, widths: &[usize]) -> usize {
        widths[self.scroll_offset.min(self.cursor)..self.cursor].iter().sum()
    }

    /// Keep the cursor cell inside the visible window.
    ///
    /// With one column per character this is
    /// `scroll_offset <= cursor < scroll_offset + visible_width`; wide
    /// characters scroll further so the cursor cell still fits.
    fn rescroll(&mut self) {
        let visible = self.visible_width();
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        let widths = self.widths();
        let cursor_width = widths.get(self.cursor).copied().unwrap_or(1);
        while self.scroll_offset < self.cursor
            && self.cursor_column(&widths) + cursor_width > visible
        {
            self.scroll_offset += 1;
        }
    }

    fn move_cursor(&mut self, to: usize) {
        let to = to.min(self.len());
        if to != self.cursor {
            self.cursor = to;
            self.outbox.push(ComponentEvent::CursorMove(to));
        }
        self.rescroll();
    }

    fn value_changed(&mut self) {
        self.outbox.push(ComponentEvent::ValueChange(self.value.clone()));
    }

    fn insert_char(&mut self, c: char) {
        if self.config.max_length.is_some_and(|max| self.len() >= max) {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.value_changed();
        self.move_cursor(self.cursor + 1);
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.value_changed();
        self.move_cursor(self.cursor - 1);
    }

    fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        self.value_changed();
        self.rescroll();
    }

    fn display(&self) -> String {
        if self.config.password {
            std::iter::repeat_n(MASK, self.len()).collect()
        } else {
            self.value.clone()
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Input {
    fn render(&self, state: &ComponentState, screen: &mut dyn Screen) {
        let area = state.absolute_rect();
        if area.is_empty() {
            return;
        }
        let style = state.style();
        let focused = state.is_focused();
        let bg = if focused {
            self.config.focus_bg
        } else {
            style.bg.unwrap_or(self.config.bg)
        };
        let fg = style.fg.unwrap_or(self.config.fg);

        let blank = CellStyle::PLAIN.with_bg(bg);
        for col in area.x..area.right() {
            screen.set_cell(col, area.y, ' ', &blank);
        }

        let window = usize::from(area.width.saturating_sub(2));
        let text_x = area.x.saturating_add(1);

        if self.value.is_empty() && !focused && !self.config.placeholder.is_empty() {
            let hint_style = CellStyle::PLAIN
                .with_fg(self.config.placeholder_fg)
                .with_bg(bg)
                .with_modifiers(Modifiers::DIM);
            draw_clipped(screen, text_x, area.y, self.config.placeholder.chars(), window, &hint_style);
            return;
        }

        let display = self.display();
        let text_style = CellStyle {
            fg: Some(fg),
            bg: Some(bg),
            modifiers: style.modifiers,
        };
        draw_clipped(
            screen,
            text_x,
            area.y,
            display.chars().skip(self.scroll_offset),
            window,
            &text_style,
        );

        if focused {
            let column = self.cursor_column(&self.widths());
            if column < window {
                // A wide character that would cross the margin shows as a blank cursor.
                let under = display
                    .chars()
                    .nth(self.cursor)
                    .filter(|c| column + char_width(*c) <= window)
                    .unwrap_or(' ');
                let cursor_style = CellStyle {
                    fg: Some(bg),
                    bg: Some(fg),
                    modifiers: style.modifiers,
                };
                #[allow(clippy::cast_possible_truncation)]
                screen.set_cell(text_x.saturating_add(column as u16), area.y, under, &cursor_style);
            }
        }
    }

    fn handle_key(&mut self, state: &ComponentState, key: KeyEvent) -> bool {
        if !state.is_focused() {
            return false;
        }

        match key.code {
            KeyCode::Left => self.move_cursor(self.cursor.saturating_sub(1)),
            KeyCode::Right => self.move_cursor(self.cursor + 1),
            KeyCode::Home => self.move_cursor(0),
            KeyCode::End => self.move_cursor(self.len()),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            _ => match key.printable() {
                Some(c) => self.insert_char(c),
                None => return false,
            },
        }
        true
    }

    fn resized(&mut self, width: u16, _height: u16) {
        self.width = width;
        // A wider field can show more of the text left of the cursor.
        let earliest = self.cursor.saturating_sub(self.visible_width() - 1);
        self.scroll_offset = self.scroll_offset.min(earliest);
        self.rescroll();
    }

    fn content_height(&self, _width: u16) -> Option<u16> {
        Some(1)
    }

    fn focusable(&self) -> bool {
        true
    }

    fn take_events(&mut self) -> Vec<ComponentEvent> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::event::EventKind;
    use crate::layout::Rect;
    use crate::tree::{ComponentId, Tree};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code)
    }

    fn type_str(tree: &mut Tree, id: ComponentId, s: &str) {
        for c in s.chars() {
            assert!(tree.handle_key(id, key(KeyCode::Char(c))));
        }
    }

    fn field(config: InputConfig, width: u16) -> (Tree, ComponentId) {
        let mut tree = Tree::new();
        let id = tree.insert(Input::with_config(config));
        tree.set_bounds(id, Rect::new(0, 0, width, 1));
        (tree, id)
    }

    fn input(tree: &Tree, id: ComponentId) -> &Input {
        tree.widget::<Input>(id).unwrap()
    }

    #[test]
    fn test_input_always_focusable() {
        let (mut tree, id) = field(InputConfig::default(), 10);
        assert!(tree.state(id).unwrap().is_focusable());
        tree.focus(id);
        assert!(tree.state(id).unwrap().is_focused());
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let (mut tree, id) = field(InputConfig::default(), 10);
        assert!(!tree.handle_key(id, key(KeyCode::Char('a'))));
        assert!(!tree.handle_key(id, key(KeyCode::Left)));
        assert_eq!(input(&tree, id).value(), "");
    }

    #[test]
    fn test_typing_and_navigation() {
        let (mut tree, id) = field(InputConfig::default(), 20);
        tree.focus(id);
        type_str(&mut tree, id, "Hello");
        assert_eq!(input(&tree, id).value(), "Hello");
        assert_eq!(input(&tree, id).cursor_position(), 5);

        tree.handle_key(id, key(KeyCode::Left));
        tree.handle_key(id, key(KeyCode::Left));
        type_str(&mut tree, id, "X");
        assert_eq!(input(&tree, id).value(), "HelXlo");
        assert_eq!(input(&tree, id).cursor_position(), 4);

        tree.handle_key(id, key(KeyCode::Home));
        assert_eq!(input(&tree, id).cursor_position(), 0);
        tree.handle_key(id, key(KeyCode::Left));
        assert_eq!(input(&tree, id).cursor_position(), 0);

        tree.handle_key(id, key(KeyCode::End));
        tree.handle_key(id, key(KeyCode::Right));
        assert_eq!(input(&tree, id).cursor_position(), 6);
    }

    #[test]
    fn test_backspace_and_delete() {
        let (mut tree, id) = field(
            InputConfig {
                value: "abcd".to_string(),
                ..InputConfig::default()
            },
            20,
        );
        tree.focus(id);

        assert!(tree.handle_key(id, key(KeyCode::Backspace)));
        assert_eq!(input(&tree, id).value(), "abc");
        assert_eq!(input(&tree, id).cursor_position(), 3);

        // At end: nothing to delete, still handled.
        assert!(tree.handle_key(id, key(KeyCode::Delete)));
        assert_eq!(input(&tree, id).value(), "abc");

        tree.handle_key(id, key(KeyCode::Home));
        assert!(tree.handle_key(id, key(KeyCode::Delete)));
        assert_eq!(input(&tree, id).value(), "bc");
        assert_eq!(input(&tree, id).cursor_position(), 0);

        assert!(tree.handle_key(id, key(KeyCode::Backspace)));
        assert_eq!(input(&tree, id).value(), "bc");
    }

    #[test]
    fn test_unhandled_keys() {
        let (mut tree, id) = field(InputConfig::default(), 10);
        tree.focus(id);
        assert!(!tree.handle_key(id, key(KeyCode::Enter)));
        assert!(!tree.handle_key(id, key(KeyCode::Up)));
        assert!(!tree.handle_key(id, key(KeyCode::Char('é'))));
        let ctrl_a: KeyEvent = "ctrl+a".parse().unwrap();
        assert!(!tree.handle_key(id, ctrl_a));
    }

    #[test]
    fn test_max_length_blocks_insertion() {
        let (mut tree, id) = field(
            InputConfig {
                max_length: Some(3),
                ..InputConfig::default()
            },
            10,
        );
        tree.focus(id);
        type_str(&mut tree, id, "abc");
        assert!(tree.handle_key(id, key(KeyCode::Char('d'))));
        assert_eq!(input(&tree, id).value(), "abc");
        assert_eq!(input(&tree, id).len(), 3);
    }

    #[test]
    fn test_set_value_truncates_and_moves_cursor() {
        let (mut tree, id) = field(
            InputConfig {
                max_length: Some(4),
                ..InputConfig::default()
            },
            10,
        );
        tree.update(id, |i: &mut Input| i.set_value("abcdefg"));
        assert_eq!(input(&tree, id).value(), "abcd");
        assert_eq!(input(&tree, id).cursor_position(), 4);

        tree.update(id, Input::clear);
        assert_eq!(input(&tree, id).value(), "");
        assert_eq!(input(&tree, id).cursor_position(), 0);
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        // Width 6 leaves 4 visible columns.
        let (mut tree, id) = field(InputConfig::default(), 6);
        tree.focus(id);
        type_str(&mut tree, id, "abcdefgh");
        assert_eq!(input(&tree, id).cursor_position(), 8);
        assert_eq!(input(&tree, id).scroll_offset(), 5);

        tree.handle_key(id, key(KeyCode::Home));
        assert_eq!(input(&tree, id).scroll_offset(), 0);
    }

    #[test]
    fn test_cursor_invariants_hold_for_any_key_sequence() {
        let (mut tree, id) = field(InputConfig::default(), 7);
        tree.focus(id);
        let script = [
            KeyCode::Char('a'),
            KeyCode::Char('b'),
            KeyCode::Left,
            KeyCode::Left,
            KeyCode::Left,
            KeyCode::Char('c'),
            KeyCode::End,
            KeyCode::Char('d'),
            KeyCode::Char('e'),
            KeyCode::Char('f'),
            KeyCode::Char('g'),
            KeyCode::Char('h'),
            KeyCode::Home,
            KeyCode::Delete,
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Right,
            KeyCode::Backspace,
            KeyCode::Backspace,
        ];

        for code in script {
            tree.handle_key(id, key(code));
            let field = input(&tree, id);
            let cursor = field.cursor_position();
            let offset = field.scroll_offset();
            assert!(cursor <= field.len());
            assert!(offset <= cursor);
            assert!(cursor < offset + field.visible_width(), "{code:?}");
        }
    }

    #[test]
    fn test_events_on_edit() {
        let (mut tree, id) = field(InputConfig::default(), 10);
        tree.focus(id);
        let rx = tree
            .subscribe_filtered(id, &[EventKind::ValueChange, EventKind::CursorMove])
            .unwrap();

        type_str(&mut tree, id, "a");
        tree.handle_key(id, key(KeyCode::Left));
        tree.handle_key(id, key(KeyCode::Left));

        let events: Vec<_> = rx.try_iter().map(|n| n.event).collect();
        assert_eq!(
            events,
            vec![
                ComponentEvent::ValueChange("a".to_string()),
                ComponentEvent::CursorMove(1),
                ComponentEvent::CursorMove(0),
            ]
        );
    }

    #[test]
    fn test_widening_scrolls_back() {
        let (mut tree, id) = field(
            InputConfig {
                value: "abcdefgh".to_string(),
                ..InputConfig::default()
            },
            5,
        );
        assert_eq!(input(&tree, id).scroll_offset(), 6);
        tree.set_bounds(id, Rect::new(0, 0, 20, 1));
        assert_eq!(input(&tree, id).scroll_offset(), 0);
    }

    #[test]
    fn test_wide_characters_stay_inside_margin() {
        let config = InputConfig::default();
        let (fg, focus_bg) = (config.fg, config.focus_bg);
        // Width 8 leaves 6 columns: exactly three wide characters.
        let (mut tree, id) = field(config, 8);
        tree.focus(id);
        tree.update(id, |i: &mut Input| i.set_value("日本語"));

        // Cursor at the end needs one more column, so one character scrolls out.
        assert_eq!(input(&tree, id).cursor_position(), 3);
        assert_eq!(input(&tree, id).scroll_offset(), 1);

        let mut buffer = Buffer::new(8, 1);
        tree.render(id, &mut buffer);
        assert_eq!(buffer.row_text(0), " 本語   ");
        assert_eq!(buffer.get(5, 0).unwrap().bg(), fg);
        assert_eq!(buffer.get(7, 0).unwrap().symbol(), ' ');
        assert_eq!(buffer.get(7, 0).unwrap().bg(), focus_bg);

        tree.handle_key(id, key(KeyCode::Home));
        assert_eq!(input(&tree, id).scroll_offset(), 0);
        tree.render(id, &mut buffer);
        assert_eq!(buffer.row_text(0), " 日本語 ");
        let cursor = buffer.get(1, 0).unwrap();
        assert_eq!(cursor.symbol(), '日');
        assert_eq!(cursor.bg(), fg);
        assert_eq!(buffer.get(7, 0).unwrap().bg(), focus_bg);
    }

    #[test]
    fn test_password_is_masked() {
        let (tree, id) = field(
            InputConfig {
                value: "secret".to_string(),
                password: true,
                ..InputConfig::default()
            },
            10,
        );
        let mut buffer = Buffer::new(10, 1);
        tree.render(id, &mut buffer);
        assert_eq!(buffer.row_text(0), " ******   ");
    }

    #[test]
    fn test_placeholder_only_when_unfocused() {
        let (mut tree, id) = field(
            InputConfig {
                placeholder: "Search everything".to_string(),
                ..InputConfig::default()
            },
            10,
        );

        let mut buffer = Buffer::new(10, 1);
        tree.render(id, &mut buffer);
        assert_eq!(buffer.row_text(0), " Search e ");
        assert!(buffer.get(1, 0).unwrap().modifiers().contains(Modifiers::DIM));

        tree.focus(id);
        buffer.clear();
        tree.render(id, &mut buffer);
        assert_eq!(buffer.row_text(0), "          ");
    }

    #[test]
    fn test_focused_cursor_cell_is_inverted() {
        let config = InputConfig {
            value: "ab".to_string(),
            ..InputConfig::default()
        };
        let (fg, focus_bg) = (config.fg, config.focus_bg);
        let (mut tree, id) = field(config, 8);
        tree.focus(id);
        tree.handle_key(id, key(KeyCode::Left));

        let mut buffer = Buffer::new(8, 1);
        tree.render(id, &mut buffer);
        let cursor = buffer.get(2, 0).unwrap();
        assert_eq!(cursor.symbol(), 'b');
        assert_eq!(cursor.fg(), focus_bg);
        assert_eq!(cursor.bg(), fg);
        assert_eq!(buffer.get(1, 0).unwrap().bg(), focus_bg);

        tree.handle_key(id, key(KeyCode::End));
        tree.render(id, &mut buffer);
        let end = buffer.get(3, 0).unwrap();
        assert_eq!(end.symbol(), ' ');
        assert_eq!(end.bg(), fg);
    }
}
