//! Key events routed to focused components.
//!
//! Hosts either build [`KeyEvent`]s directly, parse them from key names
//! (`"left"`, `"ctrl+a"`, `"x"`), or convert crossterm key events.

use crossterm::event as ct;
use std::str::FromStr;
use thiserror::Error;

/// Key codes for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
    /// Null (Ctrl+Space on some terminals).
    Null,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
    /// Super/Command/Windows key held.
    pub super_key: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        super_key: false,
    };
}

/// A key press: code plus held modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during keypress.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// A key press without modifiers.
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key press with modifiers.
    pub const fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// The character this key inserts into a text field, if any.
    ///
    /// Only printable ASCII (space through `~`) without Ctrl or Alt counts.
    pub const fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c)
                if matches!(c, ' '..='~') && !self.modifiers.control && !self.modifiers.alt =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    /// Convert a crossterm key event.
    ///
    /// Release and repeat events, and codes with no counterpart here, map
    /// to `None`.
    pub fn from_crossterm(event: &ct::KeyEvent) -> Option<Self> {
        if event.kind != ct::KeyEventKind::Press {
            return None;
        }
        let code = convert_key_code(event.code)?;
        Some(Self::with_modifiers(code, convert_modifiers(event.modifiers)))
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

fn convert_key_code(code: ct::KeyCode) -> Option<KeyCode> {
    Some(match code {
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::F(n) => KeyCode::F(n),
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Insert => KeyCode::Insert,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Null => KeyCode::Null,
        _ => return None,
    })
}

fn convert_modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: mods.contains(ct::KeyModifiers::SHIFT),
        control: mods.contains(ct::KeyModifiers::CONTROL),
        alt: mods.contains(ct::KeyModifiers::ALT),
        super_key: mods.contains(ct::KeyModifiers::SUPER),
    }
}

/// Failure to parse a key name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    /// The input was empty.
    #[error("empty key name")]
    Empty,
    /// The key part did not name a known key.
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    /// A `+`-prefix did not name a modifier.
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
}

impl FromStr for KeyCode {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => return Err(ParseKeyError::Empty),
            (Some(c), None) => return Ok(Self::Char(c)),
            _ => {}
        }

        let lower = s.to_ascii_lowercase();
        let code = match lower.as_str() {
            "backspace" => Self::Backspace,
            "enter" | "return" => Self::Enter,
            "left" => Self::Left,
            "right" => Self::Right,
            "up" => Self::Up,
            "down" => Self::Down,
            "home" => Self::Home,
            "end" => Self::End,
            "pageup" => Self::PageUp,
            "pagedown" => Self::PageDown,
            "tab" => Self::Tab,
            "backtab" => Self::BackTab,
            "delete" | "del" => Self::Delete,
            "insert" => Self::Insert,
            "escape" | "esc" => Self::Esc,
            "space" => Self::Char(' '),
            other => match other.strip_prefix('f').map(str::parse::<u8>) {
                Some(Ok(n)) if (1..=12).contains(&n) => Self::F(n),
                _ => return Err(ParseKeyError::UnknownKey(s.to_string())),
            },
        };
        Ok(code)
    }
}

impl FromStr for KeyEvent {
    type Err = ParseKeyError;

    /// Parse `"[mod+]*key"`, e.g. `"ctrl+shift+left"`.
    ///
    /// A lone `"+"` is the plus character, and `"ctrl++"` is Ctrl with it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseKeyError::Empty);
        }
        let (prefix, key) = if s.len() > 1 && s.ends_with('+') {
            // The key itself is `+`, as in "ctrl++".
            (&s[..s.len() - 1], "+")
        } else {
            match s.rfind('+') {
                Some(idx) if idx + 1 < s.len() => (&s[..idx], &s[idx + 1..]),
                _ => ("", s),
            }
        };

        let mut modifiers = KeyModifiers::NONE;
        for name in prefix.split('+').filter(|part| !part.is_empty()) {
            match name.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.control = true,
                "alt" | "meta" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "super" | "cmd" => modifiers.super_key = true,
                _ => return Err(ParseKeyError::UnknownModifier(name.to_string())),
            }
        }

        Ok(Self::with_modifiers(key.parse()?, modifiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!("left".parse::<KeyCode>(), Ok(KeyCode::Left));
        assert_eq!("Backspace".parse::<KeyCode>(), Ok(KeyCode::Backspace));
        assert_eq!("f5".parse::<KeyCode>(), Ok(KeyCode::F(5)));
        assert_eq!("x".parse::<KeyCode>(), Ok(KeyCode::Char('x')));
        assert_eq!(
            "f13".parse::<KeyCode>(),
            Err(ParseKeyError::UnknownKey("f13".to_string()))
        );
    }

    #[test]
    fn test_parse_modifiers() {
        let key: KeyEvent = "ctrl+a".parse().unwrap();
        assert_eq!(key.code, KeyCode::Char('a'));
        assert!(key.modifiers.control);
        assert!(key.printable().is_none());

        let plus: KeyEvent = "+".parse().unwrap();
        assert_eq!(plus.code, KeyCode::Char('+'));

        let ctrl_plus: KeyEvent = "ctrl++".parse().unwrap();
        assert_eq!(ctrl_plus.code, KeyCode::Char('+'));
        assert!(ctrl_plus.modifiers.control);
        assert!(!ctrl_plus.modifiers.alt);

        assert_eq!(
            "hyper+a".parse::<KeyEvent>(),
            Err(ParseKeyError::UnknownModifier("hyper".to_string()))
        );
        assert_eq!("".parse::<KeyEvent>(), Err(ParseKeyError::Empty));
    }

    #[test]
    fn test_printable_range() {
        assert_eq!(KeyEvent::new(KeyCode::Char('a')).printable(), Some('a'));
        assert_eq!(KeyEvent::new(KeyCode::Char(' ')).printable(), Some(' '));
        assert_eq!(KeyEvent::new(KeyCode::Char('~')).printable(), Some('~'));
        assert_eq!(KeyEvent::new(KeyCode::Char('é')).printable(), None);
        assert_eq!(KeyEvent::new(KeyCode::Enter).printable(), None);
    }

    #[test]
    fn test_from_crossterm() {
        let press = ct::KeyEvent::new(ct::KeyCode::Left, ct::KeyModifiers::SHIFT);
        let key = KeyEvent::from_crossterm(&press).unwrap();
        assert_eq!(key.code, KeyCode::Left);
        assert!(key.modifiers.shift);

        let mut release = ct::KeyEvent::new(ct::KeyCode::Char('a'), ct::KeyModifiers::NONE);
        release.kind = ct::KeyEventKind::Release;
        assert!(KeyEvent::from_crossterm(&release).is_none());
    }
}
