//! Single key press input.

use std::collections::VecDeque;
use std::fmt;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// One key press, as far as the menu cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Ctrl+C, which raw mode no longer turns into a signal.
    Interrupt,
    /// Any other key (arrows, Enter, function keys, ...).
    Other,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Interrupt => f.write_str("Ctrl+C"),
            Key::Other => f.write_str("<other>"),
        }
    }
}

/// A blocking source of key presses.
pub trait KeySource {
    /// Waits for the next key press.
    fn read_key(&mut self) -> io::Result<Key>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> io::Result<Key> {
        (**self).read_key()
    }
}

/// Reads key presses from the terminal without waiting for Enter.
///
/// Raw mode is enabled only while waiting, so regular output between reads
/// keeps its line discipline.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(translate(key));
                }
            }
        }
    }
}

fn translate(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Replays a fixed sequence of keys.
///
/// Running out of keys is an `UnexpectedEof` error rather than a hang.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    /// Creates a script from explicit keys.
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        ScriptedKeys {
            keys: keys.into_iter().collect(),
        }
    }

    /// Creates a script that types each character of `text`.
    pub fn from_chars(text: &str) -> Self {
        Self::new(text.chars().map(Key::Char))
    }

    /// Returns the number of keys not yet read.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let plain = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(translate(plain), Key::Char('1'));

        let upper = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(translate(upper), Key::Char('X'));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(ctrl_c), Key::Interrupt);

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(translate(enter), Key::Other);
    }

    #[test]
    fn test_scripted_keys() {
        let mut keys = ScriptedKeys::from_chars("1x");
        assert_eq!(keys.remaining(), 2);
        assert_eq!(keys.read_key().unwrap(), Key::Char('1'));
        assert_eq!(keys.read_key().unwrap(), Key::Char('x'));

        let err = keys.read_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::Char('3').to_string(), "3");
        assert_eq!(Key::Interrupt.to_string(), "Ctrl+C");
    }
}
