//! Key decoding.

use super::error::PromptError;

/// A decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    /// Ctrl-C. Raw mode turns off signal generation, so it arrives as 0x03.
    Cancel,
    /// Anything not in the table above. The raw bytes are dropped.
    Other,
}

pub(crate) const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;
const CR: u8 = b'\r';

impl Key {
    /// Decode a 1-byte key or a 3-byte escape sequence.
    pub fn decode(bytes: &[u8]) -> Self {
        match bytes {
            [ESC, b'[', b'A'] => Key::Up,
            [ESC, b'[', b'B'] => Key::Down,
            [ESC, b'[', b'C'] => Key::Right,
            [ESC, b'[', b'D'] => Key::Left,
            [CR] => Key::Enter,
            [CTRL_C] => Key::Cancel,
            _ => Key::Other,
        }
    }
}

/// Something that yields keypresses, one at a time.
///
/// Implemented by the raw terminal reader and by scripted sources in tests.
pub trait KeySource {
    /// Block until the next key is available.
    fn read_key(&mut self) -> Result<Key, PromptError>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> Result<Key, PromptError> {
        (**self).read_key()
    }
}
