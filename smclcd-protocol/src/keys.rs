//! Key input and version payloads sent by the panel

/// Front panel keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    Up,
    Right,
    Left,
    Down,
    Enter,
    Cancel,
}

// Wire format values
const KEY_UP: u8 = 0x00;
const KEY_RIGHT: u8 = 0x01;
const KEY_LEFT: u8 = 0x02;
const KEY_DOWN: u8 = 0x03;
const KEY_ENTER: u8 = 0x04;
const KEY_CANCEL: u8 = 0x05;

impl KeyCode {
    /// Parse a key code from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            KEY_UP => Some(KeyCode::Up),
            KEY_RIGHT => Some(KeyCode::Right),
            KEY_LEFT => Some(KeyCode::Left),
            KEY_DOWN => Some(KeyCode::Down),
            KEY_ENTER => Some(KeyCode::Enter),
            KEY_CANCEL => Some(KeyCode::Cancel),
            _ => None,
        }
    }
}

impl core::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            KeyCode::Up => "Up",
            KeyCode::Right => "Right",
            KeyCode::Left => "Left",
            KeyCode::Down => "Down",
            KeyCode::Enter => "Enter",
            KeyCode::Cancel => "Cancel",
        };
        f.write_str(name)
    }
}

/// Key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    Released,
    Pressed,
}

const EVENT_RELEASED: u8 = 0x00;
const EVENT_PRESSED: u8 = 0x01;

impl KeyEvent {
    /// Parse a key event from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            EVENT_RELEASED => Some(KeyEvent::Released),
            EVENT_PRESSED => Some(KeyEvent::Pressed),
            _ => None,
        }
    }
}

impl core::fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeyEvent::Released => f.write_str("Released"),
            KeyEvent::Pressed => f.write_str("Pressed"),
        }
    }
}

/// A decoded key report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Key {
    pub code: KeyCode,
    pub event: KeyEvent,
}

impl Key {
    /// Decode the two bytes following the key input command
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        match payload {
            [code, event, ..] => Some(Self {
                code: KeyCode::from_byte(*code)?,
                event: KeyEvent::from_byte(*event)?,
            }),
            _ => None,
        }
    }
}

/// Panel firmware version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    /// Decode the two bytes following the version command
    pub fn from_payload(payload: &[u8]) -> Self {
        Self {
            major: payload.first().copied().unwrap_or_default(),
            minor: payload.get(1).copied().unwrap_or_default(),
        }
    }
}

impl core::fmt::Display for Version {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:x}.{:x}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_key_code_values() {
        let codes = [
            KeyCode::Up,
            KeyCode::Right,
            KeyCode::Left,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Cancel,
        ];

        for (i, code) in codes.into_iter().enumerate() {
            assert_eq!(KeyCode::from_byte(i as u8), Some(code));
        }
    }

    #[test]
    fn test_unknown_key_code() {
        assert!(KeyCode::from_byte(0x06).is_none());
        assert!(KeyCode::from_byte(0xFF).is_none());
    }

    #[test]
    fn test_key_event_values() {
        assert_eq!(KeyEvent::from_byte(0x00), Some(KeyEvent::Released));
        assert_eq!(KeyEvent::from_byte(0x01), Some(KeyEvent::Pressed));
        assert!(KeyEvent::from_byte(0x02).is_none());
    }

    #[test]
    fn test_key_from_payload() {
        let key = Key::from_payload(&[0x05, 0x01, 0x00, 0x00]).unwrap();
        assert_eq!(key.code, KeyCode::Cancel);
        assert_eq!(key.event, KeyEvent::Pressed);

        assert!(Key::from_payload(&[0x05]).is_none());
        assert!(Key::from_payload(&[0x07, 0x00]).is_none());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(KeyCode::Enter.to_string(), "Enter");
        assert_eq!(KeyEvent::Released.to_string(), "Released");
    }

    #[test]
    fn test_version_format() {
        let version = Version::from_payload(&[0x01, 0x1F, 0x00]);
        assert_eq!(version.to_string(), "1.1f");
        assert_eq!(Version { major: 0, minor: 0 }.to_string(), "0.0");
    }
}
