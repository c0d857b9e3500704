//! Commands understood by the LCD panel
//!
//! Every command starts with a command byte. LCD commands add a sub-command
//! byte and then either a control byte or display data:
//!
//! ```text
//! version      01
//! lcd control  02 00 XX     XX = clear, home, cursor style, cursor move
//! lcd write    02 02 DATA   up to 12 bytes
//! lcd read     02 03        panel answers AA 02 03 DATA
//! backlight    07 XX        XX = 00 off, 01 on
//! ```

use heapless::Vec;

use crate::cursor::Cursor;
use crate::report::{build_output_report, Report, ReportError, COMMAND_LEN, DATA_LEN};

// Command bytes
pub const CMD_VERSION: u8 = 0x01;
pub const CMD_LCD: u8 = 0x02;
pub const CMD_KEY_INPUT: u8 = 0x03;
pub const CMD_BACKLIGHT: u8 = 0x07;

// LCD sub-commands
pub const LCD_CONTROL: u8 = 0x00;
pub const LCD_WRITE: u8 = 0x02;
pub const LCD_READ: u8 = 0x03;

// Control bytes
pub const CONTROL_CLEAR: u8 = 0x01;
pub const CONTROL_HOME: u8 = 0x02;
pub const CONTROL_CURSOR_STYLE: u8 = 0x0C;
pub const CONTROL_CURSOR_POS: u8 = 0x80;
pub const CONTROL_CURSOR_LINE: u8 = 0x40;

/// Prefix of the panel's answer to an LCD read
pub const READ_PREFIX: &[u8] = &[CMD_LCD, LCD_READ];

/// Prefix of the panel's answer to a version query
pub const VERSION_PREFIX: &[u8] = &[CMD_VERSION];

/// Prefix of key input reports
pub const KEY_INPUT_PREFIX: &[u8] = &[CMD_KEY_INPUT];

/// Backlight state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Backlight {
    Off,
    #[default]
    On,
}

impl Backlight {
    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Backlight::Off => 0x00,
            Backlight::On => 0x01,
        }
    }
}

impl core::fmt::Display for Backlight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Backlight::Off => f.write_str("Off"),
            Backlight::On => f.write_str("On"),
        }
    }
}

/// Visible cursor style
///
/// The panel does not report the style back, so nothing caches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorStyle {
    /// No visible cursor
    #[default]
    Off,
    /// Blinking block
    Block,
    /// Underline
    Underline,
    /// Blinking block over an underline
    Both,
}

impl CursorStyle {
    /// Convert to the control byte sent to the panel
    pub fn to_byte(self) -> u8 {
        CONTROL_CURSOR_STYLE
            + match self {
                CursorStyle::Off => 0,
                CursorStyle::Block => 1,
                CursorStyle::Underline => 2,
                CursorStyle::Both => 3,
            }
    }
}

impl core::fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CursorStyle::Off => f.write_str("Off"),
            CursorStyle::Block => f.write_str("Block"),
            CursorStyle::Underline => f.write_str("Underline"),
            CursorStyle::Both => f.write_str("Both"),
        }
    }
}

/// Replace bytes the panel cannot show with `?`
pub fn sanitize(byte: u8) -> u8 {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte
    } else {
        b'?'
    }
}

/// Commands sent from the host to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Clear the display and return the cursor to the origin
    Clear,
    /// Return the cursor to the origin without clearing
    Home,
    /// Change the visible cursor style
    CursorStyle(CursorStyle),
    /// Move the cursor to a position on the display
    MoveCursor(Cursor),
    /// Write display data at the cursor (at most 12 bytes)
    Write(&'a [u8]),
    /// Read display data at the cursor
    Read,
    /// Query the firmware version
    Version,
    /// Switch the backlight
    Backlight(Backlight),
}

impl<'a> Command<'a> {
    /// Encode the command bytes that go between report ID and checksum
    pub fn encode(&self) -> Result<Vec<u8, COMMAND_LEN>, ReportError> {
        let mut bytes = Vec::<u8, COMMAND_LEN>::new();
        let pushed = match self {
            Command::Clear => bytes.extend_from_slice(&[CMD_LCD, LCD_CONTROL, CONTROL_CLEAR]),
            Command::Home => bytes.extend_from_slice(&[CMD_LCD, LCD_CONTROL, CONTROL_HOME]),
            Command::CursorStyle(style) => {
                bytes.extend_from_slice(&[CMD_LCD, LCD_CONTROL, style.to_byte()])
            }
            Command::MoveCursor(cursor) => {
                bytes.extend_from_slice(&[CMD_LCD, LCD_CONTROL, cursor.to_byte()])
            }
            Command::Write(data) => {
                if data.len() > DATA_LEN {
                    return Err(ReportError::CommandTooLong);
                }
                let mut sanitized = [0u8; DATA_LEN];
                for (dst, &src) in sanitized.iter_mut().zip(data.iter()) {
                    *dst = sanitize(src);
                }
                bytes
                    .extend_from_slice(&[CMD_LCD, LCD_WRITE])
                    .and_then(|_| bytes.extend_from_slice(&sanitized[..data.len()]))
            }
            Command::Read => bytes.extend_from_slice(READ_PREFIX),
            Command::Version => bytes.extend_from_slice(VERSION_PREFIX),
            Command::Backlight(state) => bytes.extend_from_slice(&[CMD_BACKLIGHT, state.to_byte()]),
        };
        pushed.map_err(|_| ReportError::CommandTooLong)?;

        Ok(bytes)
    }

    /// Encode this command into a finished output report
    pub fn to_report(&self) -> Result<Report, ReportError> {
        build_output_report(&self.encode()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OUTPUT_REPORT_ID;

    #[test]
    fn test_control_commands() {
        assert_eq!(&Command::Clear.encode().unwrap()[..], &[0x02, 0x00, 0x01]);
        assert_eq!(&Command::Home.encode().unwrap()[..], &[0x02, 0x00, 0x02]);
    }

    #[test]
    fn test_cursor_styles() {
        assert_eq!(CursorStyle::Off.to_byte(), 0x0C);
        assert_eq!(CursorStyle::Block.to_byte(), 0x0D);
        assert_eq!(CursorStyle::Underline.to_byte(), 0x0E);
        assert_eq!(CursorStyle::Both.to_byte(), 0x0F);

        let bytes = Command::CursorStyle(CursorStyle::Underline).encode().unwrap();
        assert_eq!(&bytes[..], &[0x02, 0x00, 0x0E]);
    }

    #[test]
    fn test_move_cursor() {
        let bytes = Command::MoveCursor(Cursor::at(1, 5)).encode().unwrap();
        assert_eq!(&bytes[..], &[0x02, 0x00, 0xC5]);

        let bytes = Command::MoveCursor(Cursor::origin()).encode().unwrap();
        assert_eq!(&bytes[..], &[0x02, 0x00, 0x80]);
    }

    #[test]
    fn test_backlight() {
        assert_eq!(
            &Command::Backlight(Backlight::Off).encode().unwrap()[..],
            &[0x07, 0x00]
        );
        assert_eq!(
            &Command::Backlight(Backlight::On).encode().unwrap()[..],
            &[0x07, 0x01]
        );
    }

    #[test]
    fn test_version_and_read() {
        assert_eq!(&Command::Version.encode().unwrap()[..], &[0x01]);
        assert_eq!(&Command::Read.encode().unwrap()[..], &[0x02, 0x03]);
    }

    #[test]
    fn test_write_sanitizes() {
        let bytes = Command::Write(b"a\tb\x7f\xc3").encode().unwrap();
        assert_eq!(&bytes[..], b"\x02\x02a?b??");
    }

    #[test]
    fn test_write_max_data() {
        let data = [b'x'; DATA_LEN];
        let report = Command::Write(&data).to_report().unwrap();

        assert_eq!(report[0], OUTPUT_REPORT_ID);
        assert_eq!(&report[1..3], &[CMD_LCD, LCD_WRITE]);
        assert_eq!(&report[3..15], &data);
    }

    #[test]
    fn test_write_too_long() {
        let data = [b'x'; DATA_LEN + 1];
        assert_eq!(
            Command::Write(&data).encode(),
            Err(ReportError::CommandTooLong)
        );
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(b' '), b' ');
        assert_eq!(sanitize(b'~'), b'~');
        assert_eq!(sanitize(b'\n'), b'?');
        assert_eq!(sanitize(0x00), b'?');
        assert_eq!(sanitize(0xE9), b'?');
    }
}
