//! Display commands: clear, cursor, backlight, write, read and banner

use anyhow::{Context, Result};
use log::debug;
use smclcd_core::{Backlight, CursorStyle, Transfer};
use smclcd_protocol::{COLUMNS, LINES};

use super::Target;

/// Bytes needed to read the whole display, line breaks included
pub const DISPLAY_TEXT_LEN: usize = (LINES * (COLUMNS + 1)) as usize;

pub fn clear(target: &Target) -> Result<()> {
    let mut lcd = target.open()?;
    lcd.clear().context("failed to clear display")?;
    Ok(())
}

pub fn cursor(target: &Target, style: CursorStyle) -> Result<()> {
    let mut lcd = target.open()?;
    lcd.set_cursor_style(style)
        .with_context(|| format!("failed to set cursor style {}", style))?;
    Ok(())
}

pub fn backlight(target: &Target, state: Backlight) -> Result<()> {
    let mut lcd = target.open()?;
    lcd.set_backlight(state)
        .with_context(|| format!("failed to turn backlight {}", state))?;
    Ok(())
}

/// Write `words` joined by spaces at `line`, `col`
///
/// Text running past the end of the display is dropped.
pub fn write(target: &Target, clear: bool, line: u16, col: u16, words: &[String]) -> Result<()> {
    let mut lcd = target.open()?;
    if clear {
        lcd.clear().context("failed to clear display")?;
    }
    lcd.move_cursor(i32::from(line), i32::from(col))
        .with_context(|| format!("failed to move cursor to line {}, column {}", line, col))?;

    let text = words.join(" ");
    log_truncation(lcd.write_text(text.as_bytes()).context("failed to write text")?);
    Ok(())
}

/// Print up to `count` bytes of display text starting at `line`, `col`
pub fn read(target: &Target, count: Option<usize>, line: u16, col: u16) -> Result<()> {
    let mut lcd = target.open()?;
    lcd.move_cursor(i32::from(line), i32::from(col))
        .with_context(|| format!("failed to move cursor to line {}, column {}", line, col))?;

    let mut buf = vec![0u8; read_len(count)];
    let n = lcd.read_text(&mut buf).context("failed to read display")?.count();
    println!("{}", trim_line_breaks(&buf[..n]));
    Ok(())
}

/// Clear the display and show the program name and version
pub fn banner(target: &Target) -> Result<()> {
    let mut lcd = target.open()?;
    lcd.clear().context("failed to clear display")?;
    log_truncation(
        lcd.write_text(banner_text().as_bytes())
            .context("failed to write banner")?,
    );
    Ok(())
}

/// Buffer size for a read of `count` bytes; zero means the whole display
fn read_len(count: Option<usize>) -> usize {
    count.filter(|&n| n > 0).unwrap_or(DISPLAY_TEXT_LEN)
}

fn banner_text() -> String {
    format!("(@ @) smclcd\n(.\".) {}\n", env!("CARGO_PKG_VERSION"))
}

fn trim_line_breaks(text: &[u8]) -> String {
    String::from_utf8_lossy(text).trim_end_matches('\n').to_string()
}

fn log_truncation(transfer: Transfer) {
    if let Transfer::EndOfDisplay(n) = transfer {
        debug!("End of display reached after {} bytes", n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_display_length() {
        assert_eq!(DISPLAY_TEXT_LEN, 34);
    }

    #[test]
    fn test_read_len_zero_reads_whole_display() {
        assert_eq!(read_len(Some(0)), DISPLAY_TEXT_LEN);
        assert_eq!(read_len(None), DISPLAY_TEXT_LEN);
        assert_eq!(read_len(Some(5)), 5);
    }

    #[test]
    fn test_trim_line_breaks() {
        assert_eq!(
            trim_line_breaks(b"Hello           \nWorld           \n"),
            "Hello           \nWorld           "
        );
        assert_eq!(trim_line_breaks(b"\n\n"), "");
    }

    #[test]
    fn test_banner_fits_display() {
        let text = banner_text();
        let lines: Vec<&str> = text.trim_end().lines().collect();
        assert_eq!(lines.len(), LINES as usize);
        assert!(lines.iter().all(|line| line.len() <= COLUMNS as usize));
        assert!(lines[1].ends_with(env!("CARGO_PKG_VERSION")));
    }
}
