//! Display session
//!
//! [`Lcd`] keeps a host-side copy of the panel cursor. The panel never
//! reports its cursor, so every chunk written or read is followed by an
//! explicit cursor move computed from that copy. This also stops the
//! controller from running into its hidden address range at the end of
//! a line.

use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use smclcd_hal::{ReportTransport, ReportTx};
use smclcd_protocol::{
    Backlight, Command, Cursor, CursorError, CursorStyle, InputReport, Key, Version, COLUMNS,
    DATA_LEN, REPORT_LEN,
};

use crate::error::{Error, Result};

/// What the session knows about the panel cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// No clear or home has been issued since the session opened
    Unknown,
    /// Position tracked since the last clear, home or move
    Known(Cursor),
}

/// Outcome of a text transfer
///
/// Both variants carry the number of bytes produced: display bytes for
/// writes (padding included), text bytes for reads (line breaks
/// included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// Everything was transferred
    Complete(usize),
    /// The end of the display was reached first
    EndOfDisplay(usize),
}

impl Transfer {
    /// Bytes transferred
    pub fn count(&self) -> usize {
        match *self {
            Transfer::Complete(n) | Transfer::EndOfDisplay(n) => n,
        }
    }

    /// Returns true when the end of the display cut the transfer short
    pub fn is_end_of_display(&self) -> bool {
        matches!(self, Transfer::EndOfDisplay(_))
    }
}

/// Session with one LCD panel
pub struct Lcd<T> {
    transport: T,
    cursor: CursorState,
    response_timeout: Option<Duration>,
}

impl<T> Lcd<T>
where
    T: ReportTransport,
    <T as ReportTx>::Error: std::error::Error + Send + Sync + 'static,
{
    /// Start a session on an open transport
    ///
    /// The cursor position is unknown until the first clear or home.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cursor: CursorState::Unknown,
            response_timeout: None,
        }
    }

    /// Wait at most `timeout` for command responses and key input
    ///
    /// `None` waits forever.
    pub fn set_response_timeout(&mut self, timeout: Option<Duration>) {
        self.response_timeout = timeout;
    }

    pub fn response_timeout(&self) -> Option<Duration> {
        self.response_timeout
    }

    /// Tracked cursor, if known
    pub fn cursor(&self) -> Option<Cursor> {
        match self.cursor {
            CursorState::Known(cursor) => Some(cursor),
            CursorState::Unknown => None,
        }
    }

    pub fn cursor_state(&self) -> CursorState {
        self.cursor
    }

    /// Close the session and return the transport
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Close the session
    pub fn close(self) {
        debug!("Closing LCD session");
    }

    /// Clear the display and move the cursor to the origin
    pub fn clear(&mut self) -> Result<()> {
        self.send(&Command::Clear)?;
        self.cursor = CursorState::Known(Cursor::origin());
        Ok(())
    }

    /// Move the cursor to the origin without touching the contents
    pub fn home(&mut self) -> Result<()> {
        self.send(&Command::Home)?;
        self.cursor = CursorState::Known(Cursor::origin());
        Ok(())
    }

    pub fn set_cursor_style(&mut self, style: CursorStyle) -> Result<()> {
        self.send(&Command::CursorStyle(style))
    }

    pub fn set_backlight(&mut self, state: Backlight) -> Result<()> {
        self.send(&Command::Backlight(state))
    }

    /// Move the cursor `n` cells (negative moves backwards)
    ///
    /// A negative target fails with [`Error::NegativePosition`] and leaves
    /// the cursor alone. Moving past the last cell commits the move and
    /// fails with [`Error::EndOfDisplay`] without contacting the panel.
    pub fn advance_cursor(&mut self, n: i32) -> Result<()> {
        let mut cursor = self.current_cursor();
        let moved = cursor.advance(n);
        self.commit_cursor(cursor, moved)
    }

    /// Move the cursor to `row`, `col`
    ///
    /// Same failure rules as [`Lcd::advance_cursor`]. The target is
    /// absolute, so an unknown cursor needs no assumption here.
    pub fn move_cursor(&mut self, row: i32, col: i32) -> Result<()> {
        let mut cursor = Cursor::origin();
        let moved = cursor.move_to(row, col);
        self.commit_cursor(cursor, moved)
    }

    /// Write text at the cursor
    ///
    /// Each `\n` pads the rest of the current line with spaces. The count
    /// covers display bytes, so `"AB\nCD"` from the origin writes 18.
    /// Bytes outside printable ASCII show up as `?`.
    pub fn write_text(&mut self, text: &[u8]) -> Result<Transfer> {
        self.write_lines(text).map(|(transfer, _)| transfer)
    }

    /// Read display contents at the cursor into `buf`
    ///
    /// Lines are separated by `\n`, which counts towards the total. A
    /// buffer of `lines * (columns + 1)` bytes from the origin receives
    /// the whole display.
    pub fn read_text(&mut self, buf: &mut [u8]) -> Result<Transfer> {
        let mut n = 0;
        while n < buf.len() {
            let cursor = self.current_cursor();
            if cursor.is_end_of_display() {
                return Ok(Transfer::EndOfDisplay(n));
            }

            let remaining = cursor.remaining_in_line();
            let m = (buf.len() - n).min(remaining).min(DATA_LEN);

            self.send(&Command::Read)?;
            let data = self.recv_matching(|report| match report {
                InputReport::LcdData(data) => Some(data),
                _ => None,
            })?;

            buf[n..n + m].copy_from_slice(&data[..m]);
            n += m;
            self.step(m)?;

            if m == remaining && n < buf.len() {
                buf[n] = b'\n';
                n += 1;
            }
        }
        Ok(Transfer::Complete(n))
    }

    /// Query the firmware version
    pub fn version(&mut self) -> Result<Version> {
        self.send(&Command::Version)?;
        self.recv_matching(|report| match report {
            InputReport::Version(version) => Some(version),
            _ => None,
        })
    }

    /// Wait for the next key press or release
    ///
    /// Other reports arriving meanwhile are dropped.
    pub fn get_input(&mut self) -> Result<Key> {
        self.recv_matching(|report| match report {
            InputReport::Key(key) => Some(Ok(key)),
            InputReport::UnknownKey { code, event } => Some(Err(Error::UnknownKey { code, event })),
            _ => None,
        })?
    }

    /// Write `text` and also return how many input bytes were consumed
    pub(crate) fn write_lines(&mut self, text: &[u8]) -> Result<(Transfer, usize)> {
        let mut written = 0;
        let mut consumed = 0;
        let mut lines = text.split(|&byte| byte == b'\n').peekable();

        while let Some(line) = lines.next() {
            let remaining = self.current_cursor().remaining_in_line();

            match self.write_raw(line)? {
                Transfer::Complete(n) => written += n,
                Transfer::EndOfDisplay(n) => {
                    return Ok((Transfer::EndOfDisplay(written + n), consumed + n));
                }
            }
            consumed += line.len();

            if lines.peek().is_none() {
                break;
            }

            if line.len() < remaining {
                let padding = [b' '; COLUMNS as usize];
                match self.write_raw(&padding[..remaining - line.len()])? {
                    Transfer::Complete(n) => written += n,
                    Transfer::EndOfDisplay(n) => {
                        return Ok((Transfer::EndOfDisplay(written + n), consumed));
                    }
                }
            }
            consumed += 1;
        }

        Ok((Transfer::Complete(written), consumed))
    }

    fn write_raw(&mut self, data: &[u8]) -> Result<Transfer> {
        let mut n = 0;
        while n < data.len() {
            let cursor = self.current_cursor();
            if cursor.is_end_of_display() {
                return Ok(Transfer::EndOfDisplay(n));
            }

            let m = (data.len() - n).min(cursor.remaining_in_line()).min(DATA_LEN);
            self.send(&Command::Write(&data[n..n + m]))?;
            n += m;
            self.step(m)?;
        }
        Ok(Transfer::Complete(n))
    }

    /// Advance past `n` transferred cells and resync the panel cursor
    ///
    /// Reaching the end of the display is left for the caller's next
    /// boundary check.
    fn step(&mut self, n: usize) -> Result<()> {
        let n = i32::try_from(n).map_err(|_| Error::EndOfDisplay)?;
        match self.advance_cursor(n) {
            Err(Error::EndOfDisplay) => Ok(()),
            other => other,
        }
    }

    fn commit_cursor(
        &mut self,
        cursor: Cursor,
        moved: core::result::Result<(), CursorError>,
    ) -> Result<()> {
        if let Err(CursorError::NegativePosition(pos)) = moved {
            return Err(Error::NegativePosition(pos));
        }
        self.cursor = CursorState::Known(cursor);
        moved?;
        self.send(&Command::MoveCursor(cursor))
    }

    fn current_cursor(&mut self) -> Cursor {
        match self.cursor {
            CursorState::Known(cursor) => cursor,
            CursorState::Unknown => {
                warn!("Cursor position unknown, assuming origin");
                let cursor = Cursor::origin();
                self.cursor = CursorState::Known(cursor);
                cursor
            }
        }
    }

    fn send(&mut self, command: &Command<'_>) -> Result<()> {
        let report = command.to_report()?;
        trace!("LCD <- {:02x?}", report);
        self.transport
            .write_report(&report)
            .map_err(Error::transport)
    }

    /// Read reports until `select` accepts one
    ///
    /// Reports `select` rejects are dropped. With a response timeout set,
    /// the deadline covers the whole wait, not each report.
    fn recv_matching<R>(&mut self, mut select: impl FnMut(InputReport) -> Option<R>) -> Result<R> {
        let deadline = self
            .response_timeout
            .map(|timeout| (timeout, Instant::now() + timeout));
        let mut report = [0u8; REPORT_LEN];

        loop {
            match deadline {
                None => self
                    .transport
                    .read_report(&mut report)
                    .map_err(Error::transport)?,
                Some((timeout, at)) => {
                    let left = at.saturating_duration_since(Instant::now());
                    if left.is_zero()
                        || !self
                            .transport
                            .read_report_timeout(&mut report, left)
                            .map_err(Error::transport)?
                    {
                        return Err(Error::Timeout(timeout));
                    }
                }
            }
            trace!("LCD -> {:02x?}", report);

            match InputReport::parse(&report).and_then(&mut select) {
                Some(value) => return Ok(value),
                None => debug!("Discarding input report {:02x?}", report),
            }
        }
    }
}

#[cfg(feature = "hidapi")]
mod hid {
    use smclcd_hal_hidapi::{enumerate, DeviceSummary, HidApi, HidTransport, Selector};

    use super::Lcd;
    use crate::error::{Error, Result};

    impl Lcd<HidTransport> {
        /// Open the panel with the given USB serial number
        pub fn open(serial: &str) -> Result<Self> {
            let api = HidApi::new().map_err(Error::transport)?;
            Self::open_with(&api, &Selector::Serial(serial.to_string()))
        }

        /// Open the first panel found
        pub fn open_first() -> Result<Self> {
            let api = HidApi::new().map_err(Error::transport)?;
            Self::open_with(&api, &Selector::First)
        }

        /// Open the panel at a platform device path
        pub fn open_path(path: &str) -> Result<Self> {
            let api = HidApi::new().map_err(Error::transport)?;
            Self::open_with(&api, &Selector::Path(path.to_string()))
        }

        /// Open a panel through an existing hidapi context
        pub fn open_with(api: &HidApi, selector: &Selector) -> Result<Self> {
            let transport = HidTransport::open(api, selector).map_err(Error::transport)?;
            Ok(Self::new(transport))
        }
    }

    /// List connected panels
    pub fn list_devices() -> Result<Vec<DeviceSummary>> {
        let api = HidApi::new().map_err(Error::transport)?;
        Ok(enumerate(&api))
    }
}

#[cfg(feature = "hidapi")]
pub use hid::list_devices;
