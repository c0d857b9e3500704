//! Display session for the SuperMicro LCD panel
//!
//! This crate drives the 2x16 character panel over any transport that
//! implements the `smclcd-hal` report traits:
//!
//! - [`Lcd`] owns the transport and a mirror of the panel cursor
//! - Text writes are split on line breaks and chunked so no report crosses
//!   the 12-byte data limit or a display line
//! - Reads rebuild the two display lines as text separated by `\n`
//! - Key presses are filtered out of the shared input stream
//!
//! `Lcd` also implements [`std::io::Write`] and [`std::io::Read`], so
//! `write!` and `read_to_string` work directly on a session.
//!
//! A session is not synchronized. Polling keys while another thread
//! writes needs a second session or external locking.

mod error;
mod io;
mod lcd;

#[cfg(test)]
mod mock;

pub use error::{Error, Result};
pub use lcd::{CursorState, Lcd, Transfer};

pub use smclcd_protocol::{Backlight, Cursor, CursorStyle, Key, KeyCode, KeyEvent, Version};

#[cfg(feature = "hidapi")]
pub use lcd::list_devices;

#[cfg(feature = "hidapi")]
pub use smclcd_hal_hidapi::{DeviceSummary, HidApi, HidTransport, Selector};
