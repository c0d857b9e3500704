//! Report encoding and decoding for the LCD panel.
//!
//! Report format (16 bytes in both directions):
//! - ID (1 byte): 0xBB for output reports, 0xAA for input reports
//! - COMMAND (14 bytes): command, optional sub-command, data; zero padded
//! - CHECKSUM (1 byte): two's complement of the sum of the first 15 bytes
//!
//! The panel interleaves key input reports with command responses on the
//! same endpoint, so inbound reports are matched by prefix and anything
//! else is dropped by the caller.

use heapless::Vec;

use crate::commands::{KEY_INPUT_PREFIX, READ_PREFIX, VERSION_PREFIX};
use crate::keys::{Key, Version};

/// Length of every report, inbound and outbound
pub const REPORT_LEN: usize = 16;

/// Report ID of reports sent by the panel
pub const INPUT_REPORT_ID: u8 = 0xAA;

/// Report ID of reports sent to the panel
pub const OUTPUT_REPORT_ID: u8 = 0xBB;

/// Bytes between the report ID and the checksum
pub const COMMAND_LEN: usize = REPORT_LEN - 2;

/// Display data carried by a single write or read report
pub const DATA_LEN: usize = COMMAND_LEN - 2;

/// A raw report as it crosses the HID endpoint
pub type Report = [u8; REPORT_LEN];

/// Errors that can occur while building reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportError {
    /// Command bytes exceed the 14-byte command area
    CommandTooLong,
}

impl core::fmt::Display for ReportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReportError::CommandTooLong => {
                write!(f, "command exceeds {} bytes", COMMAND_LEN)
            }
        }
    }
}

/// Calculate the checksum over `bytes`
///
/// Sums every byte modulo 256 and returns the two's complement, so that
/// appending the result makes the whole buffer sum to zero.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0u8, |sum, &byte| sum.wrapping_add(byte))
        .wrapping_neg()
}

/// Build an output report around `command`
///
/// The command is copied after the report ID, unused bytes stay zero and
/// the checksum is written last. The report is complete before anything
/// touches the transport.
pub fn build_output_report(command: &[u8]) -> Result<Report, ReportError> {
    if command.len() > COMMAND_LEN {
        return Err(ReportError::CommandTooLong);
    }

    let mut report = [0u8; REPORT_LEN];
    report[0] = OUTPUT_REPORT_ID;
    report[1..1 + command.len()].copy_from_slice(command);
    report[REPORT_LEN - 1] = checksum(&report[..REPORT_LEN - 1]);
    Ok(report)
}

/// Match an input report against the response `prefix`
///
/// Returns the bytes following the prefix up to (not including) the
/// checksum, or `None` when the report is something else and should be
/// discarded. The inbound checksum is not checked.
pub fn parse_input_report<'a>(report: &'a Report, prefix: &[u8]) -> Option<&'a [u8]> {
    if report[0] != INPUT_REPORT_ID {
        return None;
    }
    report[1..REPORT_LEN - 1].strip_prefix(prefix)
}

/// An input report sorted by what it answers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputReport {
    /// Response to a version query
    Version(Version),
    /// Display contents returned for an LCD read
    LcdData(Vec<u8, DATA_LEN>),
    /// Key press or release
    Key(Key),
    /// Key report carrying a code or event outside the known set
    UnknownKey { code: u8, event: u8 },
    /// Input report with a command byte this crate does not know
    Unrecognized,
}

impl InputReport {
    /// Classify an inbound report
    ///
    /// Returns `None` when the report does not carry the input report ID.
    pub fn parse(report: &Report) -> Option<Self> {
        if report[0] != INPUT_REPORT_ID {
            return None;
        }

        if let Some(payload) = parse_input_report(report, READ_PREFIX) {
            let mut data = Vec::new();
            // payload is exactly DATA_LEN bytes
            let _ = data.extend_from_slice(&payload[..DATA_LEN]);
            return Some(InputReport::LcdData(data));
        }

        if let Some(payload) = parse_input_report(report, VERSION_PREFIX) {
            return Some(InputReport::Version(Version::from_payload(payload)));
        }

        if let Some(payload) = parse_input_report(report, KEY_INPUT_PREFIX) {
            return Some(match Key::from_payload(payload) {
                Some(key) => InputReport::Key(key),
                None => InputReport::UnknownKey {
                    code: payload[0],
                    event: payload[1],
                },
            });
        }

        Some(InputReport::Unrecognized)
    }
}
