//! SuperMicro LCD HID Report Protocol
//!
//! This crate defines the report protocol spoken by the 2x16 character LCD
//! panel found on SuperMicro chassis. The panel enumerates as a USB HID
//! device and exchanges fixed 16-byte reports in both directions.
//!
//! # Report Overview
//!
//! ```text
//! ┌──────┬──────────────────────────────┬──────────┐
//! │ ID   │ COMMAND / RESPONSE           │ CHECKSUM │
//! │ 1B   │ 14B (zero padded)            │ 1B       │
//! └──────┴──────────────────────────────┴──────────┘
//! ```
//!
//! Output reports carry ID `0xBB`, input reports carry ID `0xAA`. The
//! checksum is the two's complement of the byte sum of the first 15 bytes.
//!
//! The crate has no I/O of its own; it builds and parses reports and keeps
//! the cursor arithmetic for the 2x16 address space.

#![no_std]
#![deny(unsafe_code)]

pub mod commands;
pub mod cursor;
pub mod keys;
pub mod report;

pub use commands::{sanitize, Backlight, Command, CursorStyle};
pub use cursor::{Cursor, CursorError, CELLS, COLUMNS, LINES};
pub use keys::{Key, KeyCode, KeyEvent, Version};
pub use report::{
    build_output_report, checksum, parse_input_report, InputReport, Report, ReportError,
    COMMAND_LEN, DATA_LEN, INPUT_REPORT_ID, OUTPUT_REPORT_ID, REPORT_LEN,
};
