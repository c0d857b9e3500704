//! Error types for HID transport operations

use thiserror::Error;

/// HID transport error type
#[derive(Error, Debug)]
pub enum TransportError {
    /// Error reported by hidapi (open, read, write)
    #[error("HID error: {0}")]
    Hid(#[from] hidapi::HidError),

    /// Device accepted fewer bytes than a full report
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    /// Device returned a partial report
    #[error("short read: {read} of {expected} bytes")]
    ShortRead { read: usize, expected: usize },

    /// Device path contains an interior NUL byte
    #[error("invalid device path: {0}")]
    InvalidPath(String),
}
