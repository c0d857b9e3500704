//! Report transport abstractions
//!
//! Provides traits for exchanging fixed-length reports with the panel.
//! Reports are delivered in order; unrelated input reports (key presses)
//! may arrive between a command and its response.

use core::time::Duration;

use smclcd_protocol::Report;

/// Report transmitter
pub trait ReportTx {
    /// Error type for transmit operations
    type Error;

    /// Write one complete report
    ///
    /// Blocks until the report has been handed to the device.
    fn write_report(&mut self, report: &Report) -> Result<(), Self::Error>;
}

/// Report receiver
pub trait ReportRx {
    /// Error type for receive operations
    type Error;

    /// Read the next input report
    ///
    /// Blocks until a report arrives or the transport fails.
    fn read_report(&mut self, report: &mut Report) -> Result<(), Self::Error>;

    /// Read the next input report, waiting at most `timeout`
    ///
    /// Returns `Ok(false)` if no report arrived in time.
    fn read_report_timeout(
        &mut self,
        report: &mut Report,
        timeout: Duration,
    ) -> Result<bool, Self::Error>;
}

/// Combined report interface
///
/// For transports that send and receive over the same handle with a single
/// error type.
pub trait ReportTransport: ReportTx + ReportRx<Error = <Self as ReportTx>::Error> {}

// Blanket implementation
impl<T> ReportTransport for T where T: ReportTx + ReportRx<Error = <T as ReportTx>::Error> {}
