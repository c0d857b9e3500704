//! `std::io` adapters for the display session
//!
//! `write` reports the number of input bytes consumed, line breaks
//! included, so `write_all` and `write!` behave as expected. Once the end
//! of the display is reached `write` returns 0 and `read` returns 0.

use std::io;

use smclcd_hal::{ReportTransport, ReportTx};

use crate::lcd::Lcd;

impl<T> io::Write for Lcd<T>
where
    T: ReportTransport,
    <T as ReportTx>::Error: std::error::Error + Send + Sync + 'static,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let (_, consumed) = self.write_lines(buf)?;
        Ok(consumed)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T> io::Read for Lcd<T>
where
    T: ReportTransport,
    <T as ReportTx>::Error: std::error::Error + Send + Sync + 'static,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_text(buf)?.count())
    }
}
