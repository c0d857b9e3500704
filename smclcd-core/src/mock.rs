//! In-memory panel for session tests
//!
//! Decodes every output report, keeps a copy of the display contents
//! and answers LCD reads from it. Other responses and key input are
//! queued by the test.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use smclcd_hal::{ReportRx, ReportTx};
use smclcd_protocol::{checksum, Report, CELLS, INPUT_REPORT_ID, REPORT_LEN};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockError {
    #[error("no input report queued")]
    Disconnected,
}

/// Flood reports served before the mock gives up
const FLOOD_LIMIT: usize = 10_000;

pub struct MockTransport {
    /// Every output report in the order it was written
    pub sent: Vec<Report>,
    /// Position and length of each display write
    pub writes: Vec<(usize, usize)>,
    pub backlight: bool,
    inbound: VecDeque<Report>,
    flood: Option<Report>,
    flooded: usize,
    display: [u8; CELLS as usize],
    address: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            writes: Vec::new(),
            backlight: true,
            inbound: VecDeque::new(),
            flood: None,
            flooded: 0,
            display: [b' '; CELLS as usize],
            address: 0,
        }
    }

    pub fn push_inbound(&mut self, report: Report) {
        self.inbound.push_back(report);
    }

    /// Once the queue drains, keep answering timed reads with `report`
    ///
    /// Each flood report takes up to a millisecond of the read timeout.
    pub fn flood(&mut self, report: Report) {
        self.flood = Some(report);
    }

    /// One display line as text
    pub fn line(&self, row: usize) -> String {
        String::from_utf8_lossy(&self.display[row * 16..(row + 1) * 16]).into_owned()
    }

    fn handle(&mut self, report: &Report) {
        match report[1..] {
            [0x02, 0x00, 0x01, ..] => {
                self.display = [b' '; CELLS as usize];
                self.address = 0;
            }
            [0x02, 0x00, 0x02, ..] => self.address = 0,
            [0x02, 0x00, control, ..] if control >= 0x80 => {
                let control = control - 0x80;
                self.address = (control / 0x40) as usize * 16 + (control % 0x40) as usize;
            }
            [0x02, 0x02, ref data @ ..] => {
                let data = &data[..12];
                let len = data.iter().take_while(|&&b| b != 0).count();
                self.writes.push((self.address, len));
                for &byte in &data[..len] {
                    if self.address < self.display.len() {
                        self.display[self.address] = byte;
                    }
                    self.address += 1;
                }
            }
            [0x02, 0x03, ..] => {
                let mut response = [0u8; REPORT_LEN];
                response[0] = INPUT_REPORT_ID;
                response[1] = 0x02;
                response[2] = 0x03;
                for i in 0..12 {
                    response[3 + i] = self.display.get(self.address + i).copied().unwrap_or(b' ');
                }
                response[15] = checksum(&response[..15]);
                self.inbound.push_back(response);
            }
            [0x07, state, ..] => self.backlight = state == 0x01,
            _ => {}
        }
    }
}

impl ReportTx for MockTransport {
    type Error = MockError;

    fn write_report(&mut self, report: &Report) -> Result<(), MockError> {
        self.sent.push(*report);
        self.handle(report);
        Ok(())
    }
}

impl ReportRx for MockTransport {
    type Error = MockError;

    fn read_report(&mut self, report: &mut Report) -> Result<(), MockError> {
        *report = self.inbound.pop_front().ok_or(MockError::Disconnected)?;
        Ok(())
    }

    fn read_report_timeout(
        &mut self,
        report: &mut Report,
        timeout: Duration,
    ) -> Result<bool, MockError> {
        if let Some(next) = self.inbound.pop_front() {
            *report = next;
            return Ok(true);
        }
        match self.flood {
            Some(_) if self.flooded >= FLOOD_LIMIT => Err(MockError::Disconnected),
            Some(next) => {
                thread::sleep(timeout.min(Duration::from_millis(1)));
                self.flooded += 1;
                *report = next;
                Ok(true)
            }
            None => {
                thread::sleep(timeout);
                Ok(false)
            }
        }
    }
}

fn input_report(command: &[u8]) -> Report {
    let mut report = [0u8; REPORT_LEN];
    report[0] = INPUT_REPORT_ID;
    report[1..1 + command.len()].copy_from_slice(command);
    report[15] = checksum(&report[..15]);
    report
}

pub fn key_report(code: u8, event: u8) -> Report {
    input_report(&[0x03, code, event])
}

pub fn version_report(major: u8, minor: u8) -> Report {
    input_report(&[0x01, major, minor])
}
