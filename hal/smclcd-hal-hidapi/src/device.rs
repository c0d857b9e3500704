//! HID device handle and discovery

use std::ffi::CString;
use std::fmt;
use std::time::Duration;

use hidapi::{HidApi, HidDevice};
use log::debug;

use smclcd_hal::{ReportRx, ReportTx, PRODUCT_ID, VENDOR_ID};
use smclcd_protocol::{Report, REPORT_LEN};

use crate::error::TransportError;

/// Which panel to open
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// First panel found
    #[default]
    First,
    /// Panel with the given USB serial number
    Serial(String),
    /// Platform device path (e.g. `/dev/hidraw3`)
    Path(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::First => write!(f, "first {:04x}:{:04x}", VENDOR_ID, PRODUCT_ID),
            Selector::Serial(serial) => write!(f, "serial {}", serial),
            Selector::Path(path) => write!(f, "path {}", path),
        }
    }
}

/// A panel opened through hidapi
pub struct HidTransport {
    device: HidDevice,
}

impl HidTransport {
    /// Open the panel chosen by `selector`
    pub fn open(api: &HidApi, selector: &Selector) -> Result<Self, TransportError> {
        debug!("Opening LCD panel ({})", selector);
        let device = match selector {
            Selector::First => api.open(VENDOR_ID, PRODUCT_ID)?,
            Selector::Serial(serial) => api.open_serial(VENDOR_ID, PRODUCT_ID, serial)?,
            Selector::Path(path) => {
                let path =
                    CString::new(path.as_str()).map_err(|_| TransportError::InvalidPath(path.clone()))?;
                api.open_path(&path)?
            }
        };
        Ok(Self::from_device(device))
    }

    /// Wrap an already opened device
    pub fn from_device(device: HidDevice) -> Self {
        Self { device }
    }

    fn check_read(read: usize) -> Result<(), TransportError> {
        if read != REPORT_LEN {
            return Err(TransportError::ShortRead {
                read,
                expected: REPORT_LEN,
            });
        }
        Ok(())
    }
}

impl ReportTx for HidTransport {
    type Error = TransportError;

    fn write_report(&mut self, report: &Report) -> Result<(), Self::Error> {
        let written = self.device.write(report)?;
        if written != REPORT_LEN {
            return Err(TransportError::ShortWrite {
                written,
                expected: REPORT_LEN,
            });
        }
        Ok(())
    }
}

impl ReportRx for HidTransport {
    type Error = TransportError;

    fn read_report(&mut self, report: &mut Report) -> Result<(), Self::Error> {
        let read = self.device.read(report)?;
        Self::check_read(read)
    }

    fn read_report_timeout(
        &mut self,
        report: &mut Report,
        timeout: Duration,
    ) -> Result<bool, Self::Error> {
        let millis = timeout.as_millis().min(i32::MAX as u128) as i32;
        match self.device.read_timeout(report, millis)? {
            0 => Ok(false),
            read => Self::check_read(read).map(|_| true),
        }
    }
}

/// A compatible panel found during enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSummary {
    pub path: String,
    pub manufacturer: String,
    pub product: String,
    pub serial: String,
}

/// List every attached panel
pub fn enumerate(api: &HidApi) -> Vec<DeviceSummary> {
    api.device_list()
        .filter(|info| info.vendor_id() == VENDOR_ID && info.product_id() == PRODUCT_ID)
        .map(|info| DeviceSummary {
            path: info.path().to_string_lossy().into_owned(),
            manufacturer: info.manufacturer_string().unwrap_or_default().trim().to_string(),
            product: info.product_string().unwrap_or_default().trim().to_string(),
            serial: info.serial_number().unwrap_or_default().trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::First.to_string(), "first 15d9:1133");
        assert_eq!(
            Selector::Serial("0001".to_string()).to_string(),
            "serial 0001"
        );
        assert_eq!(
            Selector::Path("/dev/hidraw0".to_string()).to_string(),
            "path /dev/hidraw0"
        );
    }

    #[test]
    fn test_short_read_rejected() {
        assert!(HidTransport::check_read(REPORT_LEN).is_ok());
        assert!(matches!(
            HidTransport::check_read(8),
            Err(TransportError::ShortRead { read: 8, expected: 16 })
        ));
    }
}
