//! hidapi transport for the SuperMicro LCD panel
//!
//! Implements the `smclcd-hal` report traits on top of a `hidapi` device
//! handle and provides device discovery by USB vendor and product ID.
//!
//! The handle is closed when the transport is dropped.

mod device;
mod error;

pub use device::{enumerate, DeviceSummary, HidTransport, Selector};
pub use error::TransportError;

// Re-exported so callers do not need their own hidapi dependency
pub use hidapi::HidApi;
