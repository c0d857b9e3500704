//! SuperMicro LCD Transport Abstraction
//!
//! This crate defines the transport traits the display session is written
//! against. A transport moves whole 16-byte reports; it knows nothing about
//! commands, cursors or key events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  smclcd-core (display session)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  smclcd-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  smclcd-hal-  │       │   in-memory   │
//! │    hidapi     │       │  test doubles │
//! └───────────────┘       └───────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod report;

pub use report::{ReportRx, ReportTransport, ReportTx};

/// USB vendor ID of the panel (SMC)
pub const VENDOR_ID: u16 = 0x15D9;

/// USB product ID of the panel (SuperMicro LCD Display)
pub const PRODUCT_ID: u16 = 0x1133;
