//! Subcommand handlers

pub mod display;
pub mod info;
pub mod input;
pub mod watch;

use std::time::Duration;

use anyhow::{Context, Result};
use smclcd_core::{Backlight, CursorStyle, HidApi, HidTransport, Lcd, Selector};

use crate::config::{Config, DeviceConfig};

/// The panel a command talks to
pub struct Target {
    selector: Selector,
    response_timeout: Option<Duration>,
}

impl Target {
    /// Resolve the panel from configuration and command-line flags
    ///
    /// `--path` or `--serial` on the command line replace the configured
    /// device entirely.
    pub fn new(config: &Config, path: Option<String>, serial: Option<String>) -> Self {
        let flags = DeviceConfig { path, serial };
        let device = if flags.is_empty() {
            &config.device
        } else {
            &flags
        };

        Self {
            selector: device.selector(),
            response_timeout: config.session.response_timeout(),
        }
    }

    /// Open a session with its own hidapi context
    pub fn open(&self) -> Result<Lcd<HidTransport>> {
        let api = HidApi::new().context("failed to initialize hidapi")?;
        self.open_with(&api)
    }

    /// Open a session through a shared hidapi context
    pub fn open_with(&self, api: &HidApi) -> Result<Lcd<HidTransport>> {
        let mut lcd = Lcd::open_with(api, &self.selector)
            .with_context(|| format!("failed to open LCD panel ({})", self.selector))?;
        lcd.set_response_timeout(self.response_timeout);
        Ok(lcd)
    }
}

/// Cursor style argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CursorArg {
    Off,
    Block,
    Underline,
    Both,
}

impl From<CursorArg> for CursorStyle {
    fn from(arg: CursorArg) -> Self {
        match arg {
            CursorArg::Off => CursorStyle::Off,
            CursorArg::Block => CursorStyle::Block,
            CursorArg::Underline => CursorStyle::Underline,
            CursorArg::Both => CursorStyle::Both,
        }
    }
}

/// Backlight state argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BacklightArg {
    Off,
    On,
}

impl From<BacklightArg> for Backlight {
    fn from(arg: BacklightArg) -> Self {
        match arg {
            BacklightArg::Off => Backlight::Off,
            BacklightArg::On => Backlight::On,
        }
    }
}
