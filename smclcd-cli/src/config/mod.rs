//! Configuration for the command-line front end
//!
//! Settings start from the embedded `smclcd.toml`. A user file replaces
//! whatever keys it sets and command-line flags win over both.

pub mod loader;

use std::time::Duration;

use serde::Deserialize;
use smclcd_core::Selector;

pub use loader::load;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub device: DeviceConfig,
    pub session: SessionConfig,
    pub watch: WatchConfig,
}

/// Which panel to open
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    pub path: Option<String>,
    pub serial: Option<String>,
}

impl DeviceConfig {
    /// Returns true when neither a path nor a serial number is set
    pub fn is_empty(&self) -> bool {
        non_empty(&self.path).is_none() && non_empty(&self.serial).is_none()
    }

    /// Panel selector; a path wins over a serial number
    pub fn selector(&self) -> Selector {
        if let Some(path) = non_empty(&self.path) {
            Selector::Path(path.to_string())
        } else if let Some(serial) = non_empty(&self.serial) {
            Selector::Serial(serial.to_string())
        } else {
            Selector::First
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Session settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Response wait in milliseconds, 0 waits forever
    pub response_timeout_ms: u64,
}

impl SessionConfig {
    pub fn response_timeout(&self) -> Option<Duration> {
        match self.response_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

/// Backlight handling while watching a command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BacklightMode {
    /// Backlight stays on
    #[default]
    On,
    /// Backlight stays off
    Off,
    /// Off until a key is pressed, then on for the backlight timeout
    Auto,
}

/// `watch` settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    pub interval_secs: u64,
    pub backlight: BacklightMode,
    pub backlight_timeout_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: 30,
            backlight: BacklightMode::On,
            backlight_timeout_secs: 10,
        }
    }
}

impl WatchConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn backlight_timeout(&self) -> Duration {
        Duration::from_secs(self.backlight_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::loader::{parse, EMBEDDED_CONFIG};
    use super::*;

    #[test]
    fn test_embedded_matches_defaults() {
        let config = parse(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse(
            r#"
            [watch]
            backlight = "auto"
            "#,
        )
        .unwrap();

        assert_eq!(config.watch.backlight, BacklightMode::Auto);
        assert_eq!(config.watch.interval_secs, 30);
        assert_eq!(config.session.response_timeout(), None);
        assert_eq!(config.device.selector(), Selector::First);
    }

    #[test]
    fn test_unknown_backlight_mode_rejected() {
        assert!(parse("[watch]\nbacklight = \"blink\"\n").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse("[session]\nresponse_timeout = 5\n").is_err());
    }

    #[test]
    fn test_selector_precedence() {
        let device = DeviceConfig {
            path: Some("/dev/hidraw1".to_string()),
            serial: Some("0001".to_string()),
        };
        assert_eq!(device.selector(), Selector::Path("/dev/hidraw1".to_string()));

        let device = DeviceConfig {
            path: Some(String::new()),
            serial: Some("0001".to_string()),
        };
        assert_eq!(device.selector(), Selector::Serial("0001".to_string()));
        assert!(!device.is_empty());
        assert!(DeviceConfig::default().is_empty());
    }

    #[test]
    fn test_durations() {
        let session = SessionConfig {
            response_timeout_ms: 250,
        };
        assert_eq!(session.response_timeout(), Some(Duration::from_millis(250)));

        let watch = WatchConfig::default();
        assert_eq!(watch.interval(), Duration::from_secs(30));
        assert_eq!(watch.backlight_timeout(), Duration::from_secs(10));
    }
}
