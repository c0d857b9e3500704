//! Backlight timeout task
//!
//! Waits for key input on its own session. The first key event turns
//! the backlight on, and it goes off again once no key has arrived for
//! the timeout. Every key event restarts the timeout.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use smclcd_core::{Backlight, Error, HidTransport, Lcd};

/// Start the task on a named thread
pub fn spawn(lcd: Lcd<HidTransport>, timeout: Duration) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("backlight".to_string())
        .spawn(move || backlight_task(lcd, timeout))
}

fn backlight_task(mut lcd: Lcd<HidTransport>, timeout: Duration) {
    info!("Backlight task started ({}s timeout)", timeout.as_secs());
    let mut timer = BacklightTimer::new(timeout);

    loop {
        lcd.set_response_timeout(timer.wait(Instant::now()));

        let change = match lcd.get_input() {
            Ok(key) => {
                debug!("Key {} {}", key.code, key.event);
                timer.key(Instant::now())
            }
            Err(Error::Timeout(_)) => timer.expire(),
            Err(Error::UnknownKey { code, event }) => {
                warn!("Ignoring unknown key report (code {:#04x}, event {:#04x})", code, event);
                None
            }
            Err(err) => {
                error!("Backlight task stopped: {}", err);
                return;
            }
        };

        if let Some(state) = change {
            debug!("Backlight {}", state);
            if let Err(err) = lcd.set_backlight(state) {
                error!("Backlight task stopped: {}", err);
                return;
            }
        }
    }
}

/// When the backlight is lit and when it goes out
#[derive(Debug)]
struct BacklightTimer {
    timeout: Duration,
    off_at: Option<Instant>,
}

impl BacklightTimer {
    fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            off_at: None,
        }
    }

    /// How long to wait for the next key; `None` waits forever
    fn wait(&self, now: Instant) -> Option<Duration> {
        self.off_at.map(|at| at.saturating_duration_since(now))
    }

    /// Record a key event; returns `On` if the backlight was off
    fn key(&mut self, now: Instant) -> Option<Backlight> {
        let lit = self.off_at.replace(now + self.timeout).is_some();
        (!lit).then_some(Backlight::On)
    }

    /// Record an expired wait; returns `Off` if the backlight was on
    fn expire(&mut self) -> Option<Backlight> {
        self.off_at.take().map(|_| Backlight::Off)
    }
}
