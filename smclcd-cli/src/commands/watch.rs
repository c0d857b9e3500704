//! `watch` - show periodic command output on the display

use std::process::{Command, Stdio};
use std::thread;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use smclcd_core::{Backlight, HidApi, Transfer};

use super::Target;
use crate::config::{BacklightMode, WatchConfig};
use crate::tasks::backlight;

/// Run `command` every interval and write its stdout after a clear
///
/// Returns when the command fails or the panel goes away.
pub fn run(target: &Target, watch: &WatchConfig, command: &[String]) -> Result<()> {
    let (program, args) = command.split_first().context("no command given")?;

    let api = HidApi::new().context("failed to initialize hidapi")?;
    let mut lcd = target.open_with(&api)?;

    match watch.backlight {
        BacklightMode::On => lcd.set_backlight(Backlight::On)?,
        BacklightMode::Off => lcd.set_backlight(Backlight::Off)?,
        BacklightMode::Auto => {
            lcd.set_backlight(Backlight::Off)?;
            // key polling blocks, so it gets its own session
            let keys = target.open_with(&api)?;
            backlight::spawn(keys, watch.backlight_timeout())
                .context("failed to start backlight task")?;
        }
    }

    info!(
        "Watching `{}` every {}s",
        command.join(" "),
        watch.interval_secs
    );

    loop {
        let output = Command::new(program)
            .args(args)
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("failed to execute {}", program))?;
        if !output.status.success() {
            bail!("`{}` failed: {}", command.join(" "), output.status);
        }

        lcd.clear().context("failed to clear display")?;
        match lcd.write_text(&output.stdout).context("failed to write output")? {
            Transfer::Complete(n) => debug!("Wrote {} bytes", n),
            Transfer::EndOfDisplay(n) => debug!("Output cut at end of display after {} bytes", n),
        }

        thread::sleep(watch.interval());
    }
}
