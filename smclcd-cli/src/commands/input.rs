//! `input` - print key events as they arrive

use anyhow::{Context, Result};
use log::warn;
use smclcd_core::{Error, Key};

use super::Target;

/// Print a numbered table of key events until the transport fails
pub fn run(target: &Target) -> Result<()> {
    let mut lcd = target.open()?;
    // waits for the user, not for a response
    lcd.set_response_timeout(None);

    println!("{}", format_row("Sequence", "Key Code", "Key Event"));
    let mut sequence = 0u64;
    loop {
        match lcd.get_input() {
            Ok(key) => {
                println!("{}", format_key(sequence, &key));
                sequence += 1;
            }
            Err(Error::UnknownKey { code, event }) => {
                warn!("Ignoring unknown key report (code {:#04x}, event {:#04x})", code, event);
            }
            Err(err) => return Err(err).context("failed to read key input"),
        }
    }
}

fn format_key(sequence: u64, key: &Key) -> String {
    format_row(&sequence.to_string(), &key.code.to_string(), &key.event.to_string())
}

fn format_row(sequence: &str, code: &str, event: &str) -> String {
    format!("{:<10}{:<10}{}", sequence, code, event)
}
