//! `list` and `version`

use anyhow::{Context, Result};

use super::Target;

/// Print a table of attached panels
pub fn list() -> Result<()> {
    let devices = smclcd_core::list_devices().context("failed to enumerate HID devices")?;
    if devices.is_empty() {
        log::info!("No compatible displays found");
        return Ok(());
    }

    let rows: Vec<[&str; 4]> = devices
        .iter()
        .map(|d| {
            [
                d.path.as_str(),
                d.manufacturer.as_str(),
                d.product.as_str(),
                d.serial.as_str(),
            ]
        })
        .collect();
    print!(
        "{}",
        render_table(["Path", "Manufacturer", "Product", "Serial Number"], &rows)
    );
    Ok(())
}

pub fn version(target: &Target) -> Result<()> {
    let mut lcd = target.open()?;
    let version = lcd.version().context("failed to query version")?;
    println!("LCD version {}", version);
    Ok(())
}

/// Left-aligned columns separated by two spaces
fn render_table<const N: usize>(header: [&str; N], rows: &[[&str; N]]) -> String {
    let mut widths = header.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows) {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == N {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
