//! smclcd - drive the SuperMicro 2x16 LCD panel
//!
//! # Usage
//!
//! ```bash
//! # List attached panels
//! smclcd list
//!
//! # Write two lines
//! smclcd write --clear "Hello"
//! smclcd write -y 1 "World"
//!
//! # Print the display contents
//! smclcd read
//!
//! # Show uptime, refreshed every 10 seconds, lit on key press
//! smclcd watch --backlight auto -n 10 uptime
//! ```

mod commands;
mod config;
mod tasks;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BacklightArg, CursorArg, Target};
use config::BacklightMode;

/// SuperMicro LCD panel control
#[derive(Parser)]
#[command(name = "smclcd")]
#[command(version)]
#[command(about = "Control the SuperMicro 2x16 LCD panel")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Platform device path of the panel (e.g. /dev/hidraw3)
    #[arg(long, global = true)]
    path: Option<String>,

    /// USB serial number of the panel
    #[arg(long, global = true)]
    serial: Option<String>,

    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every report sent and received
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List compatible displays
    List,

    /// Clear the display
    Clear,

    /// Print the panel firmware version
    Version,

    /// Set the cursor style
    Cursor {
        #[arg(value_enum)]
        style: CursorArg,
    },

    /// Turn the backlight on or off
    Backlight {
        #[arg(value_enum)]
        state: BacklightArg,
    },

    /// Write to the display
    Write {
        /// Clear the display first
        #[arg(long)]
        clear: bool,

        /// Start column
        #[arg(short = 'x', value_name = "COL", default_value_t = 0)]
        col: u16,

        /// Start line
        #[arg(short = 'y', value_name = "LINE", default_value_t = 0)]
        line: u16,

        /// Words to write, joined by spaces
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Read from the display
    Read {
        /// Bytes to read (0 or omitted: the whole display)
        #[arg(short = 'n', value_name = "COUNT")]
        count: Option<usize>,

        /// Start column
        #[arg(short = 'x', value_name = "COL", default_value_t = 0)]
        col: u16,

        /// Start line
        #[arg(short = 'y', value_name = "LINE", default_value_t = 0)]
        line: u16,
    },

    /// Print key events
    Input,

    /// Show the program banner
    Banner,

    /// Write periodic command output to the display
    Watch {
        /// Backlight handling (default from configuration)
        #[arg(long, value_enum)]
        backlight: Option<BacklightMode>,

        /// Seconds between runs (default from configuration)
        #[arg(short = 'n', value_name = "SECONDS")]
        interval: Option<u64>,

        /// Command and arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = config::load(cli.config.as_deref())?;
    let target = Target::new(&config, cli.path, cli.serial);

    match cli.command {
        Commands::List => commands::info::list(),
        Commands::Clear => commands::display::clear(&target),
        Commands::Version => commands::info::version(&target),
        Commands::Cursor { style } => commands::display::cursor(&target, style.into()),
        Commands::Backlight { state } => commands::display::backlight(&target, state.into()),
        Commands::Write {
            clear,
            col,
            line,
            words,
        } => commands::display::write(&target, clear, line, col, &words),
        Commands::Read { count, col, line } => commands::display::read(&target, count, line, col),
        Commands::Input => commands::input::run(&target),
        Commands::Banner => commands::display::banner(&target),
        Commands::Watch {
            backlight,
            interval,
            command,
        } => {
            let mut watch = config.watch.clone();
            if let Some(backlight) = backlight {
                watch.backlight = backlight;
            }
            if let Some(interval) = interval {
                watch.interval_secs = interval;
            }
            commands::watch::run(&target, &watch, &command)
        }
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Trace);
    }
    builder.init();
}
