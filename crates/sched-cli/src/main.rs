//! `wpi-sched` CLI — exports a Workday course schedule spreadsheet to an
//! iCalendar (.ics) file.
//!
//! ## Usage
//!
//! ```sh
//! # Read View_My_Courses.xlsx from the current directory, print to stdout
//! wpi-sched
//!
//! # Explicit input and output
//! wpi-sched -f ~/Downloads/View_My_Courses.xlsx -o schedule.ics
//!
//! # Different campus timezone and UID domain
//! wpi-sched --timezone America/Chicago --uid-domain example.edu
//!
//! # Debug logging on stderr (or set RUST_LOG)
//! wpi-sched -v -o schedule.ics
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use sched_core::config::{DEFAULT_REMINDER_MINUTES, DEFAULT_TIMEZONE, DEFAULT_UID_DOMAIN};
use sched_core::ConvertConfig;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wpi-sched",
    version,
    about = "Export your Workday schedule (.xlsx) to a usable calendar format (.ics)"
)]
struct Cli {
    /// Excel file containing schedule info
    #[arg(short, long, default_value = "View_My_Courses.xlsx")]
    file: PathBuf,

    /// Output .ics file (writes to stdout if omitted or "-")
    #[arg(short, long)]
    output: Option<String>,

    /// IANA timezone the class times are in
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Domain appended to event UIDs
    #[arg(long, default_value = DEFAULT_UID_DOMAIN)]
    uid_domain: String,

    /// Minutes before class to show a reminder
    #[arg(long, default_value_t = DEFAULT_REMINDER_MINUTES)]
    reminder_minutes: u32,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ConvertConfig {
        ConvertConfig {
            timezone: self.timezone.clone(),
            uid_domain: self.uid_domain.clone(),
            reminder_minutes: self.reminder_minutes,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    tracing::debug!(file = %cli.file.display(), output = ?cli.output, ?config, "converting schedule");

    let ics = sched_core::convert_workbook_path(&cli.file, &config)
        .with_context(|| format!("Failed to convert {}", cli.file.display()))?;

    write_output(cli.output.as_deref(), &ics)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) if path != "-" => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
