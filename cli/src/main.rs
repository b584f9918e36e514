//! OsteoOS CLI - binary entry point.
//!
//! ```text
//! main() -> init_tracing() -> OsteoConfig::load() -> Driver
//!                                                      |
//!                                  stdin line -> handle_line() -> stdout
//! ```
//!
//! Logs go to a file so they never interleave with command output.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Result;
use chrono::Local;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use osteo::{Driver, Reply, render_day, session_from_config};
use osteo_config::OsteoConfig;

const LOG_FILE: &str = "osteo.log";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let candidates = log_file_candidates(dirs::home_dir());
    match open_first_log_file(&candidates) {
        Ok((path, file, skipped)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %path.display(), "Logging initialized");
            for reason in skipped {
                tracing::warn!("{reason}");
            }
        }
        Err(reasons) => {
            // stdout belongs to the session; report once on stderr and run unlogged.
            for reason in reasons {
                eprintln!("osteo: {reason}");
            }
            tracing_subscriber::registry().with(env_filter).init();
        }
    }
}

/// `~/.osteo/logs/osteo.log`, then `./.osteo/logs/osteo.log`.
fn log_file_candidates(home: Option<PathBuf>) -> Vec<PathBuf> {
    home.into_iter()
        .chain([PathBuf::from(".")])
        .map(|root| root.join(".osteo").join("logs").join(LOG_FILE))
        .collect()
}

/// Opens the first usable candidate for appending. Returns the reasons the
/// earlier candidates were skipped, or every reason when none could be opened.
fn open_first_log_file(
    candidates: &[PathBuf],
) -> Result<(PathBuf, File, Vec<String>), Vec<String>> {
    let mut skipped = Vec::new();
    for path in candidates {
        match open_log_file(path) {
            Ok(file) => return Ok((path.clone(), file, skipped)),
            Err(reason) => skipped.push(reason),
        }
    }
    Err(skipped)
}

fn open_log_file(path: &Path) -> Result<File, String> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| format!("cannot create log dir {}: {e}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("cannot open log file {}: {e}", path.display()))
}

fn main() -> Result<()> {
    init_tracing();

    let config = OsteoConfig::load();
    let session = session_from_config(&config);
    let mut driver = Driver::new(session, Local::now().date_naive());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "OsteoOS - type `help` for commands")?;
    let day = driver.session().selected_day();
    writeln!(stdout, "{}", render_day(driver.session(), day))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match driver.handle_line(&line) {
            Ok(Some(Reply::Print(text))) => writeln!(stdout, "{text}")?,
            Ok(Some(Reply::Quit)) => break,
            Ok(None) => {}
            Err(err) => writeln!(stdout, "{err}")?,
        }
        stdout.flush()?;
    }

    tracing::info!(
        level = driver.session().current_level().value(),
        xp = driver.session().current_xp(),
        "Session ended"
    );
    Ok(())
}
