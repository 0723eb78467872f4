//! Stderr logger behind the `log` facade.
//!
//! Lines look like `[2024-01-02T03:04:05+00:00] INFO hdd_cdd::data::router - ...`.
//! Stdout stays reserved for command output.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::{LevelFilter, Metadata, Record};

pub const LOG_ENV: &str = "HDD_LOG";

pub struct StderrLogger;

pub static LOGGER: StderrLogger = StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now: DateTime<Utc> = Utc::now();
            eprintln!(
                "[{}] {} {} - {}",
                now.to_rfc3339(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Pick a level: explicit flag, then `HDD_LOG`, then `warn`.
pub fn resolve_level(flag: Option<&str>, env: Option<&str>) -> LevelFilter {
    for candidate in [flag, env].into_iter().flatten() {
        match LevelFilter::from_str(candidate.trim()) {
            Ok(level) => return level,
            Err(_) => eprintln!("Ignoring unknown log level '{candidate}'."),
        }
    }
    LevelFilter::Warn
}

/// Install the logger. Safe to call more than once; later calls only adjust the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
