//! Console logger for the chime binaries.
//!
//! A minimal `log::Log` that writes `[LEVEL] target: message` lines to
//! stderr. Stdout stays untouched.

use std::fmt;
use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger {
    max_level: Level,
}

impl ConsoleLogger {
    pub const fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        self.write_record(&mut io::stderr().lock(), record);
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

impl ConsoleLogger {
    fn write_record<W: Write>(&self, out: &mut W, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), record.args());
        let _ = writeln!(out, "{}", line);
    }
}

fn format_line(level: Level, target: &str, args: &fmt::Arguments) -> String {
    let level_str = match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("[{}] {}: {}", level_str, target, args)
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(Level::Trace);

/// Install the console logger. Calling it twice is harmless.
pub fn init(max_level: LevelFilter) {
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(max_level);
        }
        Err(_) => {
            // Logger already set
        }
    }
}
