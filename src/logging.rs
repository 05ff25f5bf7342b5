// File: src/logging.rs
//! A small `log` backend: one line per record, to stderr or appended to a
//! file.

use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

enum Sink {
    Stderr,
    File(Mutex<File>),
}

struct LineLogger {
    level: LevelFilter,
    sink: Sink,
}

impl Log for LineLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("{} {}: {}\n", record.level(), record.target(), record.args());
        match &self.sink {
            Sink::Stderr => {
                let _ = io::stderr().write_all(line.as_bytes());
            }
            Sink::File(file) => {
                if let Ok(mut file) = file.lock() {
                    let _ = file.write_all(line.as_bytes());
                }
            }
        }
    }

    fn flush(&self) {
        match &self.sink {
            Sink::Stderr => {
                let _ = io::stderr().flush();
            }
            Sink::File(file) => {
                if let Ok(mut file) = file.lock() {
                    let _ = file.flush();
                }
            }
        }
    }
}

/// Installs the process-wide logger. Returns `Ok(false)` if a logger was
/// already installed; the existing one is kept.
pub fn init(target: LogTarget, level: LevelFilter) -> io::Result<bool> {
    let sink = match target {
        LogTarget::Stderr => Sink::Stderr,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Sink::File(Mutex::new(file))
        }
    };

    let logger = Box::new(LineLogger { level, sink });
    match log::set_boxed_logger(logger) {
        Ok(()) => {
            log::set_max_level(level);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lines_to_file_and_ignores_reinit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("transcoder.log");

        assert!(init(LogTarget::File(path.clone()), LevelFilter::Info).unwrap());
        log::info!(target: "transcode_core::test", "hello");
        log::debug!("filtered out");
        log::logger().flush();

        assert!(!init(LogTarget::Stderr, LevelFilter::Trace).unwrap());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO transcode_core::test: hello"));
        assert!(!contents.contains("filtered out"));
    }
}
