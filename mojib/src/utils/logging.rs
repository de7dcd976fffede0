//
// mojib - logging
//
// Copyright 2026 moji contributors
//
// This file is part of moji.
//
// moji is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// moji is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with moji. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicU8, Ordering},
        Arc, Mutex,
    },
};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::{Error, ErrorKind, Result, ResultIntoError};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, PartialOrd, Serialize)]
#[repr(u8)]
pub enum LogLevel {
    OFF = 0,
    ERROR,
    #[default]
    WARN,
    INFO,
    DEBUG,
    TRACE,
}

impl From<u8> for LogLevel {
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::OFF,
            1 => Self::ERROR,
            2 => Self::WARN,
            3 => Self::INFO,
            4 => Self::DEBUG,
            _ => Self::TRACE,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(l: Level) -> Self {
        match l {
            Level::Error => Self::ERROR,
            Level::Warn => Self::WARN,
            Level::Info => Self::INFO,
            Level::Debug => Self::DEBUG,
            Level::Trace => Self::TRACE,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::ERROR => Self::Error,
            LogLevel::WARN => Self::Warn,
            LogLevel::OFF | LogLevel::INFO => Self::Info,
            LogLevel::DEBUG => Self::Debug,
            LogLevel::TRACE => Self::Trace,
        }
    }
}

impl From<LevelFilter> for LogLevel {
    fn from(l: LevelFilter) -> Self {
        match l {
            LevelFilter::Off => Self::OFF,
            LevelFilter::Error => Self::ERROR,
            LevelFilter::Warn => Self::WARN,
            LevelFilter::Info => Self::INFO,
            LevelFilter::Debug => Self::DEBUG,
            LevelFilter::Trace => Self::TRACE,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::OFF => Self::Off,
            LogLevel::ERROR => Self::Error,
            LogLevel::WARN => Self::Warn,
            LogLevel::INFO => Self::Info,
            LogLevel::DEBUG => Self::Debug,
            LogLevel::TRACE => Self::Trace,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OFF => "OFF",
                ERROR => "ERROR",
                WARN => "WARN",
                INFO => "INFO",
                DEBUG => "DEBUG",
                TRACE => "TRACE",
            }
        )
    }
}

use LogLevel::*;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, PartialOrd, Serialize)]
pub enum Destination {
    File,
    #[default]
    Stderr,
    None,
}

struct Output {
    dest: Destination,
    writer: Option<BufWriter<File>>,
    path: PathBuf,
}

/// `log` backend writing `TIME [LEVEL]: target: message` lines to stderr or
/// to a file.
///
/// Clones share their destination and level with the instance that was
/// installed as the global logger.
#[derive(Clone)]
pub struct StderrLogger {
    output: Arc<Mutex<Output>>,
    level: Arc<AtomicU8>,
    print_level: bool,
    print_module_names: bool,
}

impl std::fmt::Debug for StderrLogger {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct(stringify!(StderrLogger))
            .field("level", &self.log_level())
            .field("dest", &self.destination())
            .field("print_level", &self.print_level)
            .field("print_module_names", &self.print_module_names)
            .finish()
    }
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

/// `$XDG_DATA_HOME/moji/moji.log`, creating the parent directory.
pub fn default_log_path() -> Result<PathBuf> {
    let data_dir = xdg::BaseDirectories::with_prefix("moji")?;
    Ok(data_dir.place_data_file("moji.log")?)
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .read(true)
        .open(path)
        .chain_err_summary(|| format!("Could not open log file {}", path.display()))
}

impl StderrLogger {
    /// Create a logger writing to stderr and install it as the global
    /// logger. Only the first logger of the process is installed.
    pub fn new(level: LogLevel) -> Self {
        use std::sync::Once;

        static INIT_STDERR_LOGGING: Once = Once::new();

        let logger = Self::unregistered(level);
        logger.update_max_level();

        INIT_STDERR_LOGGING.call_once(|| {
            if let Err(err) = log::set_boxed_logger(Box::new(logger.clone())) {
                eprintln!("Could not install logger: {}", err);
            }
        });
        logger
    }

    fn unregistered(level: LogLevel) -> Self {
        Self {
            output: Arc::new(Mutex::new(Output {
                dest: Destination::Stderr,
                writer: None,
                path: PathBuf::new(),
            })),
            level: Arc::new(AtomicU8::new(level as u8)),
            print_level: true,
            print_module_names: true,
        }
    }

    fn update_max_level(&self) {
        #[cfg(feature = "debug-tracing")]
        log::set_max_level(
            if matches!(LevelFilter::from(self.log_level()), LevelFilter::Off) {
                LevelFilter::Off
            } else {
                LevelFilter::Trace
            },
        );
        #[cfg(not(feature = "debug-tracing"))]
        log::set_max_level(LevelFilter::from(self.log_level()));
    }

    pub fn log_level(&self) -> LogLevel {
        self.level.load(Ordering::SeqCst).into()
    }

    pub fn set_log_level(&self, new_val: LogLevel) {
        self.level.store(new_val as u8, Ordering::SeqCst);
        self.update_max_level();
    }

    pub fn destination(&self) -> Destination {
        self.output
            .lock()
            .map(|o| o.dest)
            .unwrap_or(Destination::None)
    }

    /// Switch to `dest`. [`Destination::File`] needs a file set with
    /// [`StderrLogger::change_log_dest`] first, or uses
    /// [`default_log_path`].
    pub fn set_destination(&self, dest: Destination) -> Result<()> {
        if dest == Destination::File && self.log_dest().as_os_str().is_empty() {
            return self.change_log_dest(default_log_path()?);
        }
        let mut output = self.lock()?;
        output.dest = dest;
        Ok(())
    }

    /// Write to the file at `path` from now on.
    pub fn change_log_dest(&self, path: PathBuf) -> Result<()> {
        let file = open_log_file(&path)?;
        let mut output = self.lock()?;
        if let Some(mut w) = output.writer.take() {
            _ = w.flush();
        }
        *output = Output {
            dest: Destination::File,
            writer: Some(BufWriter::new(file)),
            path,
        };
        Ok(())
    }

    pub fn log_dest(&self) -> PathBuf {
        self.output
            .lock()
            .map(|o| o.path.clone())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Output>> {
        self.output.lock().map_err(|err| {
            Error::new("Logger state is poisoned")
                .set_details(err.to_string())
                .set_kind(ErrorKind::Bug)
        })
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::from(self.log_level()) || cfg!(feature = "debug-tracing")
    }

    fn log(&self, record: &Record) {
        if self.log_level() == LogLevel::OFF || !self.enabled(record.metadata()) {
            return;
        }

        fn write(
            writer: &mut impl Write,
            record: &Record,
            (print_level, print_module_names): (bool, bool),
        ) -> Option<()> {
            write!(
                writer,
                "{}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            )
            .ok()?;
            writer.write_all(b" [").ok()?;
            if print_level {
                writer
                    .write_all(record.level().to_string().as_bytes())
                    .ok()?;
            }
            write!(writer, "]: ").ok()?;
            if print_module_names {
                write!(writer, "{}: ", record.metadata().target()).ok()?;
            }
            write!(writer, "{}", record.args()).ok()?;
            writer.write_all(b"\n").ok()?;
            writer.flush().ok()?;
            Some(())
        }

        let flags = (self.print_level, self.print_module_names);
        let Ok(mut output) = self.output.lock() else {
            return;
        };
        match output.dest {
            Destination::None => {}
            Destination::Stderr => {
                _ = write(&mut std::io::stderr(), record, flags);
            }
            Destination::File => {
                if let Some(w) = output.writer.as_mut() {
                    _ = write(w, record, flags);
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut output) = self.output.lock() {
            if let Some(w) = output.writer.as_mut() {
                _ = w.flush();
            }
        }
    }
}
