//! Logging for chefbot.
//!
//! `init_log_bridge` installs a `log::Log` implementation so every
//! `log::info!()` etc. (ours and our dependencies') lands in
//! `<tmp>/chefbot_debug.log`. The file is created and truncated on the first
//! enabled record, so a run at level `off` leaves no file behind. When `RUST_LOG` is set the
//! same lines are mirrored to stderr.
//!
//! Level precedence: `--log-level`, then `RUST_LOG`, then the config file's
//! `log_level` (applied after the config is loaded, see
//! [`apply_config_log_level`]).
//!
//! The `debug_*!` macros take a category as their first argument and use it
//! as the log target, so lines read `[ts] [LEVEL] [CATEGORY] message`.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Name of the debug log file inside the temp directory.
pub const LOG_FILE_NAME: &str = "chefbot_debug.log";

/// Set when the level came from the CLI or `RUST_LOG`, so the config file
/// must not override it.
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Location of the debug log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

enum LogFile {
    Pending,
    Open(File),
    /// Opening failed once; file output stays off for this run
    Unavailable,
}

struct LogBridge {
    path: PathBuf,
    file: Mutex<LogFile>,
    mirror_stderr: bool,
}

impl LogBridge {
    fn new(path: PathBuf, mirror_stderr: bool) -> Self {
        Self {
            path,
            file: Mutex::new(LogFile::Pending),
            mirror_stderr,
        }
    }

    fn open(&self) -> LogFile {
        let Ok(mut file) = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&self.path)
        else {
            return LogFile::Unavailable;
        };
        let _ = write!(
            file,
            "\n{}\nchefbot debug session started at {}\n{}\n",
            "=".repeat(80),
            timestamp(),
            "=".repeat(80)
        );
        LogFile::Open(file)
    }

    fn write_raw(&self, line: &str) {
        let mut state = self.file.lock();
        if matches!(*state, LogFile::Pending) {
            *state = self.open();
        }
        if let LogFile::Open(ref mut file) = *state {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        self.write_raw(&line);
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let LogFile::Open(ref mut file) = *self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Format one log line, newline included.
pub fn format_line(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{timestamp}] [{level:<5}] [{target}] {msg}\n")
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Pick the startup level from the CLI override and the `RUST_LOG` value.
///
/// Returns the level and whether it is pinned (config must not override it).
/// Only a bare level name in `RUST_LOG` is understood; anything else falls
/// back to `Info`.
pub fn resolve_level(
    cli_level: Option<log::LevelFilter>,
    rust_log: Option<&str>,
) -> (log::LevelFilter, bool) {
    if let Some(level) = cli_level {
        return (level, true);
    }
    match rust_log {
        Some(value) => (
            value.trim().parse().unwrap_or(log::LevelFilter::Info),
            true,
        ),
        None => (log::LevelFilter::Off, false),
    }
}

/// Install the log bridge. Safe to call more than once; later calls only
/// adjust the level.
pub fn init_log_bridge(cli_level: Option<log::LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (level, pinned) = resolve_level(cli_level, rust_log.as_deref());
    LEVEL_PINNED.store(pinned, Ordering::Relaxed);

    let bridge = BRIDGE.get_or_init(|| LogBridge::new(log_path(), rust_log.is_some()));
    if log::set_logger(bridge).is_err() {
        // Another logger (e.g. a test harness) is already installed
        return;
    }
    log::set_max_level(level);
}

/// Apply the config file's level unless the CLI or `RUST_LOG` pinned one.
pub fn apply_config_log_level(level: log::LevelFilter) {
    if !LEVEL_PINNED.load(Ordering::Relaxed) {
        log::set_max_level(level);
    }
}

#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        log::error!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        log::info!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        log::debug!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        log::trace!(target: $category, $($arg)*)
    };
}
