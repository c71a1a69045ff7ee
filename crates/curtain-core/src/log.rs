//! Logging setup on top of `tracing`.
//!
//! Log lines always go to stderr. When enabled, they are also written to
//! `~/.config/curtain/logs/curtain.log`; once that file exceeds the
//! configured size it is rotated to `curtain.log.1` (one backup kept).
//! `RUST_LOG` takes precedence over the configured level.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE_NAME: &str = "curtain.log";
const BACKUP_SUFFIX: &str = ".1";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Whether to also write logs to a file. Defaults to `false`.
    pub file: bool,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: false,
            max_file_mb: 10,
        }
    }
}

impl LogConfig {
    /// Rotation threshold in bytes.
    pub fn max_bytes(&self) -> u64 {
        self.max_file_mb.saturating_mul(1024 * 1024)
    }
}

/// Normalises a level name, falling back to "info" for unknown input.
pub fn parse_level(s: &str) -> &'static str {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" => "error",
        _ => "info",
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// Returns the log file path when file logging is active. A second call
/// leaves the first subscriber in place.
pub fn init(config: &LogConfig) -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(parse_level(&config.level)));

    let file = if config.file {
        crate::config::config_dir()
            .map(|d| d.join("logs"))
            .and_then(|dir| RotatingFile::create_in(&dir, config.max_bytes()).ok())
    } else {
        None
    };
    let path = file.as_ref().map(|f| f.path().to_path_buf());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);
    let file_layer = file.map(|f| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(f)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    path
}

struct Inner {
    file: File,
    path: PathBuf,
    max_bytes: u64,
    written: u64,
}

/// A size-rotated log file usable as a `tracing` writer.
#[derive(Clone)]
pub struct RotatingFile {
    inner: Arc<Mutex<Inner>>,
    path: PathBuf,
}

impl RotatingFile {
    /// Opens (or creates) `curtain.log` inside `dir` for appending.
    ///
    /// `max_bytes == 0` disables rotation.
    pub fn create_in(dir: &Path, max_bytes: u64) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                file,
                path: path.clone(),
                max_bytes,
                written,
            })),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the single rotated backup.
    pub fn backup_path(&self) -> PathBuf {
        backup_of(&self.path)
    }
}

fn backup_of(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

impl Inner {
    fn rotate(&mut self) {
        let _ = fs::rename(&self.path, backup_of(&self.path));
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        inner.file.write_all(buf)?;
        inner.written += buf.len() as u64;
        if inner.max_bytes > 0 && inner.written >= inner.max_bytes {
            inner.rotate();
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        inner.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = RotatingFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
