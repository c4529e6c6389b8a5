//! Logging setup.
//!
//! The TUI owns the terminal, so log output goes to a file under the data
//! directory. The filter comes from `KAKOMON_LOG` (default `info`) and
//! accepts any `EnvFilter` directive, e.g. `kakomon=debug,reqwest=warn`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

/// Build the filter, falling back to the default on a bad directive.
pub fn build_env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Open `path` for appending, creating its parent directory.
fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `log_file`.
///
/// Returns the log path so the caller can mention it. Calling this twice
/// leaves the first subscriber in place.
pub fn init_logging(log_file: &Path, directive: &str) -> io::Result<PathBuf> {
    let file = open_log_file(log_file)?;
    let writer = Arc::new(Mutex::new(file));

    let layer = fmt::layer()
        .with_writer(move || SharedFile(Arc::clone(&writer)))
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(directive))
        .with(layer)
        .try_init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
    Ok(log_file.to_path_buf())
}

/// A cloneable writer over one shared file handle.
struct SharedFile(Arc<Mutex<fs::File>>);

impl io::Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_directive_falls_back() {
        let filter = build_env_filter("kakomon=notalevel");
        assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("kakomon.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
