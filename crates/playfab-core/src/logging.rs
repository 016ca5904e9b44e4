//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! The library never installs a subscriber on its own; the embedding
//! binary decides when (and whether) to initialize logging and passes the
//! shared settings it loaded.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::settings::SharedSettings;

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// Env filter honoring `RUST_LOG` first, then the configured log level.
fn env_filter_for(settings: &SharedSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.filter_directive()))
}

/// Initialize structured logging to `~/.local/state/playfab/playfab.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall
/// back to stderr.
pub fn init_logging(settings: &SharedSettings) -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("playfab")?;
    let log_dir = xdg_dirs.get_state_home().join("playfab");

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("playfab.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct FileMakeWriter(std::fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = FileOrStderr;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(FileOrStderr::File)
                .unwrap_or(FileOrStderr::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter_for(settings))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("playfab logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging()
/// fails so the embedding binary doesn't crash.
pub fn init_logging_stderr(settings: &SharedSettings) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter_for(settings))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
