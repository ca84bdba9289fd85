//! Rolling Logger
//!
//! File logger for Tauri apps built on `tracing-subscriber`. Lines go to
//! `<dir>/<name>.log` and stderr; once the live file passes its size cap it
//! is shifted to `<name>.log.1`, older files move up, and the oldest beyond
//! the retention count is removed. `log` macros are bridged in as well.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::MakeWriter;

/// Size cap of the live log file
pub const MAX_FILE_BYTES: u64 = 1024 * 1024;
/// Rotated files kept next to the live one
pub const MAX_ROTATED_FILES: usize = 3;

static LOG_FILE: OnceLock<SharedWriter> = OnceLock::new();

/// Size-capped log file with numbered backups
pub struct RollingFile {
    dir: PathBuf,
    name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = live_path(dir, name);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir: dir.to_path_buf(),
            name: name.to_string(),
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    pub fn path(&self) -> PathBuf {
        live_path(&self.dir, &self.name)
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.log.{}", self.name, index))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = OpenOptions::new().create(true).write(true).truncate(true).open(self.path())?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.rotated_path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = self.rotated_path(index);
            if from.exists() {
                fs::rename(&from, self.rotated_path(index + 1))?;
            }
        }
        fs::rename(self.path(), self.rotated_path(1))?;

        self.file = OpenOptions::new().create(true).append(true).open(self.path())?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn live_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.log", name))
}

/// Cloneable handle handed to the fmt layer
#[derive(Clone)]
struct SharedWriter(Arc<Mutex<RollingFile>>);

impl Write for SharedWriter {
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

impl<'a> MakeWriter<'a> for SharedWriter {
    type Writer = SharedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install the global subscriber writing to `<log_dir>/<app_name>.log`
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let mut file = RollingFile::open(&log_dir, app_name, MAX_FILE_BYTES, MAX_ROTATED_FILES)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))?;
    writeln!(
        file,
        "=== {} started {} ===",
        app_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
    .map_err(|e| e.to_string())?;

    let writer = SharedWriter(Arc::new(Mutex::new(file)));
    LOG_FILE
        .set(writer.clone())
        .map_err(|_| "Logger already initialized".to_string())?;

    tracing_subscriber::fmt()
        .with_writer(writer.and(io::stderr))
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| e.to_string())
}

fn ensure_initialized() -> Result<(), String> {
    if LOG_FILE.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    log::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    log::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    log::error!("{}", msg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: PathBuf) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut file = RollingFile::open(dir.path(), "App", 1024, 2).unwrap();
            file.write_all(b"first\n").unwrap();
        }
        let mut file = RollingFile::open(dir.path(), "App", 1024, 2).unwrap();
        file.write_all(b"second\n").unwrap();
        assert_eq!(read(file.path()), "first\nsecond\n");
    }

    #[test]
    fn test_rotates_when_cap_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "App", 10, 2).unwrap();

        file.write_all(b"aaaaaaaa\n").unwrap();
        file.write_all(b"bbbbbbbb\n").unwrap();

        assert_eq!(read(dir.path().join("App.log.1")), "aaaaaaaa\n");
        assert_eq!(read(file.path()), "bbbbbbbb\n");
    }

    #[test]
    fn test_keeps_at_most_max_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "App", 4, 2).unwrap();

        for line in [b"one\n", b"two\n", b"thr\n", b"fou\n"] {
            file.write_all(line).unwrap();
        }

        assert_eq!(read(file.path()), "fou\n");
        assert_eq!(read(dir.path().join("App.log.1")), "thr\n");
        assert_eq!(read(dir.path().join("App.log.2")), "two\n");
        assert!(!dir.path().join("App.log.3").exists());
    }

    #[test]
    fn test_oversized_line_still_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "App", 4, 1).unwrap();
        file.write_all(b"a line longer than the cap\n").unwrap();
        assert_eq!(read(file.path()), "a line longer than the cap\n");
    }

    #[test]
    fn test_helpers_require_init() {
        if LOG_FILE.get().is_none() {
            assert!(info("hello").is_err());
        }
    }
}
