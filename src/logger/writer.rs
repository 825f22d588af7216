//! Shared file writer for the logger

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;

/// Log file handle shared by every writer the fmt layer creates
#[derive(Clone)]
pub struct FileWriter {
    file: Arc<Mutex<File>>,
}

impl FileWriter {
    pub fn new(config: &FileConfig) -> Result<Self, LoggerError> {
        if config.path.as_os_str().is_empty() {
            return Err(LoggerError::config("log file path is empty"));
        }

        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = open_log_file(&config.path, config.append)?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }
}

fn open_log_file(path: &Path, append: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options.open(path)
}

/// Per-event guard; holds the lock for the duration of one record
pub struct FileWriterGuard<'a> {
    file: MutexGuard<'a, File>,
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        // A panic while logging must not silence the log forever
        let file = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        FileWriterGuard { file }
    }
}

impl Write for FileWriterGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
