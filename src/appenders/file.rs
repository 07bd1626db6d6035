//! Durable append sink backed by a log file

use crate::core::{DirectoryProblem, LoggerError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permission bits for newly created log files
pub const LOG_FILE_MODE: u32 = 0o644;

/// Append-only log file
///
/// Every line is written with a single `write_all` so concurrent writers in
/// other processes see whole lines. The handle closes when the appender is
/// dropped.
#[derive(Debug)]
pub struct FileAppender {
    path: PathBuf,
    file: File,
}

impl FileAppender {
    /// Validate the parent directory, then open `path` for appending,
    /// creating it with mode `0644` when missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        check_parent_dir(&path)?;

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(LOG_FILE_MODE);
        }

        let file = options
            .open(&path)
            .map_err(|e| LoggerError::file_open(&path, e))?;

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` followed by a newline.
    pub fn append_line(&mut self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.file.write_all(buf.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Directory a log file would be created in; a bare file name lives in `.`.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => path,
    }
}

/// Check that the directory `path` would be created in exists and is a directory.
pub fn check_parent_dir(path: &Path) -> Result<()> {
    let parent = parent_dir(path);

    match fs::metadata(parent) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(LoggerError::invalid_directory(
            parent,
            DirectoryProblem::NotADirectory,
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(LoggerError::invalid_directory(parent, DirectoryProblem::Missing))
        }
        Err(e) => Err(LoggerError::directory_stat(parent, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("global.log")), Path::new("."));
        assert_eq!(parent_dir(Path::new("/var/log/app.log")), Path::new("/var/log"));
        assert_eq!(parent_dir(Path::new("logs/app.log")), Path::new("logs"));
    }

    #[test]
    fn test_open_creates_and_appends() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");

        let mut appender = FileAppender::open(&path).expect("open log file");
        appender.append_line("first").unwrap();
        drop(appender);

        let mut appender = FileAppender::open(&path).expect("reopen log file");
        appender.append_line("second").unwrap();
        appender.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
        assert_eq!(appender.path(), path.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_created_with_0644() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("mode.log");
        let _appender = FileAppender::open(&path).expect("open log file");

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask may only clear bits
        assert_eq!(mode & !LOG_FILE_MODE, 0);
        assert_ne!(mode & 0o600, 0);
    }

    #[test]
    fn test_missing_parent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("app.log");

        let err = FileAppender::open(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLogDirectory);
        assert!(matches!(
            err,
            LoggerError::InvalidLogDirectory {
                reason: DirectoryProblem::Missing,
                ..
            }
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_parent_is_a_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"not a dir").unwrap();

        let err = FileAppender::open(blocker.join("app.log")).unwrap_err();
        assert!(matches!(
            err,
            LoggerError::InvalidLogDirectory {
                reason: DirectoryProblem::NotADirectory,
                ..
            }
        ));
    }

    #[test]
    fn test_file_in_path_is_stat_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"not a dir").unwrap();

        // blocker/sub cannot be inspected at all: ENOTDIR, not NotFound
        let err = FileAppender::open(blocker.join("sub").join("app.log")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DirectoryStatFailed);
        assert!(err.to_string().contains("stat error"), "error was {}", err);
    }

    #[test]
    fn test_open_failure_is_wrapped() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        // A directory cannot be opened for appending
        let err = FileAppender::open(temp_dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LogFileOpenFailed);
    }
}
