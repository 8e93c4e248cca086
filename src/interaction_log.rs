//! Append-only, timestamped record of a chat session.
//!
//! Every entry is a single line of the form `YYYY/MM/DD HH:MM:SS <message>`
//! in local time. The file is never read back.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::StartupError;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Interaction log over any writer.
///
/// The production log wraps a [`File`] opened in append mode; tests use a `Vec<u8>`.
pub struct InteractionLog<W: Write> {
    writer: W,
}

impl InteractionLog<File> {
    /// Opens `path` for appending, creating it if it does not exist.
    pub fn open(path: &Path) -> Result<Self, StartupError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| StartupError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> InteractionLog<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Appends one timestamped entry.
    pub fn record(&mut self, message: &str) -> io::Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        write!(self.writer, "{timestamp} {message}")?;
        if !message.ends_with('\n') {
            writeln!(self.writer)?;
        }
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn strip_timestamp(line: &str) -> &str {
        // "2024/01/02 03:04:05 " is 20 bytes
        &line[20..]
    }

    #[test]
    fn test_record_prefixes_timestamp() {
        let mut log = InteractionLog::new(Vec::new());
        log.record("hello there").unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        let line = text.strip_suffix('\n').unwrap();

        assert_eq!(strip_timestamp(line), "hello there");
        let stamp = &line[..19];
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_record_does_not_double_newline() {
        let mut log = InteractionLog::new(Vec::new());
        log.record("AI: done\n").unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        assert!(text.ends_with("AI: done\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_open_creates_and_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("interaction.log");

        {
            let mut log = InteractionLog::open(&path).unwrap();
            log.record("first").unwrap();
        }
        {
            let mut log = InteractionLog::open(&path).unwrap();
            log.record("second").unwrap();
        }

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().map(strip_timestamp).collect();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("interaction.log");

        let Err(err) = InteractionLog::open(&path) else {
            panic!("expected open to fail");
        };
        assert!(err.to_string().contains("interaction.log"));
    }
}
