//! Rotating file writer with size-based rotation and backup retention.
//!
//! Trace lines are appended to a single file. Once that file grows past the
//! size limit it is shifted into numbered backups:
//!
//! ```text
//! jokebox-otlp.json     → jokebox-otlp.json.1
//! jokebox-otlp.json.1   → jokebox-otlp.json.2
//! jokebox-otlp.json.2   → jokebox-otlp.json.3
//! jokebox-otlp.json.3   → removed
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size and retention limits for a [`RotatingFileWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// The active file is rotated once it exceeds this many bytes.
    pub max_bytes: u64,
    /// Number of numbered backups kept.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MiB per file, 3 backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe, size-rotated, line-oriented file writer.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct RotatingFileWriter {
    path: PathBuf,
    policy: RotationPolicy,
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// Creates a writer for `path` with the given limits.
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` and a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotation, opening, writing or flushing fails,
    /// or if the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(handle) = file.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    /// Path of the `index`-th backup (1 is the most recent).
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > self.policy.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.policy.max_backups))?;
        for index in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer_in(dir: &Path, max_bytes: u64, max_backups: usize) -> RotatingFileWriter {
        RotatingFileWriter::new(
            dir.join("jokebox-otlp.json"),
            RotationPolicy { max_bytes, max_backups },
        )
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path(), 1024, 3);
        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(dir.path().join("jokebox-otlp.json")).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path(), 4, 2);

        for line in ["first", "second", "third", "fourth"] {
            writer.write_line(line).unwrap();
        }

        let read = |p: PathBuf| fs::read_to_string(p).unwrap();
        assert_eq!(read(dir.path().join("jokebox-otlp.json")), "fourth\n");
        assert_eq!(read(writer.backup_path(1)), "third\n");
        assert_eq!(read(writer.backup_path(2)), "second\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn zero_backups_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path(), 4, 0);
        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("jokebox-otlp.json")).unwrap(),
            "second\n"
        );
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn default_policy_limits() {
        let policy = RotationPolicy::default();
        assert_eq!(policy.max_bytes, 10 * 1024 * 1024);
        assert_eq!(policy.max_backups, 3);
    }
}
