//! Feedback file output
//!
//! One `{student}.txt` per student row inside a folder that is wiped and
//! recreated at the start of every run.

use crate::error::{GradeError, GradeResult};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct AttachmentWriter {
    dir: PathBuf,
}

impl AttachmentWriter {
    /// Delete `dir` if it exists and create it empty.
    ///
    /// A missing folder is fine; anything else that stops the delete or the
    /// create is an `OutputDir` error.
    pub fn recreate<P: Into<PathBuf>>(dir: P) -> GradeResult<Self> {
        let dir = dir.into();

        match fs::remove_dir_all(&dir) {
            Ok(()) => debug!("removed previous output folder {}", dir.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(GradeError::OutputDir { path: dir, source }),
        }

        if let Err(source) = fs::create_dir_all(&dir) {
            return Err(GradeError::OutputDir { path: dir, source });
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, student_id: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", student_id))
    }

    /// Write (or overwrite) the feedback file for `student_id`
    pub fn write(&self, student_id: &str, text: &str) -> GradeResult<PathBuf> {
        let path = self.path_for(student_id);

        let result = open_for_write(&path).and_then(|mut file| file.write_all(text.as_bytes()));
        match result {
            Ok(()) => {
                debug!(student = student_id, "wrote {}", path.display());
                Ok(path)
            }
            Err(source) => Err(GradeError::WriteFailed { path, source }),
        }
    }
}

#[cfg(unix)]
fn open_for_write(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path) -> std::io::Result<fs::File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
