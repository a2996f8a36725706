use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Check that `dir` exists and is a directory. Missing directories are not created.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    let meta = fs::metadata(dir)
        .map_err(|e| PersistError::OutputDir(format!("{}: {e}", dir.display())))?;
    if !meta.is_dir() {
        return Err(PersistError::OutputDir(format!(
            "{}: path is not a directory",
            dir.display()
        )));
    }
    Ok(())
}

/// Atomically write content to a target path by writing a sibling temp file then renaming.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomicFileWriter;

impl AtomicFileWriter {
    pub fn write(&self, target: &Path, content: &[u8]) -> Result<PathBuf, PersistError> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_output_dir(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target.to_path_buf())
    }
}
