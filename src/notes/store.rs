//! Note store — four operations against a jailed directory.
//!
//! Every operation re-validates its filename and resolves it to a direct
//! child of the root. Nothing is cached between calls; the filesystem is the
//! single source of truth. Failures come back as tagged [`StoreError`]
//! values, and prose rendering happens at the tool/controller boundary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::sanitize::{self, NameError};

/// What a successful read found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Content(String),
    /// The file exists but holds nothing, or only whitespace.
    Blank,
}

/// Tagged failure from a store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Name(#[from] NameError),
    /// `available` is enumerated fresh at failure time so callers can
    /// suggest alternatives.
    #[error("note '{name}' not found")]
    NotFound { name: String, available: Vec<String> },
    #[error("permission denied for '{name}'")]
    Permission { name: String },
    #[error("'{name}' is not valid UTF-8 text")]
    NotUtf8 { name: String },
    #[error("i/o failure on '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Flat, sandboxed file store. The root directory is injected at
/// construction so tests can point each run at its own tempdir.
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    /// Open a store rooted at `root`, creating the directory if absent.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(NoteStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate `name` and resolve it to its jailed path. The name is joined
    /// as a single segment; validation guarantees it cannot add or escape
    /// directory levels.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, NameError> {
        sanitize::validate(name)?;
        Ok(self.root.join(name))
    }

    /// Read a note's full text content.
    pub fn read(&self, name: &str) -> Result<ReadOutcome, StoreError> {
        let path = self.resolve(name)?;
        if !path.exists() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
                available: self.list().unwrap_or_default(),
            });
        }
        let bytes = fs::read(&path).map_err(|e| io_error(name, e))?;
        let text = String::from_utf8(bytes).map_err(|_| StoreError::NotUtf8 {
            name: name.to_string(),
        })?;
        if text.trim().is_empty() {
            return Ok(ReadOutcome::Blank);
        }
        Ok(ReadOutcome::Content(text))
    }

    /// Overwrite `name` with exactly `content`, creating the file if absent
    /// and truncating if present. Returns the number of characters written.
    pub fn write(&self, name: &str, content: &str) -> Result<usize, StoreError> {
        let path = self.resolve(name)?;
        fs::write(&path, content).map_err(|e| io_error(name, e))?;
        Ok(content.chars().count())
    }

    /// Names of direct-child regular files, ascending lexicographic order.
    /// Directories and non-regular entries are skipped.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let root_name = self.root.display().to_string();
        let entries = fs::read_dir(&self.root).map_err(|e| io_error(&root_name, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&root_name, e))?;
            let file_type = entry.file_type().map_err(|e| io_error(&root_name, e))?;
            if !file_type.is_file() {
                continue;
            }
            // Externally created non-Unicode names still show up, lossily
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    /// Delete a note. Non-existence is reported, never silently swallowed.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.resolve(name)?;
        if !path.exists() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
                available: Vec::new(),
            });
        }
        fs::remove_file(&path).map_err(|e| io_error(name, e))?;
        Ok(())
    }
}

fn io_error(name: &str, source: io::Error) -> StoreError {
    if source.kind() == io::ErrorKind::PermissionDenied {
        StoreError::Permission {
            name: name.to_string(),
        }
    } else {
        StoreError::Io {
            name: name.to_string(),
            source,
        }
    }
}
