//! File-based item source.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// Item file on disk, checked for existence at construction.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the items file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the file cannot be read.
    pub fn read_to_string(&self) -> Result<String, InputError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}
