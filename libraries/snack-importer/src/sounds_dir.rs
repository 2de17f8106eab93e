//! The app-private directory holding imported sound files

use crate::copy::{copy_into, CopiedFile};
use crate::{ImportError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory owning every custom sound's audio file
#[derive(Debug, Clone)]
pub struct SoundsDirectory {
    root: PathBuf,
}

impl SoundsDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the directory if it does not exist yet
    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        tracing::debug!(path = %self.root.display(), "sounds directory ready");
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a managed file name resolves to
    ///
    /// Rejects names that would escape the directory.
    pub fn path_for(&self, file_name: &str) -> Result<PathBuf> {
        let candidate = Path::new(file_name);
        let is_plain = candidate.components().count() == 1
            && candidate.file_name().is_some_and(|n| n == candidate.as_os_str());

        if file_name.is_empty() || !is_plain {
            return Err(ImportError::InvalidPath(file_name.to_string()));
        }
        Ok(self.root.join(file_name))
    }

    /// Whether a managed file exists
    pub fn contains(&self, file_name: &str) -> bool {
        self.path_for(file_name).is_ok_and(|p| p.is_file())
    }

    /// Copy a user-picked file in under a fresh unique name
    pub fn copy_in(&self, source: &Path) -> Result<CopiedFile> {
        copy_into(source, &self.root)
    }

    /// Read a managed file's bytes
    pub fn read(&self, file_name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(file_name)?;
        fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ImportError::FileNotFound(path.display().to_string()),
            _ => ImportError::Io(e),
        })
    }

    /// Delete a managed file
    ///
    /// Returns `Ok(false)` when there was nothing to delete.
    pub fn remove(&self, file_name: &str) -> Result<bool> {
        let path = self.path_for(file_name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed sound file");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
