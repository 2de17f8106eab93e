//! File copying into the managed sounds directory

use crate::{ImportError, Result};
use snack_core::validation::supported_extension;
use std::fs;
use std::path::{Path, PathBuf};

/// A file that now lives in the sounds directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    /// Name inside the sounds directory, e.g. `5f0c…e1.wav`
    pub file_name: String,
    /// Lowercased extension without the dot
    pub extension: String,
    /// Full destination path
    pub path: PathBuf,
}

/// Fresh collision-free name: `<uuid>.<extension>`
pub fn generate_filename(extension: &str) -> String {
    format!("{}.{}", uuid::Uuid::new_v4(), extension)
}

/// Copy `source` into `target_dir` under a generated name
///
/// The source file is left in place. The directory is created if needed.
pub fn copy_into(source: &Path, target_dir: &Path) -> Result<CopiedFile> {
    let extension = supported_extension(source)
        .map_err(|e| ImportError::UnsupportedFormat(e.to_string()))?;

    if !source.is_file() {
        return Err(ImportError::FileNotFound(source.display().to_string()));
    }

    if !target_dir.exists() {
        fs::create_dir_all(target_dir)?;
    }

    let file_name = generate_filename(&extension);
    let path = target_dir.join(&file_name);

    fs::copy(source, &path)?;

    tracing::debug!(
        source = %source.display(),
        dest = %path.display(),
        "copied sound into library"
    );

    Ok(CopiedFile {
        file_name,
        extension,
        path,
    })
}
