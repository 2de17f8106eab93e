//! Input validation shared by the category and sound forms
//!
//! Every check returns `SnackError::Validation` with a message meant for the
//! user; callers abort the operation before touching storage.

use std::path::Path;

use crate::color::HexColor;
use crate::error::{Result, SnackError};
use crate::types::{Category, CategoryId};

/// Audio file extensions accepted for import (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["mp3", "wav", "m4a"];

/// Trim `value` and reject it if nothing is left
pub fn require_text(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SnackError::validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Parse an order field into a positive integer
pub fn parse_order(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(order) if order > 0 => Ok(order),
        _ => Err(SnackError::validation(
            "Order must be a positive whole number",
        )),
    }
}

/// Lowercased extension of `path` if it is a supported audio format
pub fn supported_extension(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(SnackError::validation(
            "Only MP3, WAV or M4A files are accepted",
        ))
    }
}

/// Parse a user-entered color and return it normalized as `#RRGGBB`
pub fn normalize_color(value: &str) -> Result<String> {
    let color: HexColor = value.parse()?;
    Ok(color.to_string())
}

/// Reject `name` if another category already uses it (case-insensitive)
///
/// `editing` excludes the record being renamed from the comparison.
pub fn ensure_unique_category_name(
    name: &str,
    existing: &[Category],
    editing: Option<&CategoryId>,
) -> Result<()> {
    let wanted = name.trim().to_lowercase();
    let taken = existing
        .iter()
        .filter(|cat| Some(&cat.id) != editing)
        .any(|cat| cat.name.trim().to_lowercase() == wanted);

    if taken {
        return Err(SnackError::validation(
            "A category with that name already exists",
        ));
    }
    Ok(())
}
