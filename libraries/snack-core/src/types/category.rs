//! Category types

use serde::{Deserialize, Serialize};

use super::CategoryId;
use crate::color::HexColor;

/// Name of the always-present, protected category
pub const DEFAULT_CATEGORY_NAME: &str = "Sin categoría";

/// Neutral gray used by the default category and by sounds whose
/// category no longer exists
pub const DEFAULT_CATEGORY_COLOR: &str = "#808080";

/// Preset categories inserted on first launch, after the default one
pub const CATEGORY_PRESETS: [(&str, &str); 12] = [
    ("Gritos", "#FF0000"),
    ("Saludos", "#00FF00"),
    ("Golpes", "#EBB04B"),
    ("Disparos", "#4B5EAA"),
    ("Risas", "#FFFF00"),
    ("Burlas", "#800080"),
    ("Victorias", "#FFD700"),
    ("Derrotas", "#808080"),
    ("Animales", "#8B4513"),
    ("Memes", "#FF69B4"),
    ("Efectos Mágicos", "#FF00FF"),
    ("Sonidos Locos", "#FF4500"),
];

/// Whether `name` is the protected default category
pub fn is_default_category_name(name: &str) -> bool {
    name.trim() == DEFAULT_CATEGORY_NAME
}

/// A named, colored grouping applied to sounds by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// `#RRGGBB`
    pub color_hex: String,
    /// Unix epoch seconds
    pub created_at: i64,
}

impl Category {
    /// Whether this is the protected default category
    pub fn is_default(&self) -> bool {
        is_default_category_name(&self.name)
    }

    /// Parsed color, falling back to neutral gray for malformed values
    pub fn color(&self) -> HexColor {
        self.color_hex.parse().unwrap_or(HexColor::NEUTRAL_GRAY)
    }
}

/// Data for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub color_hex: String,
}

/// Data for renaming and recoloring a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    pub color_hex: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, color_hex: &str) -> Category {
        Category {
            id: CategoryId::generate(),
            name: name.to_string(),
            color_hex: color_hex.to_string(),
            created_at: 0,
        }
    }

    #[test]
    fn default_category_is_recognized_by_name() {
        assert!(category(DEFAULT_CATEGORY_NAME, DEFAULT_CATEGORY_COLOR).is_default());
        assert!(!category("Gritos", "#FF0000").is_default());
        // Only the exact spelling is protected
        assert!(!category("sin categoria", "#808080").is_default());
    }

    #[test]
    fn malformed_color_falls_back_to_gray() {
        let cat = category("Memes", "not-a-color");
        assert_eq!(cat.color(), HexColor::NEUTRAL_GRAY);
    }

    #[test]
    fn presets_have_unique_names() {
        let mut names: Vec<_> = CATEGORY_PRESETS.iter().map(|(n, _)| n.to_lowercase()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), CATEGORY_PRESETS.len());
        assert!(!names.contains(&DEFAULT_CATEGORY_NAME.to_lowercase()));
    }

    #[test]
    fn preset_colors_parse() {
        for (name, hex) in CATEGORY_PRESETS {
            assert!(hex.parse::<HexColor>().is_ok(), "bad color for {}", name);
        }
    }
}
