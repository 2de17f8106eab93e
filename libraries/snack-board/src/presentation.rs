//! Board view models
//!
//! Tiles are what the grid renders: one per sound, in display order, colored
//! by the sound's category and flagged with the playback state.

use serde::Serialize;
use snack_core::order::sort_by_order;
use snack_core::{Category, HexColor, Sound, SoundId};
use snack_playback::PlaybackState;

/// Columns in the board grid unless configured otherwise
pub const DEFAULT_GRID_COLUMNS: usize = 4;

/// One cell of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundTile {
    pub id: SoundId,
    pub description: String,
    pub category: String,
    pub order: u32,
    pub background: HexColor,
    pub text_color: HexColor,
    pub is_playing: bool,
    pub is_paused: bool,
}

/// Color for a sound's category name
///
/// Unknown, deleted and empty names fall back to neutral gray.
pub fn category_color(categories: &[Category], name: &str) -> HexColor {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return HexColor::NEUTRAL_GRAY;
    }

    categories
        .iter()
        .find(|cat| cat.name.trim().to_lowercase() == wanted)
        .map_or(HexColor::NEUTRAL_GRAY, Category::color)
}

/// Build tiles for `sounds`, sorted by order
pub fn tiles(sounds: &[Sound], categories: &[Category], state: &PlaybackState) -> Vec<SoundTile> {
    let mut sorted = sounds.to_vec();
    sort_by_order(&mut sorted);

    sorted
        .into_iter()
        .map(|sound| {
            let background = category_color(categories, &sound.category);
            SoundTile {
                is_playing: state.is_playing(&sound.id),
                is_paused: state.is_paused(&sound.id),
                id: sound.id,
                description: sound.description,
                category: sound.category,
                order: sound.order,
                background,
                text_color: background.contrasting_text(),
            }
        })
        .collect()
}

/// Split items into rows of `columns` (at least one per row)
pub fn grid_rows<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    items
        .chunks(columns.max(1))
        .map(<[T]>::to_vec)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use snack_core::{AudioRef, CategoryId};

    fn category(name: &str, color_hex: &str) -> Category {
        Category {
            id: CategoryId::generate(),
            name: name.to_string(),
            color_hex: color_hex.to_string(),
            created_at: 0,
        }
    }

    fn sound(description: &str, category: &str, order: u32) -> Sound {
        Sound::new(description, AudioRef::bundled(description), category, order)
    }

    #[test]
    fn test_category_color_lookup() {
        let categories = vec![category("Risas", "#FFFF00"), category("Burlas", "#800080")];

        assert_eq!(category_color(&categories, "Risas"), HexColor::new(0xFF, 0xFF, 0x00));
        assert_eq!(category_color(&categories, " burlas "), HexColor::new(0x80, 0x00, 0x80));
        assert_eq!(category_color(&categories, "Borrada"), HexColor::NEUTRAL_GRAY);
        assert_eq!(category_color(&categories, ""), HexColor::NEUTRAL_GRAY);
    }

    #[test]
    fn test_tiles_sorted_and_flagged() {
        let categories = vec![category("Risas", "#FFFF00"), category("Burlas", "#800080")];
        let b = sound("B", "Burlas", 2);
        let a = sound("A", "Risas", 1);
        let c = sound("C", "Gone", 3);
        let state = PlaybackState::Paused(b.id.clone());

        let tiles = tiles(&[b.clone(), c, a], &categories, &state);

        let names: Vec<_> = tiles.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        assert_eq!(tiles[0].text_color, HexColor::BLACK);
        assert_eq!(tiles[1].text_color, HexColor::WHITE);
        assert!(tiles[1].is_paused);
        assert!(!tiles[1].is_playing);
        assert_eq!(tiles[2].background, HexColor::NEUTRAL_GRAY);
    }

    #[test]
    fn test_grid_rows() {
        let items: Vec<u32> = (1..=10).collect();

        let rows = grid_rows(&items, DEFAULT_GRID_COLUMNS);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], vec![9, 10]);

        assert_eq!(grid_rows(&items, 0).len(), 10);
        assert!(grid_rows::<u32>(&[], 4).is_empty());
    }
}
