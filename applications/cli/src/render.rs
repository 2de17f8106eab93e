//! Plain-text tables for terminal output

use crate::error::Result;
use crate::player::PlayOutcome;
use serde::Serialize;
use snack_board::SoundTile;
use snack_core::{Category, Sound};
use std::fmt::Write;

/// Chooses between JSON and the plain-text rendering
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Text to print for `value`; `text` is only called without `--json`
    pub fn format<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<String> {
        if self.json {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            Ok(json)
        } else {
            Ok(text())
        }
    }

    pub fn print<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        print!("{}", self.format(value, text)?);
        Ok(())
    }
}

/// One line per category: color, name, id
pub fn categories_table(categories: &[Category]) -> String {
    let mut out = String::new();
    for category in categories {
        let marker = if category.is_default() { " (default)" } else { "" };
        let _ = writeln!(
            out,
            "{}  {}{}  [{}]",
            category.color_hex, category.name, marker, category.id
        );
    }
    out
}

/// One line per sound in display order; imported sounds are starred
pub fn sounds_table(sounds: &[Sound]) -> String {
    let mut out = String::new();
    for sound in sounds {
        let custom = if sound.is_custom { "*" } else { " " };
        let _ = writeln!(
            out,
            "{:>3}.{} {} ({})  [{}]",
            sound.order, custom, sound.description, sound.category, sound.id
        );
    }
    out
}

/// The board as rows of cells
///
/// Each cell shows the tile's color and description; the active sound is
/// marked `>` when playing and `=` when paused.
pub fn grid(rows: &[Vec<SoundTile>]) -> String {
    let width = rows
        .iter()
        .flatten()
        .map(|tile| tile.description.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .map(|tile| {
                let status = if tile.is_playing {
                    '>'
                } else if tile.is_paused {
                    '='
                } else {
                    ' '
                };
                format!(
                    "[{}{} {:<width$}]",
                    status,
                    tile.background,
                    tile.description,
                    width = width
                )
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out
}

/// Result line for the `play` command
pub fn play_outcome(outcome: &PlayOutcome) -> String {
    match outcome {
        PlayOutcome::Finished => "finished\n".to_string(),
        PlayOutcome::Failed(message) => format!("failed: {message}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snack_core::{AudioRef, CategoryId, HexColor, SoundId, DEFAULT_CATEGORY_NAME};

    fn tile(description: &str, is_playing: bool, is_paused: bool) -> SoundTile {
        SoundTile {
            id: SoundId::new(description),
            description: description.to_string(),
            category: "Memes".to_string(),
            order: 1,
            background: HexColor::new(0xFF, 0x69, 0xB4),
            text_color: HexColor::BLACK,
            is_playing,
            is_paused,
        }
    }

    #[test]
    fn test_categories_table_marks_default() {
        let categories = vec![Category {
            id: CategoryId::new("c1"),
            name: DEFAULT_CATEGORY_NAME.to_string(),
            color_hex: "#808080".to_string(),
            created_at: 0,
        }];

        let table = categories_table(&categories);
        assert_eq!(table, "#808080  Sin categoría (default)  [c1]\n");
    }

    #[test]
    fn test_sounds_table_stars_custom() {
        let mut sound = Sound::new("Risa", AudioRef::bundled("risa"), "Risas", 3);
        sound.id = SoundId::new("s1");
        assert_eq!(sounds_table(&[sound.clone()]), "  3.  Risa (Risas)  [s1]\n");

        sound.is_custom = true;
        assert_eq!(sounds_table(&[sound]), "  3.* Risa (Risas)  [s1]\n");
    }

    #[test]
    fn test_output_json_or_text() {
        let sound = Sound::new("Risa", AudioRef::bundled("risa"), "Risas", 3);

        let text = Output { json: false }
            .format(&sound, || "plain\n".to_string())
            .unwrap();
        assert_eq!(text, "plain\n");

        let json = Output { json: true }
            .format(&sound, || unreachable!("text is not rendered for JSON"))
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["description"], "Risa");
        assert_eq!(parsed["order"], 3);
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_grid_pads_and_marks() {
        let rows = vec![
            vec![tile("Boom", true, false), tile("Hi", false, false)],
            vec![tile("Meow", false, true)],
        ];

        let text = grid(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[>#FF69B4 Boom] [ #FF69B4 Hi  ]");
        assert_eq!(lines[1], "[=#FF69B4 Meow]");
    }
}
