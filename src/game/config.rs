#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

pub const DEFAULT_WHITE_NAME: &str = "White Player";
pub const DEFAULT_BLACK_NAME: &str = "Black Player";

/// Options for a new game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub white_name: String,
    pub black_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            white_name: DEFAULT_WHITE_NAME.to_string(),
            black_name: DEFAULT_BLACK_NAME.to_string(),
        }
    }
}

impl GameConfig {
    /// Config with the given player names. Blank names fall back to the defaults.
    #[must_use]
    pub fn with_names(white: &str, black: &str) -> Self {
        GameConfig {
            white_name: name_or_default(white, DEFAULT_WHITE_NAME),
            black_name: name_or_default(black, DEFAULT_BLACK_NAME),
        }
    }

    #[must_use]
    pub fn name(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_name,
            Color::Black => &self.black_name,
        }
    }
}

fn name_or_default(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
