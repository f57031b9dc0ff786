use serde::{Deserialize, Serialize};
use std::fmt;

/// What a left click does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    PlacePoint,
    DrawLine,
    MoveLine,
    Intersect,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::PlacePoint, Mode::DrawLine, Mode::MoveLine, Mode::Intersect];

    /// Keyboard shortcut that selects this mode.
    pub fn key(&self) -> char {
        match self {
            Mode::PlacePoint => 'p',
            Mode::DrawLine => 'l',
            Mode::MoveLine => 'm',
            Mode::Intersect => 'i',
        }
    }

    pub fn from_key(key: char) -> Option<Mode> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::PlacePoint => write!(f, "Define points"),
            Mode::DrawLine => write!(f, "Define lines"),
            Mode::MoveLine => write!(f, "Move"),
            Mode::Intersect => write!(f, "Intersect"),
        }
    }
}
