//! The fixed tile palette.
//!
//! Every tile in a grid is one of eight named colors. The order of
//! [`TileColor::ALL`] is stable and is what random draws index into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tile color from the fixed 8-color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Cyan,
}

impl TileColor {
    /// All palette colors in draw order.
    pub const ALL: [TileColor; 8] = [
        TileColor::Red,
        TileColor::Blue,
        TileColor::Green,
        TileColor::Yellow,
        TileColor::Purple,
        TileColor::Orange,
        TileColor::Pink,
        TileColor::Cyan,
    ];

    /// Number of colors in the palette.
    pub const COUNT: usize = Self::ALL.len();

    /// Lowercase color name, as shown on the target label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Blue => "blue",
            TileColor::Green => "green",
            TileColor::Yellow => "yellow",
            TileColor::Purple => "purple",
            TileColor::Orange => "orange",
            TileColor::Pink => "pink",
            TileColor::Cyan => "cyan",
        }
    }

    /// Position of this color in [`TileColor::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown color name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown tile color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for TileColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TileColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_draw_order() {
        for (i, color) in TileColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_parse_name() {
        assert_eq!("red".parse::<TileColor>(), Ok(TileColor::Red));
        assert_eq!("Cyan".parse::<TileColor>(), Ok(TileColor::Cyan));
        assert!("magenta".parse::<TileColor>().is_err());
    }

    #[test]
    fn test_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&TileColor::Purple).unwrap();
        assert_eq!(json, "\"purple\"");

        let color: TileColor = serde_json::from_str("\"orange\"").unwrap();
        assert_eq!(color, TileColor::Orange);
    }
}
