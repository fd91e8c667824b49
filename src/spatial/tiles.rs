//! Tile type enumeration and display palette
//!
//! Tile codes 0..=8 each carry a fixed color. Any other code is still a legal
//! cell value; it is kept as [`TileType::Other`] and drawn in the unknown color.

use crate::io::configuration::MAX_TILE_TYPE;

/// RGBA color used for display and previews
pub type Rgba = [u8; 4];

/// Color of cells whose code has no palette entry
pub const UNKNOWN_COLOR: Rgba = [0, 0, 0, 255];
/// Color of the spawn cell, drawn over its tile color
pub const SPAWN_COLOR: Rgba = [190, 33, 55, 255];
/// Color of the outline drawn around every cell
pub const OUTLINE_COLOR: Rgba = [130, 130, 130, 255];

/// Semantic role of a tile code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Code 0, walkable floor
    Floor,
    /// Code 1, the default wall used for grid borders
    Wall,
    /// Code 2
    Green,
    /// Code 3
    Blue,
    /// Code 4
    Orange,
    /// Code 5
    Purple,
    /// Code 6
    Yellow,
    /// Code 7
    Red,
    /// Code 8
    Brown,
    /// Any code outside 0..=8
    Other(i32),
}

impl TileType {
    /// Every tile type with a palette entry, ordered by code
    pub const PALETTE: [Self; MAX_TILE_TYPE as usize + 1] = [
        Self::Floor,
        Self::Wall,
        Self::Green,
        Self::Blue,
        Self::Orange,
        Self::Purple,
        Self::Yellow,
        Self::Red,
        Self::Brown,
    ];

    /// Classify a stored cell value
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Floor,
            1 => Self::Wall,
            2 => Self::Green,
            3 => Self::Blue,
            4 => Self::Orange,
            5 => Self::Purple,
            6 => Self::Yellow,
            7 => Self::Red,
            8 => Self::Brown,
            other => Self::Other(other),
        }
    }

    /// Map a digit key ('0'..='8') to its tile type
    pub fn from_key(key: char) -> Option<Self> {
        key.to_digit(10)
            .and_then(|digit| i32::try_from(digit).ok())
            .map(Self::from_code)
            .filter(|tile| !tile.is_unknown())
    }

    /// Numeric code stored in the grid
    pub const fn code(self) -> i32 {
        match self {
            Self::Floor => 0,
            Self::Wall => 1,
            Self::Green => 2,
            Self::Blue => 3,
            Self::Orange => 4,
            Self::Purple => 5,
            Self::Yellow => 6,
            Self::Red => 7,
            Self::Brown => 8,
            Self::Other(code) => code,
        }
    }

    /// Whether this code lies outside the palette
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Other(_))
    }

    /// Display color
    pub const fn color(self) -> Rgba {
        match self {
            Self::Floor => [200, 200, 200, 255],
            Self::Wall => [80, 80, 80, 255],
            Self::Green => [0, 228, 48, 255],
            Self::Blue => [0, 121, 241, 255],
            Self::Orange => [255, 161, 0, 255],
            Self::Purple => [200, 122, 255, 255],
            Self::Yellow => [253, 249, 0, 255],
            Self::Red => [230, 41, 55, 255],
            Self::Brown => [127, 106, 79, 255],
            Self::Other(_) => UNKNOWN_COLOR,
        }
    }

    /// Single character used by the text renderer
    pub fn glyph(self) -> char {
        match self {
            Self::Other(_) => '?',
            known => u32::try_from(known.code())
                .ok()
                .and_then(|digit| char::from_digit(digit, 10))
                .unwrap_or('?'),
        }
    }
}

impl From<i32> for TileType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}
