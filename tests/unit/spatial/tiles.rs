//! Tests for tile classification and the display palette

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tilemap_editor::spatial::TileType;
    use tilemap_editor::spatial::tiles::{SPAWN_COLOR, UNKNOWN_COLOR};

    // Tests every palette code maps back to itself
    #[test]
    fn test_palette_codes_are_sequential() {
        for (code, tile) in TileType::PALETTE.iter().enumerate() {
            assert_eq!(tile.code(), code as i32);
            assert_eq!(TileType::from_code(code as i32), *tile);
            assert!(!tile.is_unknown());
        }
        assert_eq!(TileType::from_code(1), TileType::Wall);
    }

    // Tests codes outside the palette are preserved
    // Verified by collapsing Other to a fixed code
    #[test]
    fn test_unknown_codes_round_trip() {
        for code in [-1, 9, 42, i32::MIN, i32::MAX] {
            let tile = TileType::from(code);
            assert_eq!(tile, TileType::Other(code));
            assert_eq!(tile.code(), code);
            assert!(tile.is_unknown());
            assert_eq!(tile.color(), UNKNOWN_COLOR);
            assert_eq!(tile.glyph(), '?');
        }
    }

    // Tests palette colors are distinct and differ from the spawn marker
    #[test]
    fn test_palette_colors_distinct() {
        let colors: HashSet<[u8; 4]> = TileType::PALETTE.iter().map(|t| t.color()).collect();
        assert_eq!(colors.len(), TileType::PALETTE.len());
        assert!(!colors.contains(&SPAWN_COLOR));
        assert!(!colors.contains(&UNKNOWN_COLOR));
        assert_eq!(TileType::Floor.color(), [200, 200, 200, 255]);
        assert_eq!(TileType::Wall.color(), [80, 80, 80, 255]);
    }

    // Tests only digit keys 0-8 select tiles
    #[test]
    fn test_from_key() {
        assert_eq!(TileType::from_key('0'), Some(TileType::Floor));
        assert_eq!(TileType::from_key('7'), Some(TileType::Red));
        assert_eq!(TileType::from_key('8'), Some(TileType::Brown));
        assert_eq!(TileType::from_key('9'), None);
        assert_eq!(TileType::from_key('e'), None);
    }

    // Tests glyphs are the code digits
    #[test]
    fn test_glyphs() {
        let glyphs: String = TileType::PALETTE.iter().map(|t| t.glyph()).collect();
        assert_eq!(glyphs, "012345678");
    }
}
