//! Tests for editor constants

#[cfg(test)]
mod tests {
    use tilemap_editor::io::configuration::{
        DEFAULT_MAP_SIZE, DEFAULT_OUTPUT_FILE, EXPORT_KEY, FLAGS_LEN, MAX_GRID_DIMENSION,
        MAX_TILE_TYPE, UI_HEIGHT, WALL_TILE, WINDOW_HEIGHT, WINDOW_WIDTH,
    };
    use tilemap_editor::spatial::TileType;

    // Tests stored-format defaults
    // Verified by changing constant values
    #[test]
    fn test_format_defaults() {
        assert_eq!(DEFAULT_OUTPUT_FILE, "map.h");
        assert_eq!(DEFAULT_MAP_SIZE, 24);
        assert_eq!(FLAGS_LEN, 12);
    }

    // Tests tile constants agree with the palette
    #[test]
    fn test_tile_constants() {
        assert_eq!(TileType::from_code(WALL_TILE), TileType::Wall);
        assert_eq!(TileType::PALETTE.len() as i32, MAX_TILE_TYPE + 1);
        assert!(TileType::from_code(MAX_TILE_TYPE + 1).is_unknown());
    }

    // Tests the reserved strip leaves room for the grid
    #[test]
    fn test_window_geometry() {
        assert_eq!((WINDOW_WIDTH, WINDOW_HEIGHT, UI_HEIGHT), (800, 600, 50));
        assert!(UI_HEIGHT < WINDOW_HEIGHT);
        assert!(DEFAULT_MAP_SIZE <= MAX_GRID_DIMENSION);
        assert_eq!(EXPORT_KEY, 'e');
    }
}
