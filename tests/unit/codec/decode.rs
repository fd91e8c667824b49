//! Tests for lenient map decoding and its fallbacks

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tilemap_editor::EditorError;
    use tilemap_editor::codec::Decoder;
    use tilemap_editor::spatial::{CellPos, GridSize, GridStore};

    const STORED: &str = "\
#define mapWidth 4
#define mapHeight 3
bool FLAGS[12];
int worldMap[mapWidth][mapHeight] = {
    {1, 1, 1, 1},
    {1, 0, 7, 1},
    {1, 1, 1, 1}
};
int playerSpawnX = 2;
int playerSpawnY = 1;
";

    fn rows(grid: &GridStore) -> Vec<Vec<i32>> {
        grid.rows().map(<[i32]>::to_vec).collect()
    }

    // Tests a well-formed file decodes cell by cell with its spawn
    #[test]
    fn test_decode_well_formed() {
        let grid = Decoder::default().decode_str(STORED).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(
            rows(&grid),
            vec![vec![1, 1, 1, 1], vec![1, 0, 7, 1], vec![1, 1, 1, 1]]
        );
        assert_eq!(grid.spawn(), Some(CellPos::new(2, 1)));
    }

    // Tests missing spawn declarations leave the spawn unset
    #[test]
    fn test_missing_spawn_is_unset() {
        let text = STORED.replace(
            "int playerSpawnX = 2;\nint playerSpawnY = 1;\n",
            "// No player spawn set\n",
        );
        let grid = Decoder::default().decode_str(&text).unwrap();
        assert_eq!(grid.spawn(), None);

        let truncated = STORED.replace("};\nint playerSpawnX = 2;\nint playerSpawnY = 1;\n", "");
        let grid = Decoder::default().decode_str(&truncated).unwrap();
        assert_eq!(grid.spawn(), None);
        assert_eq!(grid.tile_at(2, 1).unwrap(), 7);
    }

    // Tests a lone spawn declaration is not enough
    #[test]
    fn test_half_spawn_is_unset() {
        let text = STORED.replace("int playerSpawnY = 1;\n", "");
        assert_eq!(Decoder::default().decode_str(&text).unwrap().spawn(), None);
    }

    // Tests negative and out-of-range spawns are discarded
    // Verified by storing the spawn without calling set_spawn
    #[test]
    fn test_invalid_spawn_is_unset() {
        for (x, y) in [(-1, -1), (-1, 1), (4, 1), (2, 3)] {
            let text = STORED
                .replace("playerSpawnX = 2", &format!("playerSpawnX = {x}"))
                .replace("playerSpawnY = 1", &format!("playerSpawnY = {y}"));
            let grid = Decoder::default().decode_str(&text).unwrap();
            assert_eq!(grid.spawn(), None, "spawn ({x}, {y})");
        }
    }

    // Tests spawn declarations are found anywhere after the rows, last one winning
    #[test]
    fn test_spawn_scan_ignores_other_lines() {
        let text = STORED.replace(
            "int playerSpawnX = 2;\n",
            "// extra comment\nint playerSpawnX = 0;\nunrelated line\nint playerSpawnX = 3;\n",
        );
        let grid = Decoder::default().decode_str(&text).unwrap();
        assert_eq!(grid.spawn(), Some(CellPos::new(3, 1)));
    }

    // Tests malformed and short rows become zeros without aborting
    #[test]
    fn test_malformed_rows_fill_with_zero() {
        let text = "\
#define mapWidth 3
#define mapHeight 4
bool FLAGS[12];
int worldMap[mapWidth][mapHeight] = {
    {1, x, 3},
    {4},
    not a row at all
";
        let grid = Decoder::default().decode_str(text).unwrap();
        assert_eq!(
            rows(&grid),
            vec![vec![1, 0, 3], vec![4, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]
        );
        assert_eq!(grid.spawn(), None);
    }

    // Tests unparsable size lines keep the caller's fallback size
    // Verified by resetting to the default size instead of the fallback
    #[test]
    fn test_bad_size_lines_keep_fallback() {
        let text = STORED
            .replace("#define mapWidth 4", "#define mapWdth 4")
            .replace("#define mapHeight 3", "mapHeight = 3");
        let decoder = Decoder::new(GridSize {
            width: 5,
            height: 2,
        });
        let grid = decoder.decode_str(&text).unwrap();

        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 2);
        assert_eq!(rows(&grid), vec![vec![1, 1, 1, 1, 0], vec![1, 0, 7, 1, 0]]);
    }

    // Tests only the broken declaration falls back
    #[test]
    fn test_one_bad_size_line() {
        let text = STORED.replace("#define mapHeight 3", "#define mapHeight three");
        let grid = Decoder::new(GridSize {
            width: 9,
            height: 2,
        })
        .decode_str(&text)
        .unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 2));
    }

    // Tests non-positive sizes are treated as unparsable
    #[test]
    fn test_non_positive_size_keeps_fallback() {
        let text = STORED
            .replace("#define mapWidth 4", "#define mapWidth 0")
            .replace("#define mapHeight 3", "#define mapHeight -3");
        let grid = Decoder::default().decode_str(&text).unwrap();
        assert_eq!((grid.width(), grid.height()), (24, 24));
    }

    // Tests an empty input yields a zeroed fallback grid
    #[test]
    fn test_empty_input() {
        let grid = Decoder::default().decode_str("").unwrap();
        assert_eq!((grid.width(), grid.height()), (24, 24));
        assert!(grid.rows().flatten().all(|&v| v == 0));
        assert_eq!(grid.spawn(), None);
    }

    // Tests CRLF line endings decode like LF
    #[test]
    fn test_crlf_input() {
        let text = STORED.replace('\n', "\r\n");
        let grid = Decoder::default().decode_str(&text).unwrap();
        assert_eq!(grid, Decoder::default().decode_str(STORED).unwrap());
    }

    // Tests decoding from disk and the missing-file failure
    #[test]
    fn test_decode_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.h");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(STORED.as_bytes()).unwrap();
        drop(file);

        let grid = Decoder::default().decode_file(&path).unwrap();
        assert_eq!(grid.tile_at(2, 1).unwrap(), 7);

        let missing = dir.path().join("missing.h");
        match Decoder::default().decode_file(&missing) {
            Err(EditorError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, missing);
                assert_eq!(operation, "open");
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }
}
