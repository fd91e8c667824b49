//! Stored text format for tile maps
//!
//! Maps are stored as a C header fragment so they can be included directly by
//! game code:
//!
//! ```text
//! #define mapWidth 3
//! #define mapHeight 2
//! bool FLAGS[12];
//! int worldMap[mapWidth][mapHeight] = {
//!     {1, 1, 1},
//!     {1, 0, 1}
//! };
//! int playerSpawnX = 1;
//! int playerSpawnY = 1;
//! ```

use crate::io::configuration::FLAGS_LEN;

/// Lenient import of stored maps
pub mod decode;
/// Export of grids to the stored format
pub mod encode;
/// Row tokenizer and declaration matching
pub mod scanner;

pub use decode::Decoder;
pub use encode::{encode, encode_file, encode_to_string};

/// Words introducing the width declaration
pub const WIDTH_DECLARATION: &[&str] = &["#define", "mapWidth"];
/// Words introducing the height declaration
pub const HEIGHT_DECLARATION: &[&str] = &["#define", "mapHeight"];
/// Words introducing the spawn column declaration
pub const SPAWN_X_DECLARATION: &[&str] = &["int", "playerSpawnX", "="];
/// Words introducing the spawn row declaration
pub const SPAWN_Y_DECLARATION: &[&str] = &["int", "playerSpawnY", "="];

/// Line opening the cell array
pub const ARRAY_OPEN: &str = "int worldMap[mapWidth][mapHeight] = {";
/// Line closing the cell array
pub const ARRAY_CLOSE: &str = "};";
/// Line written instead of spawn declarations when no spawn is set
pub const NO_SPAWN_COMMENT: &str = "// No player spawn set";
/// Indentation before each stored row
pub const ROW_INDENT: &str = "    ";

/// Placeholder flags declaration preceding the cell array
pub fn flags_declaration() -> String {
    format!("bool FLAGS[{FLAGS_LEN}];")
}
