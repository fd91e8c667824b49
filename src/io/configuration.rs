//! Editor constants and session defaults

// Storage and format
/// Output file used when the user leaves the output prompt empty
pub const DEFAULT_OUTPUT_FILE: &str = "map.h";
/// Width and height assumed when a stored file omits its size declarations
pub const DEFAULT_MAP_SIZE: usize = 24;
/// Length of the placeholder flags array written to every stored file
pub const FLAGS_LEN: usize = 12;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Tile codes
/// Tile code used to border freshly created grids
pub const WALL_TILE: i32 = 1;
/// Highest tile code with an assigned color
pub const MAX_TILE_TYPE: i32 = 8;

// Display geometry
/// Fixed window width in pixels
pub const WINDOW_WIDTH: u32 = 800;
/// Fixed window height in pixels
pub const WINDOW_HEIGHT: u32 = 600;
/// Height of the status strip reserved below the grid
pub const UI_HEIGHT: u32 = 50;

// Commands
/// Key that triggers an export of the current grid
pub const EXPORT_KEY: char = 'e';

// Preview output
/// Pixel size of one cell in PNG previews
pub const PREVIEW_CELL_PIXELS: u32 = 16;
/// Suffix added to the output stem for PNG previews
pub const PREVIEW_SUFFIX: &str = "_preview";
