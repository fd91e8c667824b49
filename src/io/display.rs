//! Plain-text rendering of the grid and editor status

use std::fmt::Write as _;

use crate::editor::EditController;
use crate::spatial::{GridStore, TileType};

/// Character drawn on the spawn cell
pub const SPAWN_GLYPH: char = '@';

/// Render the grid with one character per cell and one line per row
///
/// Palette codes print as their digit, other codes as `?`, and the spawn cell
/// as [`SPAWN_GLYPH`].
pub fn render_grid(grid: &GridStore) -> String {
    let spawn = grid.spawn();
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());

    for (y, row) in grid.rows().enumerate() {
        for (x, &code) in row.iter().enumerate() {
            let is_spawn = spawn.is_some_and(|s| {
                usize::try_from(s.x).ok() == Some(x) && usize::try_from(s.y).ok() == Some(y)
            });
            out.push(if is_spawn {
                SPAWN_GLYPH
            } else {
                TileType::from_code(code).glyph()
            });
        }
        out.push('\n');
    }

    out
}

/// One-line summary of the editing state, shown below the map
pub fn status_line(controller: &EditController) -> String {
    let mut line = format!("Current tile type: {}", controller.current_tile().code());

    match controller.pointer_cell() {
        Some(cell) => {
            let _ = write!(line, " | pointer ({}, {})", cell.x, cell.y);
        }
        None => line.push_str(" | pointer -"),
    }
    match controller.grid().spawn() {
        Some(spawn) => {
            let _ = write!(line, " | spawn ({}, {})", spawn.x, spawn.y);
        }
        None => line.push_str(" | no spawn"),
    }
    let _ = write!(line, " | export to {}", controller.output_path().display());

    line
}
