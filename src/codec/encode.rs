//! Export of a grid as C-style source text

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::codec::{ARRAY_CLOSE, ARRAY_OPEN, NO_SPAWN_COMMENT, ROW_INDENT, flags_declaration};
use crate::io::error::{Result, WithPath};
use crate::spatial::GridStore;

/// Render a grid in the stored text format
///
/// The output always ends with a newline and decodes back to an equal grid.
pub fn encode_to_string(grid: &GridStore) -> String {
    let mut out = String::new();

    out.push_str(&format!("#define mapWidth {}\n", grid.width()));
    out.push_str(&format!("#define mapHeight {}\n", grid.height()));
    out.push_str(&flags_declaration());
    out.push('\n');
    out.push_str(ARRAY_OPEN);
    out.push('\n');

    let last_row = grid.height().saturating_sub(1);
    for (y, row) in grid.rows().enumerate() {
        let values = row
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(ROW_INDENT);
        out.push('{');
        out.push_str(&values);
        out.push('}');
        if y < last_row {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(ARRAY_CLOSE);
    out.push('\n');

    match grid.spawn() {
        Some(spawn) => {
            out.push_str(&format!("int playerSpawnX = {};\n", spawn.x));
            out.push_str(&format!("int playerSpawnY = {};\n", spawn.y));
        }
        None => {
            out.push_str(NO_SPAWN_COMMENT);
            out.push('\n');
        }
    }

    out
}

/// Write a grid in the stored text format to any writer
///
/// # Errors
///
/// Returns the underlying I/O error if writing or flushing fails
pub fn encode<W: Write>(grid: &GridStore, mut writer: W) -> std::io::Result<()> {
    writer.write_all(encode_to_string(grid).as_bytes())?;
    writer.flush()
}

/// Export a grid to a file, replacing any previous contents
///
/// # Errors
///
/// Returns [`crate::EditorError::FileSystem`] if the file cannot be created or written
pub fn encode_file(grid: &GridStore, path: &Path) -> Result<()> {
    let file = File::create(path).with_path(path, "create")?;
    encode(grid, BufWriter::new(file)).with_path(path, "write")?;
    log::info!("Map exported to {}", path.display());
    Ok(())
}
