//! PNG preview export using the tile palette

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::io::error::{EditorError, Result, WithPath, invalid_parameter};
use crate::spatial::tiles::{OUTLINE_COLOR, SPAWN_COLOR, UNKNOWN_COLOR};
use crate::spatial::GridStore;

/// Smallest cell size that still leaves room inside the outline
const MIN_OUTLINED_CELL: u32 = 3;

/// Draw the grid as an image with `cell_pixels` square pixels per cell
///
/// Each cell is filled with its tile color, the spawn cell with
/// [`SPAWN_COLOR`]. Cells of at least three pixels get a one-pixel outline on
/// their top and left edges.
///
/// # Errors
///
/// Returns an error if `cell_pixels` is zero or the image would be too large
pub fn render_grid_image(grid: &GridStore, cell_pixels: u32) -> Result<RgbaImage> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"cell size must be positive",
        ));
    }

    let image_width = u32::try_from(grid.width())
        .ok()
        .and_then(|w| w.checked_mul(cell_pixels));
    let image_height = u32::try_from(grid.height())
        .ok()
        .and_then(|h| h.checked_mul(cell_pixels));
    let (Some(image_width), Some(image_height)) = (image_width, image_height) else {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"preview dimensions overflow",
        ));
    };

    let spawn = grid.spawn();
    let outlined = cell_pixels >= MIN_OUTLINED_CELL;

    Ok(RgbaImage::from_fn(image_width, image_height, |px, py| {
        if outlined && (px % cell_pixels == 0 || py % cell_pixels == 0) {
            return Rgba(OUTLINE_COLOR);
        }

        let x = (px / cell_pixels) as i32;
        let y = (py / cell_pixels) as i32;
        let color = if spawn.is_some_and(|s| s.x == x && s.y == y) {
            SPAWN_COLOR
        } else {
            grid.tile_type_at(x, y)
                .map_or(UNKNOWN_COLOR, |tile| tile.color())
        };
        Rgba(color)
    }))
}

/// Export the grid as a PNG preview
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero or the preview would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &GridStore, cell_pixels: u32, output_path: &Path) -> Result<()> {
    let img = render_grid_image(grid, cell_pixels)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| EditorError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!("Preview written to {}", output_path.display());
    Ok(())
}
