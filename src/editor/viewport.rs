//! Display scale and pointer-to-cell mapping

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::CellPos;

/// Square cell size used to lay the grid out on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    tile_size: f32,
}

impl Viewport {
    /// Fit a map into a window, leaving a strip below the grid for status text
    ///
    /// The tile size is the largest square that fits both the window width and
    /// the height left above the reserved strip.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorError::InvalidParameter`] if the window leaves no
    /// room for the grid, since every pointer would then map to the same cell
    pub fn fit(
        window_width: u32,
        window_height: u32,
        reserved_height: u32,
        map_width: usize,
        map_height: usize,
    ) -> Result<Self> {
        let scale_x = window_width as f32 / map_width.max(1) as f32;
        let scale_y =
            window_height.saturating_sub(reserved_height) as f32 / map_height.max(1) as f32;

        let tile_size = scale_x.min(scale_y);

        if tile_size.is_nan() || tile_size <= 0.0 {
            return Err(invalid_parameter(
                "window",
                &format!("{window_width}x{window_height}"),
                &format!("needs a positive width and more than {reserved_height} pixels of height"),
            ));
        }

        Ok(Self { tile_size })
    }

    /// Use a fixed tile size
    pub const fn with_tile_size(tile_size: f32) -> Self {
        Self { tile_size }
    }

    /// Side length of one cell in pixels
    pub const fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Cell under a pointer position
    ///
    /// Positions left of or above the grid map to negative coordinates; callers
    /// bounds-check the result against the grid.
    pub fn cell_at(&self, pointer_x: f32, pointer_y: f32) -> CellPos {
        // Float-to-int casts saturate, so huge or infinite ratios stay out of bounds
        CellPos::new(
            (pointer_x / self.tile_size).floor() as i32,
            (pointer_y / self.tile_size).floor() as i32,
        )
    }
}
