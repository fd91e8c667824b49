//! Tile grid storage with a single optional spawn point
//!
//! Cells live in one contiguous row-major buffer indexed `[y, x]`. The grid
//! never changes size after construction; every edit is a single in-place
//! cell or spawn write, and writes outside the grid are ignored.

use ndarray::Array2;

use crate::io::configuration::{MAX_GRID_DIMENSION, WALL_TILE};
use crate::io::error::{EditorError, Result};
use crate::spatial::tiles::TileType;

/// Cell coordinate in grid space
///
/// Signed so pointer-derived coordinates left of or above the grid can be
/// represented and rejected by bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellPos {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl CellPos {
    /// Create a coordinate from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Tile grid with fixed dimensions and an optional spawn cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStore {
    cells: Array2<i32>,
    spawn: Option<CellPos>,
}

impl GridStore {
    /// Create a grid bordered with walls and an empty interior
    ///
    /// Cells on the first or last row or column hold [`WALL_TILE`], all others
    /// hold 0. The spawn starts unset.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidSize`] if either dimension is zero or
    /// exceeds [`MAX_GRID_DIMENSION`]
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_size(width, height)?;

        let cells = Array2::from_shape_fn((height, width), |(y, x)| {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                WALL_TILE
            } else {
                0
            }
        });

        Ok(Self { cells, spawn: None })
    }

    /// Create a grid with every cell set to 0 and no spawn
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidSize`] if either dimension is zero or
    /// exceeds [`MAX_GRID_DIMENSION`]
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        validate_size(width, height)?;

        Ok(Self {
            cells: Array2::zeros((height, width)),
            spawn: None,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Current spawn cell, if one is set
    pub const fn spawn(&self) -> Option<CellPos> {
        self.spawn
    }

    /// Check whether a coordinate lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index_of(x, y).is_some()
    }

    /// Overwrite one cell with an arbitrary tile code
    ///
    /// Codes outside the palette are stored unchanged. Returns `false` without
    /// touching the grid when the coordinate is out of bounds.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: i32) -> bool {
        let Some(index) = self.index_of(x, y) else {
            return false;
        };

        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Move the spawn to a cell inside the grid
    ///
    /// Returns `false` and keeps the previous spawn when the coordinate is out
    /// of bounds.
    pub fn set_spawn(&mut self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.spawn = Some(CellPos::new(x, y));
        true
    }

    /// Remove the spawn
    pub const fn clear_spawn(&mut self) {
        self.spawn = None;
    }

    /// Read the tile code of one cell
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] if the coordinate lies outside the grid
    pub fn tile_at(&self, x: i32, y: i32) -> Result<i32> {
        self.index_of(x, y)
            .and_then(|index| self.cells.get(index).copied())
            .ok_or(EditorError::OutOfBounds {
                x,
                y,
                dimensions: (self.width(), self.height()),
            })
    }

    /// Read one cell as a [`TileType`]
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] if the coordinate lies outside the grid
    pub fn tile_type_at(&self, x: i32, y: i32) -> Result<TileType> {
        self.tile_at(x, y).map(TileType::from)
    }

    /// Overwrite row `y` from left to right with `values`
    ///
    /// Stops at the grid width; cells past the end of `values` keep their
    /// contents. Returns `false` when `y` is out of bounds.
    pub fn fill_row(&mut self, y: usize, values: impl IntoIterator<Item = i32>) -> bool {
        let width = self.width();
        let Some(row) = self
            .cells
            .as_slice_mut()
            .and_then(|cells| cells.chunks_exact_mut(width).nth(y))
        else {
            return false;
        };

        for (cell, value) in row.iter_mut().zip(values) {
            *cell = value;
        }
        true
    }

    /// Iterate rows from top to bottom, each ordered by ascending column
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // Cells are always allocated in standard (row-major) layout
        self.cells
            .as_slice()
            .unwrap_or_default()
            .chunks_exact(self.width())
    }

    // Maps a signed coordinate to a `[row, col]` index when it is in bounds
    fn index_of(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width() && row < self.height()).then_some([row, col])
    }
}

fn validate_size(width: usize, height: usize) -> Result<()> {
    let reason = if width == 0 || height == 0 {
        "dimensions must be positive"
    } else if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        "dimensions exceed the maximum grid dimension"
    } else {
        return Ok(());
    };

    Err(EditorError::InvalidSize {
        width: i64::try_from(width).unwrap_or(i64::MAX),
        height: i64::try_from(height).unwrap_or(i64::MAX),
        reason,
    })
}

/// Requested grid dimensions validated from signed user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl GridSize {
    /// Validate signed dimensions as typed by a user or read from a file
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidSize`] if either dimension is not positive
    /// or exceeds [`MAX_GRID_DIMENSION`]
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let reject = |reason| EditorError::InvalidSize {
            width,
            height,
            reason,
        };

        if width <= 0 || height <= 0 {
            return Err(reject("dimensions must be positive"));
        }

        match (usize::try_from(width), usize::try_from(height)) {
            (Ok(w), Ok(h)) if w <= MAX_GRID_DIMENSION && h <= MAX_GRID_DIMENSION => Ok(Self {
                width: w,
                height: h,
            }),
            _ => Err(reject("dimensions exceed the maximum grid dimension")),
        }
    }

    /// Square size, as produced by the "max size" prompt
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidSize`] under the same rules as [`GridSize::new`]
    pub fn square(size: i64) -> Result<Self> {
        Self::new(size, size)
    }

    /// Allocate a wall-bordered grid of this size
    ///
    /// # Errors
    ///
    /// Propagates [`GridStore::new`] failures
    pub fn create(self) -> Result<GridStore> {
        GridStore::new(self.width, self.height)
    }
}
