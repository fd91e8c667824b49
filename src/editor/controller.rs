//! Event-driven editing of a single grid
//!
//! The controller owns the whole editing context: the grid, the display
//! scale, the selected tile type, the last pointer cell and the export path.
//! Each input event produces at most one grid mutation and reports what it did.

use std::path::{Path, PathBuf};

use crate::codec::encode_file;
use crate::editor::viewport::Viewport;
use crate::io::error::Result;
use crate::spatial::{CellPos, GridStore, TileType};

/// One discrete input delivered to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditEvent {
    /// Pointer moved to a window position in pixels
    PointerMoved {
        /// Horizontal position
        x: f32,
        /// Vertical position
        y: f32,
    },
    /// Digit key selecting the tile type to paint
    SelectTile(i32),
    /// Primary button: paint the selected tile under the pointer
    LeftClick,
    /// Secondary button: move the spawn under the pointer
    RightClick,
    /// Write the grid to the configured output file
    Export,
}

/// Result of applying one [`EditEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Pointer now hovers the given cell (which may lie outside the grid)
    PointerMoved(CellPos),
    /// Selected tile type changed
    TileSelected(TileType),
    /// A cell was overwritten
    Painted {
        /// Cell that changed
        cell: CellPos,
        /// Tile code written
        tile: i32,
    },
    /// Spawn moved to the given cell
    SpawnMoved(CellPos),
    /// Click landed outside the grid and changed nothing
    OutOfBounds(CellPos),
    /// Event had no effect (no pointer position yet, or an unknown tile code)
    Ignored,
    /// Grid written to the given path
    Exported(PathBuf),
    /// Export to the given path failed; the grid is unchanged
    ExportFailed(PathBuf),
}

/// Applies input events to an owned grid
#[derive(Debug, Clone)]
pub struct EditController {
    grid: GridStore,
    viewport: Viewport,
    output_path: PathBuf,
    current_tile: TileType,
    pointer: Option<CellPos>,
}

impl EditController {
    /// Start editing `grid`, exporting to `output_path`
    ///
    /// Painting starts with the wall tile selected.
    pub fn new(grid: GridStore, viewport: Viewport, output_path: impl Into<PathBuf>) -> Self {
        Self {
            grid,
            viewport,
            output_path: output_path.into(),
            current_tile: TileType::Wall,
            pointer: None,
        }
    }

    /// Grid being edited
    pub const fn grid(&self) -> &GridStore {
        &self.grid
    }

    /// Finish editing and take the grid back
    pub fn into_grid(self) -> GridStore {
        self.grid
    }

    /// Display scale used for pointer mapping
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Tile type painted by the next left click
    pub const fn current_tile(&self) -> TileType {
        self.current_tile
    }

    /// Cell under the last reported pointer position
    pub const fn pointer_cell(&self) -> Option<CellPos> {
        self.pointer
    }

    /// Destination of the export command
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Apply one input event
    pub fn apply(&mut self, event: EditEvent) -> EditOutcome {
        match event {
            EditEvent::PointerMoved { x, y } => {
                let cell = self.viewport.cell_at(x, y);
                self.pointer = Some(cell);
                EditOutcome::PointerMoved(cell)
            }
            EditEvent::SelectTile(code) => {
                let tile = TileType::from_code(code);
                if tile.is_unknown() {
                    return EditOutcome::Ignored;
                }
                self.current_tile = tile;
                EditOutcome::TileSelected(tile)
            }
            EditEvent::LeftClick => self.paint(),
            EditEvent::RightClick => self.place_spawn(),
            EditEvent::Export => match self.export() {
                Ok(()) => EditOutcome::Exported(self.output_path.clone()),
                Err(err) => {
                    log::error!("Export failed: {err}");
                    EditOutcome::ExportFailed(self.output_path.clone())
                }
            },
        }
    }

    /// Write the grid to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created or written
    pub fn export(&self) -> Result<()> {
        encode_file(&self.grid, &self.output_path)
    }

    fn paint(&mut self) -> EditOutcome {
        let Some(cell) = self.pointer else {
            return EditOutcome::Ignored;
        };

        let tile = self.current_tile.code();
        if self.grid.set_tile(cell.x, cell.y, tile) {
            EditOutcome::Painted { cell, tile }
        } else {
            EditOutcome::OutOfBounds(cell)
        }
    }

    fn place_spawn(&mut self) -> EditOutcome {
        let Some(cell) = self.pointer else {
            return EditOutcome::Ignored;
        };

        if self.grid.set_spawn(cell.x, cell.y) {
            EditOutcome::SpawnMoved(cell)
        } else {
            EditOutcome::OutOfBounds(cell)
        }
    }
}
