//! Grid data model
//!
//! This module contains the in-memory map representation:
//! - Tile grid storage and spawn management
//! - Tile type classification and display colors

/// Grid storage, coordinates and size validation
pub mod grid;
/// Tile type enumeration and palette
pub mod tiles;

pub use grid::{CellPos, GridSize, GridStore};
pub use tiles::TileType;
