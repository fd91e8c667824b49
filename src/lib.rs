//! Tile map editor with a source-embeddable text format
//!
//! Maps are rectangular grids of small integer tile codes with an optional
//! spawn cell. They are edited through pointer and key events and stored as C
//! header text that can be loaded back, even after careless hand edits.

#![forbid(unsafe_code)]

/// Stored text format: lenient decoding and exact encoding
pub mod codec;
/// Pointer mapping and the edit state machine
pub mod editor;
/// Command line, prompts, rendering, previews and error handling
pub mod io;
/// Grid storage and tile types
pub mod spatial;

pub use io::error::{EditorError, Result};
