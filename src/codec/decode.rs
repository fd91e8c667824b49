//! Lenient import of stored map text
//!
//! Only a failure to open or read the input is an error. Missing size
//! declarations keep the caller's fallback size, malformed cells read as 0 and
//! missing spawn declarations leave the spawn unset.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::codec::scanner::{parse_declaration, scan_row};
use crate::codec::{
    HEIGHT_DECLARATION, SPAWN_X_DECLARATION, SPAWN_Y_DECLARATION, WIDTH_DECLARATION,
};
use crate::io::configuration::{DEFAULT_MAP_SIZE, MAX_GRID_DIMENSION};
use crate::io::error::{Result, WithPath};
use crate::spatial::{GridSize, GridStore};

/// Reads stored map text into a [`GridStore`]
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    fallback: GridSize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(GridSize {
            width: DEFAULT_MAP_SIZE,
            height: DEFAULT_MAP_SIZE,
        })
    }
}

impl Decoder {
    /// Create a decoder that keeps `fallback` for unreadable size declarations
    pub const fn new(fallback: GridSize) -> Self {
        Self { fallback }
    }

    /// Decode a stored map file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read, or if the
    /// fallback size is itself invalid
    pub fn decode_file(&self, path: &Path) -> Result<GridStore> {
        let file = File::open(path).with_path(path, "open")?;
        let grid = self.decode_from(BufReader::new(file), path)?;
        log::info!(
            "Loaded {}x{} map from {}",
            grid.width(),
            grid.height(),
            path.display()
        );
        Ok(grid)
    }

    /// Decode stored map text from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the fallback size is invalid
    pub fn decode<R: BufRead>(&self, reader: R) -> Result<GridStore> {
        self.decode_from(reader, Path::new("<reader>"))
    }

    /// Decode stored map text held in memory
    ///
    /// # Errors
    ///
    /// Returns an error only if the fallback size is invalid
    pub fn decode_str(&self, text: &str) -> Result<GridStore> {
        self.decode(text.as_bytes())
    }

    fn decode_from<R: BufRead>(&self, reader: R, origin: &Path) -> Result<GridStore> {
        let mut lines = LineSource { reader, origin };

        let width = lines
            .next_line()?
            .and_then(|line| parse_dimension(&line, WIDTH_DECLARATION))
            .unwrap_or_else(|| {
                log::debug!("Width declaration missing, keeping {}", self.fallback.width);
                self.fallback.width
            });
        let height = lines
            .next_line()?
            .and_then(|line| parse_dimension(&line, HEIGHT_DECLARATION))
            .unwrap_or_else(|| {
                log::debug!("Height declaration missing, keeping {}", self.fallback.height);
                self.fallback.height
            });

        let mut grid = GridStore::blank(width, height)?;

        // Flags declaration and array opening carry no cell data
        lines.next_line()?;
        lines.next_line()?;

        for y in 0..height {
            let line = lines.next_line()?.unwrap_or_default();
            grid.fill_row(y, scan_row(&line, width));
        }

        let mut spawn_x = None;
        let mut spawn_y = None;
        while let Some(line) = lines.next_line()? {
            if let Some(x) = parse_declaration(&line, SPAWN_X_DECLARATION) {
                spawn_x = Some(x);
            } else if let Some(y) = parse_declaration(&line, SPAWN_Y_DECLARATION) {
                spawn_y = Some(y);
            }
        }

        if let (Some(x), Some(y)) = (spawn_x, spawn_y) {
            if !grid.set_spawn(x, y) {
                log::warn!("Ignoring spawn ({x}, {y}) outside the {width}x{height} map");
            }
        }

        Ok(grid)
    }
}

// Accepts a size declaration only when it describes an allocatable dimension
fn parse_dimension(line: &str, words: &[&str]) -> Option<usize> {
    parse_declaration(line, words)
        .and_then(|value| usize::try_from(value).ok())
        .filter(|&value| value > 0 && value <= MAX_GRID_DIMENSION)
}

struct LineSource<'p, R> {
    reader: R,
    origin: &'p Path,
}

impl<R: BufRead> LineSource<'_, R> {
    // Returns the next line without its terminator, or `None` at end of input
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buffer = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buffer)
            .with_path(self.origin, "read")?;
        if read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buffer);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
