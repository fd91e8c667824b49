//! Startup questions asked before the editing session begins

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::io::configuration::DEFAULT_OUTPUT_FILE;
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::spatial::GridSize;

/// Asks questions on `output` and reads single-line answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over a reader and writer pair
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `question` and read one trimmed answer
    ///
    /// Returns `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the question or reading the answer fails
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let console = Path::new("<console>");
        write!(self.output, "{question}").with_path(console, "write")?;
        self.output.flush().with_path(console, "flush")?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .with_path(console, "read")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Ask for a map to load; an empty answer means "create a new map"
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails
    pub fn input_file(&mut self) -> Result<Option<PathBuf>> {
        let answer = self.ask("Enter input map filename (or press Enter to create new): ")?;
        Ok(answer.filter(|name| !name.is_empty()).map(PathBuf::from))
    }

    /// Ask where exports go; an empty answer selects [`DEFAULT_OUTPUT_FILE`]
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails
    pub fn output_file(&mut self) -> Result<PathBuf> {
        let question = format!("Enter output map filename (default: {DEFAULT_OUTPUT_FILE}): ");
        let answer = self.ask(&question)?;
        Ok(answer
            .filter(|name| !name.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE), PathBuf::from))
    }

    /// Ask for the side length of a new square map, repeating until valid
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails or the input ends before a valid
    /// size is entered
    pub fn map_size(&mut self) -> Result<GridSize> {
        loop {
            let Some(answer) = self.ask("Enter MAX MAP SIZE: ")? else {
                return Err(invalid_parameter(
                    "size",
                    &"<end of input>",
                    &"input closed before a map size was entered",
                ));
            };

            let parsed = answer
                .parse::<i64>()
                .ok()
                .ok_or_else(|| invalid_parameter("size", &answer, &"not a whole number"))
                .and_then(GridSize::square);

            match parsed {
                Ok(size) => return Ok(size),
                Err(err) => {
                    writeln!(self.output, "{err}").with_path(Path::new("<console>"), "write")?;
                }
            }
        }
    }
}
