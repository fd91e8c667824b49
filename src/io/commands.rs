//! Line commands that stand in for keyboard and pointer input
//!
//! Each non-empty line is one command. Words are separated by whitespace and
//! matched case-insensitively; `#` starts a comment line.

use std::path::PathBuf;

use crate::editor::EditEvent;
use crate::io::configuration::EXPORT_KEY;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{CellPos, TileType};

/// Summary printed by the `help` command
pub const HELP_TEXT: &str = "\
Commands:
  pointer X Y     move the pointer to pixel position (X, Y)
  0-8 | key K     select tile type K
  left            paint the selected tile under the pointer
  right           place the spawn under the pointer
  paint X Y       paint cell (X, Y) with the selected tile
  spawn X Y       place the spawn on cell (X, Y)
  e | export      write the map to the output file
  show            print the map
  preview [PATH]  write a PNG preview of the map
  help            print this summary
  quit            end the session";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Raw input event forwarded to the controller
    Edit(EditEvent),
    /// Paint one cell, addressed by cell coordinates
    Paint(CellPos),
    /// Place the spawn on one cell, addressed by cell coordinates
    Spawn(CellPos),
    /// Print the map as text
    Show,
    /// Write a PNG preview, optionally to an explicit path
    Preview(Option<PathBuf>),
    /// Print the command summary
    Help,
    /// End the session
    Quit,
}

/// Parse one input line
///
/// Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns [`crate::EditorError::InvalidParameter`] for unknown commands or
/// malformed arguments
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();
    let keyword = head.to_ascii_lowercase();

    let command = match keyword.as_str() {
        "pointer" | "move" => {
            let (x, y) = two_args::<f32>(line, &args)?;
            Command::Edit(EditEvent::PointerMoved { x, y })
        }
        "key" => Command::Edit(EditEvent::SelectTile(one_arg(line, &args)?)),
        "left" | "click" => no_args(line, &args, Command::Edit(EditEvent::LeftClick))?,
        "right" => no_args(line, &args, Command::Edit(EditEvent::RightClick))?,
        "export" => no_args(line, &args, Command::Edit(EditEvent::Export))?,
        "paint" => {
            let (x, y) = two_args(line, &args)?;
            Command::Paint(CellPos::new(x, y))
        }
        "spawn" => {
            let (x, y) = two_args(line, &args)?;
            Command::Spawn(CellPos::new(x, y))
        }
        "show" | "render" => no_args(line, &args, Command::Show)?,
        "preview" => match args.as_slice() {
            [] => Command::Preview(None),
            [path] => Command::Preview(Some(PathBuf::from(path))),
            _ => return Err(usage(line, "preview takes at most one path")),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => match single_key(other) {
            Some(EXPORT_KEY) => no_args(line, &args, Command::Edit(EditEvent::Export))?,
            Some(key) => match TileType::from_key(key) {
                Some(tile) => {
                    no_args(line, &args, Command::Edit(EditEvent::SelectTile(tile.code())))?
                }
                None => return Err(usage(line, "unknown key (tile keys are 0-8)")),
            },
            None => return Err(usage(line, "unknown command (try `help`)")),
        },
    };

    Ok(Some(command))
}

// A word made of exactly one character is a key press
fn single_key(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Some(key),
        _ => None,
    }
}

fn usage(line: &str, reason: &str) -> crate::EditorError {
    invalid_parameter("command", &line, &reason)
}

fn no_args(line: &str, args: &[&str], command: Command) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(usage(line, "command takes no arguments"))
    }
}

fn one_arg<T: std::str::FromStr>(line: &str, args: &[&str]) -> Result<T> {
    match args {
        [value] => value
            .parse()
            .ok()
            .ok_or_else(|| usage(line, "argument is not a number")),
        _ => Err(usage(line, "expected one argument")),
    }
}

fn two_args<T: std::str::FromStr>(line: &str, args: &[&str]) -> Result<(T, T)> {
    match args {
        [x, y] => match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => Ok((x, y)),
            _ => Err(usage(line, "arguments are not numbers")),
        },
        _ => Err(usage(line, "expected two arguments")),
    }
}
