//! Command-line interface and interactive editing session

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::codec::Decoder;
use crate::editor::{EditController, EditEvent, EditOutcome, Viewport};
use crate::io::commands::{Command, HELP_TEXT, parse_command};
use crate::io::configuration::{
    PREVIEW_CELL_PIXELS, PREVIEW_SUFFIX, UI_HEIGHT, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::io::display::{render_grid, status_line};
use crate::io::error::{Result, WithPath};
use crate::io::image::export_grid_as_png;
use crate::io::prompt::Prompter;
use crate::spatial::{CellPos, GridSize, GridStore};

#[derive(Parser, Debug, Default)]
#[command(name = "tilemap-editor")]
#[command(author, version, about = "Paint tile maps and export them as C headers")]
/// Command-line arguments for the map editor
///
/// Any value supplied here skips the matching startup prompt.
pub struct Cli {
    /// Stored map to load at startup
    #[arg(short, long, value_name = "FILE", conflicts_with = "new")]
    pub input: Option<PathBuf>,

    /// Start from a fresh map without asking for an input file
    #[arg(short, long)]
    pub new: bool,

    /// File written by the export command
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Side length used when a fresh map is created
    #[arg(short, long, allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Read editing commands from a file instead of standard input
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Write a PNG preview of the map when the session ends
    #[arg(short, long, value_name = "FILE")]
    pub preview: Option<PathBuf>,

    /// Window width in pixels used for pointer mapping
    #[arg(long, default_value_t = WINDOW_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub window_width: u32,

    /// Window height in pixels used for pointer mapping, including the status strip
    #[arg(
        long,
        default_value_t = WINDOW_HEIGHT,
        value_parser = clap::value_parser!(u32).range(i64::from(UI_HEIGHT) + 1..)
    )]
    pub window_height: u32,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter for this invocation
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// Runs the startup questions and the editing session for one invocation
pub struct EditorApp {
    cli: Cli,
}

impl EditorApp {
    /// Create an application for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Ask the startup questions, then process commands until quit or end of input
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails, the input closes during a
    /// required prompt, or the command script cannot be opened
    pub fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

        let startup = self.startup(&mut prompter)?;
        let (stdin_lock, stdout_lock) = prompter.into_inner();

        let viewport = Viewport::fit(
            self.cli.window_width,
            self.cli.window_height,
            UI_HEIGHT,
            startup.grid.width(),
            startup.grid.height(),
        )?;
        let preview_path = preview_path_for(&startup.output);
        let controller = EditController::new(startup.grid, viewport, startup.output);
        let mut session = Session::new(controller, preview_path, stdout_lock);

        session.greet()?;
        match &self.cli.script {
            Some(script) => {
                let file = File::open(script).with_path(script, "open")?;
                session.run(BufReader::new(file))?;
            }
            None => {
                session.run(stdin_lock)?;
            }
        }

        if let Some(preview) = &self.cli.preview {
            export_grid_as_png(session.controller().grid(), PREVIEW_CELL_PIXELS, preview)?;
        }
        Ok(())
    }

    /// Resolve input, output and the starting grid
    ///
    /// Command-line values take precedence; anything missing is asked for.
    /// A map that fails to load is replaced by a fresh one.
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails or a fresh size cannot be obtained
    pub fn startup<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Startup> {
        let input = match (&self.cli.input, self.cli.new) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => None,
            (None, false) => prompter.input_file()?,
        };
        let output = match &self.cli.output {
            Some(path) => path.clone(),
            None => prompter.output_file()?,
        };

        let grid = match input {
            Some(path) => match Decoder::default().decode_file(&path) {
                Ok(grid) => grid,
                Err(err) => {
                    log::warn!("Failed to load {}, creating new map: {err}", path.display());
                    self.fresh_grid(prompter)?
                }
            },
            None => self.fresh_grid(prompter)?,
        };

        Ok(Startup { grid, output })
    }

    fn fresh_grid<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<GridStore> {
        let size = match self.cli.size {
            Some(size) => GridSize::square(size)?,
            None => prompter.map_size()?,
        };
        log::info!("Creating new {}x{} map", size.width, size.height);
        size.create()
    }
}

/// Outcome of the startup questions
#[derive(Debug)]
pub struct Startup {
    /// Grid to edit
    pub grid: GridStore,
    /// Destination of the export command
    pub output: PathBuf,
}

/// Default preview location: the output path with a suffix and `.png`
pub fn preview_path_for(output: &Path) -> PathBuf {
    let stem = output.file_stem().unwrap_or_default();
    let preview_name = format!("{}{PREVIEW_SUFFIX}.png", stem.to_string_lossy());

    if let Some(parent) = output.parent() {
        parent.join(preview_name)
    } else {
        PathBuf::from(preview_name)
    }
}

/// Feeds parsed commands to an [`EditController`] and reports the results
pub struct Session<W> {
    controller: EditController,
    preview_path: PathBuf,
    output: W,
}

impl<W: Write> Session<W> {
    /// Create a session writing feedback to `output`
    pub const fn new(controller: EditController, preview_path: PathBuf, output: W) -> Self {
        Self {
            controller,
            preview_path,
            output,
        }
    }

    /// Controller driven by this session
    pub const fn controller(&self) -> &EditController {
        &self.controller
    }

    /// End the session and take the controller back
    pub fn into_controller(self) -> EditController {
        self.controller
    }

    /// Print the map, the status line and a hint about available commands
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails
    pub fn greet(&mut self) -> Result<()> {
        self.show()?;
        self.say("Keys 0-8 = tile type. left = paint, right = spawn, e = export.")?;
        self.say("Type `help` to list all commands.")
    }

    /// Process commands line by line until `quit` or end of input
    ///
    /// Unrecognized lines are reported and skipped. Returns the number of
    /// commands executed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading commands or writing feedback fails
    pub fn run<R: BufRead>(&mut self, commands: R) -> Result<usize> {
        let mut executed = 0;

        for line in commands.lines() {
            let line = line.with_path(Path::new("<commands>"), "read")?;
            match parse_command(&line) {
                Ok(Some(command)) => {
                    executed += 1;
                    if !self.handle(command)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    log::warn!("{err}");
                    self.say(&format!("Unrecognized input: {}", line.trim()))?;
                }
            }
        }

        Ok(executed)
    }

    /// Execute one command; returns `false` when the session should end
    ///
    /// # Errors
    ///
    /// Returns an error if writing feedback fails
    pub fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Edit(event) => {
                let outcome = self.controller.apply(event);
                self.report(&outcome)?;
            }
            Command::Paint(cell) => {
                self.point_at(cell);
                let outcome = self.controller.apply(EditEvent::LeftClick);
                self.report(&outcome)?;
            }
            Command::Spawn(cell) => {
                self.point_at(cell);
                let outcome = self.controller.apply(EditEvent::RightClick);
                self.report(&outcome)?;
            }
            Command::Show => self.show()?,
            Command::Preview(path) => {
                let path = path.unwrap_or_else(|| self.preview_path.clone());
                match export_grid_as_png(self.controller.grid(), PREVIEW_CELL_PIXELS, &path) {
                    Ok(()) => self.say(&format!("Preview written to {}", path.display()))?,
                    Err(err) => {
                        log::error!("{err}");
                        self.say(&format!("Failed to write preview {}", path.display()))?;
                    }
                }
            }
            Command::Help => self.say(HELP_TEXT)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    // Moves the pointer to the centre of a cell so clicks land on it
    fn point_at(&mut self, cell: CellPos) {
        let tile_size = self.controller.viewport().tile_size();
        self.controller.apply(EditEvent::PointerMoved {
            x: (cell.x as f32 + 0.5) * tile_size,
            y: (cell.y as f32 + 0.5) * tile_size,
        });
    }

    fn report(&mut self, outcome: &EditOutcome) -> Result<()> {
        let message = match outcome {
            EditOutcome::PointerMoved(_) | EditOutcome::Ignored => return Ok(()),
            EditOutcome::TileSelected(tile) => format!("Current tile type: {}", tile.code()),
            EditOutcome::Painted { cell, tile } => {
                format!("Painted ({}, {}) with tile {tile}", cell.x, cell.y)
            }
            EditOutcome::SpawnMoved(cell) => format!("Spawn set to ({}, {})", cell.x, cell.y),
            EditOutcome::OutOfBounds(cell) => {
                format!("Cell ({}, {}) is outside the map", cell.x, cell.y)
            }
            EditOutcome::Exported(path) => format!("Map exported to {}", path.display()),
            EditOutcome::ExportFailed(path) => {
                format!("Failed to open {} for writing", path.display())
            }
        };
        self.say(&message)
    }

    fn show(&mut self) -> Result<()> {
        let text = render_grid(self.controller.grid());
        let status = status_line(&self.controller);
        write!(self.output, "{text}").with_path(Path::new("<console>"), "write")?;
        self.say(&status)
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").with_path(Path::new("<console>"), "write")
    }
}
