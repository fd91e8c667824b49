//! CLI entry point for the tile map editor

use clap::Parser;
use tilemap_editor::io::cli::{Cli, EditorApp};

fn main() -> tilemap_editor::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let app = EditorApp::new(cli);
    app.run()
}
