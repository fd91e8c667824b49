/// Command-line arguments and the interactive session
pub mod cli;
/// Line commands standing in for keyboard and pointer input
pub mod commands;
/// Editor constants and session defaults
pub mod configuration;
/// Text rendering of the map and status line
pub mod display;
/// Error types and path context
pub mod error;
/// PNG preview export
pub mod image;
/// Startup prompts
pub mod prompt;
