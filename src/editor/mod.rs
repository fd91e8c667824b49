//! Interactive editing
//!
//! Translates pointer positions and input events into grid mutations.

/// Event-driven edit state machine
pub mod controller;
/// Display scale and pointer mapping
pub mod viewport;

pub use controller::{EditController, EditEvent, EditOutcome};
pub use viewport::Viewport;
