//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, OutputFormat};
pub use handlers::{handle_graph, handle_impact, handle_keys, Workspace};
