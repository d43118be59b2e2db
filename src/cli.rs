//! Command-line surface: argument parsing, command routing, error
//! mapping, and report presentation. Scan, persistence, and diff logic
//! live in their own modules; this layer only dispatches to them.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_change_line, human_size};
pub use route::RunContext;
