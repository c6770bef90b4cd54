//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes parsing arguments into a query, running that query against the API,
//! and rendering the reading or the help text.

mod args;
mod commands;
mod output;

pub use args::*;
pub use commands::*;
pub use output::*;
