//! CLI module for srs - command-line interface and subcommands.
//!
//! Thin layer over [`srs::session::Session`]: list today's tasks, add new
//! ones, review or forget a task by its position in today's list.

pub mod commands;

pub use commands::{Cli, Commands, RememberInput};
