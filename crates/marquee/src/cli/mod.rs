//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the marquee binary.

mod catalog;
mod commands;
mod generate;

pub use catalog::{handle_formats, handle_platforms};
pub use commands::{Cli, Commands, GenerateArgs, RequestArgs};
pub use generate::{handle_generate, handle_prompt};
