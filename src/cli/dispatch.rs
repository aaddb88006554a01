//! Routes parsed subcommands to their handlers.

use std::path::Path;

use super::args::Commands;
use super::handlers::{handle_init, handle_rank, handle_stats};
use crate::exit::LinkRankExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<LinkRankExit> {
    match command {
        Commands::Rank(args) => handle_rank(&args, config_path),
        Commands::Stats {
            input,
            adjacency,
            json,
        } => handle_stats(&input, adjacency, json, config_path),
        Commands::Init { force } => handle_init(force, config_path),
    }
}
