//! prj CLI library.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

/// Run the CLI: parse args and dispatch to command handlers.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    prj_core::observability::init_tracing();

    match cli.command {
        Commands::Show { json } => commands::show::cmd_show(json),
        Commands::Get { var } => commands::show::cmd_get(var),
        Commands::Env => commands::env::cmd_env(),
        Commands::File { kind, rel_path } => commands::file::cmd_file(kind, &rel_path),
        Commands::Find { kind, rel_path } => commands::file::cmd_find(kind, &rel_path),
    }
}
