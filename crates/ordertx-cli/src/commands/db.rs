//! Database commands
//!
//! Usage: ordertx-cli db migrate [--db PATH]

use crate::commands::open_store;
use crate::GlobalArgs;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Create the database and apply pending migrations
    Migrate,
}

pub fn execute(args: DbArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        DbCommand::Migrate => {
            open_store(global)?;
            println!("Migrated {}", global.db.display());
            Ok(())
        }
    }
}
