//! OrderTx CLI
//!
//! Command-line interface for menu catalogs and order registration

use clap::{Args, Parser, Subcommand};
use ordertx_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "ordertx-cli")]
#[command(about = "OrderTx - transactional order registration", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// SQLite database file
    #[arg(long, global = true, env = "ORDERTX_DB", default_value = ".ordertx/store.db")]
    pub db: PathBuf,

    /// Log output on stderr: pretty or json
    #[arg(long, global = true, env = "ORDERTX_LOG_FORMAT", default_value = "pretty")]
    pub log_format: Profile,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db(commands::db::DbArgs),
    /// Menu catalog operations
    Menu(commands::menu::MenuArgs),
    /// Order operations
    Order(commands::order::OrderArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.global.log_format);

    let result = match cli.command {
        Commands::Db(args) => commands::db::execute(args, &cli.global),
        Commands::Menu(args) => commands::menu::execute(args, &cli.global),
        Commands::Order(args) => commands::order::execute(args, &cli.global),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
