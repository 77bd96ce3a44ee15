//! Menu catalog commands
//!
//! Usage:
//!   ordertx-cli menu import <PATH>
//!   ordertx-cli menu list

use crate::commands::open_store;
use crate::GlobalArgs;
use clap::{Args, Subcommand};
use ordertx_core_types::RequestContext;
use ordertx_engine::commands::catalog::list_menus;
use ordertx_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MenuArgs {
    #[command(subcommand)]
    pub command: MenuCommand,
}

#[derive(Debug, Subcommand)]
pub enum MenuCommand {
    /// Import a YAML menu catalog
    Import(ImportArgs),
    /// List catalog menus
    List,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to the catalog YAML file
    pub path: PathBuf,
}

pub fn execute(args: MenuArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        MenuCommand::Import(import_args) => execute_import(import_args, global),
        MenuCommand::List => execute_list(global),
    }
}

fn execute_import(args: ImportArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_store(global)?;

    println!("Importing {}...", args.path.display());
    let result = apply_engine_command(
        EngineCommand::ImportMenuCatalog { path: args.path },
        &mut conn,
        &RequestContext::new(),
    )?;

    if let EngineCommandResult::ImportMenuCatalog(summary) = result {
        println!(
            "Imported {} categories, {} menus (digest: {})",
            summary.categories, summary.menus, summary.digest
        );
    }
    Ok(())
}

fn execute_list(global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_store(global)?;

    for menu in list_menus(&conn)? {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            menu.code,
            menu.name,
            menu.price,
            menu.category_code,
            if menu.orderable { "Y" } else { "N" }
        );
    }
    Ok(())
}
