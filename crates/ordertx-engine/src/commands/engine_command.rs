//! Single dispatch entry for engine commands

use crate::commands::catalog::import_menu_catalog;
use crate::commands::order::register_order;
use crate::options::RegistrationOptions;
use ordertx_core::model::{OrderSubmission, RegisteredOrder};
use ordertx_core_types::RequestContext;
use ordertx_store::catalog::CatalogImportSummary;
use ordertx_store::errors::Result;
use rusqlite::Connection;
use std::path::PathBuf;

/// Engine-level commands that write to the database
#[derive(Debug, Clone)]
pub enum EngineCommand {
    RegisterOrder {
        submission: OrderSubmission,
        options: RegistrationOptions,
    },
    ImportMenuCatalog {
        path: PathBuf,
    },
}

/// Result of applying an engine command
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommandResult {
    RegisterOrder(RegisteredOrder),
    ImportMenuCatalog(CatalogImportSummary),
}

pub fn apply_engine_command(
    cmd: EngineCommand,
    conn: &mut Connection,
    ctx: &RequestContext,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::RegisterOrder {
            submission,
            options,
        } => register_order(conn, ctx, &submission, &options)
            .map(EngineCommandResult::RegisterOrder),
        EngineCommand::ImportMenuCatalog { path } => {
            import_menu_catalog(conn, &path).map(EngineCommandResult::ImportMenuCatalog)
        }
    }
}
