//! CLI command implementations

pub mod db;
pub mod menu;
pub mod order;

use crate::GlobalArgs;
use rusqlite::Connection;

/// Open the configured database, creating and migrating it when needed
pub fn open_store(global: &GlobalArgs) -> Result<Connection, Box<dyn std::error::Error>> {
    Ok(ordertx_store::db::open_and_migrate(&global.db)?)
}
