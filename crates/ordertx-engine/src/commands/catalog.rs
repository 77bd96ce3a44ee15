//! Menu catalog commands

use ordertx_core::model::MenuItem;
use ordertx_core::{log_op_end, log_op_error, log_op_start};
use ordertx_store::catalog::{import_catalog, CatalogImportSummary};
use ordertx_store::errors::Result;
use ordertx_store::repo::SqliteMenuRepo;
use rusqlite::Connection;
use std::path::Path;

/// Import a YAML menu catalog
///
/// Returns the catalog digest and entry counts. The import is all or nothing.
pub fn import_menu_catalog(conn: &mut Connection, path: &Path) -> Result<CatalogImportSummary> {
    let path_display = path.display().to_string();
    log_op_start!("import_menu_catalog", path = path_display.as_str());
    let start = std::time::Instant::now();

    let summary = import_catalog(path, conn).map_err(|e| {
        log_op_error!(
            "import_menu_catalog",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "import_menu_catalog",
        duration_ms = start.elapsed().as_millis() as u64,
        digest = summary.digest.as_str(),
        menus = summary.menus
    );

    Ok(summary)
}

/// All catalog menus ordered by code
pub fn list_menus(conn: &Connection) -> Result<Vec<MenuItem>> {
    SqliteMenuRepo::list_menus(conn)
}
