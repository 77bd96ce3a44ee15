//! Catalog parser with validation
//!
//! Checks the schema version, code uniqueness, category references, prices
//! and names before anything is written.

use crate::catalog::format_v0::CatalogV0;
use crate::errors::{catalog_validation, Result};
use crate::repo::SqliteMenuRepo;
use rusqlite::Connection;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a catalog file; categories may also be resolved against `conn`
pub fn parse_catalog_file_with_db(path: &Path, conn: Option<&Connection>) -> Result<CatalogV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| catalog_validation(&format!("Failed to read catalog file: {}", e)))?;

    parse_catalog_str_with_db(&content, conn)
}

pub fn parse_catalog_str(content: &str) -> Result<CatalogV0> {
    parse_catalog_str_with_db(content, None)
}

pub fn parse_catalog_str_with_db(content: &str, conn: Option<&Connection>) -> Result<CatalogV0> {
    let catalog: CatalogV0 = serde_yaml::from_str(content)
        .map_err(|e| catalog_validation(&format!("YAML parse error: {}", e)))?;

    validate_catalog(&catalog, conn)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &CatalogV0, conn: Option<&Connection>) -> Result<()> {
    if catalog.schema_version != 0 {
        return Err(catalog_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            catalog.schema_version
        )));
    }

    let mut category_codes = HashSet::new();
    for category in &catalog.categories {
        if !category_codes.insert(category.code) {
            return Err(catalog_validation(&format!(
                "Duplicate category code {}",
                category.code
            )));
        }
        if category.name.trim().is_empty() {
            return Err(catalog_validation(&format!(
                "Category {} has an empty name",
                category.code
            )));
        }
    }

    let mut menu_codes = HashSet::new();
    for menu in &catalog.menus {
        if !menu_codes.insert(menu.code) {
            return Err(catalog_validation(&format!("Duplicate menu code {}", menu.code)));
        }
        if menu.name.trim().is_empty() {
            return Err(catalog_validation(&format!("Menu {} has an empty name", menu.code)));
        }
        if menu.price < 0 {
            return Err(catalog_validation(&format!(
                "Menu {} has a negative price: {}",
                menu.code, menu.price
            )));
        }

        if category_codes.contains(&menu.category) {
            continue;
        }
        let known = match conn {
            Some(conn) => SqliteMenuRepo::category_exists(conn, menu.category)?,
            None => false,
        };
        if !known {
            return Err(catalog_validation(&format!(
                "Menu {} references non-existent category {}",
                menu.code, menu.category
            )));
        }
    }

    Ok(())
}
