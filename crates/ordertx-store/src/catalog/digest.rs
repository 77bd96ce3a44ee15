//! Catalog digest canonicalization
//!
//! The digest is the SHA-256 of the catalog's canonical JSON: categories and
//! menus sorted by code, so entry order in the file does not matter.

use crate::catalog::format_v0::CatalogV0;
use crate::errors::{corrupt_row, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Serialize)]
struct CanonicalCatalog {
    schema_version: u32,
    categories: Vec<CanonicalCategory>,
    menus: Vec<CanonicalMenu>,
}

#[derive(Debug, Serialize)]
struct CanonicalCategory {
    code: i64,
    name: String,
}

#[derive(Debug, Serialize)]
struct CanonicalMenu {
    code: i64,
    name: String,
    price: i64,
    category: i64,
    orderable: bool,
}

/// Compute a stable hex digest for a catalog
pub fn compute_catalog_digest(catalog: &CatalogV0) -> Result<String> {
    let canonical = canonicalize_catalog(catalog);

    let json = serde_json::to_string(&canonical)
        .map_err(|e| corrupt_row("catalog_digest", e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

fn canonicalize_catalog(catalog: &CatalogV0) -> CanonicalCatalog {
    let mut categories: Vec<CanonicalCategory> = catalog
        .categories
        .iter()
        .map(|c| CanonicalCategory {
            code: c.code,
            name: c.name.clone(),
        })
        .collect();
    categories.sort_by_key(|c| c.code);

    let mut menus: Vec<CanonicalMenu> = catalog
        .menus
        .iter()
        .map(|m| CanonicalMenu {
            code: m.code,
            name: m.name.clone(),
            price: m.price,
            category: m.category,
            orderable: m.orderable,
        })
        .collect();
    menus.sort_by_key(|m| m.code);

    CanonicalCatalog {
        schema_version: catalog.schema_version,
        categories,
        menus,
    }
}
