//! Menu catalog import
//!
//! Provides:
//! - Catalog format v0 schema
//! - YAML parser with validation
//! - Digest canonicalization
//! - Transactional importer

pub mod digest;
pub mod format_v0;
pub mod importer;
pub mod parser;

pub use digest::compute_catalog_digest;
pub use format_v0::CatalogV0;
pub use importer::{import_catalog, CatalogImportSummary};
pub use parser::{parse_catalog_file_with_db, parse_catalog_str, parse_catalog_str_with_db};
