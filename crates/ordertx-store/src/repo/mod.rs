//! Repository layer for the catalog and order tables
//!
//! Functions take `&Connection`; a `rusqlite::Transaction` derefs to one, so
//! the same calls serve both autocommit use and the unit of work.

pub mod menu_repo;
pub mod order_repo;

pub use menu_repo::SqliteMenuRepo;
pub use order_repo::SqliteOrderRepo;
