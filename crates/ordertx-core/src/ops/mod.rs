//! Storage backends that live entirely in the core crate

pub mod memory_store;

pub use memory_store::InMemoryStore;
