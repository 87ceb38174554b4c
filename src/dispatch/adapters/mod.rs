//! Adapter implementations of the dispatch ports.

pub mod memory;

pub use memory::InMemoryDataSource;
