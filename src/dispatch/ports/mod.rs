//! Port contracts for fetch dispatch.

pub mod source;

pub use source::{DataSource, DataSourceError, DataSourceResult};
