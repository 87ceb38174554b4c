//! External data source port.

use std::sync::Arc;
use thiserror::Error;

/// Result type for data source operations.
pub type DataSourceResult<T> = Result<T, DataSourceError>;

/// Synchronous external data source.
///
/// `fetch` may block. Each call is a single attempt; implementations own any
/// timeout behaviour.
pub trait DataSource: Send + Sync {
    /// Fetches data for the input.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError`] when the source cannot produce data.
    fn fetch(&self, input: &str) -> DataSourceResult<String>;
}

/// Errors returned by data source adapters.
#[derive(Debug, Clone, Error)]
pub enum DataSourceError {
    /// The source refused or could not serve the request.
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// Transport or remote failure.
    #[error("data source error: {0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),
}

impl DataSourceError {
    /// Wraps a remote error.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }
}
