//! In-memory data source for dispatch tests and local wiring.

use crate::dispatch::ports::{DataSource, DataSourceError, DataSourceResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::thread::{self, ThreadId};

/// In-memory data source.
///
/// Inputs with a registered response return it; other inputs are echoed
/// back unchanged. A configured failure makes every fetch fail. Each fetch is
/// counted and the calling thread recorded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    state: Arc<RwLock<InMemorySourceState>>,
}

#[derive(Debug, Default)]
struct InMemorySourceState {
    responses: HashMap<String, String>,
    failure: Option<String>,
    calls: Vec<FetchRecord>,
}

#[derive(Debug, Clone)]
struct FetchRecord {
    input: String,
    thread: ThreadId,
}

impl InMemoryDataSource {
    /// Creates an echoing data source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the response returned for an input.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn set_response(
        &self,
        input: impl Into<String>,
        data: impl Into<String>,
    ) -> DataSourceResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DataSourceError::Unavailable(err.to_string()))?;
        state.responses.insert(input.into(), data.into());
        Ok(())
    }

    /// Makes every subsequent fetch fail with the message.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn set_failure(&self, message: impl Into<String>) -> DataSourceResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DataSourceError::Unavailable(err.to_string()))?;
        state.failure = Some(message.into());
        Ok(())
    }

    /// Returns the number of fetches performed so far.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn call_count(&self) -> DataSourceResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| DataSourceError::Unavailable(err.to_string()))?;
        Ok(state.calls.len())
    }

    /// Returns the inputs fetched so far, in call order.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn fetched_inputs(&self) -> DataSourceResult<Vec<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| DataSourceError::Unavailable(err.to_string()))?;
        Ok(state.calls.iter().map(|call| call.input.clone()).collect())
    }

    /// Returns the thread that performed the most recent fetch.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn last_fetch_thread(&self) -> DataSourceResult<Option<ThreadId>> {
        let state = self
            .state
            .read()
            .map_err(|err| DataSourceError::Unavailable(err.to_string()))?;
        Ok(state.calls.last().map(|call| call.thread))
    }
}

impl DataSource for InMemoryDataSource {
    fn fetch(&self, input: &str) -> DataSourceResult<String> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DataSourceError::Unavailable(err.to_string()))?;
        state.calls.push(FetchRecord {
            input: input.to_owned(),
            thread: thread::current().id(),
        });

        if let Some(message) = &state.failure {
            return Err(DataSourceError::Unavailable(message.clone()));
        }

        Ok(state
            .responses
            .get(input)
            .cloned()
            .unwrap_or_else(|| input.to_owned()))
    }
}
