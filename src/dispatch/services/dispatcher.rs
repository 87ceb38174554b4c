//! Dispatcher choosing between background and inline fetch execution.

use crate::dispatch::{
    domain::{DispatchConfig, DispatchMode},
    ports::{DataSource, DataSourceError},
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

/// Errors surfaced through a [`DispatchHandle`].
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// The data source failed.
    #[error(transparent)]
    Fetch(#[from] DataSourceError),
    /// The background worker panicked or was cancelled by runtime shutdown.
    #[error("background fetch worker failed: {0}")]
    Worker(Arc<JoinError>),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Handle to a dispatched fetch.
///
/// Resolves exactly once. There is no cancellation: dropping a pending
/// handle detaches the worker, which still runs to completion.
#[derive(Debug)]
pub enum DispatchHandle {
    /// Result computed inline before the handle was returned.
    Ready(Ready<DispatchResult<String>>),
    /// Fetch running on a background blocking worker.
    Pending(JoinHandle<DispatchResult<String>>),
}

impl DispatchHandle {
    /// Reports whether the result is available without waiting.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        match self {
            Self::Ready(_) => true,
            Self::Pending(worker) => worker.is_finished(),
        }
    }

    /// Returns the inline result, or `None` for a background fetch.
    #[must_use]
    pub fn into_ready(self) -> Option<DispatchResult<String>> {
        match self {
            Self::Ready(outcome) => Some(outcome.into_inner()),
            Self::Pending(_) => None,
        }
    }
}

impl Future for DispatchHandle {
    type Output = DispatchResult<String>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.get_mut() {
            Self::Ready(outcome) => Pin::new(outcome).poll(cx),
            Self::Pending(worker) => Pin::new(worker).poll(cx).map(|joined| match joined {
                Ok(outcome) => outcome,
                Err(err) => Err(DispatchError::Worker(Arc::new(err))),
            }),
        }
    }
}

/// Fetch dispatcher.
///
/// With `async-enabled` set, [`execute`](Self::execute) schedules the fetch
/// on the runtime's blocking pool and returns a pending handle immediately.
/// Otherwise the fetch runs on the calling thread and the handle is already
/// resolved. Fetch failures surface through the handle in both modes.
#[derive(Clone)]
pub struct DispatchService<S>
where
    S: DataSource + 'static,
{
    source: Arc<S>,
    config: DispatchConfig,
    runtime: Handle,
}

impl<S> DispatchService<S>
where
    S: DataSource + 'static,
{
    /// Creates a dispatcher that spawns background fetches on `runtime`.
    #[must_use]
    pub const fn new(source: Arc<S>, config: DispatchConfig, runtime: Handle) -> Self {
        Self {
            source,
            config,
            runtime,
        }
    }

    /// Fetches data for `input` and labels it with the active mode's prefix.
    ///
    /// The data source is called exactly once.
    pub fn execute(&self, input: impl Into<String>) -> DispatchHandle {
        let request = input.into();
        let mode = self.config.mode();
        debug!(?mode, "dispatching fetch");
        match mode {
            DispatchMode::Async => {
                let source = Arc::clone(&self.source);
                DispatchHandle::Pending(
                    self.runtime
                        .spawn_blocking(move || process(source.as_ref(), &request, mode)),
                )
            }
            DispatchMode::Sync => {
                DispatchHandle::Ready(ready(process(self.source.as_ref(), &request, mode)))
            }
        }
    }
}

fn process<S>(source: &S, input: &str, mode: DispatchMode) -> DispatchResult<String>
where
    S: DataSource + ?Sized,
{
    let data = source.fetch(input)?;
    Ok(mode.label(&data))
}
