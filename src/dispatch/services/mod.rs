//! Application services for fetch dispatch.

mod dispatcher;

pub use dispatcher::{DispatchError, DispatchHandle, DispatchResult, DispatchService};
