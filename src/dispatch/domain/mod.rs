//! Domain types for fetch dispatch.

mod mode;

pub use mode::{DispatchConfig, DispatchMode};
