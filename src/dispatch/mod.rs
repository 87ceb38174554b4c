//! Conditional dispatch of an external data fetch.
//!
//! A single configuration flag decides whether a fetch runs on a background
//! blocking worker or inline on the calling thread. Either way the caller
//! receives a [`services::DispatchHandle`] that resolves to the prefixed
//! result exactly once.
//!
//! - Configuration and mode types in [`domain`]
//! - The data source contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The dispatcher in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
