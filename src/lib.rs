//! tasktrack: task tracking with conditional fetch dispatch.
//!
//! This crate provides the orchestration layer of a small task-tracking
//! backend together with a dispatcher that runs an external data fetch either
//! inline or on a background worker depending on configuration.
//!
//! # Architecture
//!
//! tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task lookup, creation, update, deletion, and listing
//! - [`dispatch`]: Synchronous or background execution of external fetches
//! - [`config`]: TOML service configuration

pub mod config;
pub mod dispatch;
pub mod task;
