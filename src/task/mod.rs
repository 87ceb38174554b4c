//! Task tracking for tasktrack.
//!
//! Tasks are looked up by title or status, created from boundary payloads,
//! updated by identifier with a full replace of their mutable fields,
//! deleted after an existence check, and listed in store order. The module
//! follows hexagonal architecture:
//!
//! - Domain types and the entity/DTO mapper in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Boundary payload validation in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
