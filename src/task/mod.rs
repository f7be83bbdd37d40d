//! Task storage and board state for taskboard.
//!
//! Tasks are flat documents in a remote collection. The board controller
//! keeps an in-memory copy of the collection and applies each change
//! locally once the store has accepted it. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
