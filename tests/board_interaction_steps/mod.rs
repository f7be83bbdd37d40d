//! Step definitions for board interaction scenarios.

mod given;
mod then;
mod when;
pub mod world;
