//! Taskboard: a kanban board backed by a remote task document store.
//!
//! Tasks live in three status columns and are ordered by priority within a
//! column. The board supports creating, editing, and deleting tasks, moving
//! them between columns, and reordering cards by dragging.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Task values, validation, and column ordering
//! - **Ports**: The task document store contract
//! - **Adapters**: In-memory and `PostgreSQL` stores
//! - **Services**: The board controller that owns the task list
//!
//! # Modules
//!
//! - [`task`]: Task domain, store port and adapters, and the controller
//! - [`board`]: Column projection, drag-and-drop protocol, and editor form
//! - [`tui`]: Terminal front end
//! - [`config`]: Environment configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod board;
pub mod config;
pub mod task;
pub mod telemetry;
pub mod tui;
