//! Taskboard: state core for boards, lists, and tasks.
//!
//! The crate owns the in-memory workspace behind a task board: boards hold
//! ordered lists, lists hold ordered tasks, and a single store validates
//! and applies every change. Presentation layers read immutable snapshots
//! and call store operations; nothing else mutates the workspace.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Entities, validation, and the persisted layout
//! - **Ports**: Identifier generation and workspace repository traits
//! - **Adapters**: In-memory and JSON file repositories
//! - **Services**: The task store, snapshots, and persistence
//!
//! # Modules
//!
//! - [`board`]: Board, list, and task management

pub mod board;
