//! Port contracts for the board context.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod id_generator;
pub mod repository;

pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use repository::{WorkspaceRepository, WorkspaceRepositoryError, WorkspaceRepositoryResult};
