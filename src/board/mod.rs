//! Boards, lists, and tasks for a personal task board.
//!
//! A workspace holds boards; each board holds ordered lists; each list holds
//! ordered tasks. A board may link a GitHub repository so an external
//! collaborator can close tasks mentioned in commit messages. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
