//! Step definitions for board store behaviour scenarios.

mod given;
mod then;
mod when;
pub mod world;
