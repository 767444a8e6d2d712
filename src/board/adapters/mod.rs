//! Adapter implementations of board ports.

pub mod file;
pub mod memory;
