//! In-memory adapters for tests and embedding.

mod workspace;

pub use workspace::InMemoryWorkspaceRepository;
