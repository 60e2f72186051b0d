//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod plan_decoder;

pub use file_system::{content_hash, FileSystem, FsError, FsResult};
pub use plan_decoder::PlanDecoder;
