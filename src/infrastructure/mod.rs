//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `decoders/` - JSON and YAML plan decoders
//! - `fs/` - Local file system with atomic writes

pub mod decoders;
pub mod fs;

pub use decoders::{decoder_for_path, JsonPlanDecoder, YamlPlanDecoder};
pub use fs::LocalFs;
