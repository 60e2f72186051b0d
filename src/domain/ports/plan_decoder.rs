//! PlanDecoder port
//!
//! Turns the text of a persisted plan document into a [`Plan`]. Decoders must
//! yield empty lists for optional Action fields that are missing.

use std::path::Path;

use crate::domain::entities::Plan;
use crate::error::GearplanResult;

pub trait PlanDecoder {
    /// Short format name used in messages ("json", "yaml")
    fn format(&self) -> &'static str;

    /// Decode `content`; `origin` is only used for error messages.
    fn decode(&self, content: &str, origin: &Path) -> GearplanResult<Plan>;
}
