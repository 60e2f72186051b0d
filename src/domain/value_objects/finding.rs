//! Evaluation findings
//!
//! Every observation the evaluator makes about a plan is recorded as a
//! [`Finding`]. Findings never abort an evaluation; they are collected in plan
//! order and returned with the result.

use std::fmt;

use serde::Serialize;

/// Category of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Annotation carried by a transfer description
    Info,
    /// Malformed plan data (negative transfer quantity)
    Usage,
    /// Transfer between entities that are not co-located
    LocationMismatch,
    /// Non-stash entity went below zero
    Deficit,
    /// Possession requirement not met
    AssertionFailed,
}

impl FindingKind {
    /// Physical plan inconsistencies. Usage findings are reported separately.
    pub fn is_plan_error(&self) -> bool {
        matches!(
            self,
            FindingKind::LocationMismatch | FindingKind::Deficit | FindingKind::AssertionFailed
        )
    }

    pub fn is_usage_error(&self) -> bool {
        matches!(self, FindingKind::Usage)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FindingKind::Info => "info",
            FindingKind::Usage => "usage error",
            FindingKind::LocationMismatch => "location mismatch",
            FindingKind::Deficit => "deficit",
            FindingKind::AssertionFailed => "assertion failed",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One observation, tagged with the zero-based index of its Action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub action_index: usize,
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    pub fn new(action_index: usize, kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            action_index,
            kind,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind != FindingKind::Info
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "action {}: {}: {}",
            self.action_index + 1,
            self.kind,
            self.message
        )
    }
}
