use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSeverity {
    Important,
    Info,
}

/// A non-fatal irregularity absorbed during planning, kept for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceWarning {
    /// Sequence number of the guest the warning refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<usize>,
    pub message: String,
    pub severity: TraceSeverity,
}

/// A policy decision the packer took for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDecision {
    pub category: String,
    pub message: String,
}

/// Structured diagnostics attached to a plan result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanTrace {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TraceWarning>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decisions: Vec<TraceDecision>,
}

impl PlanTrace {
    pub fn warn(&mut self, seq: Option<usize>, message: impl Into<String>) {
        self.warnings.push(TraceWarning {
            seq,
            message: message.into(),
            severity: TraceSeverity::Important,
        });
    }

    pub fn note(&mut self, category: &str, message: impl Into<String>) {
        self.decisions.push(TraceDecision {
            category: category.to_string(),
            message: message.into(),
        });
    }
}
