//! Inspection settings
//!
//! Controls how far cause-graph inspection descends and whether escalations
//! are traced. Callers build the value themselves, directly or by
//! deserializing it as part of their own configuration.

use serde::{Deserialize, Serialize};

/// Default bound on cause-graph depth
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Inspection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Maximum number of cause edges followed from the inspected error
    pub max_depth: usize,
    /// Whether `aggravate` traces each escalation at debug level
    pub log_escalations: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            log_escalations: true,
        }
    }
}

impl InspectConfig {
    /// Merge with another config; a zero depth does not override
    pub fn merge(&mut self, other: InspectConfig) {
        if other.max_depth != 0 {
            self.max_depth = other.max_depth;
        }

        self.log_escalations = other.log_escalations;
    }
}
