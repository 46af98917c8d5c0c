//! Status tiers and recommendation priorities.
//!
//! Both enums serialize as their capitalized variant names (`"Strong"`,
//! `"High"`), which is the format of persisted snapshots and AI payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TopicStatus
// ---------------------------------------------------------------------------

/// Percentage at or above which a topic is `Strong`.
pub const STRONG_THRESHOLD: f64 = 75.0;

/// Percentage at or above which a topic is at least `Average`.
pub const AVERAGE_THRESHOLD: f64 = 40.0;

/// Performance tier of a syllabus topic.
///
/// ```text
/// percentage >= 75        → Strong
/// 40 <= percentage < 75   → Average
/// percentage < 40         → Weak
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TopicStatus {
    Strong,
    Average,
    Weak,
}

impl TopicStatus {
    /// Classify a percentage. Lower bounds are inclusive; `NaN` is `Weak`.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= STRONG_THRESHOLD {
            Self::Strong
        } else if percentage >= AVERAGE_THRESHOLD {
            Self::Average
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Average => "Average",
            Self::Weak => "Weak",
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of an AI study recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parse a priority label case-insensitively. Unknown labels are `Medium`.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
