//! Impact classification over raw severity and category combinations.
//!
//! Independent of the weighted priority score: a defect can score P2 by
//! weight sum while classifying as "minor" here. Both verdicts are kept.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{DefectCategory, Severity};

/// User-facing impact tier
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ImpactSeverity {
    Blocker,
    Critical,
    Major,
    Minor,
    Trivial,
}

impl ImpactSeverity {
    /// Classify from the raw attribute combination.
    pub fn classify(severity: Severity, category: DefectCategory) -> Self {
        match (severity, category) {
            (Severity::Critical, DefectCategory::Runtime) => ImpactSeverity::Blocker,
            (Severity::Critical, _) => ImpactSeverity::Critical,
            (Severity::High, DefectCategory::Network) => ImpactSeverity::Critical,
            (Severity::High, _) | (_, DefectCategory::Runtime) => ImpactSeverity::Major,
            (Severity::Medium, _) => ImpactSeverity::Minor,
            _ => ImpactSeverity::Trivial,
        }
    }

    /// Estimated share of users affected, as a percentage
    pub const fn affected_users_pct(self) -> u8 {
        match self {
            ImpactSeverity::Blocker => 100,
            ImpactSeverity::Critical => 75,
            ImpactSeverity::Major => 50,
            ImpactSeverity::Minor => 25,
            ImpactSeverity::Trivial => 10,
        }
    }
}

impl fmt::Display for ImpactSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImpactSeverity::Blocker => "blocker",
            ImpactSeverity::Critical => "critical",
            ImpactSeverity::Major => "major",
            ImpactSeverity::Minor => "minor",
            ImpactSeverity::Trivial => "trivial",
        };
        write!(f, "{}", label)
    }
}
