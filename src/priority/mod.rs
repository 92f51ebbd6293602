//! Tier classification for scores and raw attribute combinations.
//!
//! Two classifier styles are supported: threshold tables over an
//! aggregate score ([`Priority`], [`RiskLevel`]) and rule cascades over
//! the raw categorical attributes ([`impact::ImpactSeverity`]).

pub mod impact;
pub mod triage;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::TeamMember;

/// Defect priority tier, most severe first
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    P0,
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::P0,
        Priority::P1,
        Priority::P2,
        Priority::P3,
        Priority::P4,
    ];

    /// Fixed ordering used as the primary triage sort key (0 = most severe)
    pub const fn rank(self) -> u8 {
        match self {
            Priority::P0 => 0,
            Priority::P1 => 1,
            Priority::P2 => 2,
            Priority::P3 => 3,
            Priority::P4 => 4,
        }
    }

    /// Display label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Priority::P0 => "critical blocker",
            Priority::P1 => "urgent",
            Priority::P2 => "important",
            Priority::P3 => "normal",
            Priority::P4 => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::P4 => "P4",
        };
        write!(f, "{}", tag)
    }
}

/// Burnout risk level derived from an upstream assessment score
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered (minimum score, tier) pairs, descending by minimum, with a
/// catch-all fallback. Exactly one tier applies to any score.
pub struct ThresholdTable<T: Copy + 'static> {
    entries: &'static [(f64, T)],
    fallback: T,
}

impl<T: Copy + 'static> ThresholdTable<T> {
    pub const fn new(entries: &'static [(f64, T)], fallback: T) -> Self {
        Self { entries, fallback }
    }

    /// First tier whose minimum is <= score, else the fallback
    pub fn classify(&self, score: f64) -> T {
        self.entries
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(self.fallback)
    }
}

pub static PRIORITY_THRESHOLDS: ThresholdTable<Priority> = ThresholdTable::new(
    &[
        (90.0, Priority::P0),
        (70.0, Priority::P1),
        (50.0, Priority::P2),
        (30.0, Priority::P3),
    ],
    Priority::P4,
);

pub static RISK_THRESHOLDS: ThresholdTable<RiskLevel> = ThresholdTable::new(
    &[(70.0, RiskLevel::High), (30.0, RiskLevel::Moderate)],
    RiskLevel::Low,
);

/// Classify a weighted priority score into its tier
pub fn classify_priority(score: u32) -> Priority {
    PRIORITY_THRESHOLDS.classify(score as f64)
}

/// Classify an upstream risk assessment score into its level
pub fn classify_risk(score: f64) -> RiskLevel {
    RISK_THRESHOLDS.classify(score)
}

impl TeamMember {
    /// Risk level for this member's assessment score
    pub fn risk_level(&self) -> RiskLevel {
        classify_risk(self.risk_score)
    }
}
