//! Prioritized backlog assembly.
//!
//! Scores and classifies every defect, orders the backlog by tier, and
//! derives the per-tier distribution plus advisory notes for the triage
//! view.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::Defect;
use crate::priority::impact::ImpactSeverity;
use crate::priority::{classify_priority, Priority};
use crate::scoring::{score_defect, PriorityScore};

/// A defect with its derived score and classifications
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TriagedDefect {
    pub defect: Defect,
    pub score: PriorityScore,
    pub priority: Priority,
    pub impact: ImpactSeverity,
}

/// Ordered backlog with per-tier counts and advisory notes
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TriageSummary {
    /// Most severe first; stable within equal tiers
    pub items: Vec<TriagedDefect>,
    /// Count per priority; every tier key is present even at zero
    pub distribution: BTreeMap<Priority, usize>,
    pub recommendations: Vector<String>,
}

/// Score and classify a single defect
pub fn triage_defect(defect: Defect) -> TriagedDefect {
    let score = score_defect(&defect);
    let priority = classify_priority(score.total);
    let impact = ImpactSeverity::classify(defect.severity, defect.category);
    TriagedDefect {
        defect,
        score,
        priority,
        impact,
    }
}

/// Score, classify, and order a backlog.
///
/// Sort is stable: priority rank first, severity rank second, intake
/// order beyond that. Both rank tables are the fixed enums, never string
/// comparison.
pub fn build_triage(defects: &[Defect]) -> TriageSummary {
    let mut items: Vec<TriagedDefect> = defects.iter().cloned().map(triage_defect).collect();
    items.sort_by_key(|item| (item.priority.rank(), item.defect.severity.rank()));

    let mut distribution: BTreeMap<Priority, usize> =
        Priority::ALL.iter().map(|p| (*p, 0)).collect();
    for item in &items {
        *distribution.entry(item.priority).or_insert(0) += 1;
    }

    let recommendations = build_recommendations(&items, &distribution);
    TriageSummary {
        items,
        distribution,
        recommendations,
    }
}

fn build_recommendations(
    items: &[TriagedDefect],
    distribution: &BTreeMap<Priority, usize>,
) -> Vector<String> {
    let mut notes = Vector::new();
    let count_of = |priority: Priority| distribution.get(&priority).copied().unwrap_or(0);

    let blockers = count_of(Priority::P0);
    if blockers > 0 {
        notes.push_back(format!(
            "{} P0 defect(s) require immediate escalation",
            blockers
        ));
    }
    if let Some(top) = items.first() {
        if top.impact == ImpactSeverity::Blocker {
            notes.push_back(format!(
                "'{}' is blocking an estimated {}% of users",
                top.defect.title,
                top.impact.affected_users_pct()
            ));
        }
    }
    let urgent = count_of(Priority::P1);
    if urgent > 2 {
        notes.push_back(format!(
            "{} P1 defects queued; consider pulling forward capacity",
            urgent
        ));
    }
    if notes.is_empty() {
        notes.push_back("Backlog is under control; fold fixes into normal sprint work".to_string());
    }
    notes
}
