//! Weighted factor scoring for defect triage.
//!
//! Each categorical attribute of a defect is looked up in a fixed weight
//! table and the unweighted sum of the four factors becomes the priority
//! score fed to the tier classifier. The breakdown is kept alongside the
//! total so a reviewer can see why a defect landed where it did.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

use crate::core::{ContextArea, Defect, DefectCategory, ReporterRole, Severity};

/// Immutable mapping from a factor's value to its weight, with a default
/// for values the table does not name. Built once at startup, never
/// mutated afterwards.
#[derive(Debug)]
pub struct FactorWeightTable<K: Eq + Hash> {
    factor: &'static str,
    weights: HashMap<K, u32>,
    default_weight: u32,
}

impl<K: Eq + Hash> FactorWeightTable<K> {
    pub fn new(
        factor: &'static str,
        entries: impl IntoIterator<Item = (K, u32)>,
        default_weight: u32,
    ) -> Self {
        Self {
            factor,
            weights: entries.into_iter().collect(),
            default_weight,
        }
    }

    /// Weight for a value; unmapped values resolve to the table default
    /// rather than failing.
    pub fn weight(&self, value: &K) -> u32 {
        self.weights
            .get(value)
            .copied()
            .unwrap_or(self.default_weight)
    }

    pub fn factor(&self) -> &'static str {
        self.factor
    }

    pub fn default_weight(&self) -> u32 {
        self.default_weight
    }
}

pub static SEVERITY_WEIGHTS: Lazy<FactorWeightTable<Severity>> = Lazy::new(|| {
    FactorWeightTable::new(
        "severity",
        [
            (Severity::Critical, 40),
            (Severity::High, 30),
            (Severity::Medium, 20),
            (Severity::Low, 10),
        ],
        10,
    )
});

pub static CATEGORY_WEIGHTS: Lazy<FactorWeightTable<DefectCategory>> = Lazy::new(|| {
    FactorWeightTable::new(
        "category",
        [
            (DefectCategory::Runtime, 30),
            (DefectCategory::Network, 25),
            (DefectCategory::Rendering, 15),
            (DefectCategory::Navigation, 10),
        ],
        10,
    )
});

pub static ROLE_WEIGHTS: Lazy<FactorWeightTable<ReporterRole>> = Lazy::new(|| {
    FactorWeightTable::new(
        "reporter_role",
        [
            (ReporterRole::Manager, 25),
            (ReporterRole::TeamLead, 20),
            (ReporterRole::Developer, 15),
        ],
        10,
    )
});

pub static CONTEXT_WEIGHTS: Lazy<FactorWeightTable<ContextArea>> = Lazy::new(|| {
    FactorWeightTable::new(
        "context",
        [
            (ContextArea::Auth, 30),
            (ContextArea::Dashboard, 25),
            (ContextArea::Api, 20),
        ],
        10,
    )
});

/// One factor's contribution to a defect's priority score
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FactorContribution {
    pub factor: String,
    pub value: String,
    pub weight: u32,
    pub justification: String,
}

/// Total priority score with its itemized breakdown
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PriorityScore {
    pub total: u32,
    pub breakdown: Vec<FactorContribution>,
}

/// Score a defect against the fixed weight tables.
///
/// Pure and total: unmapped attribute values use the table default, and
/// identical attributes always produce the identical score.
pub fn score_defect(defect: &Defect) -> PriorityScore {
    let area = defect.context_area();
    let breakdown = vec![
        contribution(
            &SEVERITY_WEIGHTS,
            &defect.severity,
            format!("{} severity reported", defect.severity),
        ),
        contribution(
            &CATEGORY_WEIGHTS,
            &defect.category,
            format!("{} failure category", defect.category),
        ),
        contribution(
            &ROLE_WEIGHTS,
            &defect.reporter_role,
            format!("reported by a {}", defect.reporter_role),
        ),
        contribution(
            &CONTEXT_WEIGHTS,
            &area,
            format!("surfaced in the {} area", area),
        ),
    ];
    let total = breakdown.iter().map(|c| c.weight).sum();
    PriorityScore { total, breakdown }
}

fn contribution<K: Eq + Hash + std::fmt::Display>(
    table: &FactorWeightTable<K>,
    value: &K,
    justification: String,
) -> FactorContribution {
    FactorContribution {
        factor: table.factor().to_string(),
        value: value.to_string(),
        weight: table.weight(value),
        justification,
    }
}
