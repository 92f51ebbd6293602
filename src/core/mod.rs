pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Defect severity as captured at intake
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Fixed ordering used as the secondary triage sort key (0 = most severe)
    pub const fn rank(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        write!(f, "{}", label)
    }
}

/// Failure category assigned when a defect is reported
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DefectCategory {
    Runtime,
    Network,
    Rendering,
    Navigation,
    Other,
}

impl fmt::Display for DefectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DefectCategory::Runtime => "runtime",
            DefectCategory::Network => "network",
            DefectCategory::Rendering => "rendering",
            DefectCategory::Navigation => "navigation",
            DefectCategory::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// Role of the person who filed the defect
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReporterRole {
    Manager,
    TeamLead,
    Developer,
    Other,
}

impl fmt::Display for ReporterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReporterRole::Manager => "manager",
            ReporterRole::TeamLead => "team lead",
            ReporterRole::Developer => "developer",
            ReporterRole::Other => "contributor",
        };
        write!(f, "{}", label)
    }
}

/// Product area a defect surfaced in, classified from its route
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContextArea {
    Dashboard,
    Auth,
    Api,
    Other,
}

impl ContextArea {
    /// Classify the route where a defect surfaced into a product area.
    ///
    /// Auth wins over api so `/api/auth/...` routes land in the auth area.
    pub fn from_path(path: &str) -> Self {
        let path = path.to_lowercase();
        if path.contains("auth") || path.contains("login") {
            ContextArea::Auth
        } else if path.contains("api") {
            ContextArea::Api
        } else if path.contains("dashboard") {
            ContextArea::Dashboard
        } else {
            ContextArea::Other
        }
    }
}

impl fmt::Display for ContextArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContextArea::Dashboard => "dashboard",
            ContextArea::Auth => "auth",
            ContextArea::Api => "api",
            ContextArea::Other => "general",
        };
        write!(f, "{}", label)
    }
}

/// A reported defect awaiting triage
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Defect {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub category: DefectCategory,
    pub reporter_role: ReporterRole,
    /// Route where the defect surfaced, classified via [`ContextArea::from_path`]
    pub route: String,
}

impl Defect {
    pub fn context_area(&self) -> ContextArea {
        ContextArea::from_path(&self.route)
    }
}

/// A team member with an externally assessed burnout risk
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    /// Current workload as a percentage of sustainable capacity (0-100)
    pub capacity_pct: f64,
    /// Story points delivered over the trailing sprint
    pub velocity: u32,
    /// Self-reported wellness factor in [0.0, 1.0]
    pub wellness: f64,
    /// Burnout risk score in [0, 100], supplied by the upstream assessment
    pub risk_score: f64,
}
