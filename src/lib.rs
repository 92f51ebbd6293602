// Export modules for library usage
pub mod aggregation;
pub mod config;
pub mod core;
pub mod priority;
pub mod scoring;
pub mod service;

// Re-export commonly used types
pub use crate::core::{
    errors::{Error, Result},
    ContextArea, Defect, DefectCategory, ReporterRole, Severity, TeamMember,
};

pub use crate::scoring::{score_defect, FactorContribution, FactorWeightTable, PriorityScore};

pub use crate::priority::{
    classify_priority, classify_risk,
    impact::ImpactSeverity,
    triage::{build_triage, triage_defect, TriageSummary, TriagedDefect},
    Priority, RiskLevel, ThresholdTable,
};

pub use crate::aggregation::{
    capacity_distribution, summarize_team, team_overview, CapacityDistribution, TeamOverview,
    TeamSummary,
};

pub use crate::service::{
    cache::{CacheStats, TtlCache},
    defaults::{DefaultSnapshotProvider, FallbackProvider},
    retry::with_retry,
    ServiceResponse, SnapshotSource, SourceEnvelope, TeamDashboard, TeamInsightsService,
};

pub use crate::config::{BurnmapConfig, CacheConfig, RetryConfig, RetryStrategy};
