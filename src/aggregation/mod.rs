//! Cohort aggregation for team dashboards.
//!
//! Summaries are derived values: recomputed from the roster on each
//! request and held only in the data service's cache, never persisted.

pub mod distribution;
pub mod overview;

pub use distribution::{
    capacity_distribution, BandCount, CapacityBand, CapacityDistribution, CAPACITY_BANDS,
};
pub use overview::{team_overview, TeamOverview};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::TeamMember;

/// Derived team summary
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamSummary {
    pub overview: TeamOverview,
    pub capacity: CapacityDistribution,
    pub generated_at: DateTime<Utc>,
}

pub fn summarize_team(members: &[TeamMember]) -> TeamSummary {
    TeamSummary {
        overview: team_overview(members),
        capacity: capacity_distribution(members),
        generated_at: Utc::now(),
    }
}
