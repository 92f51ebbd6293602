//! Deterministic fallback data for missing upstream sources.
//!
//! When one source fails or answers with a non-success envelope, the read
//! path substitutes these fixtures for that source's contribution instead
//! of surfacing the failure.

use crate::core::{Defect, DefectCategory, ReporterRole, Severity, TeamMember};

/// Strategy seam for fallback cohorts; substitutable in tests.
pub trait FallbackProvider: Send + Sync {
    fn default_members(&self, team: &str) -> Vec<TeamMember>;
    fn default_defects(&self, team: &str) -> Vec<Defect>;
}

/// Stock fixtures: a small, stable roster and backlog derived only from
/// the team key.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSnapshotProvider;

impl FallbackProvider for DefaultSnapshotProvider {
    fn default_members(&self, team: &str) -> Vec<TeamMember> {
        vec![
            TeamMember {
                id: format!("{}-m1", team),
                name: "Alex Chen".into(),
                capacity_pct: 72.0,
                velocity: 21,
                wellness: 0.74,
                risk_score: 35.0,
            },
            TeamMember {
                id: format!("{}-m2", team),
                name: "Priya Raman".into(),
                capacity_pct: 88.0,
                velocity: 18,
                wellness: 0.61,
                risk_score: 55.0,
            },
            TeamMember {
                id: format!("{}-m3", team),
                name: "Sam Okafor".into(),
                capacity_pct: 64.0,
                velocity: 24,
                wellness: 0.82,
                risk_score: 22.0,
            },
        ]
    }

    fn default_defects(&self, team: &str) -> Vec<Defect> {
        vec![
            Defect {
                id: format!("{}-d1", team),
                title: "Session refresh loops on token expiry".into(),
                severity: Severity::High,
                category: DefectCategory::Network,
                reporter_role: ReporterRole::Developer,
                route: "/auth/session".into(),
            },
            Defect {
                id: format!("{}-d2", team),
                title: "Sprint widget renders stale velocity".into(),
                severity: Severity::Medium,
                category: DefectCategory::Rendering,
                reporter_role: ReporterRole::TeamLead,
                route: "/dashboard/sprint".into(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_deterministic() {
        let provider = DefaultSnapshotProvider;
        assert_eq!(
            provider.default_members("alpha"),
            provider.default_members("alpha")
        );
        assert_eq!(
            provider.default_defects("alpha"),
            provider.default_defects("alpha")
        );
    }

    #[test]
    fn test_fixture_ids_carry_the_team_key() {
        let provider = DefaultSnapshotProvider;
        for member in provider.default_members("beta") {
            assert!(member.id.starts_with("beta-"));
        }
        for defect in provider.default_defects("beta") {
            assert!(defect.id.starts_with("beta-"));
        }
    }
}
