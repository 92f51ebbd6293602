//! Team overview statistics.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::TeamMember;
use crate::priority::RiskLevel;

/// Neutral midpoint reported for 0-100 averages over an empty roster so
/// dashboard gauges stay stable instead of collapsing to zero.
const NEUTRAL_AVERAGE: f64 = 50.0;

/// How many members the at-risk shortlist surfaces
const AT_RISK_LIMIT: usize = 3;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamOverview {
    pub member_count: usize,
    /// Mean capacity, rounded to the nearest whole percent
    pub avg_capacity_pct: u32,
    /// Members at the high risk level
    pub high_risk_count: usize,
    /// Members inside the optimal utilization band [60, 80]
    pub optimal_count: usize,
    /// High-risk members plus anyone above 90% capacity
    pub needs_support_count: usize,
    /// Velocity summed across the roster
    pub total_velocity: u32,
    /// Mean wellness factor scaled to 0-100
    pub wellness_index: f64,
    /// Up to three member names, highest risk first
    pub most_at_risk: Vec<String>,
}

/// Compute the overview for a roster. Handles the empty roster without
/// error, returning zeroed counts and the neutral averages.
pub fn team_overview(members: &[TeamMember]) -> TeamOverview {
    if members.is_empty() {
        return TeamOverview {
            member_count: 0,
            avg_capacity_pct: NEUTRAL_AVERAGE as u32,
            high_risk_count: 0,
            optimal_count: 0,
            needs_support_count: 0,
            total_velocity: 0,
            wellness_index: NEUTRAL_AVERAGE,
            most_at_risk: Vec::new(),
        };
    }

    let count = members.len() as f64;
    let avg_capacity = members.iter().map(|m| m.capacity_pct).sum::<f64>() / count;
    let wellness_index = members.iter().map(|m| m.wellness).sum::<f64>() / count * 100.0;

    let high_risk_count = members
        .iter()
        .filter(|m| m.risk_level() == RiskLevel::High)
        .count();
    let optimal_count = members
        .iter()
        .filter(|m| m.capacity_pct >= 60.0 && m.capacity_pct <= 80.0)
        .count();
    let needs_support_count = members
        .iter()
        .filter(|m| m.risk_level() == RiskLevel::High || m.capacity_pct > 90.0)
        .count();

    let mut ranked: Vec<&TeamMember> = members.iter().collect();
    ranked.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(Ordering::Equal)
    });
    let most_at_risk = ranked
        .into_iter()
        .take(AT_RISK_LIMIT)
        .map(|m| m.name.clone())
        .collect();

    TeamOverview {
        member_count: members.len(),
        avg_capacity_pct: avg_capacity.round() as u32,
        high_risk_count,
        optimal_count,
        needs_support_count,
        total_velocity: members.iter().map(|m| m.velocity).sum(),
        wellness_index,
        most_at_risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, capacity_pct: f64, velocity: u32, wellness: f64, risk: f64) -> TeamMember {
        TeamMember {
            id: name.to_lowercase(),
            name: name.into(),
            capacity_pct,
            velocity,
            wellness,
            risk_score: risk,
        }
    }

    #[test]
    fn test_empty_roster_uses_neutral_averages() {
        let overview = team_overview(&[]);
        assert_eq!(overview.member_count, 0);
        assert_eq!(overview.avg_capacity_pct, 50);
        assert_eq!(overview.wellness_index, 50.0);
        assert_eq!(overview.high_risk_count, 0);
        assert_eq!(overview.optimal_count, 0);
        assert_eq!(overview.needs_support_count, 0);
        assert_eq!(overview.total_velocity, 0);
        assert!(overview.most_at_risk.is_empty());
    }

    #[test]
    fn test_overview_counts() {
        let roster = vec![
            member("Ada", 95.0, 18, 0.5, 80.0),  // high risk, over capacity
            member("Grace", 70.0, 22, 0.9, 20.0), // optimal
            member("Alan", 92.0, 15, 0.6, 40.0),  // needs support on capacity alone
            member("Edsger", 60.0, 25, 0.8, 30.0), // optimal band lower bound
        ];
        let overview = team_overview(&roster);

        assert_eq!(overview.member_count, 4);
        // (95 + 70 + 92 + 60) / 4 = 79.25 -> 79
        assert_eq!(overview.avg_capacity_pct, 79);
        assert_eq!(overview.high_risk_count, 1);
        assert_eq!(overview.optimal_count, 2);
        // Ada (high risk) and Alan (capacity > 90)
        assert_eq!(overview.needs_support_count, 2);
        assert_eq!(overview.total_velocity, 18 + 22 + 15 + 25);
        // (0.5 + 0.9 + 0.6 + 0.8) / 4 * 100 = 70
        assert!((overview.wellness_index - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_optimal_band_includes_both_endpoints() {
        let roster = vec![
            member("Low", 59.9, 10, 0.7, 10.0),
            member("Floor", 60.0, 10, 0.7, 10.0),
            member("Ceil", 80.0, 10, 0.7, 10.0),
            member("Above", 80.1, 10, 0.7, 10.0),
        ];
        assert_eq!(team_overview(&roster).optimal_count, 2);
    }

    #[test]
    fn test_needs_support_requires_strictly_above_ninety() {
        let roster = vec![
            member("Edge", 90.0, 10, 0.7, 10.0),
            member("Over", 90.1, 10, 0.7, 10.0),
        ];
        assert_eq!(team_overview(&roster).needs_support_count, 1);
    }

    #[test]
    fn test_most_at_risk_ordering_and_limit() {
        let roster = vec![
            member("A", 70.0, 10, 0.7, 10.0),
            member("B", 70.0, 10, 0.7, 90.0),
            member("C", 70.0, 10, 0.7, 50.0),
            member("D", 70.0, 10, 0.7, 75.0),
        ];
        let overview = team_overview(&roster);
        assert_eq!(overview.most_at_risk, vec!["B", "D", "C"]);
    }

    #[test]
    fn test_most_at_risk_is_stable_on_ties() {
        let roster = vec![
            member("First", 70.0, 10, 0.7, 60.0),
            member("Second", 70.0, 10, 0.7, 60.0),
        ];
        let overview = team_overview(&roster);
        assert_eq!(overview.most_at_risk, vec!["First", "Second"]);
    }
}
