//! Capacity distribution over fixed display bands.

use serde::{Deserialize, Serialize};

use crate::core::TeamMember;

/// A fixed utilization band. Boundaries are half-open except the top
/// band, which includes 100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapacityBand {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

/// Band boundaries and labels are fixed configuration, not derived.
pub const CAPACITY_BANDS: [CapacityBand; 4] = [
    CapacityBand {
        label: "Underutilized",
        min: 0.0,
        max: 60.0,
    },
    CapacityBand {
        label: "Optimal",
        min: 60.0,
        max: 80.0,
    },
    CapacityBand {
        label: "High",
        min: 80.0,
        max: 90.0,
    },
    CapacityBand {
        label: "Critical",
        min: 90.0,
        max: 100.0,
    },
];

/// Count of members in one band
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BandCount {
    pub label: String,
    pub count: usize,
}

/// Per-band member counts, always four bands in fixed order
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CapacityDistribution {
    pub bands: Vec<BandCount>,
}

impl CapacityDistribution {
    pub fn total(&self) -> usize {
        self.bands.iter().map(|band| band.count).sum()
    }
}

fn band_index(capacity_pct: f64) -> usize {
    if capacity_pct < 60.0 {
        0
    } else if capacity_pct < 80.0 {
        1
    } else if capacity_pct < 90.0 {
        2
    } else {
        3
    }
}

/// Bucket every member into exactly one band.
pub fn capacity_distribution(members: &[TeamMember]) -> CapacityDistribution {
    let mut counts = [0usize; 4];
    for member in members {
        counts[band_index(member.capacity_pct)] += 1;
    }
    CapacityDistribution {
        bands: CAPACITY_BANDS
            .iter()
            .zip(counts)
            .map(|(band, count)| BandCount {
                label: band.label.to_string(),
                count,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn member(id: &str, capacity_pct: f64) -> TeamMember {
        TeamMember {
            id: id.into(),
            name: format!("member {}", id),
            capacity_pct,
            velocity: 10,
            wellness: 0.7,
            risk_score: 40.0,
        }
    }

    fn counts(members: &[TeamMember]) -> Vec<usize> {
        capacity_distribution(members)
            .bands
            .iter()
            .map(|band| band.count)
            .collect()
    }

    #[test]
    fn test_band_labels_in_fixed_order() {
        let distribution = capacity_distribution(&[]);
        let labels: Vec<&str> = distribution
            .bands
            .iter()
            .map(|band| band.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Underutilized", "Optimal", "High", "Critical"]);
    }

    #[test]
    fn test_boundary_values() {
        // 60 belongs to Optimal, not Underutilized; 90 to Critical, not High
        let members = vec![
            member("a", 59.9),
            member("b", 60.0),
            member("c", 80.0),
            member("d", 89.9),
            member("e", 90.0),
            member("f", 100.0),
        ];
        assert_eq!(counts(&members), vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_empty_roster_is_all_zero() {
        assert_eq!(counts(&[]), vec![0, 0, 0, 0]);
    }

    proptest! {
        #[test]
        fn bands_partition_the_roster(capacities in prop::collection::vec(0.0f64..=100.0, 0..40)) {
            let members: Vec<TeamMember> = capacities
                .iter()
                .enumerate()
                .map(|(i, pct)| member(&format!("m{}", i), *pct))
                .collect();
            let distribution = capacity_distribution(&members);
            prop_assert_eq!(distribution.bands.len(), 4);
            prop_assert_eq!(distribution.total(), members.len());
        }
    }
}
