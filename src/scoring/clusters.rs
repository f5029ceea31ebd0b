//! Cluster Builder
//!
//! Groups related candidates using a hand-authored grouping table. A group is
//! reported only when enough of its members clear the cluster threshold.

use super::score_map::NormalizedMap;
use super::selection::Recommendation;
use serde::{Deserialize, Serialize};

/// One named group in a grouping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateGroup {
    pub label: String,
    pub members: Vec<String>,
}

impl CandidateGroup {
    pub fn new(label: &str, members: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub label: String,
    /// Members at or above the threshold, highest score first
    pub members: Vec<Recommendation>,
    /// Rounded mean of `members` scores
    pub aggregate_score: u32,
}

/// Rounded arithmetic mean of integer scores (0 for an empty slice).
pub fn rounded_mean(scores: impl IntoIterator<Item = u32>) -> u32 {
    let (sum, count) = scores
        .into_iter()
        .fold((0u64, 0u64), |(sum, n), s| (sum + u64::from(s), n + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}

/// Build every cluster whose qualifying member count reaches `min_members`.
///
/// Clusters come back sorted by aggregate score, highest first. Group members
/// missing from the map never qualify.
pub fn build_clusters(
    normalized: &NormalizedMap,
    groups: &[CandidateGroup],
    cluster_threshold: f64,
    min_members: usize,
) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = groups
        .iter()
        .filter_map(|group| {
            let mut members: Vec<Recommendation> = group
                .members
                .iter()
                .filter_map(|name| {
                    normalized
                        .get(name)
                        .filter(|&s| f64::from(s) >= cluster_threshold)
                        .map(|score| Recommendation {
                            name: name.clone(),
                            score,
                        })
                })
                .collect();

            if members.is_empty() || members.len() < min_members {
                return None;
            }

            members.sort_by(|a, b| b.score.cmp(&a.score));
            let aggregate_score = rounded_mean(members.iter().map(|m| m.score));

            Some(Cluster {
                label: group.label.clone(),
                members,
                aggregate_score,
            })
        })
        .collect();

    clusters.sort_by(|a, b| b.aggregate_score.cmp(&a.aggregate_score));
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm() -> NormalizedMap {
        NormalizedMap::from_entries(
            [("Sushi", 95), ("Salads", 72), ("Seafood", 40), ("Dark Chocolate", 88), ("Pastries", 91)]
                .iter()
                .map(|(n, s)| (n.to_string(), *s))
                .collect(),
        )
    }

    fn groups() -> Vec<CandidateGroup> {
        vec![
            CandidateGroup::new("Light & Fresh", &["Sushi", "Salads", "Seafood"]),
            CandidateGroup::new("Sweet Treats", &["Dark Chocolate", "Pastries", "Cream Desserts"]),
        ]
    }

    #[test]
    fn test_clusters_need_min_members() {
        let clusters = build_clusters(&norm(), &groups(), 80.0, 2);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].label, "Sweet Treats");
        assert_eq!(clusters[0].members[0].name, "Pastries");
        assert_eq!(clusters[0].aggregate_score, 90); // (91 + 88) / 2 = 89.5
    }

    #[test]
    fn test_clusters_sorted_by_aggregate() {
        let clusters = build_clusters(&norm(), &groups(), 70.0, 1);
        let labels: Vec<&str> = clusters.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Sweet Treats", "Light & Fresh"]);
        assert_eq!(clusters[1].aggregate_score, rounded_mean([95, 72]));
    }

    #[test]
    fn test_aggregate_matches_members() {
        for cluster in build_clusters(&norm(), &groups(), 0.0, 1) {
            assert_eq!(cluster.aggregate_score, rounded_mean(cluster.members.iter().map(|m| m.score)));
        }
    }

    #[test]
    fn test_rounded_mean() {
        assert_eq!(rounded_mean([]), 0);
        assert_eq!(rounded_mean([70, 71]), 71);
        assert_eq!(rounded_mean([80, 81, 81]), 81);
    }
}
