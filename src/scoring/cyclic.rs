//! Cyclic Range Builder
//!
//! Finds contiguous high-scoring runs along a fixed cyclic ordering (seasons,
//! times of day). Runs are first collected along the linear ordering; the
//! run touching the end of the ordering is then joined with the run touching
//! its start, since the last and first candidates are adjacent on the cycle
//! (Night → Early Morning, Winter → Early Spring). An optional wrap rule
//! further restricts the join to runs with matching boundary labels.
//!
//! The wrap merge walks the ordering cyclically under an iteration cap of
//! twice the ordering length. Exceeding the cap or meeting a label that is not
//! in the ordering leaves the runs unmerged.

use super::score_map::NormalizedMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A contiguous run of candidates at or above the range threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclicRange {
    pub start: String,
    pub end: String,
    pub members: Vec<String>,
    /// Mean member score
    pub score: f64,
    /// True when the run crosses the end of the ordering
    pub wraps: bool,
}

/// Keyword pair restricting which boundary runs may be joined.
///
/// With a rule, the run at the start of the ordering must begin with a label
/// containing `head_keyword` and the run at the end must finish with a label
/// containing `tail_keyword` (both case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapRule {
    pub head_keyword: String,
    pub tail_keyword: String,
}

impl WrapRule {
    pub fn new(head_keyword: &str, tail_keyword: &str) -> Self {
        Self {
            head_keyword: head_keyword.to_lowercase(),
            tail_keyword: tail_keyword.to_lowercase(),
        }
    }

    fn is_head(&self, label: &str) -> bool {
        label.to_lowercase().contains(&self.head_keyword)
    }

    fn is_tail(&self, label: &str) -> bool {
        label.to_lowercase().contains(&self.tail_keyword)
    }
}

type Run = SmallVec<[usize; 8]>;

/// Build the range set for `ordering` from a normalized map.
///
/// Candidates missing from the map are treated as below threshold.
pub fn build_cyclic_ranges(
    normalized: &NormalizedMap,
    ordering: &[String],
    range_threshold: f64,
    wrap: Option<&WrapRule>,
) -> Vec<CyclicRange> {
    let score_at = |i: usize| normalized.get(&ordering[i]).unwrap_or(0);

    // STEP 1: linear runs over qualifying indices
    let mut runs: Vec<Run> = Vec::new();
    let mut current = Run::new();
    for i in 0..ordering.len() {
        if f64::from(score_at(i)) >= range_threshold {
            current.push(i);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    // STEP 2: wraparound merge of the boundary runs
    let mut merged_run: Option<Run> = None;
    if let Some((head, tail)) = find_wrap_pair(&runs, ordering, wrap) {
        let from = runs[tail][0];
        let to = runs[head][runs[head].len() - 1];
        match walk_cyclic(ordering, from, to) {
            Some(indices) => {
                runs.remove(tail);
                runs.remove(head);
                merged_run = Some(indices);
            }
            None => {
                tracing::debug!("Wraparound merge aborted for {:?}", ordering);
            }
        }
    }

    let to_range = |run: &Run, wraps: bool| {
        let members: Vec<String> = run.iter().map(|&i| ordering[i].clone()).collect();
        let score = run.iter().map(|&i| f64::from(score_at(i))).sum::<f64>() / run.len() as f64;
        CyclicRange {
            start: members[0].clone(),
            end: members[members.len() - 1].clone(),
            members,
            score,
            wraps,
        }
    };

    let mut ranges: Vec<CyclicRange> = Vec::with_capacity(runs.len() + 1);
    if let Some(run) = &merged_run {
        ranges.push(to_range(run, true));
    }
    ranges.extend(runs.iter().map(|run| to_range(run, false)));
    ranges
}

/// Locate the (head, tail) pair of distinct runs touching across the cycle
/// boundary: the first run starts at index 0, the last ends at the final index.
fn find_wrap_pair(runs: &[Run], ordering: &[String], rule: Option<&WrapRule>) -> Option<(usize, usize)> {
    if runs.len() < 2 {
        return None;
    }
    let (head, tail) = (0, runs.len() - 1);
    let head_start = runs[head][0];
    let tail_end = runs[tail][runs[tail].len() - 1];
    if head_start != 0 || tail_end + 1 != ordering.len() {
        return None;
    }

    match rule {
        Some(rule) if !(rule.is_head(&ordering[head_start]) && rule.is_tail(&ordering[tail_end])) => None,
        _ => Some((head, tail)),
    }
}

/// Walk forward from `from` to `to` with cyclic adjacency.
///
/// `None` if either index is outside the ordering or `to` is not reached
/// within `2 * ordering.len()` steps.
fn walk_cyclic(ordering: &[String], from: usize, to: usize) -> Option<Run> {
    let len = ordering.len();
    if from >= len || to >= len {
        return None;
    }

    let cap = 2 * len;
    let mut indices = Run::new();
    let mut i = from;
    for _ in 0..cap {
        indices.push(i);
        if i == to {
            return Some(indices);
        }
        i = (i + 1) % len;
    }
    None
}

/// Cyclic merge by label, for callers that hold run endpoints as names.
///
/// Returns the labels from `tail_start` through `head_end` walking forward,
/// or `None` when a label is missing or the cap is hit.
pub fn merge_labels(ordering: &[String], tail_start: &str, head_end: &str) -> Option<Vec<String>> {
    let from = ordering.iter().position(|l| l == tail_start)?;
    let to = ordering.iter().position(|l| l == head_end)?;
    walk_cyclic(ordering, from, to).map(|run| run.iter().map(|&i| ordering[i].clone()).collect())
}
