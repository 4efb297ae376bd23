//! Consensus over per-panch analyses: a majority vote on the stripped
//! resolution strings.
//!
//! Every panch starts from the same base resolution and only appends
//! parenthesised commentary, so in practice the vote is near-always
//! unanimous. The split case is modelled anyway because nothing in the vote
//! itself forbids it (custom benches or hand-built analyses can produce one).

use crate::analysis::Analysis;

/// Outcome of the consensus vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// One resolution got strictly more votes than any other.
    Majority(String),
    /// Two or more resolutions tied for the most votes, in first-seen order.
    Split(Vec<String>),
}

impl Verdict {
    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }

    /// Human-readable form; ties render as `Split Decision: a | b`.
    pub fn render(&self) -> String {
        match self {
            Self::Majority(resolution) => resolution.clone(),
            Self::Split(options) => format!("Split Decision: {}", options.join(" | ")),
        }
    }
}

/// Majority vote over the stripped resolutions. `None` on empty input.
pub fn consensus(results: &[Analysis]) -> Option<Verdict> {
    if results.is_empty() {
        return None;
    }

    // Count in first-seen order so tie rendering is deterministic.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for result in results {
        let base = result.base_resolution();
        match counts.iter_mut().find(|(res, _)| *res == base) {
            Some((_, n)) => *n += 1,
            None => counts.push((base, 1)),
        }
    }

    let max_votes = counts.iter().map(|(_, n)| *n).max()?;
    let mut top: Vec<String> = counts
        .iter()
        .filter(|(_, n)| *n == max_votes)
        .map(|(res, _)| res.to_string())
        .collect();

    Some(if top.len() == 1 {
        Verdict::Majority(top.remove(0))
    } else {
        Verdict::Split(top)
    })
}

/// Mean confidence across analyses, rounded to the nearest integer.
pub fn average_confidence(results: &[Analysis]) -> u8 {
    if results.is_empty() {
        return 0;
    }
    let sum: u32 = results.iter().map(|r| u32::from(r.confidence)).sum();
    (sum as f64 / results.len() as f64).round() as u8
}
