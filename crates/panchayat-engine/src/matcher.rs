//! Keyword matcher: selects a dispute rule by counting keyword overlaps
//! between the argument corpus and each rule's keyword sets.
//!
//! Selection is first-match-wins in table order, not best-match-by-score.
//! That is the documented behaviour of the system this replaces; ranking by
//! hit count would change which rule wins whenever several match, so the
//! order dependence is kept deliberately.

use serde::Serialize;

use panchayat_core::{DisputeRule, RuleSet};

/// A rule "matches" when at least this many of its keywords occur in the corpus.
const MATCH_THRESHOLD: usize = 2;

/// Confidence when no rule reaches the threshold and the fallback is used.
const NO_MATCH_CONFIDENCE: u8 = 40;

/// How strongly the corpus matched the rule table, by matching-rule count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStrength {
    /// Three or more rules matched.
    Strong,
    /// Exactly two rules matched.
    Moderate,
    /// Zero or one rule matched.
    Weak,
}

impl MatchStrength {
    fn from_rule_count(n: usize) -> Self {
        if n >= 3 {
            Self::Strong
        } else if n == 2 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }
}

/// Outcome of matching one argument corpus against a rule table.
pub struct MatchOutcome<'a> {
    /// The selected rule (first matching, or the table's fallback).
    pub rule: &'a DisputeRule,
    /// How many rules reached the match threshold.
    pub matching_rules: usize,
    /// The selected rule's keywords found in the corpus.
    pub matched_keywords: Vec<String>,
    pub confidence: u8,
    pub strength: MatchStrength,
}

/// Flatten both parties' arguments into one lowercased corpus string.
pub fn build_corpus(claimant: &[String], respondent: &[String]) -> String {
    claimant
        .iter()
        .chain(respondent.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Select a rule for the given corpus.
///
/// Always returns a rule: if no rule reaches [`MATCH_THRESHOLD`] keyword
/// hits, the table's fallback rule is used with confidence
/// [`NO_MATCH_CONFIDENCE`]. Otherwise confidence is
/// `min(95, 60 + 10 * matching_rule_count)`.
pub fn select_rule<'a>(rules: &'a RuleSet, corpus: &str) -> MatchOutcome<'a> {
    let matching: Vec<&DisputeRule> = rules
        .iter()
        .filter(|rule| keyword_hits(rule, corpus) >= MATCH_THRESHOLD)
        .collect();

    let rule = match matching.first() {
        Some(first) => *first,
        None => rules.default_rule(),
    };

    let confidence = if matching.is_empty() {
        NO_MATCH_CONFIDENCE
    } else {
        std::cmp::min(95, 60 + 10 * matching.len()) as u8
    };

    let matched_keywords: Vec<String> = rule
        .keywords()
        .filter(|kw| corpus.contains(kw.to_lowercase().as_str()))
        .map(str::to_string)
        .collect();

    let strength = MatchStrength::from_rule_count(matching.len());

    tracing::debug!(
        rule = %rule.id,
        matching_rules = matching.len(),
        confidence,
        strength = strength.as_str(),
        "rule selected"
    );

    MatchOutcome {
        rule,
        matching_rules: matching.len(),
        matched_keywords,
        confidence,
        strength,
    }
}

/// Count how many of the rule's keywords occur as substrings of the corpus.
fn keyword_hits(rule: &DisputeRule, corpus: &str) -> usize {
    rule.keywords()
        .filter(|kw| corpus.contains(kw.to_lowercase().as_str()))
        .count()
}
