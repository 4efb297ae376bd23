//! Per-invocation analysis values derived from a matched rule.

use serde::Serialize;

use panchayat_core::{DisputeCategory, LegalReference};

use crate::matcher::{MatchOutcome, MatchStrength};

/// One analysis of a dispute: the matched rule's fields plus computed
/// match metadata, optionally annotated from a panch's perspective.
///
/// Built fresh per invocation and never persisted. Panch annotation produces
/// a new value rather than mutating a shared copy, so the base analysis (and
/// the rule table underneath it) is never modified.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Set when the analysis has been annotated from one panch's perspective.
    pub panch_name: Option<String>,
    pub rule_id: String,
    pub category: DisputeCategory,
    pub subcategory: String,
    pub claimant_references: Vec<LegalReference>,
    pub respondent_references: Vec<LegalReference>,
    pub suggested_resolution: String,
    pub ethical_recommendations: Vec<String>,
    /// 0-100; illustrative, not statistical.
    pub confidence: u8,
    pub match_strength: MatchStrength,
    pub matched_keywords: Vec<String>,
    pub alternative_resolutions: Vec<String>,
    pub timeline_estimate: String,
    pub cost_estimate: String,
    pub success_probability: u8,
    pub risks: Vec<String>,
    pub compliance_requirements: Vec<String>,
    /// Jurisdictions joined with ", ".
    pub jurisdiction: String,
    /// Act names cited on the claimant side.
    pub applicable_laws: Vec<String>,
    pub limitation_period: String,
    pub appeal_options: Vec<String>,
}

impl Analysis {
    /// Build the base (un-annotated) analysis from a match outcome.
    pub fn from_outcome(outcome: &MatchOutcome<'_>) -> Self {
        let rule = outcome.rule;
        Self {
            panch_name: None,
            rule_id: rule.id.clone(),
            category: rule.category,
            subcategory: rule.subcategory.clone(),
            claimant_references: rule.claimant_references.clone(),
            respondent_references: rule.respondent_references.clone(),
            suggested_resolution: rule.suggested_resolution.clone(),
            ethical_recommendations: rule.ethical_recommendations.clone(),
            confidence: outcome.confidence,
            match_strength: outcome.strength,
            matched_keywords: outcome.matched_keywords.clone(),
            alternative_resolutions: rule.alternative_resolutions.clone(),
            timeline_estimate: rule.timeline_estimate.clone(),
            cost_estimate: rule.cost_estimate.clone(),
            success_probability: rule.success_probability,
            risks: rule.risks.clone(),
            compliance_requirements: rule.compliance_requirements.clone(),
            jurisdiction: rule.jurisdiction.join(", "),
            applicable_laws: rule.applicable_laws(),
            limitation_period: rule.limitation_period.clone(),
            appeal_options: rule.appeal_options.clone(),
        }
    }

    /// The resolution with any appended panch commentary stripped: everything
    /// before the first `(`, trimmed.
    pub fn base_resolution(&self) -> &str {
        self.suggested_resolution
            .split('(')
            .next()
            .unwrap_or("")
            .trim()
    }
}
