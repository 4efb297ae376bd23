//! Dispute rule table: static legal templates matched by keyword overlap.
//!
//! Rules are configuration data, not code: the builtin table is embedded JSON
//! deserialised once at startup, and callers may load their own table from
//! disk. The first rule in a table doubles as the fallback when nothing
//! matches, so a table is only valid if it is non-empty.

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// Legal domain a rule belongs to.
///
/// The display strings are also the panch expertise vocabulary, so
/// [`DisputeCategory::as_str`] is part of the matching surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisputeCategory {
    #[serde(rename = "Contract Law")]
    ContractLaw,
    #[serde(rename = "Labor Law")]
    LaborLaw,
    #[serde(rename = "Property Law")]
    PropertyLaw,
    #[serde(rename = "Consumer Protection")]
    ConsumerProtection,
    #[serde(rename = "Family Law")]
    FamilyLaw,
    #[serde(rename = "Intellectual Property")]
    IntellectualProperty,
    #[serde(rename = "Criminal Law")]
    CriminalLaw,
    #[serde(rename = "Environmental Law")]
    EnvironmentalLaw,
    #[serde(rename = "Tax Law")]
    TaxLaw,
    #[serde(rename = "Company Law")]
    CompanyLaw,
    #[serde(rename = "Cyber Law")]
    CyberLaw,
    #[serde(rename = "Human Rights")]
    HumanRights,
    #[serde(rename = "Administrative Law")]
    AdministrativeLaw,
    #[serde(rename = "Banking Law")]
    BankingLaw,
    #[serde(rename = "Insurance Law")]
    InsuranceLaw,
    #[serde(rename = "Constitutional Law")]
    ConstitutionalLaw,
    #[serde(rename = "Commercial Law")]
    CommercialLaw,
    #[serde(rename = "Arbitration")]
    Arbitration,
    #[serde(rename = "Alternative Dispute Resolution")]
    AlternativeDisputeResolution,
}

impl DisputeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContractLaw => "Contract Law",
            Self::LaborLaw => "Labor Law",
            Self::PropertyLaw => "Property Law",
            Self::ConsumerProtection => "Consumer Protection",
            Self::FamilyLaw => "Family Law",
            Self::IntellectualProperty => "Intellectual Property",
            Self::CriminalLaw => "Criminal Law",
            Self::EnvironmentalLaw => "Environmental Law",
            Self::TaxLaw => "Tax Law",
            Self::CompanyLaw => "Company Law",
            Self::CyberLaw => "Cyber Law",
            Self::HumanRights => "Human Rights",
            Self::AdministrativeLaw => "Administrative Law",
            Self::BankingLaw => "Banking Law",
            Self::InsuranceLaw => "Insurance Law",
            Self::ConstitutionalLaw => "Constitutional Law",
            Self::CommercialLaw => "Commercial Law",
            Self::Arbitration => "Arbitration",
            Self::AlternativeDisputeResolution => "Alternative Dispute Resolution",
        }
    }
}

impl std::fmt::Display for DisputeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A statutory citation attached to one side of a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalReference {
    pub section: String,
    pub act: String,
    pub explanation: String,
    /// Relevance score 0-100, hand-assigned by the table authors.
    pub relevance: u8,
    pub category: String,
    /// ISO 8601 date string.
    pub last_updated: String,
}

/// A keyword-tagged legal template with pre-authored resolution text.
///
/// The two keyword sets loosely correspond to the claimant's and the
/// respondent's framing of the dispute; the matcher treats them as one pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisputeRule {
    pub id: String,
    pub category: DisputeCategory,
    pub subcategory: String,
    pub claimant_keywords: Vec<String>,
    pub respondent_keywords: Vec<String>,
    pub claimant_references: Vec<LegalReference>,
    pub respondent_references: Vec<LegalReference>,
    pub suggested_resolution: String,
    pub ethical_recommendations: Vec<String>,
    pub jurisdiction: Vec<String>,
    pub timeline_estimate: String,
    pub cost_estimate: String,
    pub compliance_requirements: Vec<String>,
    pub alternative_resolutions: Vec<String>,
    pub risks: Vec<String>,
    /// Estimated success probability 0-100, illustrative only.
    pub success_probability: u8,
    pub limitation_period: String,
    pub appeal_options: Vec<String>,
}

impl DisputeRule {
    /// All keywords from both sides, in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.claimant_keywords
            .iter()
            .chain(self.respondent_keywords.iter())
            .map(|s| s.as_str())
    }

    /// Act names cited on the claimant side ("applicable laws").
    pub fn applicable_laws(&self) -> Vec<String> {
        self.claimant_references
            .iter()
            .map(|r| r.act.clone())
            .collect()
    }
}

/// Builtin rule table shipped with the crate.
static BUILTIN_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::from_json(include_str!("../data/dispute_rules.json"))
        .expect("builtin rule table is valid")
});

/// An ordered, validated collection of dispute rules.
///
/// Order matters: matching is first-match-wins in table order, and the first
/// rule is the fallback when no rule matches.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<DisputeRule>,
}

impl RuleSet {
    /// The builtin 10-rule Indian-law table.
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN_RULES
    }

    /// Parse and validate a rule table from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let rules: Vec<DisputeRule> = serde_json::from_str(json)?;
        Self::from_rules(rules)
    }

    /// Load and validate a rule table from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let json = std::fs::read_to_string(path)?;
        let set = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), rules = set.len(), "loaded rule table");
        Ok(set)
    }

    /// Validate an in-memory rule list.
    pub fn from_rules(rules: Vec<DisputeRule>) -> Result<Self, CorpusError> {
        if rules.is_empty() {
            return Err(CorpusError::EmptyRuleTable);
        }
        let mut seen = std::collections::HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(CorpusError::DuplicateRuleId(rule.id.clone()));
            }
            if rule.claimant_keywords.is_empty() && rule.respondent_keywords.is_empty() {
                return Err(CorpusError::NoKeywords(rule.id.clone()));
            }
        }
        Ok(Self { rules })
    }

    /// The fallback rule used when no rule matches.
    pub fn default_rule(&self) -> &DisputeRule {
        // Non-empty by construction.
        &self.rules[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisputeRule> {
        self.rules.iter()
    }

    pub fn get(&self, id: &str) -> Option<&DisputeRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
