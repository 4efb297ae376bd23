//! Panch perspective profiles for the virtual panchayat bench.
//!
//! A profile is a static descriptor of one panch's leanings (empathy,
//! process, innovation, bias) plus an expertise list. Profiles select which
//! canned commentary gets appended to a matched rule's output; they carry no
//! case-specific reasoning.

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;
use crate::rule::DisputeCategory;

/// Self-declared bias of a panch profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bias {
    LegalPrecedent,
    Humanitarian,
    CommunityWelfare,
    ProceduralCompliance,
    ProgressiveInterpretation,
    NoBias,
}

/// One member of the panchayat bench.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanchProfile {
    pub name: String,
    pub philosophy: String,
    /// Nominal deliberation weight. Carried from the source tables but not
    /// used in aggregation, which is a plain majority vote.
    pub weight: f32,
    pub empathy: f32,
    pub process: f32,
    pub innovation: f32,
    pub focus: Vec<String>,
    pub bias: Bias,
    pub expertise: Vec<DisputeCategory>,
}

impl PanchProfile {
    /// Whether any expertise tag appears verbatim inside one of the given
    /// act names. Substring containment, not category equality: e.g.
    /// "Arbitration" matches "Arbitration and Conciliation Act, 1996".
    pub fn covers_any(&self, acts: &[String]) -> bool {
        self.expertise
            .iter()
            .any(|exp| acts.iter().any(|act| act.contains(exp.as_str())))
    }
}

static BUILTIN_BENCH: LazyLock<PanchBench> = LazyLock::new(|| {
    PanchBench::from_json(include_str!("../data/panch_bench.json"))
        .expect("builtin bench is valid")
});

/// An ordered, validated set of panch profiles.
#[derive(Debug, Clone)]
pub struct PanchBench {
    profiles: Vec<PanchProfile>,
}

impl PanchBench {
    /// The builtin six-panch bench.
    pub fn builtin() -> &'static PanchBench {
        &BUILTIN_BENCH
    }

    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let profiles: Vec<PanchProfile> = serde_json::from_str(json)?;
        Self::from_profiles(profiles)
    }

    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let json = std::fs::read_to_string(path)?;
        let bench = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), panches = bench.len(), "loaded panch bench");
        Ok(bench)
    }

    pub fn from_profiles(profiles: Vec<PanchProfile>) -> Result<Self, CorpusError> {
        if profiles.is_empty() {
            return Err(CorpusError::EmptyBench);
        }
        Ok(Self { profiles })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanchProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bench_has_six_panches() {
        let bench = PanchBench::builtin();
        assert_eq!(bench.len(), 6);
    }

    #[test]
    fn builtin_bench_ends_with_unbiased_panch() {
        let bench = PanchBench::builtin();
        let vishwas = bench.iter().last().unwrap();
        assert_eq!(vishwas.bias, Bias::NoBias);
        // The trust-oriented panch claims every category.
        assert_eq!(vishwas.expertise.len(), 19);
    }

    #[test]
    fn bias_parses_from_snake_case() {
        let bias: Bias = serde_json::from_str("\"legal_precedent\"").unwrap();
        assert_eq!(bias, Bias::LegalPrecedent);
    }

    #[test]
    fn empty_bench_rejected() {
        let err = PanchBench::from_profiles(vec![]).unwrap_err();
        assert!(matches!(err, CorpusError::EmptyBench));
    }

    #[test]
    fn covers_any_is_substring_containment() {
        let karuna = PanchBench::builtin()
            .iter()
            .find(|p| p.name.contains("Karuna"))
            .unwrap();
        // Expertise "Consumer Protection" sits inside the act name.
        assert!(karuna.covers_any(&["Consumer Protection Act, 2019".to_string()]));
        // Expertise "Family Law" does not appear in any act name verbatim.
        assert!(!karuna.covers_any(&["Hindu Marriage Act, 1955".to_string()]));
        assert!(!karuna.covers_any(&[]));
    }
}
