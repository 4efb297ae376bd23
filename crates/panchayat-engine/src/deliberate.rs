//! Panchayat deliberation: one base analysis re-read through each panch's
//! perspective.
//!
//! Annotation is cosmetic by design: fixed sentences keyed on static profile
//! thresholds, plus a fixed confidence bump when a panch's expertise overlaps
//! the cited act names. The case content never changes which commentary a
//! panch appends.

use panchayat_core::{Bias, PanchBench, PanchProfile, RuleSet};

use crate::analysis::Analysis;
use crate::matcher::{build_corpus, select_rule};

/// Expertise overlap with the cited acts is worth a fixed confidence bump.
const EXPERTISE_BONUS: u8 = 10;
const CONFIDENCE_CAP: u8 = 95;

/// A rule table and a bench of panch profiles, ready to analyze disputes.
pub struct Panchayat {
    rules: RuleSet,
    bench: PanchBench,
}

impl Panchayat {
    pub fn new(rules: RuleSet, bench: PanchBench) -> Self {
        Self { rules, bench }
    }

    /// The builtin rule table and six-panch bench.
    pub fn builtin() -> Self {
        Self::new(RuleSet::builtin().clone(), PanchBench::builtin().clone())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn bench(&self) -> &PanchBench {
        &self.bench
    }

    /// Run the keyword matcher and build the base (un-annotated) analysis.
    pub fn analyze(&self, claimant: &[String], respondent: &[String]) -> Analysis {
        let corpus = build_corpus(claimant, respondent);
        Analysis::from_outcome(&select_rule(&self.rules, &corpus))
    }

    /// Full deliberation: one annotated analysis per panch, in bench order.
    ///
    /// The output length always equals the bench size.
    pub fn deliberate(&self, claimant: &[String], respondent: &[String]) -> Vec<Analysis> {
        let base = self.analyze(claimant, respondent);
        tracing::info!(
            rule = %base.rule_id,
            confidence = base.confidence,
            panches = self.bench.len(),
            "deliberating"
        );
        self.bench
            .iter()
            .map(|panch| annotate(&base, panch))
            .collect()
    }
}

/// Build one panch's view of the base analysis.
///
/// Clones the base and appends commentary; the base is left untouched, so
/// panches never see each other's recommendations.
fn annotate(base: &Analysis, panch: &PanchProfile) -> Analysis {
    let mut out = base.clone();

    if panch.empathy > 0.8 {
        out.suggested_resolution.push_str(&format!(
            " ({} emphasizes compassionate resolution considering human impact)",
            panch.name
        ));
        out.ethical_recommendations
            .push("Prioritize human welfare and dignity in resolution".to_string());
    }

    if panch.process > 0.9 {
        out.suggested_resolution.push_str(&format!(
            " ({} stresses strict adherence to legal procedures)",
            panch.name
        ));
        out.ethical_recommendations
            .push("Ensure all procedural requirements are meticulously followed".to_string());
    }

    if panch.innovation > 0.8 {
        out.suggested_resolution.push_str(&format!(
            " ({} suggests modern, technology-enabled solutions)",
            panch.name
        ));
        out.ethical_recommendations
            .push("Embrace innovative approaches while respecting legal framework".to_string());
    }

    if panch.bias == Bias::NoBias {
        out.suggested_resolution.push_str(&format!(
            " ({} emphasizes impartial and unbiased resolution)",
            panch.name
        ));
        out.ethical_recommendations
            .push("Maintain strict neutrality and impartiality in analysis".to_string());
    }

    if panch.covers_any(&out.applicable_laws) {
        out.confidence = std::cmp::min(CONFIDENCE_CAP, out.confidence + EXPERTISE_BONUS);
    }

    out.panch_name = Some(panch.name.clone());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    fn by_name<'a>(results: &'a [Analysis], fragment: &str) -> &'a Analysis {
        results
            .iter()
            .find(|a| a.panch_name.as_deref().is_some_and(|n| n.contains(fragment)))
            .unwrap()
    }

    #[test]
    fn one_analysis_per_panch_in_bench_order() {
        let panchayat = Panchayat::builtin();
        let results = panchayat.deliberate(&args(&["the contract was breached"]), &[]);
        assert_eq!(results.len(), 6);

        let names: Vec<&str> = results
            .iter()
            .map(|a| a.panch_name.as_deref().unwrap())
            .collect();
        assert!(names[0].contains("Nyayamurti"));
        assert!(names[5].contains("Vishwas"));
    }

    #[test]
    fn every_annotation_preserves_the_base_resolution_prefix() {
        let panchayat = Panchayat::builtin();
        let base = panchayat.analyze(&args(&["the contract was breached"]), &[]);
        let results = panchayat.deliberate(&args(&["the contract was breached"]), &[]);
        for a in &results {
            assert!(
                a.suggested_resolution.starts_with(&base.suggested_resolution),
                "{:?} does not start with the base resolution",
                a.panch_name
            );
            assert_eq!(a.base_resolution(), base.suggested_resolution);
        }
    }

    #[test]
    fn threshold_edges_leave_some_panches_silent() {
        let panchayat = Panchayat::builtin();
        let base = panchayat.analyze(&args(&["the contract was breached"]), &[]);
        let results = panchayat.deliberate(&args(&["the contract was breached"]), &[]);

        // Nyayamurti (process 0.9) and Samaj (empathy 0.8) sit exactly on the
        // strict thresholds and append nothing.
        for fragment in ["Nyayamurti", "Samaj"] {
            let a = by_name(&results, fragment);
            assert_eq!(a.suggested_resolution, base.suggested_resolution);
            assert_eq!(a.ethical_recommendations, base.ethical_recommendations);
        }
    }

    #[test]
    fn karuna_vidhi_pragati_vishwas_each_append_their_commentary() {
        let panchayat = Panchayat::builtin();
        let results = panchayat.deliberate(&args(&["the contract was breached"]), &[]);

        assert!(
            by_name(&results, "Karuna")
                .suggested_resolution
                .contains("compassionate resolution considering human impact")
        );
        assert!(
            by_name(&results, "Vidhi")
                .suggested_resolution
                .contains("stresses strict adherence to legal procedures")
        );
        assert!(
            by_name(&results, "Pragati")
                .suggested_resolution
                .contains("suggests modern, technology-enabled solutions")
        );
        assert!(
            by_name(&results, "Vishwas")
                .suggested_resolution
                .contains("emphasizes impartial and unbiased resolution")
        );
    }

    #[test]
    fn annotation_does_not_leak_between_panches() {
        let panchayat = Panchayat::builtin();
        let base = panchayat.analyze(&args(&["the contract was breached"]), &[]);
        let results = panchayat.deliberate(&args(&["the contract was breached"]), &[]);

        let karuna = by_name(&results, "Karuna");
        assert_eq!(
            karuna.ethical_recommendations.len(),
            base.ethical_recommendations.len() + 1
        );
        // Vidhi gets only its own addition, not Karuna's.
        let vidhi = by_name(&results, "Vidhi");
        assert_eq!(
            vidhi.ethical_recommendations.len(),
            base.ethical_recommendations.len() + 1
        );
        assert!(
            !vidhi
                .ethical_recommendations
                .contains(&"Prioritize human welfare and dignity in resolution".to_string())
        );
    }

    #[test]
    fn expertise_overlap_bumps_confidence_by_ten() {
        let panchayat = Panchayat::builtin();
        // consumer_001: acts contain "Consumer Protection", which is Karuna
        // (and Vishwas) expertise. Base confidence 70 (one matching rule).
        let claimant = args(&["the product was defective"]);
        let respondent = args(&["the seller denies it"]);
        let base = panchayat.analyze(&claimant, &respondent);
        assert_eq!(base.rule_id, "consumer_001");
        assert_eq!(base.confidence, 70);

        let results = panchayat.deliberate(&claimant, &respondent);
        assert_eq!(by_name(&results, "Karuna").confidence, 80);
        assert_eq!(by_name(&results, "Vishwas").confidence, 80);
        // No expertise tag occurs inside the consumer act names for Vidhi.
        assert_eq!(by_name(&results, "Vidhi").confidence, 70);
    }

    #[test]
    fn no_expertise_overlap_for_contract_acts() {
        // "Contract Law" is not a substring of "Indian Contract Act, 1872",
        // so nobody gets the bump on the contract rule.
        let panchayat = Panchayat::builtin();
        let results = panchayat.deliberate(&args(&["the contract was breached"]), &[]);
        for a in &results {
            assert_eq!(a.confidence, 70, "{:?}", a.panch_name);
        }
    }

    #[test]
    fn confidence_bump_caps_at_95() {
        let panchayat = Panchayat::builtin();
        // Four matching rules drive base confidence to the 95 cap, with
        // consumer_001 the earliest match so Karuna's expertise bump applies.
        let claimant = args(&[
            "the product was defective and the seller ignored complaints",
            "their factory caused pollution of the environment",
            "hacking and phishing from their website made it worse",
            "now the bank pursues loan recovery against us",
        ]);
        let base = panchayat.analyze(&claimant, &[]);
        assert_eq!(base.rule_id, "consumer_001");
        assert_eq!(base.confidence, 95);

        let results = panchayat.deliberate(&claimant, &[]);
        assert_eq!(by_name(&results, "Karuna").confidence, 95);
        for a in &results {
            assert!(a.confidence <= 95, "{:?}", a.panch_name);
        }
    }
}
