//! Vertical card display for deliberation results, rule tables, and the
//! panch bench.

use panchayat_core::{LegalReference, PanchBench, RuleSet};
use panchayat_engine::{Analysis, average_confidence, consensus};
use panchayat_sync::{RemoteAnalysis, RemoteCase};

const MAX_LIST_ITEMS: usize = 10;

// ── Deliberation output ──

/// Print the consensus summary followed by one card per panch.
pub fn print_deliberation(results: &[Analysis]) {
    let Some(verdict) = consensus(results) else {
        println!("No deliberation results.");
        return;
    };

    println!("=== Panchayat Consensus ===");
    println!("{}", verdict.render());
    println!(
        "  {:<26} {}",
        "average confidence",
        average_confidence(results)
    );
    println!();

    for analysis in results {
        print_analysis_card(analysis);
    }
}

/// Print a single analysis as a vertical card grouped by section.
pub fn print_analysis_card(a: &Analysis) {
    match &a.panch_name {
        Some(name) => println!("=== {} ===", name),
        None => println!("=== Base analysis ==="),
    }
    println!();

    println!("Match");
    print_field("rule", &a.rule_id);
    print_field("category", a.category.as_str());
    print_field("subcategory", &a.subcategory);
    print_field("strength", a.match_strength.as_str());
    print_field("confidence", &a.confidence.to_string());
    if !a.matched_keywords.is_empty() {
        print_field("matched keywords", &a.matched_keywords.join(", "));
    }
    println!();

    println!("Resolution");
    print_field("suggested", &a.suggested_resolution);
    print_list("alternatives", &a.alternative_resolutions);
    println!();

    print_references("Claimant References", &a.claimant_references);
    print_references("Respondent References", &a.respondent_references);

    println!("Guidance");
    print_list("ethical", &a.ethical_recommendations);
    print_list("compliance", &a.compliance_requirements);
    print_list("risks", &a.risks);
    println!();

    println!("Practicalities");
    print_field("jurisdiction", &a.jurisdiction);
    print_field("timeline", &a.timeline_estimate);
    print_field("cost", &a.cost_estimate);
    print_field(
        "success probability",
        &format!("{}%", a.success_probability),
    );
    print_field("limitation period", &a.limitation_period);
    print_list("appeal options", &a.appeal_options);
    println!();
}

fn print_references(header: &str, refs: &[LegalReference]) {
    if refs.is_empty() {
        return;
    }
    println!("{} ({}):", header, refs.len());
    for r in refs.iter().take(MAX_LIST_ITEMS) {
        println!("    {:<14} {}  (relevance {})", r.section, r.act, r.relevance);
        println!("      {}", r.explanation);
    }
    if refs.len() > MAX_LIST_ITEMS {
        println!("    ... and {} more", refs.len() - MAX_LIST_ITEMS);
    }
    println!();
}

// ── Rule table and bench listings ──

pub fn print_rule_table(rules: &RuleSet) {
    println!("{} rules", rules.len());
    println!();
    for rule in rules.iter() {
        println!("=== {} ===", rule.id);
        print_field("category", rule.category.as_str());
        print_field("subcategory", &rule.subcategory);
        print_field("claimant keywords", &rule.claimant_keywords.join(", "));
        print_field("respondent keywords", &rule.respondent_keywords.join(", "));
        print_field(
            "success probability",
            &format!("{}%", rule.success_probability),
        );
        println!();
    }
}

pub fn print_bench(bench: &PanchBench) {
    println!("{} panches", bench.len());
    println!();
    for panch in bench.iter() {
        println!("=== {} ===", panch.name);
        print_field("philosophy", &panch.philosophy);
        print_field(
            "leanings",
            &format!(
                "empathy {:.1}  process {:.1}  innovation {:.1}",
                panch.empathy, panch.process, panch.innovation
            ),
        );
        print_field("focus", &panch.focus.join(", "));
        let expertise: Vec<&str> = panch.expertise.iter().map(|c| c.as_str()).collect();
        print_list("expertise", &expertise);
        println!();
    }
}

// ── Remote backend output ──

pub fn print_remote_analysis(a: &RemoteAnalysis) {
    println!("=== Remote analysis ===");
    println!();
    print_field("suggested", &a.suggested_resolution);
    print_list("claimant references", &a.claimant_legal_references);
    print_list("respondent references", &a.respondent_legal_references);
    print_list("ethical", &a.ethical_recommendations);
    println!();
}

pub fn print_cases(cases: &[RemoteCase]) {
    if cases.is_empty() {
        println!("No cases.");
        return;
    }
    println!("{} cases", cases.len());
    println!();
    for case in cases {
        println!("=== {} ===", case.id);
        print_field("title", &case.title);
        print_field("category", case.category.as_str());
        print_field("status", &case.status);
        print_field("filed", &case.filing_date);
        if !case.description.is_empty() {
            print_field("description", &case.description);
        }
        println!();
    }
}

// ── Helpers ──

fn print_field(label: &str, value: &str) {
    println!("  {:<26} {}", label, value);
}

fn print_list<S: AsRef<str>>(label: &str, items: &[S]) {
    if items.is_empty() {
        return;
    }
    let shown: Vec<&str> = items
        .iter()
        .take(MAX_LIST_ITEMS)
        .map(|s| s.as_ref())
        .collect();
    print_field(label, &shown.join("; "));
    if items.len() > MAX_LIST_ITEMS {
        println!("  {:<26} ... and {} more", "", items.len() - MAX_LIST_ITEMS);
    }
}
