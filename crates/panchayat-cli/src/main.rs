use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use panchayat_core::{PanchBench, RuleSet};
use panchayat_engine::Panchayat;
use panchayat_sync::DisputeClient;

mod display;

#[derive(Parser)]
#[command(
    name = "panchayat",
    version,
    about = "Rule-based dispute analysis with a virtual panchayat bench"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a dispute with the full panch bench
    Analyze {
        /// Claimant argument (repeatable)
        #[arg(short = 'c', long = "claimant", value_name = "TEXT")]
        claimant: Vec<String>,
        /// Respondent argument (repeatable)
        #[arg(short = 'r', long = "respondent", value_name = "TEXT")]
        respondent: Vec<String>,
        /// Custom rule table (JSON) instead of the builtin one
        #[arg(long, value_name = "PATH")]
        rules: Option<PathBuf>,
        /// Emit the per-panch results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the rule table
    Rules {
        /// Custom rule table (JSON) instead of the builtin one
        #[arg(long, value_name = "PATH")]
        rules: Option<PathBuf>,
    },
    /// List the panch bench
    Bench,
    /// Submit a dispute to the backend's own analysis pipeline
    Remote {
        /// Claimant argument (repeatable)
        #[arg(short = 'c', long = "claimant", value_name = "TEXT")]
        claimant: Vec<String>,
        /// Respondent argument (repeatable)
        #[arg(short = 'r', long = "respondent", value_name = "TEXT")]
        respondent: Vec<String>,
        /// Backend base URL
        #[arg(
            long,
            env = "PANCHAYAT_BACKEND_URL",
            default_value = "http://localhost:5000"
        )]
        url: String,
    },
    /// Pull dispute cases from the backend
    Pull {
        /// Backend base URL
        #[arg(
            long,
            env = "PANCHAYAT_BACKEND_URL",
            default_value = "http://localhost:5000"
        )]
        url: String,
        /// Only cases filed after this RFC 3339 timestamp
        #[arg(long, value_name = "TIMESTAMP")]
        since: Option<DateTime<Utc>>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "panchayat start");
    match cli.command {
        Command::Analyze {
            claimant,
            respondent,
            rules,
            json,
        } => {
            let rule_set = load_rules(rules.as_deref())?;
            let panchayat = Panchayat::new(rule_set, PanchBench::builtin().clone());
            let results = panchayat.deliberate(&claimant, &respondent);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_deliberation(&results);
            }
        }
        Command::Rules { rules } => {
            let rule_set = load_rules(rules.as_deref())?;
            display::print_rule_table(&rule_set);
        }
        Command::Bench => {
            display::print_bench(PanchBench::builtin());
        }
        Command::Remote {
            claimant,
            respondent,
            url,
        } => {
            let client = DisputeClient::new(url);
            let analysis = client
                .analyze_remote(&claimant, &respondent)
                .await
                .context("submitting dispute to backend")?;
            display::print_remote_analysis(&analysis);
        }
        Command::Pull { url, since } => {
            let client = DisputeClient::new(url);
            let cases = client
                .pull_cases(since)
                .await
                .context("pulling cases from backend")?;
            display::print_cases(&cases);
        }
    }
    Ok(())
}

fn load_rules(path: Option<&Path>) -> anyhow::Result<RuleSet> {
    match path {
        Some(p) => RuleSet::from_path(p)
            .with_context(|| format!("loading rule table from {}", p.display())),
        None => Ok(RuleSet::builtin().clone()),
    }
}
