//! Analysis engine: keyword rule matching, per-panch annotation, and the
//! consensus vote over annotated resolutions.

pub mod analysis;
pub mod consensus;
pub mod deliberate;
pub mod matcher;

pub use analysis::Analysis;
pub use consensus::{Verdict, average_confidence, consensus};
pub use deliberate::Panchayat;
pub use matcher::{MatchOutcome, MatchStrength, build_corpus, select_rule};
