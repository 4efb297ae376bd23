pub mod error;
pub mod panch;
pub mod rule;

pub use error::CorpusError;
pub use panch::{Bias, PanchBench, PanchProfile};
pub use rule::{DisputeCategory, DisputeRule, LegalReference, RuleSet};
