pub mod engine;
pub mod validation;

pub use engine::{
    compute_scores, meets_entry_gate, score_keys, unknown_keys, DomainScore, ScoreResult,
    CLINICAL_THRESHOLD, LAB_THRESHOLD,
};
pub use validation::validate_criteria;
