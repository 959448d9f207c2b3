pub mod config;
pub mod engine;
pub mod factors;
pub mod rating;
pub mod validation;
pub mod weights;

pub use config::ScoringConfig;
pub use engine::{calculate_score, FactorContribution, ScoreBreakdown, ScoreEngine, ScoreResult};
pub use factors::DebtTier;
pub use rating::{classify, Rating};
pub use validation::{is_valid_record, validate_and_log, validate_record, validate_scoring};
pub use weights::WeightTable;
