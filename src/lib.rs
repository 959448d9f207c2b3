//! Credit-risk scoring: load client records, score them from weighted
//! factors, classify each score into a rating band and write a report.

pub mod client;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod telemetry;

pub use client::{load_clients, ClientRecord, LoadError};
pub use pipeline::{BatchOutcome, Pipeline, PipelineError, Rejection, ScoredResult};
pub use scoring::{calculate_score, classify, Rating, ScoreEngine, WeightTable};
