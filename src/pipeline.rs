//! Batch scoring: validate, score and classify each client in input order.

use serde::Serialize;
use thiserror::Error;

use crate::client::ClientRecord;
use crate::scoring::{classify, validate_and_log, Rating, ScoreEngine, WeightTable};

/// A validated, scored client paired with its rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    pub client: ClientRecord,
    pub rating: Rating,
}

/// A record dropped by validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    /// 1-based position among the input records
    pub row: usize,
    pub id: String,
    pub reasons: Vec<String>,
}

/// Output of a batch with at least one scored client.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchOutcome {
    /// Scored clients in input order
    pub results: Vec<ScoredResult>,
    pub rejected: Vec<Rejection>,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No valid entries to score ({} rejected)", .rejected.len())]
    NoValidEntries { rejected: Vec<Rejection> },
}

/// Holds the read-only weight table and engine for one run.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    weights: WeightTable,
    engine: ScoreEngine,
}

impl Pipeline {
    pub fn new(weights: WeightTable) -> Self {
        Self {
            weights,
            engine: ScoreEngine::default(),
        }
    }

    pub fn with_engine(mut self, engine: ScoreEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Validate and score one record. `row` is 1-based and only used in
    /// diagnostics.
    pub fn process(&self, mut client: ClientRecord, row: usize) -> Result<ScoredResult, Rejection> {
        if let Err(reasons) = validate_and_log(&client, row) {
            tracing::warn!(client = %client.id, row, "Skipping invalid client entry");
            return Err(Rejection {
                row,
                id: client.id,
                reasons,
            });
        }

        client.score = self.engine.calculate_score(&client, &self.weights);
        let rating = classify(client.score);
        tracing::debug!(client = %client.id, score = client.score, %rating, "scored client");

        Ok(ScoredResult { client, rating })
    }

    /// Run the whole batch. Fails if no record survives validation, so a
    /// report is never written with zero rows.
    pub fn run(&self, clients: Vec<ClientRecord>) -> Result<BatchOutcome, PipelineError> {
        let mut outcome = BatchOutcome::default();

        for (idx, client) in clients.into_iter().enumerate() {
            match self.process(client, idx + 1) {
                Ok(result) => outcome.results.push(result),
                Err(rejection) => outcome.rejected.push(rejection),
            }
        }

        if outcome.results.is_empty() {
            return Err(PipelineError::NoValidEntries {
                rejected: outcome.rejected,
            });
        }

        tracing::info!(
            scored = outcome.results.len(),
            rejected = outcome.rejected.len(),
            "batch scored"
        );

        Ok(outcome)
    }
}
