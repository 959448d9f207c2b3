use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::engine::ScoreEngine;
use super::weights::WeightTable;

/// Scoring section of the config file.
///
/// Both fields are optional. A `weights` map replaces the default table as a
/// whole; factors it leaves out contribute nothing. `countries` entries are
/// added to (or override) the built-in country multipliers.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     age: 0.1
///     income: 0.4
///     employment: 0.2
///     industry: 0.1
///     debt: 0.2
///   countries:
///     PL: 0.9
///     GR: 0.75
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: Option<WeightTable>,

    /// Country code -> multiplier applied after penalties
    #[serde(default)]
    pub countries: Option<BTreeMap<String, f64>>,
}

impl ScoringConfig {
    /// Weight table for the run: the configured one, else the defaults.
    pub fn weight_table(&self) -> WeightTable {
        self.weights.clone().unwrap_or_default()
    }

    /// Engine with the default tables plus any configured country multipliers.
    pub fn engine(&self) -> ScoreEngine {
        self.countries
            .iter()
            .flatten()
            .fold(ScoreEngine::default(), |engine, (code, multiplier)| {
                engine.with_country_multiplier(code.clone(), *multiplier)
            })
    }
}
