use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Factor names understood by the score engine.
pub const AGE: &str = "age";
pub const INCOME: &str = "income";
pub const EMPLOYMENT: &str = "employment";
pub const INDUSTRY: &str = "industry";
pub const DEBT: &str = "debt";

pub const FACTORS: [&str; 5] = [AGE, INCOME, EMPLOYMENT, INDUSTRY, DEBT];

/// Factor weights used by the score engine.
///
/// Weights are not required to sum to 1. Unknown factor names read as 0.0, so
/// a partially configured table simply drops the missing factors.
///
/// Example YAML:
/// ```yaml
/// weights:
///   age: 0.1
///   income: 0.3
///   debt: 0.2
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct WeightTable {
    weights: BTreeMap<String, f64>,
}

impl WeightTable {
    /// A table with no factors; every lookup returns 0.0.
    pub fn empty() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// The canonical configuration:
    /// age 0.10, income 0.30, employment 0.20, industry 0.20, debt 0.20.
    pub fn default_weights() -> Self {
        let mut table = Self::empty();
        table.set_weight(AGE, 0.1);
        table.set_weight(INCOME, 0.3);
        table.set_weight(EMPLOYMENT, 0.2);
        table.set_weight(INDUSTRY, 0.2);
        table.set_weight(DEBT, 0.2);
        table
    }

    /// Insert or overwrite a weight. No range check is applied.
    pub fn set_weight(&mut self, factor: impl Into<String>, weight: f64) {
        self.weights.insert(factor.into(), weight);
    }

    pub fn weight(&self, factor: &str) -> f64 {
        self.weights.get(factor).copied().unwrap_or(0.0)
    }

    /// Configured factors sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(name, weight)| (name.as_str(), *weight))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::default_weights()
    }
}
