use std::collections::{BTreeMap, BTreeSet};

use super::factors::{
    age_penalty, age_score, debt_penalty, meets_income_threshold, DebtTier, COUNTRY_MULTIPLIERS,
    INCOME_THRESHOLD, SAFE_INDUSTRIES, STABLE_EMPLOYMENT,
};
use super::weights::{WeightTable, AGE, DEBT, EMPLOYMENT, INCOME, INDUSTRY};
use crate::client::ClientRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Age", "Income", "Country"
    pub description: String, // e.g. "age 35 -> 0.778 x 0.1", "DE x0.95"
    pub before: f64,         // Running total before this step
    pub after: f64,          // Running total after this step
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
    /// Total after every step, before clamping to [0, 1].
    pub unclamped: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Scores clients against a weight table.
///
/// The employment and industry sets and the country table are owned by the
/// engine, so engines with different tables can be used side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEngine {
    stable_employment: BTreeSet<String>,
    safe_industries: BTreeSet<String>,
    country_multipliers: BTreeMap<String, f64>,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self {
            stable_employment: STABLE_EMPLOYMENT.iter().map(|s| s.to_string()).collect(),
            safe_industries: SAFE_INDUSTRIES.iter().map(|s| s.to_string()).collect(),
            country_multipliers: COUNTRY_MULTIPLIERS
                .iter()
                .map(|(code, m)| (code.to_string(), *m))
                .collect(),
        }
    }
}

impl ScoreEngine {
    /// Add or replace a country multiplier.
    pub fn with_country_multiplier(mut self, code: impl Into<String>, multiplier: f64) -> Self {
        self.country_multipliers.insert(code.into(), multiplier);
        self
    }

    pub fn is_stable_employment(&self, employment: &str) -> bool {
        self.stable_employment.contains(employment)
    }

    pub fn is_safe_industry(&self, industry: &str) -> bool {
        self.safe_industries.contains(industry)
    }

    /// Multiplier for a country code; `None` if the code is not in the table.
    pub fn country_multiplier(&self, country: &str) -> Option<f64> {
        self.country_multipliers.get(country).copied()
    }

    /// Score a client in [0, 1].
    pub fn calculate_score(&self, client: &ClientRecord, weights: &WeightTable) -> f64 {
        self.explain(client, weights).score
    }

    /// Score a client and record how each step moved the running total.
    ///
    /// Steps run in a fixed order: age, income, employment, industry,
    /// debt-to-income, penalties, country multiplier, clamp. The multiplier
    /// applies to the penalized total, so the order changes the result.
    pub fn explain(&self, client: &ClientRecord, weights: &WeightTable) -> ScoreResult {
        let mut score = 0.0;
        let mut factors = Vec::new();

        // Age: triangular around 45, only inside 18..=75
        let before = score;
        let description = match age_score(client.age) {
            Some(age_score) => {
                let weight = weights.weight(AGE);
                score += weight * age_score;
                format!("age {} -> {:.3} x {}", client.age, age_score, weight)
            }
            None => format!("age {} outside 18-75", client.age),
        };
        factors.push(step("Age", description, before, score));

        // Income: all or nothing
        let before = score;
        let description = if meets_income_threshold(client.income) {
            score += weights.weight(INCOME);
            format!("{:.0} >= {:.0}", client.income, INCOME_THRESHOLD)
        } else {
            format!("{:.0} below {:.0}", client.income, INCOME_THRESHOLD)
        };
        factors.push(step("Income", description, before, score));

        // Employment
        let before = score;
        let stable = self.is_stable_employment(&client.employment);
        if stable {
            score += weights.weight(EMPLOYMENT);
        }
        let description = format!(
            "'{}' {}",
            client.employment,
            if stable { "stable" } else { "not stable" }
        );
        factors.push(step("Employment", description, before, score));

        // Industry
        let before = score;
        let safe = self.is_safe_industry(&client.industry);
        if safe {
            score += weights.weight(INDUSTRY);
        }
        let description = format!(
            "'{}' {}",
            client.industry,
            if safe { "safe" } else { "not safe" }
        );
        factors.push(step("Industry", description, before, score));

        // Debt-to-income
        let before = score;
        let dti = client.debt_to_income();
        let tier = DebtTier::from_ratio(dti);
        score += weights.weight(DEBT) * tier.share();
        let description = format!("dti {:.3} ({}, x{})", dti, tier.label(), tier.share());
        factors.push(step("Debt", description, before, score));

        // Penalties are flat deductions, not weighted
        let penalty = debt_penalty(client.debt);
        if penalty > 0.0 {
            let before = score;
            score -= penalty;
            let description = format!("debt {:.0} -> -{}", client.debt, penalty);
            factors.push(step("High debt penalty", description, before, score));
        }
        let penalty = age_penalty(client.age);
        if penalty > 0.0 {
            let before = score;
            score -= penalty;
            let description = format!("age {} -> -{}", client.age, penalty);
            factors.push(step("Age penalty", description, before, score));
        }

        // Country multiplier; unknown codes are left alone
        if let Some(multiplier) = self.country_multiplier(&client.country) {
            let before = score;
            score *= multiplier;
            let description = format!("{} x{}", client.country, multiplier);
            factors.push(step("Country", description, before, score));
        }

        ScoreResult {
            score: score.clamp(0.0, 1.0),
            breakdown: ScoreBreakdown {
                factors,
                unclamped: score,
            },
        }
    }
}

fn step(label: &str, description: String, before: f64, after: f64) -> FactorContribution {
    FactorContribution {
        label: label.to_string(),
        description,
        before,
        after,
    }
}

/// Score a client with the default engine tables.
pub fn calculate_score(client: &ClientRecord, weights: &WeightTable) -> f64 {
    ScoreEngine::default().calculate_score(client, weights)
}
