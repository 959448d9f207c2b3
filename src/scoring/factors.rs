/// Ages inside this band earn the age factor.
pub const AGE_FACTOR_MIN: i32 = 18;
pub const AGE_FACTOR_MAX: i32 = 75;
/// Age at which the age factor peaks.
pub const PEAK_AGE: f64 = 45.0;

/// Income at or above this earns the full income weight.
pub const INCOME_THRESHOLD: f64 = 30_000.0;

/// Debt above this costs a flat penalty.
pub const HIGH_DEBT_THRESHOLD: f64 = 50_000.0;
pub const HIGH_DEBT_PENALTY: f64 = 0.1;

/// Clients younger than this or older than [`AGE_FACTOR_MAX`] cost a flat penalty.
pub const YOUNG_AGE_LIMIT: i32 = 21;
pub const AGE_PENALTY: f64 = 0.05;

pub const STABLE_EMPLOYMENT: [&str; 2] = ["permanent", "self-employed"];
pub const SAFE_INDUSTRIES: [&str; 3] = ["finance", "it", "pharma"];
pub const COUNTRY_MULTIPLIERS: [(&str, f64); 5] = [
    ("AT", 1.0),
    ("DE", 0.95),
    ("GR", 0.7),
    ("US", 1.0),
    ("BR", 0.6),
];

/// Triangular age score: 1.0 at 45, falling linearly to 0.0 at 0 and 90.
/// Returns `None` outside the 18..=75 band.
pub fn age_score(age: i32) -> Option<f64> {
    if !(AGE_FACTOR_MIN..=AGE_FACTOR_MAX).contains(&age) {
        return None;
    }
    Some(1.0 - (PEAK_AGE - f64::from(age)).abs() / PEAK_AGE)
}

pub fn meets_income_threshold(income: f64) -> bool {
    income >= INCOME_THRESHOLD
}

/// Tiered treatment of the debt-to-income ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtTier {
    /// dti <= 0.25: full debt weight
    Low,
    /// 0.25 < dti <= 0.5: half the debt weight
    Moderate,
    /// dti > 0.5: nothing
    High,
}

impl DebtTier {
    pub fn from_ratio(dti: f64) -> Self {
        if dti <= 0.25 {
            DebtTier::Low
        } else if dti <= 0.5 {
            DebtTier::Moderate
        } else {
            DebtTier::High
        }
    }

    /// Share of the debt weight this tier earns.
    pub fn share(self) -> f64 {
        match self {
            DebtTier::Low => 1.0,
            DebtTier::Moderate => 0.5,
            DebtTier::High => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DebtTier::Low => "low",
            DebtTier::Moderate => "moderate",
            DebtTier::High => "high",
        }
    }
}

/// Flat deduction for high absolute debt.
pub fn debt_penalty(debt: f64) -> f64 {
    if debt > HIGH_DEBT_THRESHOLD {
        HIGH_DEBT_PENALTY
    } else {
        0.0
    }
}

/// Flat deduction for very young or elderly clients.
pub fn age_penalty(age: i32) -> f64 {
    if age < YOUNG_AGE_LIMIT || age > AGE_FACTOR_MAX {
        AGE_PENALTY
    } else {
        0.0
    }
}
