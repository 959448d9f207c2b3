use serde::Serialize;

/// One client profile as read from the input file.
///
/// `score` stays at 0.0 until the pipeline has validated and scored the
/// record; it is set exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    /// Two-letter country code, e.g. "AT". Unrecognized codes are legal.
    pub country: String,
    /// Open categorical label ("retail", "corporate", ...), not used by scoring.
    pub client_type: String,
    pub age: i32,
    pub income: f64,
    pub employment: String,
    pub industry: String,
    pub debt: f64,
    pub score: f64,
}

impl ClientRecord {
    /// Debt-to-income ratio. The +1.0 keeps zero incomes finite.
    pub fn debt_to_income(&self) -> f64 {
        self.debt / (self.income + 1.0)
    }
}
