use serde::Serialize;
use std::fmt;

/// Rating bands, ordered from worst to best so that `Ord` follows credit quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rating {
    #[serde(rename = "D")]
    D,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "BB")]
    Bb,
    #[serde(rename = "BBB")]
    Bbb,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

/// Lower score bound of each band, best first. First match wins.
const THRESHOLDS: [(f64, Rating); 6] = [
    (0.85, Rating::Aaa),
    (0.70, Rating::Aa),
    (0.60, Rating::A),
    (0.50, Rating::Bbb),
    (0.40, Rating::Bb),
    (0.30, Rating::B),
];

impl Rating {
    /// All bands, best first.
    pub const ALL: [Rating; 7] = [
        Rating::Aaa,
        Rating::Aa,
        Rating::A,
        Rating::Bbb,
        Rating::Bb,
        Rating::B,
        Rating::D,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Aaa => "AAA",
            Rating::Aa => "AA",
            Rating::A => "A",
            Rating::Bbb => "BBB",
            Rating::Bb => "BB",
            Rating::B => "B",
            Rating::D => "D",
        }
    }

    /// Investment grade is BBB and above.
    pub fn is_investment_grade(self) -> bool {
        self >= Rating::Bbb
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a score to its rating band.
///
/// Total over every f64: scores above 1.0 rate AAA, negative scores and NaN
/// rate D.
pub fn classify(score: f64) -> Rating {
    THRESHOLDS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, rating)| *rating)
        .unwrap_or(Rating::D)
}
