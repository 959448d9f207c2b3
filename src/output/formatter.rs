use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::client::ClientRecord;
use crate::pipeline::{BatchOutcome, Rejection, ScoredResult};
use crate::scoring::{Rating, ScoreResult};

/// Name column width in the results table
const NAME_WIDTH: usize = 24;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Color a rating label by grade: investment grade green, speculative
/// yellow, default red.
pub fn format_rating(rating: Rating, use_colors: bool) -> String {
    let label = format!("{:<3}", rating.as_str());
    if !use_colors {
        return label;
    }
    match rating {
        Rating::D => label.red().bold().to_string(),
        r if r.is_investment_grade() => label.green().to_string(),
        _ => label.yellow().to_string(),
    }
}

/// Truncate a name to fit the column, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format scored clients as a table in input order.
/// Columns: index, client id, score (two decimals), rating, name, country.
pub fn format_scored_table(results: &[ScoredResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No clients scored.".to_string();
    }

    let id_width = results
        .iter()
        .map(|r| r.client.id.chars().count())
        .max()
        .unwrap_or(0)
        .max("ClientID".len());

    results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let index_str = format!("{:>3}.", idx + 1);
            let id = format!("{:<width$}", result.client.id, width = id_width);
            let score = format!("{:>5.2}", result.client.score);
            let rating = format_rating(result.rating, use_colors);
            let name = truncate_name(&result.client.name, NAME_WIDTH);

            if use_colors {
                format!(
                    "{} {}  {}  {}  {} ({})",
                    index_str.dimmed(),
                    id.bold(),
                    score,
                    rating,
                    name,
                    result.client.country.cyan()
                )
            } else {
                format!(
                    "{} {}  {}  {}  {} ({})",
                    index_str, id, score, rating, name, result.client.country
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Count of clients per rating band, best band first. Bands with no
/// clients are listed with a zero count.
pub fn rating_distribution(results: &[ScoredResult]) -> Vec<(Rating, usize)> {
    Rating::ALL
        .iter()
        .map(|band| (*band, results.iter().filter(|r| r.rating == *band).count()))
        .collect()
}

/// Format the batch summary: totals plus the rating distribution.
pub fn format_summary(outcome: &BatchOutcome, use_colors: bool) -> String {
    let scored = outcome.results.len();
    let rejected = outcome.rejected.len();
    let mut out = String::new();

    if use_colors {
        out.push_str(&format!(
            "{} clients scored, {} rejected\n",
            scored.bold(),
            if rejected > 0 {
                rejected.red().to_string()
            } else {
                rejected.to_string()
            }
        ));
    } else {
        out.push_str(&format!("{} clients scored, {} rejected\n", scored, rejected));
    }

    for (band, count) in rating_distribution(&outcome.results) {
        let bar = "#".repeat(count.min(40));
        out.push_str(&format!(
            "  {}  {:>4}  {}\n",
            format_rating(band, use_colors),
            count,
            bar
        ));
    }

    out
}

/// Format rejected records, one line per violated rule.
pub fn format_rejections(rejected: &[Rejection]) -> String {
    rejected
        .iter()
        .flat_map(|r| {
            r.reasons
                .iter()
                .map(move |reason| format!("{} ({})", reason, r.id))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the per-factor breakdown of a client's score (for --explain).
pub fn format_breakdown(client: &ClientRecord, result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let header = format!("{} {}", client.id, client.name);
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }

    for factor in &result.breakdown.factors {
        let delta = factor.after - factor.before;
        lines.push(format!(
            "  {:<18} {:>+7.3}  {:.3} -> {:.3}  {}",
            factor.label, delta, factor.before, factor.after, factor.description
        ));
    }

    let clamped = if result.score != result.breakdown.unclamped {
        format!(" (clamped from {:.3})", result.breakdown.unclamped)
    } else {
        String::new()
    };
    lines.push(format!("  {:<18} {:.3}{}", "Score", result.score, clamped));

    lines.join("\n")
}

/// Format the batch as pretty-printed JSON.
pub fn format_json(outcome: &BatchOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ScoreEngine, WeightTable};

    fn sample_client(id: &str, name: &str, score: f64) -> ClientRecord {
        ClientRecord {
            id: id.to_string(),
            name: name.to_string(),
            country: "AT".to_string(),
            client_type: "retail".to_string(),
            age: 45,
            income: 100_000.0,
            employment: "permanent".to_string(),
            industry: "finance".to_string(),
            debt: 2_000.0,
            score,
        }
    }

    fn sample_outcome() -> BatchOutcome {
        BatchOutcome {
            results: vec![
                ScoredResult {
                    client: sample_client("C001", "Anna Berger", 1.0),
                    rating: Rating::Aaa,
                },
                ScoredResult {
                    client: sample_client("C002", "Ben Ortiz", 0.42),
                    rating: Rating::Bb,
                },
                ScoredResult {
                    client: sample_client("C003", "Cleo Park", 0.95),
                    rating: Rating::Aaa,
                },
            ],
            rejected: vec![Rejection {
                row: 4,
                id: "C004".to_string(),
                reasons: vec![
                    "Row 4: Invalid age: -5".to_string(),
                    "Row 4: Negative debt".to_string(),
                ],
            }],
        }
    }

    #[test]
    fn test_format_rating_plain() {
        assert_eq!(format_rating(Rating::Aaa, false), "AAA");
        assert_eq!(format_rating(Rating::D, false), "D  ");
    }

    #[test]
    fn test_format_scored_table_empty() {
        assert_eq!(format_scored_table(&[], false), "No clients scored.");
    }

    #[test]
    fn test_format_scored_table_rows() {
        let outcome = sample_outcome();
        let result = format_scored_table(&outcome.results, false);
        let lines: Vec<&str> = result.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  1."));
        assert!(lines[0].contains("C001"));
        assert!(lines[0].contains("1.00"));
        assert!(lines[0].contains("AAA"));
        assert!(lines[0].contains("Anna Berger (AT)"));
        assert!(lines[1].contains("0.42"));
        assert!(lines[1].contains("BB "));
        assert!(lines[2].starts_with("  3."));
    }

    #[test]
    fn test_truncate_name_long() {
        assert_eq!(truncate_name("Maximilian Alexander von Habsburg", 15), "Maximilian A...");
        assert_eq!(truncate_name("Short", 15), "Short");
        assert_eq!(truncate_name("Hello", 3), "Hel");
    }

    #[test]
    fn test_rating_distribution() {
        let outcome = sample_outcome();
        let distribution = rating_distribution(&outcome.results);

        assert_eq!(distribution.len(), 7);
        assert_eq!(distribution[0], (Rating::Aaa, 2));
        assert_eq!(distribution[4], (Rating::Bb, 1));
        assert_eq!(distribution[6], (Rating::D, 0));
    }

    #[test]
    fn test_format_summary() {
        let summary = format_summary(&sample_outcome(), false);
        assert!(summary.starts_with("3 clients scored, 1 rejected"));
        assert!(summary.contains("AAA     2  ##"));
        assert!(summary.contains("D       0"));
    }

    #[test]
    fn test_format_rejections() {
        let outcome = sample_outcome();
        let result = format_rejections(&outcome.rejected);
        assert_eq!(
            result,
            "Row 4: Invalid age: -5 (C004)\nRow 4: Negative debt (C004)"
        );
    }

    #[test]
    fn test_format_breakdown_clamped() {
        let client = sample_client("C001", "Anna Berger", 0.0);
        let mut weights = WeightTable::default_weights();
        weights.set_weight("income", 2.0);
        let result = ScoreEngine::default().explain(&client, &weights);
        let text = format_breakdown(&client, &result, false);

        assert!(text.starts_with("C001 Anna Berger"));
        assert!(text.contains("Age"));
        assert!(text.contains("Income"));
        assert!(text.contains("Country"));
        assert!(text.contains("Score              1.000 (clamped from"));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&sample_outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["results"][0]["client"]["id"], "C001");
        assert_eq!(value["results"][1]["rating"], "BB");
        assert_eq!(value["rejected"][0]["row"], 4);
    }
}
