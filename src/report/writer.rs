use anyhow::{bail, Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::NaiveDateTime;
use rand::Rng;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::pipeline::ScoredResult;

pub const REPORT_HEADER: [&str; 3] = ["ClientID", "Score", "Rating"];

/// Default directory for reports, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Build a report name like `credit_ratings_20240131_0915_482913.csv`.
/// The six random digits keep runs within the same minute apart.
pub fn report_filename(now: NaiveDateTime) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..6)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    format!("credit_ratings_{}_{}.csv", now.format("%Y%m%d_%H%M"), suffix)
}

/// Write `ClientID,Score,Rating` rows to any writer, score with two decimals.
pub fn write_results<W: Write>(writer: W, results: &[ScoredResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(REPORT_HEADER)
        .context("Failed to write report header")?;

    for result in results {
        let score = format!("{:.2}", result.client.score);
        csv_writer
            .write_record([result.client.id.as_str(), score.as_str(), result.rating.as_str()])
            .with_context(|| format!("Failed to write report row for {}", result.client.id))?;
    }

    csv_writer.flush().context("Failed to flush report")?;
    Ok(())
}

/// Render the report in memory.
pub fn render_report(results: &[ScoredResult]) -> Result<String> {
    let mut buf = Vec::new();
    write_results(&mut buf, results)?;
    String::from_utf8(buf).context("Report is not valid UTF-8")
}

/// Write the report to `dir/filename` atomically and return its path.
///
/// Creates `dir` if it doesn't exist. Refuses an empty result set: a batch
/// with no scored clients is a failure, not an empty report.
pub fn write_report(dir: &Path, filename: &str, results: &[ScoredResult]) -> Result<PathBuf> {
    if results.is_empty() {
        bail!("No valid entries to score; refusing to write an empty report");
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory at {}", dir.display()))?;

    let path = dir.join(filename);
    let mut file = AtomicWriteFile::open(&path)
        .with_context(|| format!("Could not write to file: {}", path.display()))?;

    write_results(&mut file, results)?;

    file.commit()
        .with_context(|| format!("Failed to save report at {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = results.len(), "report written");
    Ok(path)
}
