use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use thiserror::Error;

use super::types::ClientRecord;

/// Number of positional columns in a client row:
/// id, name, country, clientType, age, income, employment, industry, debt.
pub const FIELD_COUNT: usize = 9;

/// Fatal input errors. Any of these aborts the batch before scoring.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open input file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: missing client id")]
    MissingId { line: u64 },

    #[error("input contains no client rows")]
    NoRecords,
}

/// Load client records from a comma-delimited file with a header row.
pub fn load_clients(path: &Path) -> Result<Vec<ClientRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    parse_clients(file)
}

/// Parse client records from any reader. The first row is treated as a header
/// and skipped; every following row must have exactly [`FIELD_COUNT`] fields.
pub fn parse_clients<R: Read>(reader: R) -> Result<Vec<ClientRecord>, LoadError> {
    // Flexible so that a short or long row surfaces as our own FieldCount
    // error with a line number rather than csv's UnequalLengths.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut clients = Vec::new();
    let mut record = StringRecord::new();

    loop {
        let line = csv_reader.position().line();
        let more = csv_reader
            .read_record(&mut record)
            .map_err(|source| LoadError::Csv { line, source })?;
        if !more {
            break;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(line);
        clients.push(parse_row(&record, line)?);
    }

    if clients.is_empty() {
        return Err(LoadError::NoRecords);
    }

    Ok(clients)
}

fn parse_row(record: &StringRecord, line: u64) -> Result<ClientRecord, LoadError> {
    if record.len() != FIELD_COUNT {
        return Err(LoadError::FieldCount {
            line,
            expected: FIELD_COUNT,
            found: record.len(),
        });
    }

    let field = |idx: usize| record.get(idx).unwrap_or_default();

    let id = field(0);
    if id.is_empty() {
        return Err(LoadError::MissingId { line });
    }

    Ok(ClientRecord {
        id: id.to_string(),
        name: field(1).to_string(),
        country: field(2).to_string(),
        client_type: field(3).to_string(),
        age: parse_number(field(4), "age", line)?,
        income: parse_number(field(5), "income", line)?,
        employment: field(6).to_string(),
        industry: field(7).to_string(),
        debt: parse_number(field(8), "debt", line)?,
        score: 0.0,
    })
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
    line: u64,
) -> Result<T, LoadError> {
    value.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}
