//! Readers and row parsers for the two comma-separated series files.
//!
//! Both files carry a header row followed by one record per line. Fields are
//! split on bare commas; quotes carry no meaning in these files.

use std::{
    borrow::Cow,
    io::Read,
    path::{Path, PathBuf},
};

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, warn};

use crate::{
    data::{
        numeric::parse_cell,
        records::{ForecastRecord, HistoricalRecord, Parsed},
    },
    error::{ForecastError, Result},
};

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(input)
}

/// Cells of one row; invalid UTF-8 is replaced rather than failing the file.
struct Row<'a>(Vec<Cow<'a, str>>);

impl<'a> Row<'a> {
    fn decode(record: &'a ByteRecord) -> Self {
        Row(record.iter().map(String::from_utf8_lossy).collect())
    }

    fn cell(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(AsRef::as_ref)
    }

    fn date(&self) -> String {
        self.cell(0).unwrap_or_default().trim().to_string()
    }

    fn is_blank(&self) -> bool {
        self.0.iter().all(|cell| cell.trim().is_empty())
    }
}

/// Parse the historical series, dropping rows whose inflation cell is not numeric.
pub fn parse_historical<R: Read>(input: R) -> csv::Result<Parsed<HistoricalRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0;
    for record in reader(input).byte_records() {
        let record = record?;
        let row = Row::decode(&record);
        let record = HistoricalRecord {
            date: row.date(),
            cpi: parse_cell(row.cell(1)),
            inflation_rate: parse_cell(row.cell(2)),
            policy_rate: parse_cell(row.cell(3)),
            bank_rate: parse_cell(row.cell(4)),
        };
        if record.inflation_rate.is_nan() {
            skipped += 1;
            continue;
        }
        records.push(record);
    }
    Ok(Parsed { records, skipped })
}

/// Parse the predicted series.
///
/// Only blank lines are removed; non-numeric cells stay NaN.
pub fn parse_forecast<R: Read>(input: R) -> csv::Result<Parsed<ForecastRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0;
    for record in reader(input).byte_records() {
        let record = record?;
        let row = Row::decode(&record);
        if row.is_blank() {
            skipped += 1;
            continue;
        }
        records.push(ForecastRecord {
            date: row.date(),
            predicted_inflation: parse_cell(row.cell(1)),
            cpi: parse_cell(row.cell(2)),
            policy_rate: parse_cell(row.cell(3)),
            bank_rate: parse_cell(row.cell(4)),
        });
    }
    Ok(Parsed { records, skipped })
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|source| ForecastError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_error(path: &Path) -> impl FnOnce(csv::Error) -> ForecastError {
    let path: PathBuf = path.to_path_buf();
    move |source| ForecastError::Csv { path, source }
}

/// Read and parse the historical file at `path`.
pub async fn read_historical(path: &Path) -> Result<Vec<HistoricalRecord>> {
    let bytes = read_file(path).await?;
    let parsed = parse_historical(bytes.as_slice()).map_err(decode_error(path))?;
    debug!(path = %path.display(), rows = parsed.records.len(), "read historical series");
    if parsed.skipped > 0 {
        warn!(
            path = %path.display(),
            dropped = parsed.skipped,
            "dropped historical rows without a numeric inflation value"
        );
    }
    Ok(parsed.records)
}

/// Read and parse the predicted file at `path`.
pub async fn read_forecast(path: &Path) -> Result<Vec<ForecastRecord>> {
    let bytes = read_file(path).await?;
    let parsed = parse_forecast(bytes.as_slice()).map_err(decode_error(path))?;
    let non_numeric = parsed
        .records
        .iter()
        .filter(|r| r.predicted_inflation.is_nan())
        .count();
    debug!(
        path = %path.display(),
        rows = parsed.records.len(),
        blank = parsed.skipped,
        non_numeric,
        "read forecast series"
    );
    Ok(parsed.records)
}
