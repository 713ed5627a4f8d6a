//! Typed rows of the two inflation series.

/// One observed period from the historical file.
///
/// Column order on disk: `date,cpi,inflation,rate,bankRate`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalRecord {
    pub date: String,
    pub cpi: f64,
    pub inflation_rate: f64,
    pub policy_rate: f64,
    pub bank_rate: f64,
}

/// One future period from the predicted file.
///
/// Column order on disk: `date,predicted_inflation,cpi,rate,bankRate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub date: String,
    pub predicted_inflation: f64,
    pub cpi: f64,
    pub policy_rate: f64,
    pub bank_rate: f64,
}

/// Rows kept from a file plus how many were discarded on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}
