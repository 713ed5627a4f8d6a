//! Flat-file ingestion for the historical and predicted inflation series.

pub mod numeric;
pub mod records;
pub mod series;
