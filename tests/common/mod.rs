#![allow(dead_code)]

use std::{fs, path::PathBuf};

use inflation_forecast::config::Settings;
use tempfile::TempDir;

pub const HISTORICAL_HEADER: &str = "date,cpi,inflation,rate,bankRate";
pub const FORECAST_HEADER: &str = "date,predicted_inflation,cpi,rate,bankRate";

/// Both series written into a temporary directory.
pub struct Fixture {
    pub dir: TempDir,
    pub settings: Settings,
}

pub fn fixture(historical: &str, forecast: &str) -> Fixture {
    fixture_bytes(historical.as_bytes(), forecast.as_bytes())
}

pub fn fixture_bytes(historical: &[u8], forecast: &[u8]) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let historical_path = dir.path().join("Inflation _ data.csv");
    let forecast_path = dir.path().join("future_predictions.csv");
    fs::write(&historical_path, historical).expect("write historical");
    fs::write(&forecast_path, forecast).expect("write forecast");
    let settings = Settings::with_paths(historical_path, forecast_path);
    Fixture { dir, settings }
}

pub fn missing_path(fixture: &Fixture) -> PathBuf {
    fixture.dir.path().join("does-not-exist.csv")
}

/// Fifteen valid monthly rows with two malformed rows interleaved.
pub fn historical_with_malformed() -> String {
    let mut lines = vec![HISTORICAL_HEADER.to_string()];
    for month in 1..=15u32 {
        let year = 2022 + (month - 1) / 12;
        let m = (month - 1) % 12 + 1;
        lines.push(format!(
            "{year}-{m:02}-01,{:.1},{:.2},3.5,4.25",
            200.0 + month as f64,
            7.0 - month as f64 * 0.1
        ));
        if month == 4 {
            lines.push("2022-04-15,204.5,,3.5,4.25".to_string());
        }
        if month == 13 {
            lines.push("2023-01-15,213.5,n/a,3.5,4.25".to_string());
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

pub fn forecast_csv(rows: &[&str]) -> String {
    let mut lines = vec![FORECAST_HEADER];
    lines.extend_from_slice(rows);
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
