mod common;

use common::{fixture, forecast_csv, historical_with_malformed, missing_path, HISTORICAL_HEADER};
use inflation_forecast::{config::Settings, error::ForecastError, forecast::ForecastAggregator};

#[tokio::test]
async fn malformed_rows_are_dropped_in_file_order() {
    let fx = fixture(&historical_with_malformed(), &forecast_csv(&[]));
    let records = ForecastAggregator::new(fx.settings.clone())
        .historical()
        .await
        .unwrap();

    assert_eq!(records.len(), 15);
    assert!(records.iter().all(|r| r.date.ends_with("-01")));
    let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(records[0].date, "2022-01-01");
    assert_eq!(records[14].date, "2023-03-01");
    assert_eq!(records[0].inflation_rate, 6.9);
    assert_eq!(records[0].policy_rate, 3.5);
    assert_eq!(records[0].bank_rate, 4.25);
}

#[tokio::test]
async fn header_only_file_yields_empty_series() {
    let fx = fixture(&format!("{HISTORICAL_HEADER}\n"), &forecast_csv(&[]));
    let records = ForecastAggregator::new(fx.settings.clone())
        .historical()
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn missing_file_is_a_read_failure() {
    let fx = fixture("", "");
    let settings = Settings::with_paths(missing_path(&fx), fx.settings.forecast_csv.clone());
    let err = ForecastAggregator::new(settings)
        .historical()
        .await
        .unwrap_err();

    assert!(matches!(err, ForecastError::Read { .. }), "{err:?}");
    assert_eq!(err.path(), &missing_path(&fx));
    assert!(!err.to_string().is_empty());
}
