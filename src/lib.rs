//! Inflation history and forecast service.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod forecast;
pub mod logging;
