//! Core types and configuration for the stock analyzer.
//!
//! This crate provides shared types used across all other crates:
//! - Daily records and the per-ticker series map
//! - Analytics result types
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{AnalyticsConfig, Config, FetchConfig};
pub use error::{Error, Result};
pub use types::*;
