//! Data ingestion and normalization for the stock analyzer.
//!
//! This crate handles:
//! - The provider's datatable response shape
//! - Mapping loosely-typed positional rows onto typed daily records
//! - Grouping records into per-ticker series

pub mod normalizer;
pub mod response;

pub use normalizer::{normalize, Field};
pub use response::{ApiResponse, Datatable};
