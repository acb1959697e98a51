//! Upstream data access for the stock analyzer.
//!
//! This crate provides:
//! - The [`DataSource`] abstraction over where provider responses come from
//! - An HTTP client for the provider's datatable API
//! - A file-backed source for saved responses

pub mod file;
pub mod quandl;
pub mod source;

pub use file::FileSource;
pub use quandl::{build_request_url, QuandlClient};
pub use source::{fetch_series, DataSource};
