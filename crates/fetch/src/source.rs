//! Data source abstraction.

use analyzer_core::{Result, SeriesMap};
use analyzer_ingestion::{normalize, Datatable};
use async_trait::async_trait;
use tracing::debug;

/// Somewhere a provider datatable can be read from.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Fetch the raw rows and their column metadata.
    async fn fetch(&self) -> Result<Datatable>;
}

/// Fetch from `source` and normalize into per-ticker series.
///
/// Fetch errors are returned as-is; a malformed row fails the call before any
/// series is produced.
pub async fn fetch_series(source: &dyn DataSource) -> Result<SeriesMap> {
    let table = source.fetch().await?;
    debug!(
        source = source.name(),
        rows = table.rows.len(),
        columns = table.columns.len(),
        "fetched datatable"
    );
    normalize(&table.columns, &table.rows)
}
