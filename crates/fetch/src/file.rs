//! Saved provider responses on disk.

use crate::source::DataSource;
use analyzer_core::Result;
use analyzer_ingestion::{ApiResponse, Datatable};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a provider response previously written to a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn name(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> Result<Datatable> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(ApiResponse::from_json(&body)?.datatable)
    }
}
