//! Wire shape of the provider's datatable response.

use analyzer_core::{ColumnDescriptor, RawRow, Result};
use serde::{Deserialize, Serialize};

/// Top-level provider response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    pub datatable: Datatable,
}

/// Rows plus the column metadata that describes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Datatable {
    #[serde(rename = "data", default)]
    pub rows: Vec<RawRow>,
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
}

impl ApiResponse {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datatable() {
        let body = r#"{
            "datatable": {
                "data": [["COF", "2017-01-03", 88.55, 89.6, 87.79, 88.87, 3441067.0]],
                "columns": [
                    {"name": "ticker", "type": "String"},
                    {"name": "date", "type": "Date"}
                ]
            },
            "meta": {"next_cursor_id": null}
        }"#;

        let response = ApiResponse::from_json(body).unwrap();
        assert_eq!(response.datatable.rows.len(), 1);
        assert_eq!(response.datatable.rows[0].len(), 7);
        assert_eq!(response.datatable.columns[1].name, "date");
        assert_eq!(response.datatable.columns[1].kind, "Date");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ApiResponse::from_json("not json").is_err());
    }
}
