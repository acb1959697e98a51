//! Row normalization.
//!
//! Maps positional provider rows onto [`DailyRecord`]s using the column
//! metadata that accompanies them, then groups the records by ticker.

use analyzer_core::{ColumnDescriptor, DailyRecord, Error, RawRow, Result, SeriesMap};
use serde_json::Value;
use tracing::{info, warn};

/// A recognized column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Ticker,
    Date,
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl Field {
    /// Resolve a column name, case-insensitively. Unknown names yield `None`.
    pub fn from_column(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ticker" => Some(Field::Ticker),
            "date" => Some(Field::Date),
            "open" => Some(Field::Open),
            "high" => Some(Field::High),
            "low" => Some(Field::Low),
            "close" => Some(Field::Close),
            "volume" => Some(Field::Volume),
            _ => None,
        }
    }

    fn is_text(self) -> bool {
        matches!(self, Field::Ticker | Field::Date)
    }
}

/// A record being assembled from one row.
///
/// Fields whose column is absent keep their zero value.
#[derive(Debug, Default)]
struct RecordBuilder {
    ticker: String,
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl RecordBuilder {
    fn set(&mut self, field: Field, value: &Value, row: usize, column: &str) -> Result<()> {
        if field.is_text() {
            let text = value
                .as_str()
                .ok_or_else(|| Error::malformed(row, column, "string"))?
                .to_string();
            match field {
                Field::Ticker => self.ticker = text,
                _ => self.date = text,
            }
            return Ok(());
        }

        let number = value
            .as_f64()
            .ok_or_else(|| Error::malformed(row, column, "number"))?;
        match field {
            Field::Open => self.open = number,
            Field::High => self.high = number,
            Field::Low => self.low = number,
            Field::Close => self.close = number,
            _ => self.volume = number,
        }
        Ok(())
    }

    fn build(self) -> DailyRecord {
        DailyRecord {
            ticker: self.ticker,
            date: self.date,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
        }
    }
}

/// Convert provider rows into per-ticker series.
///
/// Values beyond the described columns and columns with unrecognized names
/// are ignored. Any value that does not match its field's type fails the
/// whole call.
pub fn normalize(columns: &[ColumnDescriptor], rows: &[RawRow]) -> Result<SeriesMap> {
    let fields: Vec<Option<Field>> = columns
        .iter()
        .map(|c| Field::from_column(&c.name))
        .collect();

    let ignored: Vec<&str> = columns
        .iter()
        .zip(&fields)
        .filter(|(_, f)| f.is_none())
        .map(|(c, _)| c.name.as_str())
        .collect();
    if !ignored.is_empty() {
        warn!(?ignored, "ignoring unrecognized columns");
    }

    let mut series = SeriesMap::new();
    let mut overflow_rows = 0usize;

    for (row_idx, row) in rows.iter().enumerate() {
        if row.len() > columns.len() {
            overflow_rows += 1;
        }

        let mut builder = RecordBuilder::default();
        for ((value, field), column) in row.iter().zip(&fields).zip(columns) {
            if let Some(field) = field {
                builder.set(*field, value, row_idx, &column.name)?;
            }
        }

        let record = builder.build();
        series.entry(record.ticker.clone()).or_default().push(record);
    }

    if overflow_rows > 0 {
        warn!(
            rows = overflow_rows,
            columns = columns.len(),
            "rows carried values beyond the described columns"
        );
    }
    info!(rows = rows.len(), tickers = series.len(), "normalized provider rows");

    Ok(series)
}
