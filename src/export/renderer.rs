//! Table renderers.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ExportError;

use super::Table;

/// Serializes a [`Table`] into a downloadable byte buffer.
pub trait TableRenderer {
    /// Renders the header row followed by every data row.
    fn render(&self, table: &dyn Table) -> Result<Vec<u8>, ExportError>;

    /// File extension of the rendered format, without the dot.
    fn extension(&self) -> &'static str;
}

/// Renders tables as comma-separated values.
#[derive(Debug, Clone, Copy)]
pub struct CsvRenderer {
    delimiter: u8,
}

impl CsvRenderer {
    /// Creates a comma-delimited renderer.
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Uses `delimiter` instead of a comma.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer for CsvRenderer {
    fn render(&self, table: &dyn Table) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(table.headers()).map_err(csv_error)?;
        let rows = table.rows();
        for row in &rows {
            writer.write_record(row).map_err(csv_error)?;
        }

        let bytes = writer.into_inner().map_err(|e| ExportError::Io {
            message: e.error().to_string(),
        })?;
        debug!(rows = rows.len(), bytes = bytes.len(), "Rendered CSV table");
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}

/// Renders tables as a JSON array with one object per row, keyed by header.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    /// Creates a compact renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer that indents its output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl TableRenderer for JsonRenderer {
    fn render(&self, table: &dyn Table) -> Result<Vec<u8>, ExportError> {
        let headers = table.headers();
        let objects: Vec<Value> = table
            .rows()
            .into_iter()
            .map(|row| {
                let object: Map<String, Value> = headers
                    .iter()
                    .cloned()
                    .zip(row.into_iter().map(Value::String))
                    .collect();
                Value::Object(object)
            })
            .collect();

        let result = if self.pretty {
            serde_json::to_vec_pretty(&objects)
        } else {
            serde_json::to_vec(&objects)
        };
        let bytes = result.map_err(|e| ExportError::Json {
            message: e.to_string(),
        })?;
        debug!(rows = objects.len(), bytes = bytes.len(), "Rendered JSON table");
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

fn csv_error(err: csv::Error) -> ExportError {
    ExportError::Csv {
        message: err.to_string(),
    }
}
