//! FILENAME: persistence/src/service.rs
//! PURPOSE: The seam to the third-party spreadsheet service.
//! CONTEXT: The actual HTTP client (auth, retries, quotas) lives outside
//! this workspace; the core only needs these two calls. Fetch responses are
//! already-parsed 2D value arrays which get wrapped into Cells, and writes
//! are explicit range+matrix batches produced by the write-back planner.

use crate::error::ServiceError;
use engine::CellValue;
use serde_json::Value;

/// One worksheet of a fetch response: its name plus the raw value grid.
#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetValues {
    pub name: String,
    pub values: Vec<Vec<CellValue>>,
}

/// The two operations the core needs from the external service.
pub trait SheetService {
    /// Fetches every worksheet of `spreadsheet_id` with its values.
    fn get_spreadsheet_with_values(
        &self,
        spreadsheet_id: &str,
    ) -> Result<Vec<WorksheetValues>, ServiceError>;

    /// Writes the given value matrices to the given ranges, one entry per
    /// affected worksheet. Ranges use the address grammar of the `parser`
    /// crate, which matches the service's own addressing convention.
    fn write_ranges(
        &self,
        spreadsheet_id: &str,
        ranges: &[String],
        values: &[Vec<Vec<CellValue>>],
    ) -> Result<(), ServiceError>;
}

/// Converts one wire value (JSON) into a typed cell value.
/// The service delivers strings, numbers, booleans, and nulls for
/// never-written cells.
pub fn cell_value_from_json(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Boolean(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => CellValue::Number(f),
            None => CellValue::Text(n.to_string()),
        },
        Value::String(s) => CellValue::Text(s.clone()),
        // Arrays/objects do not occur in value grids; keep the raw text
        // rather than dropping data.
        other => CellValue::Text(other.to_string()),
    }
}

/// Converts a typed cell value back to its wire form.
pub fn cell_value_to_json(value: &CellValue) -> Value {
    match value {
        CellValue::Empty => Value::String(String::new()),
        CellValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(n.to_string())),
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Boolean(b) => Value::Bool(*b),
    }
}

/// Converts a raw JSON value grid into typed rows.
pub fn values_from_json_grid(grid: &[Vec<Value>]) -> Vec<Vec<CellValue>> {
    grid.iter()
        .map(|row| row.iter().map(cell_value_from_json).collect())
        .collect()
}
