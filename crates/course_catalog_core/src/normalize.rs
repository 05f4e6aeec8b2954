//! Record normalizer: `Row` → JSON object, with non-finite numbers as `null`.

use serde_json::{Map, Number, Value};

use crate::types::{CellValue, Row};

pub type Record = Map<String, Value>;

/// Convert a row into a JSON-safe record, keeping header order.
pub fn normalize(row: &Row) -> Record {
    row.cells()
        .map(|(column, cell)| (column.to_string(), cell_to_json(cell)))
        .collect()
}

pub fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Integer(i) => Value::Number((*i).into()),
        // from_f64 rejects NaN and infinities
        CellValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        CellValue::Missing => Value::Null,
    }
}
