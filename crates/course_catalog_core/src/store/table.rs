//! CSV-backed immutable table
//!
//! A `Table` is built once from a CSV source and never changes afterwards.
//! Columns are typed over the whole table: all-integer columns become
//! `Integer`, all-numeric columns become `Float`, anything else stays `Text`.
//! Empty cells and the usual dataframe NA markers (`NA`, `N/A`, `null`, ...)
//! are `Missing` and take no part in typing. `NaN` in a numeric column is
//! kept as the not-a-number sentinel. Fields must be valid UTF-8.

use std::io::Read;
use std::sync::Arc;

use anyhow::{bail, Context};

use crate::config::DatasetSource;
use crate::error::CatalogError;
use crate::types::{CellValue, Platform, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnType {
    Integer,
    Float,
    Text,
}

/// One platform's rows, in file order.
#[derive(Debug, Clone)]
pub struct Table {
    platform: Platform,
    columns: Arc<[String]>,
    rows: Vec<Row>,
    key_column: String,
    url_column: String,
}

impl Table {
    /// Read a dataset from disk. Any failure is `DatasetUnavailable`.
    pub fn load(platform: Platform, source: &DatasetSource) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(&source.path)
            .map_err(|e| CatalogError::dataset_unavailable(platform, &source.path, e))?;

        Self::from_reader(
            platform,
            file,
            &source.key_column,
            &source.url_column,
        )
        .map_err(|e| CatalogError::dataset_unavailable(platform, &source.path, format!("{e:#}")))
    }

    /// Parse CSV from any reader. The header row is required and must
    /// contain both the key and the url column.
    pub fn from_reader<R: Read>(
        platform: Platform,
        reader: R,
        key_column: &str,
        url_column: &str,
    ) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(str::to_string)
            .collect();

        for required in [key_column, url_column] {
            if !headers.iter().any(|h| h == required) {
                bail!("missing required column {required:?}");
            }
        }

        let mut raw: Vec<Vec<String>> = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.with_context(|| format!("Failed to read row {}", idx + 1))?;
            raw.push(record.iter().map(str::to_string).collect());
        }

        let types: Vec<ColumnType> = (0..headers.len())
            .map(|col| infer_column_type(raw.iter().map(|r| r[col].as_str())))
            .collect();

        let columns: Arc<[String]> = headers.into();
        let rows = raw
            .into_iter()
            .map(|fields| {
                let values = fields
                    .into_iter()
                    .zip(types.iter())
                    .map(|(field, ty)| parse_cell(field, *ty))
                    .collect();
                Row::new(Arc::clone(&columns), values)
            })
            .collect();

        Ok(Self {
            platform,
            columns,
            rows,
            key_column: key_column.to_string(),
            url_column: url_column.to_string(),
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    pub fn url_column(&self) -> &str {
        &self.url_column
    }

    /// Rows in table order. Restartable and side-effect-free.
    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Markers read as missing, after pandas' default `na_values`.
const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN", "<NA>", "N/A",
    "NA", "NULL", "None", "n/a", "null",
];

/// Not-a-number spellings; numeric columns keep these as `f64::NAN`.
const NAN_MARKERS: &[&str] = &["NaN", "nan", "-NaN", "-nan"];

fn is_nan_marker(cell: &str) -> bool {
    NAN_MARKERS.contains(&cell)
}

fn is_absent(cell: &str) -> bool {
    cell.is_empty() || NA_MARKERS.contains(&cell) || is_nan_marker(cell)
}

fn infer_column_type<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut ty = ColumnType::Integer;
    let mut saw_nan = false;
    for cell in cells.map(str::trim) {
        if is_absent(cell) {
            saw_nan |= is_nan_marker(cell);
            continue;
        }
        if ty == ColumnType::Integer && cell.parse::<i64>().is_err() {
            ty = ColumnType::Float;
        }
        if ty == ColumnType::Float && cell.parse::<f64>().is_err() {
            return ColumnType::Text;
        }
    }
    // an integer column cannot hold NaN
    if ty == ColumnType::Integer && saw_nan {
        ColumnType::Float
    } else {
        ty
    }
}

fn parse_cell(field: String, ty: ColumnType) -> CellValue {
    let trimmed = field.trim();
    if is_absent(trimmed) {
        return if ty == ColumnType::Float && is_nan_marker(trimmed) {
            CellValue::Float(f64::NAN)
        } else {
            CellValue::Missing
        };
    }
    // The column type guarantees these parses succeed; fall back to text anyway.
    match ty {
        ColumnType::Integer => trimmed
            .parse()
            .map(CellValue::Integer)
            .unwrap_or(CellValue::Text(field)),
        ColumnType::Float => trimmed
            .parse()
            .map(CellValue::Float)
            .unwrap_or(CellValue::Text(field)),
        ColumnType::Text => CellValue::Text(field),
    }
}
