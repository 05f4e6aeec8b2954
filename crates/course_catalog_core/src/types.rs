//! Core value types shared by the store, filters and service.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ── Platform ──────────────────────────────────────────────────

/// One of the four source catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Udemy,
    CourseraClean,
    CourseraOriginal,
    Edx,
}

/// How a platform's rows are addressed by the single-record lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Exact integer match on the key column.
    Id,
    /// Case-insensitive substring match on the key column.
    Title,
}

impl Platform {
    /// Fixed concatenation order used by `list_all`.
    pub const ALL: [Platform; 4] = [
        Platform::Udemy,
        Platform::CourseraClean,
        Platform::CourseraOriginal,
        Platform::Edx,
    ];

    /// Label used to tag records in responses.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Udemy => "Udemy",
            Platform::CourseraClean => "Coursera (Clean)",
            Platform::CourseraOriginal => "Coursera (Original)",
            Platform::Edx => "edX",
        }
    }

    pub fn key_kind(self) -> KeyKind {
        match self {
            Platform::Udemy | Platform::CourseraOriginal => KeyKind::Id,
            Platform::CourseraClean | Platform::Edx => KeyKind::Title,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Cells and rows ────────────────────────────────────────────

/// A single table cell. `Missing` is never conflated with `0` or `""`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    /// May hold the not-a-number sentinel; see `normalize`.
    Float(f64),
    Missing,
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the cell. Not-a-number counts as absent.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }
}

/// One course row. Shares its column header with every other row of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<CellValue>,
}

impl Row {
    pub(crate) fn new(columns: Arc<[String]>, values: Vec<CellValue>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
    }

    /// `(column, value)` pairs in header order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

// ── Lookup key ────────────────────────────────────────────────

/// Key supplied to a single-record lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Id(i64),
    Title(String),
}

impl LookupKey {
    pub fn kind(&self) -> KeyKind {
        match self {
            LookupKey::Id(_) => KeyKind::Id,
            LookupKey::Title(_) => KeyKind::Title,
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "{id}"),
            LookupKey::Title(title) => write!(f, "{title:?}"),
        }
    }
}
