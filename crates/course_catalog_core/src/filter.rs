//! Predicate filters
//!
//! Each `Criterion` is a pure test over one row. `Criteria` is their
//! conjunction; an empty `Criteria` matches every row. The per-platform
//! search types translate HTTP query parameters into criteria.

use serde::Deserialize;

use crate::types::{CellValue, Row};

/// A single named filter condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Exact, case-sensitive text equality.
    Equals { column: String, value: String },
    /// Case-insensitive substring containment on text cells.
    Contains { column: String, needle: String },
    /// Inclusive lower bound on numeric cells.
    AtLeast { column: String, bound: f64 },
    /// Inclusive upper bound on numeric cells.
    AtMost { column: String, bound: f64 },
}

impl Criterion {
    pub fn equals(column: &str, value: impl Into<String>) -> Self {
        Self::Equals {
            column: column.to_string(),
            value: value.into(),
        }
    }

    pub fn contains(column: &str, needle: impl Into<String>) -> Self {
        Self::Contains {
            column: column.to_string(),
            needle: needle.into(),
        }
    }

    pub fn at_least(column: &str, bound: f64) -> Self {
        Self::AtLeast {
            column: column.to_string(),
            bound,
        }
    }

    pub fn at_most(column: &str, bound: f64) -> Self {
        Self::AtMost {
            column: column.to_string(),
            bound,
        }
    }

    /// Missing, non-text or non-numeric cells simply fail to match.
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Criterion::Equals { column, value } => {
                text_cell(row, column).is_some_and(|text| text == value)
            }
            Criterion::Contains { column, needle } => {
                text_cell(row, column).is_some_and(|text| contains_ignore_case(text, needle))
            }
            Criterion::AtLeast { column, bound } => {
                numeric_cell(row, column).is_some_and(|n| n >= *bound)
            }
            Criterion::AtMost { column, bound } => {
                numeric_cell(row, column).is_some_and(|n| n <= *bound)
            }
        }
    }
}

fn text_cell<'a>(row: &'a Row, column: &str) -> Option<&'a str> {
    row.get(column).and_then(CellValue::as_text)
}

fn numeric_cell(row: &Row, column: &str) -> Option<f64> {
    row.get(column).and_then(CellValue::as_f64)
}

/// Plain substring test; the needle is never treated as a pattern.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Conjunction of criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria(Vec<Criterion>);

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, criterion: Criterion) {
        self.0.push(criterion);
    }

    pub fn with(mut self, criterion: Criterion) -> Self {
        self.push(criterion);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.0.iter()
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.0.iter().all(|c| c.matches(row))
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Per-platform search parameters
// ============================================================================

/// Blank strings count as "not supplied".
fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Query params for `/courses/udemy/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UdemySearch {
    pub title: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub rating_min: Option<f64>,
}

impl UdemySearch {
    pub const TITLE: &'static str = "title";
    pub const PRICE: &'static str = "price";
    pub const RATING: &'static str = "rating";

    pub fn criteria(&self) -> Criteria {
        let mut criteria = Criteria::new();
        if let Some(title) = supplied(&self.title) {
            criteria.push(Criterion::contains(Self::TITLE, title));
        }
        if let Some(min) = self.price_min {
            criteria.push(Criterion::at_least(Self::PRICE, min));
        }
        if let Some(max) = self.price_max {
            criteria.push(Criterion::at_most(Self::PRICE, max));
        }
        if let Some(min) = self.rating_min {
            criteria.push(Criterion::at_least(Self::RATING, min));
        }
        criteria
    }
}

/// Query params for `/courses/coursera/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseraSearch {
    pub title: Option<String>,
    pub skill: Option<String>,
    pub difficulty: Option<String>,
    pub language: Option<String>,
}

impl CourseraSearch {
    pub const TITLE: &'static str = "Course Title";
    pub const SKILLS: &'static str = "Skills";
    pub const DIFFICULTY: &'static str = "Difficulty Level";
    pub const LANGUAGE: &'static str = "Language";

    pub fn criteria(&self) -> Criteria {
        let mut criteria = Criteria::new();
        if let Some(title) = supplied(&self.title) {
            criteria.push(Criterion::contains(Self::TITLE, title));
        }
        if let Some(skill) = supplied(&self.skill) {
            criteria.push(Criterion::contains(Self::SKILLS, skill));
        }
        if let Some(difficulty) = supplied(&self.difficulty) {
            criteria.push(Criterion::equals(Self::DIFFICULTY, difficulty));
        }
        if let Some(language) = supplied(&self.language) {
            criteria.push(Criterion::equals(Self::LANGUAGE, language));
        }
        criteria
    }
}

/// Query params for `/courses/edx/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdxSearch {
    pub title: Option<String>,
    pub university: Option<String>,
    pub subject: Option<String>,
}

impl EdxSearch {
    pub const TITLE: &'static str = "course_title";
    pub const UNIVERSITY: &'static str = "university";
    pub const SUBJECT: &'static str = "subject";

    pub fn criteria(&self) -> Criteria {
        [
            (Self::TITLE, &self.title),
            (Self::UNIVERSITY, &self.university),
            (Self::SUBJECT, &self.subject),
        ]
        .into_iter()
        .filter_map(|(column, value)| supplied(value).map(|v| Criterion::contains(column, v)))
        .collect()
    }
}
