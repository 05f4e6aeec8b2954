//! CatalogService: lookup, search and list over the loaded datasets.
//!
//! Every operation is a single pass over immutable tables. The service owns
//! no mutable state, so one instance is shared by all request handlers.

use std::sync::Arc;

use crate::config::BrowserConfig;
use crate::error::CatalogError;
use crate::filter::{contains_ignore_case, Criteria, CourseraSearch, EdxSearch, UdemySearch};
use crate::launcher::{DisabledLauncher, LaunchOutcome, SystemBrowser, UrlLauncher};
use crate::normalize::normalize;
use crate::proto::{
    AllCoursesResponse, CourseLookupResponse, CourseSearchResponse, HealthResponse, TaggedCourse,
};
use crate::store::{DatasetStore, Table};
use crate::types::{CellValue, KeyKind, LookupKey, Platform, Row};

pub type Result<T> = std::result::Result<T, CatalogError>;

pub struct CatalogService {
    store: Arc<DatasetStore>,
    launcher: Arc<dyn UrlLauncher>,
    browser: BrowserConfig,
}

impl CatalogService {
    pub fn new(
        store: Arc<DatasetStore>,
        launcher: Arc<dyn UrlLauncher>,
        browser: BrowserConfig,
    ) -> Self {
        Self {
            store,
            launcher,
            browser,
        }
    }

    /// System browser when enabled in config, otherwise no launching at all.
    pub fn from_config(store: Arc<DatasetStore>, browser: BrowserConfig) -> Self {
        let launcher: Arc<dyn UrlLauncher> = if browser.enabled {
            Arc::new(SystemBrowser)
        } else {
            Arc::new(DisabledLauncher)
        };
        Self::new(store, launcher, browser)
    }

    // ── Lookup ─────────────────────────────────────────────────

    /// First row in table order whose key matches. Pure read, no side effect.
    pub fn find(&self, platform: Platform, key: &LookupKey) -> Result<&Row> {
        if key.kind() != platform.key_kind() {
            return Err(CatalogError::InvalidInput(format!(
                "{platform} courses are not looked up by {}",
                match key.kind() {
                    KeyKind::Id => "id",
                    KeyKind::Title => "title",
                }
            )));
        }

        let table = self.store.table(platform);
        table
            .rows()
            .find(|row| key_matches(table, row, key))
            .ok_or_else(|| {
                CatalogError::NotFound(
                    match key {
                        LookupKey::Id(_) => "Course ID not found",
                        LookupKey::Title(_) => "Course title not found",
                    }
                    .to_string(),
                )
            })
    }

    /// Find a course and try to open its page.
    pub fn lookup(&self, platform: Platform, key: LookupKey) -> Result<CourseLookupResponse> {
        let row = self.find(platform, &key)?;
        tracing::debug!(%platform, %key, "Course found");

        let outcome = self.open_course_page(self.store.table(platform), row)?;

        Ok(CourseLookupResponse {
            platform: platform.label(),
            course_details: normalize(row),
            web_page_title: outcome.web_page_title(),
            browser_launch: outcome,
        })
    }

    pub fn get_udemy_course(&self, course_id: i64) -> Result<CourseLookupResponse> {
        self.lookup(Platform::Udemy, LookupKey::Id(course_id))
    }

    pub fn get_coursera_clean_course(&self, title: &str) -> Result<CourseLookupResponse> {
        self.lookup(Platform::CourseraClean, LookupKey::Title(title.to_string()))
    }

    pub fn get_coursera_original_course(&self, course_id: i64) -> Result<CourseLookupResponse> {
        self.lookup(Platform::CourseraOriginal, LookupKey::Id(course_id))
    }

    pub fn get_edx_course(&self, title: &str) -> Result<CourseLookupResponse> {
        self.lookup(Platform::Edx, LookupKey::Title(title.to_string()))
    }

    fn open_course_page(&self, table: &Table, row: &Row) -> Result<LaunchOutcome> {
        if !self.launcher.is_enabled() {
            return Ok(LaunchOutcome::Disabled);
        }

        let url = row
            .get(table.url_column())
            .and_then(CellValue::as_text)
            .map(str::trim)
            .filter(|u| !u.is_empty());

        let outcome = match url {
            None => {
                tracing::warn!(platform = %table.platform(), "Course has no URL to open");
                LaunchOutcome::NoUrl
            }
            Some(url) => match self.launcher.launch(url) {
                Ok(()) => LaunchOutcome::Opened,
                Err(e) => {
                    tracing::warn!(error = %e, "Error opening course URL");
                    LaunchOutcome::Failed
                }
            },
        };

        if self.browser.fail_on_error
            && matches!(outcome, LaunchOutcome::Failed | LaunchOutcome::NoUrl)
        {
            return Err(CatalogError::SideEffectFailed(format!(
                "{} for {} course",
                outcome.web_page_title(),
                table.platform()
            )));
        }
        Ok(outcome)
    }

    // ── Search ─────────────────────────────────────────────────

    /// All rows satisfying every criterion, in table order.
    pub fn search(&self, platform: Platform, criteria: &Criteria) -> Result<CourseSearchResponse> {
        let courses: Vec<TaggedCourse> = self
            .store
            .table(platform)
            .rows()
            .filter(|row| criteria.matches(row))
            .map(|row| TaggedCourse::new(platform, normalize(row)))
            .collect();

        tracing::debug!(%platform, criteria = criteria.len(), matches = courses.len(), "Search");

        if courses.is_empty() {
            return Err(CatalogError::NotFound(
                "No courses found matching the criteria".to_string(),
            ));
        }

        Ok(CourseSearchResponse {
            total_courses: courses.len(),
            courses,
        })
    }

    pub fn search_udemy(&self, query: &UdemySearch) -> Result<CourseSearchResponse> {
        self.search(Platform::Udemy, &query.criteria())
    }

    pub fn search_coursera(&self, query: &CourseraSearch) -> Result<CourseSearchResponse> {
        self.search(Platform::CourseraClean, &query.criteria())
    }

    pub fn search_edx(&self, query: &EdxSearch) -> Result<CourseSearchResponse> {
        self.search(Platform::Edx, &query.criteria())
    }

    // ── List ───────────────────────────────────────────────────

    pub fn list_all(&self) -> AllCoursesResponse {
        let all_courses = Platform::ALL
            .iter()
            .flat_map(|&platform| {
                self.store
                    .table(platform)
                    .rows()
                    .map(move |row| TaggedCourse::new(platform, normalize(row)))
            })
            .collect();
        AllCoursesResponse { all_courses }
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok",
            datasets: self
                .store
                .sizes()
                .into_iter()
                .map(|(platform, rows)| (platform.label(), rows))
                .collect(),
        }
    }
}

fn key_matches(table: &Table, row: &Row, key: &LookupKey) -> bool {
    let Some(cell) = row.get(table.key_column()) else {
        return false;
    };
    match (key, cell) {
        (LookupKey::Id(id), CellValue::Integer(value)) => value == id,
        (LookupKey::Id(id), CellValue::Float(value)) => *value == *id as f64,
        (LookupKey::Title(title), CellValue::Text(value)) => contains_ignore_case(value, title),
        _ => false,
    }
}
