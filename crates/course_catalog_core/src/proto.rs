//! Response shapes returned by the catalog service and serialized as-is
//! by the HTTP layer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::launcher::LaunchOutcome;
use crate::normalize::Record;
use crate::types::Platform;

/// A normalized record tagged with its platform label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedCourse {
    pub platform: &'static str,
    pub course_details: Record,
}

impl TaggedCourse {
    pub fn new(platform: Platform, course_details: Record) -> Self {
        Self {
            platform: platform.label(),
            course_details,
        }
    }
}

/// Single-record lookup result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseLookupResponse {
    pub platform: &'static str,
    pub course_details: Record,
    pub web_page_title: &'static str,
    pub browser_launch: LaunchOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSearchResponse {
    pub total_courses: usize,
    pub courses: Vec<TaggedCourse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllCoursesResponse {
    pub all_courses: Vec<TaggedCourse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Row count per platform label
    pub datasets: BTreeMap<&'static str, usize>,
}
