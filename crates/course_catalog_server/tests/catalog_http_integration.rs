//! HTTP-level integration tests for the course catalog server.
//!
//! These tests drive the real router against small in-memory datasets and a
//! recording URL launcher, so no browser is ever opened.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use course_catalog_core::{
    BrowserConfig, CatalogService, DatasetSource, DatasetStore, LaunchError, Platform, Table,
    UrlLauncher,
};
use course_catalog_server::router::build_router;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

// ── Fixtures ───────────────────────────────────────────────────

const UDEMY: &str = "\
course_id,title,url,price,rating
1070968,Machine Learning Basics,https://udemy.com/ml,20,4.5
1113822,Intro to MACHINE Vision,https://udemy.com/cv,120,NA
1006314,Baking Bread,https://udemy.com/bread,0,3.9
";

const COURSERA_CLEAN: &str = "\
Course Title,Course Url,Skills,Difficulty Level,Language
Python for Everybody,https://coursera.org/py,Python Programming,Beginner,English
Deep Learning,https://coursera.org/dl,Neural Networks,Intermediate,English
Python Data Structures,https://coursera.org/pds,Python Programming,Beginner,Spanish
Cloud Basics,https://coursera.org/cloud,AWS,Beginner,English
Advanced Python,https://coursera.org/adv,Python Programming,Intermediate,English
";

const COURSERA_ORIGINAL: &str = "\
course_id,course_title,url,course_rating
134,Systems Security Practitioner,https://coursera.org/isc,4.7
743,A Crash Course in Causality,https://coursera.org/causality,NaN
";

const EDX: &str = "\
course_title,url,university,subject
How to Learn Online,https://edx.org/learn,edX,Education & Teacher Training
Programming for Everybody,https://edx.org/py,The University of Michigan,Computer Science
";

#[derive(Default)]
struct RecordingLauncher {
    fail: bool,
    opened: Mutex<Vec<String>>,
}

impl UrlLauncher for RecordingLauncher {
    fn launch(&self, url: &str) -> Result<(), LaunchError> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(LaunchError {
                url: url.to_string(),
                reason: "no display available".into(),
            });
        }
        Ok(())
    }
}

fn table(platform: Platform, csv: &str) -> Table {
    let source = DatasetSource::default_for(platform);
    Table::from_reader(
        platform,
        csv.as_bytes(),
        &source.key_column,
        &source.url_column,
    )
    .unwrap()
}

fn build_test_app(launcher: Arc<RecordingLauncher>, fail_on_error: bool) -> axum::Router {
    let store = DatasetStore::from_tables(
        table(Platform::Udemy, UDEMY),
        table(Platform::CourseraClean, COURSERA_CLEAN),
        table(Platform::CourseraOriginal, COURSERA_ORIGINAL),
        table(Platform::Edx, EDX),
    )
    .unwrap();
    let service = CatalogService::new(
        Arc::new(store),
        launcher,
        BrowserConfig {
            enabled: true,
            fail_on_error,
        },
    );
    build_router(Arc::new(service))
}

fn app() -> axum::Router {
    build_test_app(Arc::new(RecordingLauncher::default()), false)
}

// ── Helpers ────────────────────────────────────────────────────

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    // Every response we produce is JSON; only axum's fallback 404 is empty.
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// ── Lookups ────────────────────────────────────────────────────

#[tokio::test]
async fn test_udemy_lookup_by_id() {
    let launcher = Arc::new(RecordingLauncher::default());
    let (status, body) = get(
        build_test_app(launcher.clone(), false),
        "/courses/udemy/1070968",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["platform"], "Udemy");
    assert_eq!(body["web_page_title"], "Opened in Browser");
    assert_eq!(body["browser_launch"], "opened");
    assert_eq!(
        body["course_details"],
        json!({
            "course_id": 1070968,
            "title": "Machine Learning Basics",
            "url": "https://udemy.com/ml",
            "price": 20,
            "rating": 4.5
        })
    );
    assert_eq!(
        *launcher.opened.lock().unwrap(),
        vec!["https://udemy.com/ml".to_string()]
    );
}

#[tokio::test]
async fn test_udemy_unknown_id_is_404() {
    let (status, body) = get(app(), "/courses/udemy/1234567").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Course ID not found" }));
}

#[tokio::test]
async fn test_udemy_non_integer_id_is_rejected() {
    let (status, body) = get(app(), "/courses/udemy/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Invalid path parameter"), "{detail}");
}

#[tokio::test]
async fn test_coursea_data_non_integer_id_is_json_error() {
    let (status, body) = get(app(), "/courses/coursea_data/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_coursera_clean_lookup_by_title_substring() {
    let (status, body) = get(app(), "/courses/coursera_clean/python").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["platform"], "Coursera (Clean)");
    assert_eq!(body["course_details"]["Course Title"], "Python for Everybody");
}

#[tokio::test]
async fn test_coursea_data_lookup_normalizes_nan() {
    let (status, body) = get(app(), "/courses/coursea_data/743").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["platform"], "Coursera (Original)");
    assert_eq!(body["course_details"]["course_rating"], Value::Null);
}

#[tokio::test]
async fn test_edx_lookup_percent_encoded_title() {
    let (status, body) = get(app(), "/courses/edx/learn%20ONLINE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["platform"], "edX");
    assert_eq!(body["course_details"]["course_title"], "How to Learn Online");
}

#[tokio::test]
async fn test_edx_unknown_title_is_404() {
    let (status, body) = get(app(), "/courses/edx/underwater%20basket").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Course title not found");
}

#[tokio::test]
async fn test_failed_launch_is_advisory() {
    let launcher = Arc::new(RecordingLauncher {
        fail: true,
        ..Default::default()
    });
    let (status, body) = get(build_test_app(launcher, false), "/courses/udemy/1113822").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["browser_launch"], "failed");
    assert_eq!(body["course_details"]["rating"], Value::Null);
}

#[tokio::test]
async fn test_failed_launch_is_500_when_coupled() {
    let launcher = Arc::new(RecordingLauncher {
        fail: true,
        ..Default::default()
    });
    let (status, body) = get(build_test_app(launcher, true), "/courses/udemy/1113822").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Failed to open course URL" }));
}

// ── Searches ───────────────────────────────────────────────────

#[tokio::test]
async fn test_search_route_wins_over_id_capture() {
    let (status, body) = get(app(), "/courses/udemy/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_courses"], 3);
}

#[tokio::test]
async fn test_udemy_search_filters() {
    let (status, body) = get(app(), "/courses/udemy/search?title=MACHINE&price_max=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_courses"], 1);
    assert_eq!(body["courses"][0]["platform"], "Udemy");
    assert_eq!(
        body["courses"][0]["course_details"]["title"],
        "Machine Learning Basics"
    );
}

#[tokio::test]
async fn test_udemy_rating_filter_skips_missing_ratings() {
    let (status, body) = get(app(), "/courses/udemy/search?rating_min=0").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body["courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["course_details"]["course_id"].clone())
        .collect();
    assert_eq!(ids, vec![json!(1070968), json!(1006314)]);
}

#[tokio::test]
async fn test_coursera_search_by_difficulty() {
    let (status, body) = get(app(), "/courses/coursera/search?difficulty=Beginner").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_courses"], 3);
    for course in body["courses"].as_array().unwrap() {
        assert_eq!(course["platform"], "Coursera (Clean)");
        assert_eq!(course["course_details"]["Difficulty Level"], "Beginner");
    }
}

#[tokio::test]
async fn test_coursera_search_combined() {
    let (status, body) = get(
        app(),
        "/courses/coursera/search?skill=python&difficulty=Intermediate&language=English",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_courses"], 1);
    assert_eq!(
        body["courses"][0]["course_details"]["Course Title"],
        "Advanced Python"
    );
}

#[tokio::test]
async fn test_non_numeric_price_is_json_error() {
    let (status, body) = get(app(), "/courses/udemy/search?price_min=cheap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Invalid query parameters"), "{detail}");
}

#[tokio::test]
async fn test_edx_search_no_match_is_404() {
    let (status, body) = get(app(), "/courses/edx/search?university=Sorbonne").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No courses found matching the criteria");
}

#[tokio::test]
async fn test_edx_search_by_subject() {
    let (status, body) = get(app(), "/courses/edx/search?subject=computer%20science").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_courses"], 1);
    assert_eq!(body["courses"][0]["platform"], "edX");
}

#[tokio::test]
async fn test_search_never_launches_browser() {
    let launcher = Arc::new(RecordingLauncher::default());
    let (status, _) = get(
        build_test_app(launcher.clone(), true),
        "/courses/coursera/search",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(launcher.opened.lock().unwrap().is_empty());
}

// ── List / health ──────────────────────────────────────────────

#[tokio::test]
async fn test_all_courses_in_platform_order() {
    let (status, body) = get(app(), "/courses/all").await;
    assert_eq!(status, StatusCode::OK);

    let all = body["all_courses"].as_array().unwrap();
    assert_eq!(all.len(), 3 + 5 + 2 + 2);

    let mut tags: Vec<&str> = all
        .iter()
        .map(|c| c["platform"].as_str().unwrap())
        .collect();
    tags.dedup();
    assert_eq!(
        tags,
        vec!["Udemy", "Coursera (Clean)", "Coursera (Original)", "edX"]
    );
    assert_eq!(all[9]["course_details"]["course_rating"], Value::Null);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["datasets"]["Udemy"], 3);
    assert_eq!(body["datasets"]["edX"], 2);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, body) = get(app(), "/courses/skillshare/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}
