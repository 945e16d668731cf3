use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use tower::ServiceExt;

use inquiry_desk::config::InquiryConfig;
use inquiry_desk::content::{content_router, SiteContent};
use inquiry_desk::inquiries::{
    inquiry_router, BudgetRange, InquiryForm, InquiryRecord, InquiryRepository, InquiryRequest,
    InquiryService, MemoryInquiryStore, NoopAnalytics, RepositoryError, ServiceType,
};
use inquiry_desk::preferences::{theme_router, MemoryPreferenceStore, ThemePreference, UiPreferences};

fn test_config() -> InquiryConfig {
    InquiryConfig {
        fake_success_delay_ms: 10,
        ..InquiryConfig::default()
    }
}

struct OfflineStore;

impl InquiryRepository for OfflineStore {
    fn insert(&self, _request: InquiryRequest) -> Result<InquiryRecord, RepositoryError> {
        Err(RepositoryError::Unavailable(
            "document store offline".to_string(),
        ))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<InquiryRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable(
            "document store offline".to_string(),
        ))
    }
}

fn app<R: InquiryRepository + 'static>(store: Arc<R>) -> Router {
    let service = Arc::new(InquiryService::new(
        store,
        Arc::new(NoopAnalytics),
        test_config(),
    ));
    let content = Arc::new(SiteContent::standard());
    let preferences = Arc::new(UiPreferences::init(Arc::new(
        MemoryPreferenceStore::default(),
    )));

    Router::new()
        .merge(inquiry_router(service))
        .merge(content_router(content))
        .merge(theme_router(preferences))
}

fn valid_form() -> InquiryForm {
    InquiryForm {
        name: "Priya Sharma".to_string(),
        email: "priya@acme.example".to_string(),
        service_type: ServiceType::Audit,
        budget_range: Some(BudgetRange::UnderFiveK),
        message: "We need a review of our React codebase before launch.".to_string(),
        website: String::new(),
        form_loaded_at: Utc::now() - Duration::seconds(8),
    }
}

fn json_request(method: Method, uri: &str, payload: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload))
        .expect("request builds")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn full_submission_flow_persists_and_confirms() {
    let store = Arc::new(MemoryInquiryStore::default());
    let app = app(store.clone());

    let payload = serde_json::to_string(&valid_form()).expect("form serializes");
    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/inquiries", payload))
        .await
        .expect("app responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["kind"], "success");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn rushed_submission_is_rejected_and_not_stored() {
    let store = Arc::new(MemoryInquiryStore::default());
    let app = app(store.clone());

    let form = InquiryForm {
        form_loaded_at: Utc::now(),
        ..valid_form()
    };
    let payload = serde_json::to_string(&form).expect("form serializes");
    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/inquiries", payload))
        .await
        .expect("app responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["kind"], "warning");
    assert!(store.is_empty());
}

#[tokio::test]
async fn honeypot_submission_reads_like_a_success_but_stores_nothing() {
    let store = Arc::new(MemoryInquiryStore::default());
    let app = app(store.clone());

    let form = InquiryForm {
        website: "https://win-prizes.example".to_string(),
        ..valid_form()
    };
    let payload = serde_json::to_string(&form).expect("form serializes");
    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/inquiries", payload))
        .await
        .expect("app responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["kind"], "success");
    assert!(store.is_empty());
}

#[tokio::test]
async fn store_failure_surfaces_the_fallback_contact() {
    let app = app(Arc::new(OfflineStore));

    let payload = serde_json::to_string(&valid_form()).expect("form serializes");
    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/inquiries", payload))
        .await
        .expect("app responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["kind"], "error");
    assert!(body["body"]
        .as_str()
        .expect("body field is a string")
        .contains(&test_config().fallback_email));
}

#[tokio::test]
async fn concurrent_resubmit_performs_no_second_insert() {
    let store = Arc::new(MemoryInquiryStore::default());
    let app = app(store.clone());

    // The honeypot submission parks on its artificial delay, so the joined
    // second request from the same sender lands while it is still in flight.
    let bot = InquiryForm {
        website: "https://win-prizes.example".to_string(),
        ..valid_form()
    };
    let bot_payload = serde_json::to_string(&bot).expect("form serializes");
    let retry_payload = serde_json::to_string(&valid_form()).expect("form serializes");

    let (first, second) = tokio::join!(
        app.clone()
            .oneshot(json_request(Method::POST, "/api/v1/inquiries", bot_payload)),
        app.clone()
            .oneshot(json_request(Method::POST, "/api/v1/inquiries", retry_payload)),
    );

    assert_eq!(first.expect("app responds").status(), StatusCode::OK);
    assert_eq!(
        second.expect("app responds").status(),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn content_endpoints_serve_the_seed_dataset() {
    let app = app(Arc::new(MemoryInquiryStore::default()));

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/content"))
        .await
        .expect("app responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["profile"]["name"], "Yogesh Bhavsar");
    assert_eq!(
        body["offerings"].as_array().expect("offerings array").len(),
        3
    );

    let response = app
        .oneshot(get_request("/api/v1/content/services"))
        .await
        .expect("app responds");
    assert_eq!(response.status(), StatusCode::OK);
    let services = body_json(response).await;
    let highlighted: Vec<_> = services
        .as_array()
        .expect("services array")
        .iter()
        .filter(|offering| offering["popular"] == true)
        .collect();
    assert_eq!(highlighted.len(), 1);
}

#[tokio::test]
async fn theme_preference_round_trips_over_http() {
    let app = app(Arc::new(MemoryInquiryStore::default()));

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/preferences/theme"))
        .await
        .expect("app responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["theme"], ThemePreference::Light.label());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/preferences/theme",
            r#"{"theme":"dark"}"#.to_string(),
        ))
        .await
        .expect("app responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["theme"], "dark");
}
