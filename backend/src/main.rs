use dotenvy::dotenv;
use axum::{
    http::{header, Method},
    response::Redirect,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config {
    pub mod app_config;
}
mod handlers {
    pub mod error;
    pub mod submission_dtos;
    pub mod submission_handlers;
}
mod models {
    pub mod submission_models;
}
mod repositories {
    pub mod submission_repository;
}

use config::app_config::{AppConfig, CorsOrigins};
use handlers::submission_handlers;
use models::submission_models::{ContactMessage, Registration, StatusCheck};
use repositories::submission_repository::SubmissionRepository;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    status_checks: SubmissionRepository<StatusCheck>,
    contact_messages: SubmissionRepository<ContactMessage>,
    registrations: SubmissionRepository<Registration>,
}

impl AppState {
    pub fn new(max_records: usize) -> Self {
        Self {
            status_checks: SubmissionRepository::new("status_checks", max_records),
            contact_messages: SubmissionRepository::new("contact_messages", max_records),
            registrations: SubmissionRepository::new("registrations", max_records),
        }
    }
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(list.clone()),
    };
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_router(state: Arc<AppState>, config: &AppConfig) -> Router {
    // unknown paths get index.html so the single-page frontend can render
    let frontend = ServeDir::new(&config.static_dir)
        .fallback(ServeFile::new(config.static_dir.join("index.html")));

    Router::new()
        .route("/api", get(submission_handlers::root))
        .route("/api/", get(submission_handlers::root))
        .route("/api/health", get(health_check))
        .route(
            "/api/status",
            get(submission_handlers::get_status_checks).post(submission_handlers::create_status_check),
        )
        .route(
            "/api/contact",
            get(submission_handlers::get_contact_messages).post(submission_handlers::create_contact_message),
        )
        .route(
            "/api/registrations",
            get(submission_handlers::get_registrations).post(submission_handlers::create_registration),
        )
        // old static entry point
        .route("/rjl-index.html", get(|| async { Redirect::permanent("/") }))
        .fallback_service(frontend)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let state = Arc::new(AppState::new(config.max_records));
    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "Listening on {} (static files from {})",
        config.bind_addr,
        config.static_dir.display()
    );
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn router(max_records: usize) -> Router {
        let config = AppConfig {
            bind_addr: ([127, 0, 0, 1], 0).into(),
            cors_origins: CorsOrigins::Any,
            static_dir: PathBuf::from("target/no-such-dist"),
            max_records,
        };
        build_router(Arc::new(AppState::new(max_records)), &config)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    fn contact() -> Value {
        json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})
    }

    fn registration() -> Value {
        json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "+44 20 7946 0000",
            "classType": "pastry",
            "preferredDate": "2026-11-02",
            "message": "Vegetarian please",
        })
    }

    #[tokio::test]
    async fn root_says_hello() {
        let app = router(10);
        for uri in ["/api", "/api/"] {
            let (status, body) = send(&app, get_request(uri)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"message": "Hello World"}));
        }
    }

    #[tokio::test]
    async fn health_check_is_ok() {
        let (status, body) = send(&router(10), get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".into()));
    }

    #[tokio::test]
    async fn stores_and_lists_contact_messages() {
        let app = router(10);
        let (status, created) = send(&app, post_json("/api/contact", &contact())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["name"], "Ada");
        assert_eq!(created["email"], "ada@example.com");
        assert_eq!(created["message"], "Hello");
        assert_eq!(created["id"].as_str().map(str::len), Some(36));
        assert!(created["timestamp"].is_string());

        let (status, listed) = send(&app, get_request("/api/contact")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([created]));
    }

    #[tokio::test]
    async fn stores_registration_with_camel_case_keys() {
        let app = router(10);
        let (status, created) = send(&app, post_json("/api/registrations", &registration())).await;
        assert_eq!(status, StatusCode::OK);
        for (key, value) in registration().as_object().unwrap() {
            assert_eq!(&created[key], value, "field {}", key);
        }

        let (_, listed) = send(&app, get_request("/api/registrations")).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn registration_message_is_optional() {
        let mut body = registration();
        body.as_object_mut().unwrap().remove("message");
        let (status, created) = send(&router(10), post_json("/api/registrations", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["message"], "");
    }

    #[tokio::test]
    async fn missing_field_is_unprocessable() {
        let (status, body) = send(
            &router(10),
            post_json("/api/contact", &json!({"name": "Ada", "email": "ada@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("message"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let (status, body) = send(&router(10), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn json_content_type_is_required() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .body(Body::from(contact().to_string()))
            .unwrap();
        let (status, _) = send(&router(10), request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn full_collection_is_reported() {
        let app = router(1);
        let (status, _) = send(&app, post_json("/api/contact", &contact())).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, post_json("/api/contact", &contact())).await;
        assert_eq!(status, StatusCode::INSUFFICIENT_STORAGE);
        assert_eq!(body["error"], "contact_messages is full (1 records)");

        // other collections have their own capacity
        let (status, _) = send(&app, post_json("/api/registrations", &registration())).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn stores_and_lists_status_checks() {
        let app = router(10);
        let (status, created) = send(&app, post_json("/api/status", &json!({"client_name": "probe"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["client_name"], "probe");

        let (_, listed) = send(&app, get_request("/api/status")).await;
        assert_eq!(listed, json!([created]));
    }

    #[tokio::test]
    async fn old_static_entry_point_redirects_home() {
        let response = router(10)
            .oneshot(get_request("/rjl-index.html"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
}
