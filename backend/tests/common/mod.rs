//! Common test utilities for integration tests
//!
//! Builds the full router against a temporary profile file and a mock
//! forecast server, and wraps the request plumbing.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use agriguide_backend::config::{Config, ServerConfig, StorageConfig, WeatherConfig};
use agriguide_backend::external::WeatherClient;
use agriguide_backend::services::{MarketService, SchemeService, WeatherService};
use agriguide_backend::store::ProfileStore;
use agriguide_backend::{create_app, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::MockServer;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub weather_mock: MockServer,
    pub profile_path: PathBuf,
    _data_dir: TempDir,
}

impl TestApp {
    /// Create a test application with timers too slow to fire mid-test
    pub async fn new() -> Self {
        Self::with_weather_timings(Duration::from_secs(3600), Duration::from_secs(3600)).await
    }

    /// Create a test application with explicit refresh and error hold timings
    pub async fn with_weather_timings(refresh_interval: Duration, error_hold: Duration) -> Self {
        let weather_mock = MockServer::start().await;
        let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let profile_path = data_dir.path().join("profile.json");

        let profiles = ProfileStore::open(&profile_path);
        let client = WeatherClient::with_base_url(
            "test-key".to_string(),
            "in".to_string(),
            weather_mock.uri(),
        );
        let weather = WeatherService::with_client(client, refresh_interval, error_hold, &profiles);
        let market = MarketService::new();
        let schemes = SchemeService::new(profiles.clone());

        let state = AppState {
            config: Arc::new(test_config(&profile_path)),
            profiles,
            schemes,
            weather,
            market,
        };
        let app = create_app(state);

        Self {
            app,
            weather_mock,
            profile_path,
            _data_dir: data_dir,
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a PUT request with JSON body
    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("PUT")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("DELETE")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Poll the widget view until the predicate holds
    ///
    /// The weather driver works through background tasks, so state changes
    /// land a few polls after the request that caused them.
    pub async fn wait_for_widget<F>(&self, what: &str, predicate: F) -> Value
    where
        F: Fn(&Value) -> bool,
    {
        let mut view = Value::Null;
        for _ in 0..200 {
            let (status, body) = self.get("/api/v1/weather").await;
            assert_eq!(status, StatusCode::OK);
            view = serde_json::from_str(&body).unwrap();
            if predicate(&view) {
                return view;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("Widget never reached {}; last view: {}", what, view);
    }
}

fn test_config(profile_path: &Path) -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        weather: WeatherConfig {
            api_endpoint: "http://127.0.0.1:0".to_string(),
            api_key: "test-key".to_string(),
            country_code: "in".to_string(),
            refresh_interval_secs: 3600,
            error_hold_secs: 3600,
        },
        storage: StorageConfig {
            profile_path: profile_path.display().to_string(),
        },
    }
}

/// A complete, valid profile submission
pub fn sample_draft() -> Value {
    json!({
        "name": "Ravi Kumar",
        "age": 40,
        "state": "Tamil Nadu",
        "district": "Thanjavur",
        "city": "Thanjavur",
        "land_size_acres": "0.3",
        "crops": ["Rice"],
        "annual_income": "150000"
    })
}

/// OpenWeatherMap forecast payload: one entry every three hours, the
/// first on a Tuesday evening so the two outlook days are fixed
pub fn forecast_fixture(city_name: &str) -> Value {
    let mut list = Vec::new();
    for i in 0i64..17 {
        let dt = 1_700_000_000 + i * 10_800;
        let item = match i {
            0 => json!({
                "dt": dt,
                "main": { "temp": 31.4, "humidity": 60 },
                "weather": [ { "main": "Clear" } ]
            }),
            8 => json!({
                "dt": dt,
                "main": { "temp": 29.6, "humidity": 65 },
                "weather": [ { "main": "Rain" } ],
                "rain": { "3h": 1.2 }
            }),
            16 => json!({
                "dt": dt,
                "main": { "temp": 27.2, "humidity": 80 },
                "weather": [ { "main": "Clouds" } ]
            }),
            _ => json!({
                "dt": dt,
                "main": { "temp": 25.0, "humidity": 70 },
                "weather": [ { "main": "Clouds" } ]
            }),
        };
        list.push(item);
    }

    json!({
        "city": { "name": city_name },
        "list": list
    })
}
