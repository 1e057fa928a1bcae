// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;

use brandprobe::config::Config;

pub const TEST_API_KEY: &str = "fc-test-1234567890abcdef";

/// Handle to a mock of the scrape endpoint, plus a capture slot holding the
/// request the probe actually sent.
#[derive(Clone)]
pub struct MockApi {
    pub base_url: String,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
}

#[derive(Clone, Debug)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
}

/// Serve a single-route mock of `POST /v0/scrape` on an ephemeral port,
/// returning a canned status and body.
pub async fn spawn_mock_api(status: StatusCode, body: &str) -> MockApi {
    let captured = Arc::new(Mutex::new(None));
    let state = MockState {
        status,
        body: body.to_string(),
        captured: captured.clone(),
    };

    let app = Router::new()
        .route("/v0/scrape", post(handle_scrape))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API listener");
    let addr: SocketAddr = listener.local_addr().expect("listener has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock API server failed");
    });

    MockApi {
        base_url: format!("http://{addr}"),
        captured,
    }
}

async fn handle_scrape(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let authorization = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let body = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    *state.captured.lock().unwrap() = Some(CapturedRequest {
        authorization,
        body,
    });
    (state.status, state.body.clone())
}

impl MockApi {
    pub fn captured(&self) -> Option<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

/// Probe config pointed at the mock, with the snapshot isolated in `dir`.
pub fn test_config(mock: &MockApi, dir: &tempfile::TempDir) -> Config {
    Config {
        api_key: TEST_API_KEY.to_string(),
        api_base: mock.base_url.clone(),
        target_url: "https://tayloredpetportraits.com".to_string(),
        snapshot_path: dir.path().join("firecrawl_sample.json"),
    }
}

/// Success body with every brand field populated and three links.
pub fn success_body() -> String {
    serde_json::json!({
        "success": true,
        "data": {
            "name": "Taylored Pet Portraits",
            "bio": "Custom AI-generated pet portraits",
            "fontStyle": "Playfair Display",
            "bg1": "#3b82f6",
            "bg2": "#8b5cf6",
            "btn": "#ec4899",
            "links": [
                "https://instagram.com/tayloredpets",
                "https://tiktok.com/@tayloredpets",
                "https://facebook.com/tayloredpets"
            ],
            "markdown": "# Taylored Pet Portraits\n\nCustom AI-generated pet portraits."
        }
    })
    .to_string()
}
