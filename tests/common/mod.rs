use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use onion_blacklist_sync::telemetry;

/// What the mock serves and what it received
#[derive(Debug)]
pub struct MockData {
    pub ct_log_status: StatusCode,
    pub ct_log_body: String,
    pub forbidden_status: StatusCode,
    pub forbidden_body: String,
    pub put_status: StatusCode,
    pub put_body: Option<String>,
    pub put_headers: Option<HeaderMap>,
    pub put_count: usize,
}

impl Default for MockData {
    fn default() -> Self {
        Self {
            ct_log_status: StatusCode::OK,
            ct_log_body: String::new(),
            forbidden_status: StatusCode::OK,
            forbidden_body: "[]".to_string(),
            put_status: StatusCode::OK,
            put_body: None,
            put_headers: None,
            put_count: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockState(pub Arc<Mutex<MockData>>);

#[allow(dead_code)]
impl MockState {
    pub fn new(ct_log_body: &str, forbidden_body: &str) -> Self {
        Self(Arc::new(Mutex::new(MockData {
            ct_log_body: ct_log_body.to_string(),
            forbidden_body: forbidden_body.to_string(),
            ..MockData::default()
        })))
    }

    pub fn update(&self, f: impl FnOnce(&mut MockData)) {
        f(&mut self.0.lock().unwrap());
    }

    pub fn snapshot<T>(&self, f: impl FnOnce(&MockData) -> T) -> T {
        f(&self.0.lock().unwrap())
    }
}

async fn ct_log(State(state): State<MockState>) -> (StatusCode, String) {
    state.snapshot(|data| (data.ct_log_status, data.ct_log_body.clone()))
}

async fn get_forbidden(State(state): State<MockState>) -> (StatusCode, String) {
    state.snapshot(|data| (data.forbidden_status, data.forbidden_body.clone()))
}

async fn put_forbidden(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let mut data = state.0.lock().unwrap();
    data.put_count += 1;
    data.put_headers = Some(headers);
    data.put_body = Some(body.clone());

    if data.put_status.is_success() {
        data.forbidden_body = body.clone();
        (data.put_status, body)
    } else {
        (data.put_status, "storage unavailable".to_string())
    }
}

/// Spawns the CT log and configuration API mock on a random port and
/// returns its base URL
pub async fn spawn_mock(state: MockState) -> String {
    telemetry::init_tracing();

    let router = Router::new()
        .route("/ct-log.txt", get(ct_log))
        .route(
            "/config/forbidden-hostnames",
            get(get_forbidden).put(put_forbidden),
        )
        .with_state(state);

    // Use a random OS port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("failed to run mock server");
    });

    format!("http://{addr}")
}
