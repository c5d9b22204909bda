//! Local HTTP server answering with canned responses.
//!
//! Routes are matched on `METHOD path` (query string included, `/api` prefix
//! stripped). Every request received is recorded for assertions.

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub body: String,
}

struct CannedState {
    routes: HashMap<String, (u16, String)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct CannedServer {
    base_url: String,
    state: Arc<CannedState>,
}

impl CannedServer {
    /// Start serving `routes`; unknown routes answer 404 with a FastAPI body
    pub async fn start(routes: Vec<(&str, u16, &str)>) -> Self {
        let state = Arc::new(CannedState {
            routes: routes
                .into_iter()
                .map(|(route, status, body)| (route.to_string(), (status, body.to_string())))
                .collect(),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn respond(
    State(state): State<Arc<CannedState>>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let path = target.strip_prefix("/api").unwrap_or(target).to_string();

    let (status, response_body) = state
        .routes
        .get(&format!("{} {}", method, path))
        .cloned()
        .unwrap_or((404, r#"{"detail": "Not Found"}"#.to_string()));

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        target: path,
        body,
    });

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response_body,
    )
        .into_response()
}
