#![allow(dead_code)]

use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    routing::get,
    Router,
};

pub type Requests = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Canned directions service listening on an ephemeral local port.
pub struct FakeDirections {
    pub addr: SocketAddr,
    pub requests: Requests,
}

impl FakeDirections {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn fake_directions(status: StatusCode, body: &'static str) -> FakeDirections {
    let requests: Requests = Arc::default();

    let app = Router::new()
        .route(
            "/maps/api/directions/json",
            get(
                move |Extension(requests): Extension<Requests>,
                      Query(params): Query<HashMap<String, String>>| async move {
                    requests.lock().unwrap().push(params);
                    (status, body)
                },
            ),
        )
        .layer(Extension(requests.clone()));

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });

    FakeDirections { addr, requests }
}

/// Address nothing listens on.
pub fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

pub const OK_BODY: &str = r#"{
    "status": "OK",
    "routes": [
        {
            "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" },
            "legs": [{ "duration": { "value": 5400, "text": "1 hour 30 mins" } }]
        },
        {
            "overview_polyline": { "points": "??" }
        }
    ]
}"#;

pub const ZERO_RESULTS_BODY: &str = r#"{ "status": "ZERO_RESULTS", "routes": [] }"#;

pub const DENIED_BODY: &str =
    r#"{ "status": "REQUEST_DENIED", "error_message": "Invalid key.", "routes": [] }"#;
