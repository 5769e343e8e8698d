use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use damilag::error::{
    INVALID_COORDINATE_FORMAT_ERROR, MALFORMED_POLYLINE_ERROR, NOT_FOUND_ERROR,
    PERMISSION_DENIED_ERROR, POSITION_UNAVAILABLE_ERROR,
};
use damilag::server::serve_listener;
use damilag::test_support::{test_engine, StubRoutingService};

const POLYLINE: &str = "_p~iF~ps|U_ulLnnqC";

async fn spawn_server(polylines: Vec<String>) -> (SocketAddr, Arc<StubRoutingService>) {
    let (engine, routing) = test_engine(polylines);
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(serve_listener(Arc::new(engine), listener));

    (addr, routing)
}

async fn create_business(addr: SocketAddr, exact_location: Option<&str>) -> Value {
    reqwest::Client::new()
        .post(format!("http://{}/businesses", addr))
        .json(&json!({
            "name": "Damilag Bakery",
            "exact_location": exact_location,
            "address": "Purok 3, Damilag",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

fn granted() -> Value {
    json!({
        "permission": "granted",
        "coordinates": { "latitude": 8.36, "longitude": 124.88 },
    })
}

#[tokio::test]
async fn resolves_route_between_points() {
    let (addr, routing) = spawn_server(vec![POLYLINE.into()]).await;

    let res = reqwest::Client::new()
        .post(format!("http://{}/routes", addr))
        .json(&json!({
            "origin": { "latitude": 8.36, "longitude": 124.88 },
            "destination": { "latitude": 8.37, "longitude": 124.89 },
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let route: Value = res.json().await.unwrap();
    assert_eq!(route["status"]["name"], "ready");
    assert_eq!(route["path"].as_array().unwrap().len(), 2);
    assert_eq!(route["path"][0], json!({ "latitude": 38.5, "longitude": -120.2 }));
    assert!(route["eta_minutes"].as_f64().unwrap() > 0.0);
    assert_eq!(routing.calls(), 1);
}

#[tokio::test]
async fn out_of_range_endpoint_is_rejected() {
    let (addr, routing) = spawn_server(vec![POLYLINE.into()]).await;

    let bodies = [
        json!({
            "origin": { "latitude": 91.0, "longitude": 124.88 },
            "destination": { "latitude": 8.37, "longitude": 124.89 },
        }),
        json!({
            "origin": { "latitude": 8.36, "longitude": 124.88 },
            "destination": { "latitude": 8.37, "longitude": 181.0 },
        }),
    ];

    for body in bodies {
        let res = reqwest::Client::new()
            .post(format!("http://{}/routes", addr))
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = res.json().await.unwrap();
        assert_eq!(body["code"], INVALID_COORDINATE_FORMAT_ERROR);
        assert!(body["error"].as_str().unwrap().contains("latitude,longitude"));
    }

    assert_eq!(routing.calls(), 0);
}

#[tokio::test]
async fn estimates_from_text_coordinates() {
    let (addr, _) = spawn_server(vec![]).await;

    let res = reqwest::Client::new()
        .get(format!("http://{}/estimate", addr))
        .query(&[("origin", "8.36, 124.88"), ("destination", "8.37,124.89")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let estimate: Value = res.json().await.unwrap();
    let distance = estimate["distance_km"].as_f64().unwrap();
    assert!(distance > 1.5 && distance < 1.6, "{}", distance);
    assert!(estimate["eta_minutes"].as_f64().unwrap() > 0.0);

    let res = reqwest::Client::new()
        .get(format!("http://{}/estimate", addr))
        .query(&[("origin", "8.36;124.88"), ("destination", "8.37,124.89")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["code"], INVALID_COORDINATE_FORMAT_ERROR);
}

#[tokio::test]
async fn decodes_polylines() {
    let (addr, _) = spawn_server(vec![]).await;
    let client = reqwest::Client::new();

    let points: Value = client
        .get(format!("http://{}/polyline", addr))
        .query(&[("encoded", POLYLINE)])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        points,
        json!([
            { "latitude": 38.5, "longitude": -120.2 },
            { "latitude": 40.7, "longitude": -120.95 },
        ])
    );

    let res = client
        .get(format!("http://{}/polyline", addr))
        .query(&[("encoded", "_p~iF")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["code"], MALFORMED_POLYLINE_ERROR);
}

#[tokio::test]
async fn plans_route_to_business() {
    let (addr, routing) = spawn_server(vec![POLYLINE.into()]).await;
    let business = create_business(addr, Some("8.37,124.89")).await;

    let id = business["id"].as_str().unwrap();

    let found: Value = reqwest::get(format!("http://{}/businesses/{}", addr, id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found, business);

    let res = reqwest::Client::new()
        .post(format!("http://{}/businesses/{}/route", addr, id))
        .json(&granted())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let plan: Value = res.json().await.unwrap();
    assert_eq!(plan["business_name"], "Damilag Bakery");
    assert_eq!(plan["destination"], json!({ "latitude": 8.37, "longitude": 124.89 }));
    assert_eq!(plan["route"]["status"]["name"], "ready");
    assert_eq!(routing.calls(), 1);
}

#[tokio::test]
async fn route_plan_preconditions() {
    let (addr, routing) = spawn_server(vec![POLYLINE.into()]).await;
    let valid = create_business(addr, Some("8.37,124.89")).await;
    let unlocated = create_business(addr, None).await;

    let cases = [
        (&valid, granted(), StatusCode::OK, None),
        (
            &valid,
            json!({ "permission": "denied", "coordinates": null }),
            StatusCode::BAD_REQUEST,
            Some(PERMISSION_DENIED_ERROR),
        ),
        (
            &valid,
            json!({ "permission": "granted", "coordinates": null }),
            StatusCode::BAD_REQUEST,
            Some(POSITION_UNAVAILABLE_ERROR),
        ),
        (
            &unlocated,
            granted(),
            StatusCode::BAD_REQUEST,
            Some(INVALID_COORDINATE_FORMAT_ERROR),
        ),
    ];

    for (business, position, status, code) in cases {
        let res = reqwest::Client::new()
            .post(format!(
                "http://{}/businesses/{}/route",
                addr,
                business["id"].as_str().unwrap()
            ))
            .json(&position)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), status);

        let body: Value = res.json().await.unwrap();
        if let Some(code) = code {
            assert_eq!(body["code"], code);
        }
    }

    // only the successful request reached the directions service
    assert_eq!(routing.calls(), 1);
}

#[tokio::test]
async fn unknown_business_is_not_found() {
    let (addr, _) = spawn_server(vec![]).await;

    let res = reqwest::Client::new()
        .post(format!(
            "http://{}/businesses/{}/route",
            addr,
            uuid::Uuid::new_v4()
        ))
        .json(&granted())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["code"], NOT_FOUND_ERROR);
}
