use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use axum::response::IntoResponse;
use radref_core::error::EvaluationError;

use radref_api::error::ApiError;
use radref_api::router;
use radref_schemes::error::CalculatorError;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_loaded_schemes() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(
        body["schemes"].as_u64().unwrap() as usize,
        radref_schemes::registry().len()
    );
}

#[tokio::test]
async fn lists_schemes() {
    let (status, body) = send(get("/schemes")).await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap())
        .collect();
    assert!(keys.contains(&"bosniak-v2019"));
    assert!(keys.contains(&"li-rads-v2018"));
}

#[tokio::test]
async fn scheme_detail_exposes_fields_and_dependencies() {
    let (status, body) = send(get("/schemes/bosniak-v2019")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["key"], "bosniak-v2019");

    let fields = body["fields"].as_array().unwrap();
    let septa_thick = fields.iter().find(|f| f["key"] == "septaThick").unwrap();
    assert_eq!(septa_thick["depends_on"]["field"], "septaCount");
    assert_eq!(septa_thick["domain"]["kind"], "choice");
}

#[tokio::test]
async fn unknown_scheme_is_not_found() {
    let (status, body) = send(get("/schemes/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "unknown scheme: nope");
    assert!(body.get("missing").is_none());

    let (status, _) = send(post("/schemes/nope/evaluate", json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validate_returns_relevance_and_missing() {
    let (status, body) = send(post(
        "/schemes/bosniak-v2019/validate",
        json!({ "wall": "thin" }),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["complete"], false);
    assert_eq!(body["missing"], json!(["enhancement", "attenuation"]));
}

#[tokio::test]
async fn evaluate_returns_assessment_with_report() {
    let (status, body) = send(post(
        "/schemes/li-rads-v2018/evaluate",
        json!({
            "atRisk": "yes",
            "priorCategory": "none",
            "size": "10-19",
            "aphe": "yes",
            "washout": "yes",
            "capsule": "no",
            "thresholdGrowth": "no",
            "ancillary": "benign"
        }),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["validation"]["complete"], true);
    assert_eq!(body["evaluation"]["outcome"]["category"]["code"], "LR-4");
    assert_eq!(body["evaluation"]["modifier"]["from"], "LR-5");
    assert!(body["report"].as_str().unwrap().contains("LR-4"));
}

#[tokio::test]
async fn evaluate_incomplete_is_data_not_error() {
    let (status, body) = send(post("/schemes/ckd-epi-2021/evaluate", json!({ "age": 40 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["validation"]["complete"], false);
    assert_eq!(body["evaluation"], Value::Null);
    assert_eq!(body["report"], Value::Null);
}

#[tokio::test]
async fn evaluate_undefined_derived_value_is_no_match() {
    let (status, body) = send(post(
        "/schemes/ckd-epi-2021/evaluate",
        json!({ "creatinine": 0, "age": 40, "sex": "female" }),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["evaluation"]["outcome"]["status"], "no_match");
    assert_eq!(body["evaluation"]["derived"]["egfr"], Value::Null);
    assert_eq!(body["report"], Value::Null);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/schemes/bosniak-v2019/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(request).await;
    assert!(status.is_client_error());

    let (status, _) = send(post(
        "/schemes/bosniak-v2019/evaluate",
        json!({ "wall": true }),
    ))
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn incomplete_answers_map_to_unprocessable_entity() {
    let error = ApiError::from(CalculatorError::Evaluation(
        EvaluationError::IncompleteAnswerSet {
            scheme: "bosniak-v2019".to_string(),
            missing: vec!["enhancement".to_string()],
            invalid: vec!["wall".to_string()],
        },
    ));
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["missing"], json!(["enhancement"]));
    assert_eq!(body["invalid"], json!(["wall"]));
    assert!(body["error"].as_str().unwrap().contains("bosniak-v2019"));
}
