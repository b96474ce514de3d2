use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::post,
};
use axum_test::TestServer;
use clap::Parser;
use dietwise_api::{
    application::http::{
        recommendation::validators::SubmitRecommendationForm,
        server::http_server::{router, state},
    },
    args::Args,
};
use dietwise_core::domain::recommendation::prompts::{
    build_classification_prompt, build_diet_prompt, build_meal_plan_prompt,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

const API_KEY: &str = "k123";
const REPLIES: [&str; 3] = ["R1 <b>&", "Soup & rest", "Day 1: oats"];

#[derive(Debug, Clone)]
struct RecordedCall {
    target: String,
    key: Option<String>,
    body: Value,
}

/// In-process stand-in for the `generateContent` endpoint.
#[derive(Clone, Default)]
struct FakeGemini {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    quota_exhausted_on: Option<usize>,
}

impl FakeGemini {
    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn generate_content(
    State(fake): State<FakeGemini>,
    Path(target): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let call_number = {
        let mut calls = fake.calls.lock().unwrap();
        calls.push(RecordedCall {
            target,
            key: query.get("key").cloned(),
            body,
        });
        calls.len()
    };

    if fake.quota_exhausted_on == Some(call_number) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": {"code": 429, "status": "RESOURCE_EXHAUSTED"}})),
        );
    }

    let reply = REPLIES[(call_number - 1) % REPLIES.len()];
    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": reply}]}}]
        })),
    )
}

/// Serves the fake on an ephemeral port and returns its base URL.
async fn spawn_fake_gemini(fake: FakeGemini) -> String {
    let app = Router::new()
        .route("/v1beta/models/{target}", post(generate_content))
        .with_state(fake);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/v1beta")
}

fn test_server(base_url: &str) -> TestServer {
    let args = Args::try_parse_from([
        "dietwise",
        "--metrics",
        "false",
        "--gemini-api-key",
        API_KEY,
        "--gemini-model",
        "gemini-1.5-flash",
        "--gemini-base-url",
        base_url,
    ])
    .expect("valid test args");

    let app = router(state(Arc::new(args)).expect("state")).expect("router");
    TestServer::new(app).expect("test server")
}

fn flu_in_tamil() -> SubmitRecommendationForm {
    SubmitRecommendationForm {
        language: Some("Tamil".to_string()),
        disease: Some("Flu".to_string()),
        age: Some("30".to_string()),
        gender: Some("Female".to_string()),
        allergies: Some("peanuts".to_string()),
    }
}

fn request_body(prompt: String) -> Value {
    json!({"contents": [{"parts": [{"text": prompt}]}]})
}

#[tokio::test]
async fn test_submit_renders_all_three_sections() {
    let fake = FakeGemini::default();
    let server = test_server(&spawn_fake_gemini(fake.clone()).await);

    let response = server.post("/recommendations").form(&flu_in_tamil()).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<div class="output">R1 &lt;b&gt;&amp;</div>"#));
    assert!(html.contains(r#"<div class="output">Soup &amp; rest</div>"#));
    assert!(html.contains(r#"<div class="output">Day 1: oats</div>"#));
    assert!(!html.contains("R1 <b>&"));
    assert!(html.contains(r#"<input type="hidden" name="classification" value="R1 &lt;b&gt;&amp;">"#));
    assert!(html.contains("Learn more about recommended foods"));
    assert!(html.contains("Download Recommendations"));

    let calls = fake.calls();
    assert_eq!(calls.len(), 3);
    for call in &calls {
        assert_eq!(call.target, "gemini-1.5-flash:generateContent");
        assert_eq!(call.key.as_deref(), Some(API_KEY));
    }
    assert_eq!(calls[0].body, request_body(build_classification_prompt("Flu", "Tamil")));
    assert_eq!(calls[1].body, request_body(build_diet_prompt("Flu", "Tamil")));
    assert_eq!(calls[2].body, request_body(build_meal_plan_prompt("Flu", "Tamil")));
}

#[tokio::test]
async fn test_quota_error_on_second_call_stops_the_cycle() {
    let fake = FakeGemini {
        quota_exhausted_on: Some(2),
        ..FakeGemini::default()
    };
    let server = test_server(&spawn_fake_gemini(fake.clone()).await);

    let response = server.post("/recommendations").form(&flu_in_tamil()).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_MODEL_QUOTA_EXCEEDED");
    assert_eq!(body["status"], 502);
    assert_eq!(fake.calls().len(), 2);
}

#[tokio::test]
async fn test_json_api_returns_model_text_verbatim() {
    let fake = FakeGemini::default();
    let server = test_server(&spawn_fake_gemini(fake.clone()).await);

    let response = server
        .post("/api/recommendations")
        .json(&json!({"disease_name": "Flu", "language": "English"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["data"],
        json!({
            "classification": "R1 <b>&",
            "diet_suggestions": "Soup & rest",
            "meal_plan": "Day 1: oats"
        })
    );
    assert_eq!(fake.calls()[0].body, request_body(build_classification_prompt("Flu", "English")));
}
