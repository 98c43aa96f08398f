//! End-to-end tests for `GET /what_to_wear` against mocked providers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use tower::ServiceExt;
use what_to_wear::{server, Config, RecommendationResponse, Strategy, WearService};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Epoch seconds for `hour`:00 UTC today
fn today_at(hour: u32) -> i64 {
    Utc::now()
        .date_naive()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp()
}

fn config(weather: &MockServer, strategy: Strategy) -> Config {
    Config {
        weather_api_key: Some("weather-key".to_string()),
        weather_api_base: weather.uri(),
        strategy,
        ..Config::default()
    }
}

async fn mount_forecast(server: &MockServer, list: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": list })))
        .mount(server)
        .await;
}

async fn call(config: &Config) -> (StatusCode, RecommendationResponse) {
    let service = Arc::new(WearService::new(config).unwrap());
    let response = server::router(service)
        .oneshot(
            Request::builder()
                .uri("/what_to_wear")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_frigid_dry_day() {
    let weather = MockServer::start().await;
    mount_forecast(
        &weather,
        serde_json::json!([
            { "dt": today_at(0), "main": { "temp": 15.0 } },
            { "dt": today_at(3), "main": { "temp": 25.0 } }
        ]),
    )
    .await;

    let (status, body) = call(&config(&weather, Strategy::Rules)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.recommendation, "thermal underwear, heavy coat");
}

#[tokio::test]
async fn test_heavy_rain_adds_jacket_and_umbrella() {
    let weather = MockServer::start().await;
    mount_forecast(
        &weather,
        serde_json::json!([
            { "dt": today_at(0), "main": { "temp": 50.0 } },
            {
                "dt": today_at(3),
                "main": { "temp": 58.0 },
                "rain": { "3h": 6.0 },
                "weather": [{ "description": "moderate rain" }]
            }
        ]),
    )
    .await;

    let (_, body) = call(&config(&weather, Strategy::Rules)).await;

    assert_eq!(body.recommendation, "warm jacket, rain jacket, umbrella");
}

#[tokio::test]
async fn test_hot_day() {
    let weather = MockServer::start().await;
    mount_forecast(
        &weather,
        serde_json::json!([
            { "dt": today_at(0), "main": { "temp": 55.0 } },
            { "dt": today_at(12), "main": { "temp": 80.0 } }
        ]),
    )
    .await;

    let (_, body) = call(&config(&weather, Strategy::Rules)).await;

    assert_eq!(body.recommendation, "t-shirt, shorts");
}

#[tokio::test]
async fn test_no_entries_for_today_is_reported() {
    let weather = MockServer::start().await;
    let yesterday = today_at(0) - 3 * 3600;
    mount_forecast(
        &weather,
        serde_json::json!([{ "dt": yesterday, "main": { "temp": 40.0 } }]),
    )
    .await;

    let (status, body) = call(&config(&weather, Strategy::Rules)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.recommendation.starts_with("Error: "));
    assert!(body.recommendation.contains("Not enough forecast data"));
}

#[tokio::test]
async fn test_provider_failure_is_reported_not_raised() {
    let weather = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&weather)
        .await;

    let (status, body) = call(&config(&weather, Strategy::Rules)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.recommendation.starts_with("Error: Weather service request failed"));
}

#[tokio::test]
async fn test_missing_weather_key_is_reported() {
    let weather = MockServer::start().await;
    let config = Config {
        weather_api_key: None,
        ..config(&weather, Strategy::Rules)
    };

    let (status, body) = call(&config).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.recommendation.starts_with("Error: Configuration error"));
}

#[tokio::test]
async fn test_gemini_answer_is_returned_trimmed() {
    let weather = MockServer::start().await;
    mount_forecast(
        &weather,
        serde_json::json!([
            {
                "dt": today_at(6),
                "main": { "temp": 33.0 },
                "snow": { "3h": 1.0 },
                "weather": [{ "description": "light snow" }]
            }
        ]),
    )
    .await;

    let model = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "model-key"))
        .and(body_string_contains("potential for snow"))
        .and(body_string_contains("33.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  wool coat, scarf, snow boots\n" }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&model)
        .await;

    let config = Config {
        gemini_api_key: Some("model-key".to_string()),
        gemini_api_base: model.uri(),
        ..config(&weather, Strategy::Gemini)
    };

    let (_, body) = call(&config).await;

    assert_eq!(body.recommendation, "wool coat, scarf, snow boots");
}

#[tokio::test]
async fn test_gemini_without_key_is_unavailable() {
    let weather = MockServer::start().await;
    mount_forecast(
        &weather,
        serde_json::json!([{ "dt": today_at(6), "main": { "temp": 60.0 } }]),
    )
    .await;

    let (status, body) = call(&config(&weather, Strategy::Gemini)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body
        .recommendation
        .starts_with("Error: Recommendation model unavailable"));
}

#[tokio::test]
async fn test_gemini_blocked_prompt_is_generation_error() {
    let weather = MockServer::start().await;
    mount_forecast(
        &weather,
        serde_json::json!([{ "dt": today_at(6), "main": { "temp": 60.0 } }]),
    )
    .await;

    let model = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&model)
        .await;

    let config = Config {
        gemini_api_key: Some("model-key".to_string()),
        gemini_api_base: model.uri(),
        ..config(&weather, Strategy::Gemini)
    };

    let (_, body) = call(&config).await;

    assert_eq!(
        body.recommendation,
        "Error: Recommendation model failed: prompt was blocked: SAFETY"
    );
}

#[tokio::test]
async fn test_gemini_error_status_is_generation_error() {
    let weather = MockServer::start().await;
    mount_forecast(
        &weather,
        serde_json::json!([{ "dt": today_at(6), "main": { "temp": 60.0 } }]),
    )
    .await;

    let model = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&model)
        .await;

    let config = Config {
        gemini_api_key: Some("model-key".to_string()),
        gemini_api_base: model.uri(),
        ..config(&weather, Strategy::Gemini)
    };

    let (_, body) = call(&config).await;

    assert!(body
        .recommendation
        .starts_with("Error: Recommendation model failed"));
    assert!(body.recommendation.contains("503"));
}
