mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use checkin::{
    config::StaticProvider,
    form::{ENV_APP_CONFIG, ENV_GAS_URL},
};

fn default_config(gas_url: &str) -> serde_json::Value {
    json!({
        "title": "Location Check-in",
        "gas_url": gas_url,
        "fields": [
            {"id": "name", "type": "text", "label": "Name", "required": true},
            {"id": "phone", "type": "tel", "label": "Phone Number", "required": true},
            {"id": "notes", "type": "textarea", "label": "Additional Notes", "required": false}
        ]
    })
}

#[tokio::test]
async fn test_get_config_returns_default_without_env() {
    let app = helpers::test_app(StaticProvider::new());

    let (status, body) = helpers::send_json(app, helpers::get("/api/config")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, default_config(""));
}

#[tokio::test]
async fn test_get_config_default_uses_gas_url() {
    let app = helpers::test_app(
        StaticProvider::new().with(ENV_GAS_URL, "https://script.google.com/macros/s/abc/exec"),
    );

    let (status, body) = helpers::send_json(app, helpers::get("/api/config")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        default_config("https://script.google.com/macros/s/abc/exec")
    );
}

#[tokio::test]
async fn test_get_config_returns_override_unmodified() {
    let blob = r#"{"title":"Warehouse","fields":[{"id":"badge","type":"number","label":"Badge"}],"gas_url":"https://hook.example/exec","theme":{"color":"red","dark":false},"build":99999999999999999999}"#;
    let app = helpers::test_app(StaticProvider::new().with(ENV_APP_CONFIG, blob));

    let (status, body) = helpers::send(app, helpers::get("/api/config")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), blob);
}

#[tokio::test]
async fn test_get_config_falls_back_on_malformed_override() {
    let app = helpers::test_app(
        StaticProvider::new()
            .with(ENV_APP_CONFIG, r#"{"title": "Warehouse", "fields": ["#)
            .with(ENV_GAS_URL, "https://hook.example/exec"),
    );

    let (status, body) = helpers::send_json(app, helpers::get("/api/config")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, default_config("https://hook.example/exec"));
}

#[tokio::test]
async fn test_post_config_is_always_forbidden() {
    let bodies = [
        Body::empty(),
        Body::from(json!({"title": "Hijacked", "gas_url": "https://evil"}).to_string()),
        Body::from("not json at all"),
    ];

    for body in bodies {
        let app = helpers::test_app(StaticProvider::new());
        let (status, response) =
            helpers::send_json(app, helpers::post_json("/api/config", body)).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(response["status"], "error");
        assert!(response["message"].as_str().unwrap().contains("read-only"));
    }
}

#[tokio::test]
async fn test_post_config_without_content_type_is_forbidden() {
    let app = helpers::test_app(StaticProvider::new());
    let request = Request::builder()
        .method("POST")
        .uri("/api/config")
        .body(Body::from("title=x"))
        .unwrap();

    let (status, body) = helpers::send_json(app, request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_post_config_does_not_change_config() {
    let provider = StaticProvider::new();
    let app = helpers::test_app(provider.clone());
    let _ = helpers::send(
        app,
        helpers::post_json("/api/config", json!({"title": "Changed"}).to_string()),
    )
    .await;

    let app = helpers::test_app(provider);
    let (_, body) = helpers::send_json(app, helpers::get("/api/config")).await;
    assert_eq!(body["title"], "Location Check-in");
}
