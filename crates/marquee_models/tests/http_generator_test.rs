//! Tests for the HTTP generator and brand providers.

use marquee_error::{GenerationErrorKind, MarqueeErrorKind};
use marquee_interface::{BrandContextProvider, TextGenerator};
use marquee_models::{
    EndpointConfig, FileBrandContext, HttpTextGenerator, OfflineGenerator, StaticBrandContext,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn endpoint(server: &MockServer) -> EndpointConfig {
    EndpointConfig::default().with_base_url(server.uri())
}

fn generation_kind(err: &marquee_error::MarqueeError) -> GenerationErrorKind {
    match err.kind() {
        MarqueeErrorKind::Generation(e) => e.kind.clone(),
        other => panic!("Expected generation error, got {}", other),
    }
}

#[tokio::test]
async fn test_generate_decodes_copy_and_units() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(json!({"prompt": "Write about bread"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "body": "Fresh bread every morning.",
            "hashtags": ["#bread", "#bakery"],
            "imagePrompt": "Loaves on a wooden table",
            "units": [
                {"ordinal": 1, "role": "hook", "title": "Smell that?"},
                {"ordinal": 2, "title": "Sourdough", "bullets": ["48h rise"]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = HttpTextGenerator::new(&endpoint(&server));
    let copy = generator.generate("Write about bread").await.unwrap();

    assert_eq!(copy.body, "Fresh bread every morning.");
    assert_eq!(copy.hashtags, vec!["#bread", "#bakery"]);
    assert_eq!(copy.image_prompt.as_deref(), Some("Loaves on a wooden table"));
    assert_eq!(copy.units.len(), 2);
    assert_eq!(copy.units[1].bullets, vec!["48h rise"]);
    assert_eq!(generator.provider_name(), "http");
}

#[tokio::test]
async fn test_generate_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"body": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let generator =
        HttpTextGenerator::new(&endpoint(&server)).with_api_key(Some("secret-token".into()));
    let copy = generator.generate("prompt").await.unwrap();
    assert_eq!(copy.body, "ok");
    assert!(copy.hashtags.is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let generator = HttpTextGenerator::new(&endpoint(&server));
    let err = generator.generate("prompt").await.unwrap_err();

    let kind = generation_kind(&err);
    assert_eq!(
        kind,
        GenerationErrorKind::Status {
            status: 503,
            message: "overloaded".to_string()
        }
    );
    assert!(kind.is_retryable());
}

#[tokio::test]
async fn test_client_error_is_not_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad prompt"))
        .mount(&server)
        .await;

    let generator = HttpTextGenerator::new(&endpoint(&server));
    let err = generator.generate("prompt").await.unwrap_err();
    assert!(!generation_kind(&err).is_retryable());
}

#[tokio::test]
async fn test_malformed_json_maps_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let generator = HttpTextGenerator::new(&endpoint(&server));
    let err = generator.generate("prompt").await.unwrap_err();
    assert!(matches!(generation_kind(&err), GenerationErrorKind::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_maps_to_transport() {
    let server = MockServer::builder().start().await;
    let config = endpoint(&server);
    drop(server);

    let generator = HttpTextGenerator::new(&config);
    let err = generator.generate("prompt").await.unwrap_err();
    assert!(matches!(generation_kind(&err), GenerationErrorKind::Transport(_)));
}

#[test]
fn test_generate_url_trims_trailing_slash() {
    let config = EndpointConfig::default().with_base_url("https://gen.example.com/v1/");
    assert_eq!(config.generate_url(), "https://gen.example.com/v1/generate");
}

#[test]
fn test_missing_api_key_env_gives_none() {
    let config = EndpointConfig::default().with_api_key_env("MARQUEE_TEST_UNSET_KEY_0F3A");
    assert_eq!(config.api_key(), None);
}

#[tokio::test]
async fn test_offline_generator_is_unavailable() {
    let err = OfflineGenerator.generate("prompt").await.unwrap_err();
    assert!(matches!(
        generation_kind(&err),
        GenerationErrorKind::Unavailable(_)
    ));
}

#[tokio::test]
async fn test_static_brand_blank_is_none() {
    let brand = StaticBrandContext::new("   ");
    assert_eq!(brand.brand_context().await.unwrap(), None);
}

#[tokio::test]
async fn test_file_brand_context() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("brand.txt");
    std::fs::write(&file, "  Family-run bakery since 1962\n").unwrap();

    let brand = FileBrandContext::new(&file);
    assert_eq!(
        brand.brand_context().await.unwrap().as_deref(),
        Some("Family-run bakery since 1962")
    );

    let missing = FileBrandContext::new(dir.path().join("missing.txt"));
    assert!(missing.brand_context().await.is_err());
}
