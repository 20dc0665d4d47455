//! Tests for the layered configuration and orchestrator wiring.

use marquee::{
    EmojiDensity, FormatId, GenerationRequest, GenerationStatus, MarqueeConfig, MarqueeErrorKind,
    OfflineGenerator, Tone,
};
use std::path::Path;
use std::sync::Arc;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_bundled_defaults() {
    let config = MarqueeConfig::load().unwrap();

    assert_eq!(*config.generation.timeout_ms(), 20_000);
    assert_eq!(*config.generation.max_retries(), 1);
    assert_eq!(*config.generation.max_concurrent(), 8);
    assert!(!*config.generation.strict_platforms());
    assert_eq!(config.endpoint.api_key_env(), "MARQUEE_API_KEY");
    assert!(config.templates_file.is_none());
}

#[test]
fn test_from_file_missing_sections_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "marquee.toml", "[generation]\ntimeout_ms = 5000\n");

    let config = MarqueeConfig::from_file(&path).unwrap();

    assert_eq!(*config.generation.timeout_ms(), 5_000);
    assert_eq!(*config.generation.retry_backoff_ms(), 250);
    assert_eq!(config.endpoint.base_url(), "http://localhost:8080");
    assert!(config.platforms.is_empty());
}

#[test]
fn test_platform_overrides_reach_rule_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "marquee.toml",
        r#"
[platforms.twitter]
max_chars = 25000
notes = ["Premium account: long posts allowed"]

[platforms.mastodon]
max_chars = 500
max_hashtags = 5
emoji_density = "low"
tone_override = "casual"
"#,
    );

    let config = MarqueeConfig::from_file(&path).unwrap();
    let rules = config.rule_table();

    let twitter = rules.rules_for("twitter");
    assert_eq!(*twitter.max_chars(), 25_000);
    assert_eq!(*twitter.max_hashtags(), 2);
    assert_eq!(twitter.notes(), &vec!["Premium account: long posts allowed".to_string()]);

    assert!(rules.contains("mastodon"));
    let mastodon = rules.rules_for("mastodon");
    assert_eq!(*mastodon.max_chars(), 500);
    assert_eq!(*mastodon.emoji_density(), EmojiDensity::Low);
    assert_eq!(rules.effective_tone("mastodon", Tone::Friendly), Tone::Casual);
}

#[test]
fn test_explicit_file_overrides_bundled_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "extra.toml",
        "[generation]\nmax_concurrent = 2\nstrict_platforms = true\n",
    );

    let config = MarqueeConfig::load_with(Some(&path)).unwrap();

    assert_eq!(*config.generation.max_concurrent(), 2);
    assert!(*config.generation.strict_platforms());
    assert_eq!(*config.generation.timeout_ms(), 20_000);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MarqueeConfig::load_with(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err.kind(), MarqueeErrorKind::Config(_)));
}

#[test]
fn test_unknown_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "marquee.toml", "[generation]\ntimeout = 5000\n");

    let err = MarqueeConfig::from_file(&path).unwrap_err();
    assert!(matches!(err.kind(), MarqueeErrorKind::Config(_)));
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let zero_timeout = write(dir.path(), "a.toml", "[generation]\ntimeout_ms = 0\n");
    let zero_chars = write(dir.path(), "b.toml", "[platforms.twitter]\nmax_chars = 0\n");

    assert!(MarqueeConfig::from_file(&zero_timeout).is_err());
    assert!(MarqueeConfig::from_file(&zero_chars).is_err());
}

#[tokio::test]
async fn test_offline_orchestrator_falls_back_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "marquee.toml", "[generation]\nretry_backoff_ms = 1\n");
    let config = MarqueeConfig::from_file(&path).unwrap();
    let orchestrator = config.build_orchestrator(Arc::new(OfflineGenerator)).unwrap();

    let request = GenerationRequest::builder()
        .topic("Spring menu")
        .format(FormatId::Carousel)
        .platform("instagram")
        .platform("linkedin")
        .build()
        .unwrap();
    let report = orchestrator.generate(&request).await.unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report.count(GenerationStatus::Fallback), 2);
    let instagram = report.get("instagram").unwrap();
    let units = instagram.units().as_ref().unwrap();
    assert_eq!(units.len(), 7);
    assert!(units.iter().enumerate().all(|(i, unit)| unit.ordinal == i as u32 + 1));
    assert_eq!(*instagram.attempts(), 2);
}

#[tokio::test]
async fn test_templates_and_brand_files_are_wired() {
    let dir = tempfile::tempdir().unwrap();
    let templates = write(
        dir.path(),
        "templates.toml",
        r#"
[templates.brand_post]
name = "Brand post"
formats = ["post"]
instruction = "Write a post for {{brand}} about {{topic}}."
fallback_body = "{{brand}} presents {{topic}}."
"#,
    );
    let brand = write(dir.path(), "brand.txt", "Forno Rossi\n");
    let path = write(
        dir.path(),
        "marquee.toml",
        &format!(
            "templates_file = {:?}\nbrand_file = {:?}\n\n[generation]\nmax_retries = 0\n",
            templates.display().to_string(),
            brand.display().to_string()
        ),
    );

    let config = MarqueeConfig::from_file(&path).unwrap();
    let orchestrator = config.build_orchestrator(Arc::new(OfflineGenerator)).unwrap();
    let request = GenerationRequest::builder()
        .topic("fresh focaccia")
        .format(FormatId::Post)
        .platform("facebook")
        .template("brand_post")
        .build()
        .unwrap();

    let report = orchestrator.generate(&request).await.unwrap();
    let facebook = report.get("facebook").unwrap();
    assert_eq!(*facebook.status(), GenerationStatus::Fallback);
    assert_eq!(facebook.body(), "Forno Rossi presents fresh focaccia.");
    assert_eq!(*facebook.attempts(), 1);
}
