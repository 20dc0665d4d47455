use marquee_core::{
    EmojiDensity, FormatId, GeneratedCopy, GenerationReport, GenerationRequest,
    GenerationResult, GenerationStatus, PlatformRule, Tone, UnitRole,
};
use uuid::Uuid;

#[test]
fn format_ids_parse_case_insensitively() {
    assert_eq!(FormatId::parse(" post ").unwrap(), FormatId::Post);
    assert_eq!(FormatId::parse("VIDEO").unwrap(), FormatId::Video);

    let err = FormatId::parse("podcast").unwrap_err();
    assert!(err.to_string().contains("podcast"));
}

#[test]
fn unknown_tone_is_rejected() {
    assert!(Tone::parse("grumpy").is_err());
    assert_eq!(Tone::parse("Humorous").unwrap(), Tone::Humorous);
}

#[test]
fn denylist_ignores_case_and_hash_prefix() {
    let rule = PlatformRule::new("Instagram", 2200, 30, EmojiDensity::High)
        .with_hashtag_denylist(vec!["#followforfollow".to_string(), "like4like".to_string()]);

    assert_eq!(rule.platform(), "instagram");
    assert!(rule.is_denied("#FollowForFollow"));
    assert!(rule.is_denied("#like4like"));
    assert!(!rule.is_denied("#marketing"));
}

#[test]
fn rekeyed_rule_keeps_limits() {
    let baseline = PlatformRule::new("instagram", 2200, 30, EmojiDensity::High);
    let rule = baseline.rekeyed("Mastodon");

    assert_eq!(rule.platform(), "mastodon");
    assert_eq!(*rule.max_chars(), 2200);
    assert_eq!(*rule.max_hashtags(), 30);
}

#[test]
fn request_deduplicates_platform_keys() {
    let request = GenerationRequest::builder()
        .topic("Spring sale")
        .format(FormatId::Carousel)
        .platform("instagram")
        .platform(" Instagram ")
        .platform("")
        .platform("facebook")
        .build()
        .unwrap();

    assert_eq!(request.platform_keys(), vec!["instagram", "facebook"]);
    assert!(request.targets("INSTAGRAM"));
    assert!(!request.targets("twitter"));
    assert_eq!(*request.tone(), Tone::Friendly);
}

#[test]
fn request_requires_topic() {
    let result = GenerationRequest::builder()
        .format(FormatId::Post)
        .platform("twitter")
        .build();

    assert!(result.is_err());
}

#[test]
fn blank_brand_context_counts_as_absent() {
    let request = GenerationRequest::builder()
        .topic("Open day")
        .format(FormatId::Post)
        .platform("facebook")
        .brand_context("   ")
        .build()
        .unwrap();

    assert_eq!(request.brand(), None);
    let branded = request.with_brand_context(Some("Acme bakery".to_string()));
    assert_eq!(branded.brand(), Some("Acme bakery"));
}

#[test]
fn generated_copy_accepts_slides_alias() {
    let copy: GeneratedCopy = serde_json::from_str(
        r#"{"body": "b", "slides": [{"ordinal": 1, "role": "hook", "title": "Hi"}]}"#,
    )
    .unwrap();

    assert_eq!(copy.units.len(), 1);
    assert_eq!(copy.units[0].role, UnitRole::Hook);
    assert!(copy.hashtags.is_empty());
}

#[test]
fn unrecognised_unit_role_reads_as_content() {
    let copy: GeneratedCopy = serde_json::from_str(
        r#"{"body": "b", "units": [
            {"ordinal": 1, "role": "intro", "title": "Hi"},
            {"ordinal": 2, "role": "cta", "title": "Bye"}
        ]}"#,
    )
    .unwrap();

    assert_eq!(copy.units.len(), 2);
    assert_eq!(copy.units[0].role, UnitRole::Content);
    assert_eq!(copy.units[1].role, UnitRole::Cta);
}

#[test]
fn report_counts_statuses_and_sorts_keys() {
    let results = vec![
        GenerationResult::new("twitter", GenerationStatus::Ok, Tone::Casual),
        GenerationResult::new("facebook", GenerationStatus::Fallback, Tone::Casual)
            .with_error("timeout".to_string()),
        GenerationResult::failed("email", Tone::Casual, "both paths failed"),
    ];
    let report = GenerationReport::new(Uuid::new_v4(), FormatId::Post, results);

    assert_eq!(report.len(), 3);
    assert_eq!(report.count(GenerationStatus::Ok), 1);
    assert_eq!(report.count(GenerationStatus::Fallback), 1);
    assert_eq!(report.count(GenerationStatus::Failed), 1);

    let keys: Vec<_> = report.results().keys().cloned().collect();
    assert_eq!(keys, vec!["email", "facebook", "twitter"]);
    assert_eq!(
        report.get("email").unwrap().error().as_deref(),
        Some("both paths failed")
    );
}
