use marquee_core::{FormatId, GenerationRequest, Tone};
use marquee_error::{MarqueeErrorKind, RequestError, RequestErrorKind, TemplateError, TemplateErrorKind};
use marquee_prompt::{PromptAssembler, TemplateCatalog, ToneCatalog, load_catalogs};
use std::io::Write;
use strum::IntoEnumIterator;

fn request(format: FormatId) -> GenerationRequest {
    GenerationRequest::builder()
        .topic("AI per PMI")
        .format(format)
        .platform("twitter")
        .platform("linkedin")
        .platform("email")
        .tone(Tone::Enthusiastic)
        .brand_context("Acme builds tools for small businesses")
        .build()
        .unwrap()
}

fn position(prompt: &str, needle: &str) -> usize {
    prompt
        .find(needle)
        .unwrap_or_else(|| panic!("missing '{}' in prompt:\n{}", needle, prompt))
}

#[test]
fn bundled_catalogs_load() {
    let templates = TemplateCatalog::builtin().unwrap();
    for format in FormatId::iter() {
        let template = templates.resolve(None, format).unwrap();
        assert!(template.applies_to(format));
    }
    assert!(templates.get("product_launch").is_some());

    let tones = ToneCatalog::builtin().unwrap();
    for tone in Tone::iter() {
        assert!(!tones.guidance(tone).is_empty());
    }
}

#[test]
fn sections_follow_fixed_order() {
    let assembler = PromptAssembler::builtin().unwrap();
    let prompt = assembler
        .assemble_default(&request(FormatId::Post), "twitter")
        .unwrap();

    let structure = position(&prompt, "Format: post");
    let instruction = position(&prompt, "Write a single twitter post");
    let topic = position(&prompt, "Topic: AI per PMI");
    let tone = position(&prompt, "Tone: enthusiastic");
    let brand = position(&prompt, "Brand context: Acme");
    let platform = position(&prompt, "Platform: twitter.");
    let output = position(&prompt, "Respond with a single JSON object");

    assert!(structure < instruction);
    assert!(instruction < topic);
    assert!(topic < tone);
    assert!(tone < brand);
    assert!(brand < platform);
    assert!(platform < output);
}

#[test]
fn platform_section_states_numeric_limits() {
    let assembler = PromptAssembler::builtin().unwrap();
    let req = request(FormatId::Post);

    let twitter = assembler.assemble_default(&req, "twitter").unwrap();
    assert!(twitter.contains("280 characters"));
    assert!(twitter.contains("at most 2 hashtags"));
    assert!(twitter.contains("23 characters"));

    let email = assembler.assemble_default(&req, "email").unwrap();
    assert!(email.contains("10000 characters"));
    assert!(email.contains("Do not include hashtags."));
    assert!(email.contains("Do not use any emoji."));
}

#[test]
fn platform_tone_override_applies() {
    let assembler = PromptAssembler::builtin().unwrap();
    let prompt = assembler
        .assemble_default(&request(FormatId::Post), "linkedin")
        .unwrap();

    assert!(prompt.contains("Tone: professional"));
    assert!(!prompt.contains("Tone: enthusiastic"));
}

#[test]
fn blank_brand_is_omitted() {
    let assembler = PromptAssembler::builtin().unwrap();
    let req = request(FormatId::Post).with_brand_context(Some("   ".to_string()));
    let prompt = assembler.assemble_default(&req, "twitter").unwrap();

    assert!(!prompt.contains("Brand context"));
}

#[test]
fn sequenced_structure_lists_roles() {
    let assembler = PromptAssembler::builtin().unwrap();

    let carousel = assembler
        .assemble_default(&request(FormatId::Carousel), "linkedin")
        .unwrap();
    assert!(carousel.contains("exactly 7 slides"));
    assert!(carousel.contains("1. hook"));
    assert!(carousel.contains("6. tip"));
    assert!(carousel.contains("7. call-to-action"));
    assert!(carousel.contains("\"units\""));

    let reel = assembler
        .assemble_default(&request(FormatId::Reel), "twitter")
        .unwrap();
    assert!(reel.contains("exactly 6 scenes"));
    assert!(reel.contains("Total duration 30 seconds"));
}

#[test]
fn assembly_is_deterministic() {
    let assembler = PromptAssembler::builtin().unwrap();
    let req = request(FormatId::Story);

    let first = assembler.assemble_default(&req, "twitter").unwrap();
    let second = assembler.assemble_default(&req, "twitter").unwrap();
    assert_eq!(first, second);
}

#[test]
fn blank_topic_is_rejected() {
    let assembler = PromptAssembler::builtin().unwrap();
    let req = GenerationRequest::builder()
        .topic("  ")
        .format(FormatId::Post)
        .platform("twitter")
        .build()
        .unwrap();

    let err = assembler.assemble_default(&req, "twitter").unwrap_err();
    assert!(matches!(
        err.kind(),
        MarqueeErrorKind::Request(RequestError {
            kind: RequestErrorKind::BlankTopic,
            ..
        })
    ));
}

#[test]
fn platform_outside_request_is_rejected() {
    let assembler = PromptAssembler::builtin().unwrap();
    let err = assembler
        .assemble_default(&request(FormatId::Post), "tiktok")
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        MarqueeErrorKind::Request(RequestError {
            kind: RequestErrorKind::PlatformNotRequested(_),
            ..
        })
    ));
}

#[test]
fn template_resolution_errors() {
    let templates = TemplateCatalog::builtin().unwrap();

    let unknown = templates.resolve(Some("nope"), FormatId::Post).unwrap_err();
    assert!(matches!(
        unknown.kind(),
        MarqueeErrorKind::Request(RequestError {
            kind: RequestErrorKind::UnknownTemplate(_),
            ..
        })
    ));

    let mismatch = templates
        .resolve(Some("carousel_default"), FormatId::Reel)
        .unwrap_err();
    assert!(mismatch.is_invalid_request());
}

#[test]
fn unknown_placeholder_fails_at_load() {
    let raw = r#"
        [templates.broken]
        name = "Broken"
        formats = ["post"]
        instruction = "Write about {{topic}} for {{audience}}"
        fallback_body = "{{topic}}"
    "#;

    let err = TemplateCatalog::from_toml_str(raw).unwrap_err();
    match err.kind() {
        MarqueeErrorKind::Template(TemplateError {
            kind: TemplateErrorKind::UnknownPlaceholder { template, placeholder },
            ..
        }) => {
            assert_eq!(template, "broken");
            assert_eq!(placeholder, "audience");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn empty_fallback_body_fails_at_load() {
    let raw = r#"
        [templates.empty]
        name = "Empty"
        formats = ["post"]
        instruction = "Write about {{topic}}"
        fallback_body = "  "
    "#;

    assert!(TemplateCatalog::from_toml_str(raw).is_err());
}

#[test]
fn user_file_extends_bundled_catalogs() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[tones]
urgent = "Say it like the doors close at midnight."

[templates.post_default]
name = "House style post"
formats = ["post"]
instruction = "Write a house-style post on {{{{topic}}}}."
fallback_body = "{{{{topic}}}} from the team."

[templates.webinar]
name = "Webinar"
formats = ["post", "story"]
instruction = "Invite people to a webinar on {{{{topic}}}}."
fallback_body = "Join our webinar on {{{{topic}}}}."
"#
    )
    .unwrap();

    let (templates, tones) = load_catalogs(Some(file.path())).unwrap();

    assert_eq!(
        templates.get("post_default").unwrap().name(),
        "House style post"
    );
    assert!(templates.get("webinar").is_some());
    assert!(templates.get("carousel_default").is_some());
    assert!(tones.guidance(Tone::Urgent).contains("midnight"));
    assert!(tones.guidance(Tone::Friendly).contains("warm"));
}

#[test]
fn missing_user_file_is_an_error() {
    let result = load_catalogs(Some(std::path::Path::new("/nonexistent/templates.toml")));
    assert!(result.is_err());
}
