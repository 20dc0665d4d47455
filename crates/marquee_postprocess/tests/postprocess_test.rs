use marquee_catalog::PlatformRuleTable;
use marquee_core::{EmojiDensity, PlatformRule};
use marquee_postprocess::{
    ContentPostProcessor, ELLIPSIS, count_emoji, emoji_clusters, limit_emoji, process_with_rule,
    truncate_chars,
};
use proptest::prelude::*;
use std::sync::Arc;

fn processor() -> ContentPostProcessor {
    ContentPostProcessor::new(Arc::new(PlatformRuleTable::builtin()))
}

fn tags(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|t| t.to_string()).collect()
}

#[test]
fn twitter_long_body_is_truncated_with_ellipsis() {
    let body = "Marketing teams ship faster with clear briefs. ".repeat(9);
    let body = &body[..400];
    assert_eq!(body.chars().count(), 400);

    let out = processor().process(body, &[], "twitter");

    assert!(out.body.chars().count() <= 280);
    assert!(out.body.ends_with(ELLIPSIS));
    let kept = out.body.trim_end_matches(ELLIPSIS);
    assert!(body.starts_with(kept));
    assert!(body[kept.len()..].starts_with(char::is_whitespace));
}

#[test]
fn short_body_is_unchanged() {
    let out = processor().process("Short and sweet", &[], "twitter");
    assert_eq!(out.body, "Short and sweet");
}

#[test]
fn no_whitespace_in_range_yields_ellipsis_only() {
    assert_eq!(truncate_chars(&"a".repeat(300), 280), "…");
}

#[test]
fn zero_limit_yields_empty_body() {
    assert_eq!(truncate_chars("anything at all", 0), "");
}

#[test]
fn hashtags_are_capped_in_order() {
    let out = processor().process("Body", &tags(&["#one", "#two", "#three"]), "twitter");
    assert_eq!(out.hashtags, tags(&["#one", "#two"]));

    let email = processor().process("Body", &tags(&["#one"]), "email");
    assert!(email.hashtags.is_empty());
}

#[test]
fn denylisted_hashtags_are_dropped_before_capping() {
    let rule = PlatformRule::new("test", 100, 2, EmojiDensity::High)
        .with_hashtag_denylist(tags(&["spam"]));
    let out = process_with_rule("Body", &tags(&["#Spam", "#a", "#b", "#c"]), &rule);
    assert_eq!(out.hashtags, tags(&["#a", "#b"]));
}

#[test]
fn email_strips_every_emoji() {
    let out = processor().process("Big news 🎉 our launch 🚀 is here ❤️", &[], "email");
    assert_eq!(out.body, "Big news our launch is here");
    assert_eq!(count_emoji(&out.body), 0);
}

#[test]
fn low_density_keeps_two_clusters() {
    let out = processor().process("One 👍 two 👍🏽 three 👨‍👩‍👧 four 🇯🇵", &[], "linkedin");
    assert_eq!(out.body, "One 👍 two 👍🏽 three four");
}

#[test]
fn high_density_passes_through() {
    let body = "Fire 🔥🔥🔥 sale";
    assert_eq!(processor().process(body, &[], "instagram").body, body);
}

#[test]
fn clusters_cover_whole_sequences() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let keycap = "1\u{FE0F}\u{20E3}";
    let scotland = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}";
    let sun = "\u{2600}\u{FE0F}";
    let heart = "\u{2764}";
    let text = format!("a{family}b{keycap}c{scotland}d{sun}e{heart}f");

    let found: Vec<&str> = emoji_clusters(&text).into_iter().map(|r| &text[r]).collect();
    assert_eq!(found, vec![family, keycap, scotland, sun, heart]);
    assert_eq!(limit_emoji(&text, 0), "abcdef");
}

#[test]
fn text_symbols_are_not_emoji() {
    assert_eq!(count_emoji("Acme™ © 2026 #1 ✓"), 0);
}

#[test]
fn lone_regional_indicator_takes_its_marks_along() {
    let rule = PlatformRule::new("test", 500, 0, EmojiDensity::None);

    let keycap = process_with_rule("Call 1\u{1F1EE}\u{20E3} now", &[], &rule);
    assert_eq!(keycap.body, "Call 1 now");
    assert_eq!(process_with_rule(&keycap.body, &[], &rule).body, keycap.body);

    let selector = process_with_rule("Acme\u{A9}\u{1F1EE}\u{FE0F} rocks", &[], &rule);
    assert_eq!(selector.body, "Acme\u{A9} rocks");
    assert_eq!(count_emoji(&selector.body), 0);
}

#[test]
fn stray_marks_are_dropped_with_removed_emoji() {
    let text = "Go\u{FE0F} now \u{1F680} \u{20E3}x\u{E0067}";
    assert_eq!(limit_emoji(text, 0), "Go now x");
    assert_eq!(limit_emoji("Plain\u{FE0F} text", 0), "Plain\u{FE0F} text");
}

#[test]
fn geometric_emoji_are_stripped() {
    let out = processor().process("Agenda \u{25FE} item \u{25FD} done", &[], "email");
    assert_eq!(out.body, "Agenda item done");
}

fn rule_strategy() -> impl Strategy<Value = PlatformRule> {
    (
        0usize..300,
        0usize..6,
        prop_oneof![
            Just(EmojiDensity::None),
            Just(EmojiDensity::Low),
            Just(EmojiDensity::Medium),
            Just(EmojiDensity::High),
        ],
    )
        .prop_map(|(max_chars, max_hashtags, density)| {
            PlatformRule::new("prop", max_chars, max_hashtags, density)
                .with_hashtag_denylist(vec!["banned".to_string()])
        })
}

fn body_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,12}",
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("🚀".to_string()),
            Just("👍🏽".to_string()),
            Just("🇮🇹".to_string()),
            Just("👩‍💻".to_string()),
            Just("é".to_string()),
            Just("1".to_string()),
            Just("\u{A9}".to_string()),
            Just("\u{1F1EE}".to_string()),
            Just("\u{FE0F}".to_string()),
            Just("\u{FE0E}".to_string()),
            Just("\u{20E3}".to_string()),
            Just("\u{200D}".to_string()),
            Just("\u{1F3FD}".to_string()),
            Just("\u{E0067}".to_string()),
            Just("\u{25FE}".to_string()),
        ],
        0..80,
    )
    .prop_map(|parts| parts.concat())
}

fn hashtag_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof!["#[a-z]{1,8}", Just("#banned".to_string())],
        0..10,
    )
}

proptest! {
    #[test]
    fn body_never_exceeds_limit(body in body_strategy(), hashtags in hashtag_strategy(), rule in rule_strategy()) {
        let out = process_with_rule(&body, &hashtags, &rule);
        prop_assert!(out.body.chars().count() <= *rule.max_chars());
    }

    #[test]
    fn hashtags_are_capped_prefix(body in body_strategy(), hashtags in hashtag_strategy(), rule in rule_strategy()) {
        let out = process_with_rule(&body, &hashtags, &rule);
        let allowed: Vec<String> = hashtags.iter().filter(|t| !rule.is_denied(t)).cloned().collect();
        prop_assert!(out.hashtags.len() <= *rule.max_hashtags());
        prop_assert_eq!(&out.hashtags[..], &allowed[..out.hashtags.len()]);
    }

    #[test]
    fn truncation_never_splits_words(body in body_strategy(), max_chars in 1usize..300) {
        let out = truncate_chars(&body, max_chars);
        if out != body {
            prop_assert!(out.ends_with(ELLIPSIS));
            let kept = out.trim_end_matches(ELLIPSIS);
            prop_assert!(body.starts_with(kept));
            if !kept.is_empty() {
                prop_assert!(body[kept.len()..].starts_with(char::is_whitespace));
            }
        }
    }

    #[test]
    fn no_emoji_policy_leaves_no_emoji(body in body_strategy()) {
        let rule = PlatformRule::new("prop", 1000, 0, EmojiDensity::None);
        let out = process_with_rule(&body, &[], &rule);
        prop_assert_eq!(count_emoji(&out.body), 0);
    }

    #[test]
    fn processing_is_idempotent(body in body_strategy(), hashtags in hashtag_strategy(), rule in rule_strategy()) {
        let once = process_with_rule(&body, &hashtags, &rule);
        let twice = process_with_rule(&once.body, &once.hashtags, &rule);
        prop_assert_eq!(once, twice);
    }
}
