//! Emoji cluster detection.
//!
//! A cluster is everything a reader perceives as one emoji: the base
//! pictograph plus variation selectors, skin-tone modifiers, keycap marks,
//! tag sequences and any ZWJ-joined pictographs. Regional indicator pairs
//! form flags. Removing whole clusters guarantees no orphaned modifier or
//! joiner survives.

use std::ops::Range;

const ZWJ: char = '\u{200D}';
const VS15: char = '\u{FE0E}';
const VS16: char = '\u{FE0F}';
const KEYCAP: char = '\u{20E3}';

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

fn is_skin_tone(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

fn is_tag(c: char) -> bool {
    ('\u{E0020}'..='\u{E007F}').contains(&c)
}

fn is_keycap_base(c: char) -> bool {
    c.is_ascii_digit() || c == '#' || c == '*'
}

/// Trailing code points that belong to the preceding pictograph.
fn is_component(c: char) -> bool {
    c == VS15 || c == VS16 || c == KEYCAP || is_skin_tone(c) || is_tag(c)
}

fn in_pictograph_plane(c: char) -> bool {
    ('\u{1F000}'..='\u{1FAFF}').contains(&c)
}

/// Symbol blocks that mix emoji with plain text symbols.
fn in_symbol_block(c: char) -> bool {
    matches!(
        c as u32,
        0x231A..=0x23FF | 0x25A0..=0x25FF | 0x2600..=0x27BF | 0x2B00..=0x2BFF
    )
}

fn has_emoji_form(single: &str) -> bool {
    if emojis::get(single).is_some() {
        return true;
    }
    let mut qualified = String::with_capacity(single.len() + VS16.len_utf8());
    qualified.push_str(single);
    qualified.push(VS16);
    emojis::get(&qualified).is_some()
}

/// Whether `c` starts a pictographic cluster given the code point after it.
///
/// Text-presentation symbols such as `©` or `™` only count when followed by
/// VS16.
fn is_pictograph(c: char, next: Option<char>) -> bool {
    if in_pictograph_plane(c) {
        return true;
    }
    let mut buf = [0u8; 4];
    let single = c.encode_utf8(&mut buf);
    if next == Some(VS16) || in_symbol_block(c) {
        return has_emoji_form(single);
    }
    false
}

/// Byte ranges of every emoji cluster in `text`, in order.
///
/// # Example
///
/// ```
/// use marquee_postprocess::emoji_clusters;
///
/// let text = "Team 👩🏽‍💻 ships 🇮🇹!";
/// let clusters: Vec<&str> = emoji_clusters(text).into_iter().map(|r| &text[r]).collect();
/// assert_eq!(clusters, vec!["👩🏽‍💻", "🇮🇹"]);
/// ```
pub fn emoji_clusters(text: &str) -> Vec<Range<usize>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let end_of = |i: usize| chars.get(i).map(|(at, _)| *at).unwrap_or(text.len());
    let char_at = |i: usize| chars.get(i).map(|(_, c)| *c);

    let mut clusters = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let (start, c) = chars[i];

        if is_regional_indicator(c) {
            i += if char_at(i + 1).is_some_and(is_regional_indicator) {
                2
            } else {
                1
            };
            while char_at(i).is_some_and(is_component) {
                i += 1;
            }
            clusters.push(start..end_of(i));
            continue;
        }

        if is_keycap_base(c) {
            let keycap_len = match (char_at(i + 1), char_at(i + 2)) {
                (Some(VS16), Some(KEYCAP)) => Some(3),
                (Some(KEYCAP), _) => Some(2),
                _ => None,
            };
            if let Some(len) = keycap_len {
                i += len;
                clusters.push(start..end_of(i));
                continue;
            }
        }

        if !is_keycap_base(c) && is_pictograph(c, char_at(i + 1)) {
            i += 1;
            loop {
                while char_at(i).is_some_and(is_component) {
                    i += 1;
                }
                match (char_at(i), char_at(i + 1)) {
                    (Some(ZWJ), Some(next)) if is_pictograph(next, char_at(i + 2)) => i += 2,
                    _ => break,
                }
            }
            clusters.push(start..end_of(i));
            continue;
        }

        i += 1;
    }
    clusters
}

/// Number of emoji clusters in `text`.
pub fn count_emoji(text: &str) -> usize {
    emoji_clusters(text).len()
}

/// Keep the first `keep` emoji clusters and remove the rest.
///
/// A space or tab immediately before a removed cluster is dropped with it.
/// When anything is removed, stray variation selectors, keycap marks and tag
/// characters outside any cluster go too.
///
/// # Example
///
/// ```
/// use marquee_postprocess::limit_emoji;
///
/// assert_eq!(limit_emoji("Launch 🚀 day 🎉 now ✨", 1), "Launch 🚀 day now");
/// assert_eq!(limit_emoji("No emoji 👍", 0), "No emoji");
/// assert_eq!(limit_emoji("Call 1\u{1F1EE}\u{20E3} now", 0), "Call 1 now");
/// ```
pub fn limit_emoji(text: &str, keep: usize) -> String {
    let clusters = emoji_clusters(text);
    if clusters.len() <= keep {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (index, range) in clusters.into_iter().enumerate() {
        push_without_components(&mut out, &text[last..range.start]);
        if index < keep {
            out.push_str(&text[range.clone()]);
        } else if out.ends_with([' ', '\t']) {
            out.pop();
        }
        last = range.end;
    }
    push_without_components(&mut out, &text[last..]);
    out
}

/// Text between clusters; any component here has lost its base.
fn push_without_components(out: &mut String, segment: &str) {
    out.extend(segment.chars().filter(|c| !is_component(*c)));
}
