//! `{{placeholder}}` substitution for template patterns.

use marquee_error::{TemplateError, TemplateErrorKind};
use regex::Regex;

/// Placeholder names a pattern may reference.
pub const PLACEHOLDERS: [&str; 4] = ["topic", "brand", "platform", "tone"];

/// Values substituted into template patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaceholderValues<'a> {
    /// Literal topic
    pub topic: &'a str,
    /// Brand context, empty when absent
    pub brand: &'a str,
    /// Platform key
    pub platform: &'a str,
    /// Effective tone name
    pub tone: &'a str,
}

impl<'a> PlaceholderValues<'a> {
    fn lookup(&self, name: &str) -> Option<&'a str> {
        match name {
            "topic" => Some(self.topic),
            "brand" => Some(self.brand),
            "platform" => Some(self.platform),
            "tone" => Some(self.tone),
            _ => None,
        }
    }
}

fn placeholder_regex() -> Result<Regex, TemplateError> {
    Regex::new(r"\{\{\s*([^}]*?)\s*\}\}").map_err(|e| {
        TemplateError::new(TemplateErrorKind::Parse(format!(
            "Invalid placeholder regex: {}",
            e
        )))
    })
}

/// Names referenced by `pattern`, in order of appearance.
pub fn placeholders(pattern: &str) -> Result<Vec<String>, TemplateError> {
    let re = placeholder_regex()?;
    Ok(re
        .captures_iter(pattern)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect())
}

/// Fail if `pattern` references a placeholder outside [`PLACEHOLDERS`].
pub fn check_placeholders(template_id: &str, pattern: &str) -> Result<(), TemplateError> {
    match placeholders(pattern)?
        .into_iter()
        .find(|name| !PLACEHOLDERS.contains(&name.as_str()))
    {
        Some(placeholder) => Err(TemplateError::new(TemplateErrorKind::UnknownPlaceholder {
            template: template_id.to_string(),
            placeholder,
        })),
        None => Ok(()),
    }
}

/// Substitute every placeholder in `pattern`.
///
/// # Errors
///
/// Fails with `UnknownPlaceholder` on the first unrecognised name.
///
/// # Example
///
/// ```
/// use marquee_prompt::{render, PlaceholderValues};
///
/// let values = PlaceholderValues { topic: "Spring sale", platform: "twitter", ..Default::default() };
/// let text = render("post_default", "{{ topic }} on {{platform}}", &values).unwrap();
/// assert_eq!(text, "Spring sale on twitter");
/// ```
pub fn render(
    template_id: &str,
    pattern: &str,
    values: &PlaceholderValues<'_>,
) -> Result<String, TemplateError> {
    let re = placeholder_regex()?;
    let mut rendered = String::with_capacity(pattern.len());
    let mut last = 0;

    for cap in re.captures_iter(pattern) {
        let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        let value = values.lookup(name.as_str()).ok_or_else(|| {
            TemplateError::new(TemplateErrorKind::UnknownPlaceholder {
                template: template_id.to_string(),
                placeholder: name.as_str().to_string(),
            })
        })?;
        rendered.push_str(&pattern[last..whole.start()]);
        rendered.push_str(value);
        last = whole.end();
    }
    rendered.push_str(&pattern[last..]);

    Ok(rendered)
}
