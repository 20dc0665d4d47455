//! Catalog listing commands.

use marquee::{FormatRegistry, JsonError, MarqueeConfig, MarqueeResult, PlatformRule};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> MarqueeResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new("listing", e))?;
    println!("{}", json);
    Ok(())
}

/// List the content formats.
pub fn handle_formats(json: bool) -> MarqueeResult<()> {
    let formats = FormatRegistry::new().all();
    if json {
        return print_json(formats);
    }

    println!("{:<10} {:<10} {:<18} PLATFORMS", "FORMAT", "UNITS", "DEFAULT");
    for format in formats {
        let units = format
            .unit_kind()
            .map(|kind| format!("{}s", kind))
            .unwrap_or_else(|| "single".to_string());
        let default = match (format.default_unit_count, format.default_duration) {
            (Some(count), _) => format!("{} units", count),
            (None, Some(seconds)) => format!("{} seconds", seconds),
            (None, None) => "-".to_string(),
        };
        println!(
            "{:<10} {:<10} {:<18} {}",
            format.id.to_string(),
            units,
            default,
            format.platforms.join(", ")
        );
    }
    Ok(())
}

/// List platform rules after configuration overrides.
pub fn handle_platforms(config: &MarqueeConfig, json: bool) -> MarqueeResult<()> {
    let table = config.rule_table();
    let rules: Vec<&PlatformRule> = table.iter().collect();
    if json {
        return print_json(&rules);
    }

    println!(
        "{:<12} {:>9} {:>9} {:<8} TONE",
        "PLATFORM", "MAX_CHARS", "HASHTAGS", "EMOJI"
    );
    for rule in rules {
        let tone = rule
            .tone_override()
            .as_ref()
            .map(|tone| tone.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<12} {:>9} {:>9} {:<8} {}",
            rule.platform(),
            rule.max_chars(),
            rule.max_hashtags(),
            rule.emoji_density().to_string(),
            tone
        );
    }
    Ok(())
}
