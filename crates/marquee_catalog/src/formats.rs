//! Format registry.
//!
//! Format shapes are compiled in. Changing a shape is a release concern, not
//! runtime configuration.

use marquee_core::{ContentFormat, FormatId, FormatKind, UnitKind, UnitRole};
use marquee_error::{MarqueeResult, RequestError, RequestErrorKind};
use tracing::{debug, instrument};

/// Scene counts derived from a duration never drop below this.
const MIN_SCENES: u32 = 3;
/// Scene counts derived from a duration never exceed this.
const MAX_SCENES: u32 = 12;

static FORMATS: [ContentFormat; 5] = [
    ContentFormat {
        id: FormatId::Post,
        kind: FormatKind::Flat,
        default_unit_count: None,
        default_duration: None,
        override_range: None,
        seconds_per_scene: None,
        requires_cta: false,
        includes_tip: false,
        features: &["single body text", "hashtags", "cover image prompt"],
        platforms: &[
            "instagram", "facebook", "linkedin", "twitter", "threads", "pinterest", "email",
        ],
    },
    ContentFormat {
        id: FormatId::Story,
        kind: FormatKind::Sequenced(UnitKind::Slide),
        default_unit_count: Some(3),
        default_duration: None,
        override_range: Some((1, 10)),
        seconds_per_scene: None,
        requires_cta: true,
        includes_tip: false,
        features: &["vertical frames", "sticker suggestions", "text overlays", "swipe-up CTA"],
        platforms: &["instagram", "facebook"],
    },
    ContentFormat {
        id: FormatId::Carousel,
        kind: FormatKind::Sequenced(UnitKind::Slide),
        default_unit_count: Some(7),
        default_duration: None,
        override_range: Some((3, 10)),
        seconds_per_scene: None,
        requires_cta: true,
        includes_tip: true,
        features: &["hook slide", "one idea per slide", "tip slide", "closing CTA slide"],
        platforms: &["instagram", "linkedin", "facebook"],
    },
    ContentFormat {
        id: FormatId::Reel,
        kind: FormatKind::Sequenced(UnitKind::Scene),
        default_unit_count: None,
        default_duration: Some(30),
        override_range: Some((15, 90)),
        seconds_per_scene: Some(5),
        requires_cta: true,
        includes_tip: false,
        features: &["vertical short video", "on-screen text", "hook in first seconds", "caption"],
        platforms: &["instagram", "tiktok", "youtube", "facebook"],
    },
    ContentFormat {
        id: FormatId::Video,
        kind: FormatKind::Sequenced(UnitKind::Scene),
        default_unit_count: None,
        default_duration: Some(180),
        override_range: Some((60, 1200)),
        seconds_per_scene: Some(30),
        requires_cta: true,
        includes_tip: false,
        features: &["long-form script", "chapters", "thumbnail prompt", "description"],
        platforms: &["youtube", "facebook", "linkedin"],
    },
];

/// Read-only catalog of the five content formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatRegistry;

impl FormatRegistry {
    /// Create the registry.
    pub fn new() -> Self {
        Self
    }

    /// All formats in declaration order.
    pub fn all(&self) -> &'static [ContentFormat] {
        &FORMATS
    }

    /// Format for a typed id. Cannot fail.
    pub fn get(&self, id: FormatId) -> &'static ContentFormat {
        match id {
            FormatId::Post => &FORMATS[0],
            FormatId::Story => &FORMATS[1],
            FormatId::Carousel => &FORMATS[2],
            FormatId::Reel => &FORMATS[3],
            FormatId::Video => &FORMATS[4],
        }
    }

    /// Describe a format by its string id.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownFormat` if the id is not one of the five formats.
    pub fn describe(&self, id: &str) -> MarqueeResult<&'static ContentFormat> {
        Ok(self.get(FormatId::parse(id)?))
    }

    /// Whether the format is made of slides or scenes.
    pub fn is_sequenced(&self, id: &str) -> MarqueeResult<bool> {
        Ok(self.describe(id)?.is_sequenced())
    }

    /// Default slide count, `None` for flat and scene formats.
    pub fn default_unit_count(&self, id: &str) -> MarqueeResult<Option<u32>> {
        Ok(self.describe(id)?.default_unit_count)
    }

    /// Default duration in seconds, `None` for flat and slide formats.
    pub fn default_duration(&self, id: &str) -> MarqueeResult<Option<u32>> {
        Ok(self.describe(id)?.default_duration)
    }

    /// Check structural overrides against the format's bounds.
    ///
    /// Slide formats accept only `slides`, scene formats only
    /// `duration_seconds`, flat formats neither.
    ///
    /// # Errors
    ///
    /// Returns `OverrideNotApplicable` or `OverrideOutOfRange`.
    pub fn validate_overrides(
        &self,
        id: FormatId,
        slides: Option<u32>,
        duration_seconds: Option<u32>,
    ) -> MarqueeResult<()> {
        let format = self.get(id);
        let unit_kind = format.unit_kind();

        if let Some(value) = slides {
            if unit_kind != Some(UnitKind::Slide) {
                return Err(not_applicable("slides", id).into());
            }
            check_range("slides", format, value)?;
        }

        if let Some(value) = duration_seconds {
            if unit_kind != Some(UnitKind::Scene) {
                return Err(not_applicable("duration_seconds", id).into());
            }
            check_range("duration_seconds", format, value)?;
        }

        Ok(())
    }

    /// Total duration a scene format produces, override first.
    pub fn resolve_duration(&self, id: FormatId, duration_seconds: Option<u32>) -> Option<u32> {
        let format = self.get(id);
        match format.unit_kind() {
            Some(UnitKind::Scene) => duration_seconds.or(format.default_duration),
            _ => None,
        }
    }

    /// Number of units a request produces; `None` for flat formats.
    ///
    /// Scene counts are `ceil(duration / seconds_per_scene)` clamped to
    /// 3..=12.
    #[instrument(skip(self))]
    pub fn resolve_unit_count(
        &self,
        id: FormatId,
        slides: Option<u32>,
        duration_seconds: Option<u32>,
    ) -> Option<u32> {
        let format = self.get(id);
        let count = match format.unit_kind()? {
            UnitKind::Slide => slides.or(format.default_unit_count)?,
            UnitKind::Scene => {
                let duration = self.resolve_duration(id, duration_seconds)?;
                let per_scene = format.seconds_per_scene.unwrap_or(duration).max(1);
                duration.div_ceil(per_scene).clamp(MIN_SCENES, MAX_SCENES)
            }
        };
        debug!(count, "Resolved unit count");
        Some(count)
    }

    /// Ordered roles for a sequence of `count` units.
    ///
    /// The first unit is the hook. When the format requires a CTA the last
    /// unit is the only CTA, and formats with a tip place it just before.
    ///
    /// # Example
    ///
    /// ```
    /// use marquee_catalog::FormatRegistry;
    /// use marquee_core::{FormatId, UnitRole};
    ///
    /// let plan = FormatRegistry::new().role_plan(FormatId::Carousel, 5);
    /// assert_eq!(
    ///     plan,
    ///     vec![UnitRole::Hook, UnitRole::Content, UnitRole::Content, UnitRole::Tip, UnitRole::Cta]
    /// );
    /// ```
    pub fn role_plan(&self, id: FormatId, count: u32) -> Vec<UnitRole> {
        let format = self.get(id);
        if !format.is_sequenced() || count == 0 {
            return Vec::new();
        }
        if count == 1 {
            return vec![UnitRole::Hook];
        }

        let count = count as usize;
        let mut plan = vec![UnitRole::Content; count];
        plan[0] = UnitRole::Hook;
        if format.requires_cta {
            plan[count - 1] = UnitRole::Cta;
            if format.includes_tip && count >= 4 {
                plan[count - 2] = UnitRole::Tip;
            }
        }
        plan
    }
}

#[track_caller]
fn not_applicable(field: &str, id: FormatId) -> RequestError {
    RequestError::new(RequestErrorKind::OverrideNotApplicable {
        field: field.to_string(),
        format: id.to_string(),
    })
}

#[track_caller]
fn check_range(field: &str, format: &ContentFormat, value: u32) -> Result<(), RequestError> {
    let Some((min, max)) = format.override_range else {
        return Err(not_applicable(field, format.id));
    };
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RequestError::new(RequestErrorKind::OverrideOutOfRange {
            field: field.to_string(),
            format: format.id.to_string(),
            value,
            min,
            max,
        }))
    }
}
