//! Unit normalisation for sequenced formats.

use marquee_catalog::FormatRegistry;
use marquee_core::{FormatId, Unit, UnitKind, UnitRole};
use tracing::debug;

/// Brings generator units into the shape the format requires.
///
/// Output always has exactly `count` units with ordinals `1..=count`, a hook
/// first and, where the format requires one, a single terminal CTA.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitSequencer {
    formats: FormatRegistry,
}

impl UnitSequencer {
    /// Create a sequencer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort, trim, pad, renumber and assign roles.
    ///
    /// Missing units are taken from `padding` by position; scene durations
    /// left empty get an even share of `total_duration`. Flat formats yield
    /// no units.
    pub fn normalize(
        &self,
        format: FormatId,
        mut units: Vec<Unit>,
        count: u32,
        total_duration: Option<u32>,
        padding: &[Unit],
    ) -> Vec<Unit> {
        let descriptor = self.formats.get(format);
        let Some(unit_kind) = descriptor.unit_kind() else {
            return Vec::new();
        };

        let count = count as usize;
        units.sort_by_key(|unit| unit.ordinal);
        units.truncate(count);

        let generated = units.len();
        while units.len() < count {
            let position = units.len();
            let pad = padding.get(position).cloned().unwrap_or_else(|| {
                Unit::new(0, UnitRole::Content, format!("Part {}", position + 1))
            });
            units.push(pad);
        }
        if generated < count {
            debug!(generated, count, "Padded units from fallback");
        }

        let roles = self.formats.role_plan(format, count as u32);
        let per_scene = total_duration.map(|total| total / (count.max(1) as u32));

        for (index, (unit, role)) in units.iter_mut().zip(roles).enumerate() {
            unit.ordinal = index as u32 + 1;
            unit.role = role;
            if unit_kind == UnitKind::Scene {
                if unit.duration_seconds.is_none() {
                    unit.duration_seconds = per_scene;
                }
            } else {
                unit.duration_seconds = None;
            }
        }
        units
    }
}
