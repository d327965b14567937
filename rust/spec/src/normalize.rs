// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Specification normalization
//!
//! The single gate between raw prompt-translator output and the geometry
//! builder. Required fields are enforced here and nowhere else; the builder
//! receives a fully populated structure and never applies its own defaults
//! for structural dimensions.
//!
//! Validation is aggregating: every problem in the spec is collected and
//! reported in one error so the caller can fix them all in one pass.

use crate::error::{SpecValidationError, ValidationIssue};
use crate::schema::{RawBuildingSpec, RawObject};
use crate::units::UnitSystem;
use serde_json::Value;
use tracing::debug;

/// Upper bound on story count. Beyond this the spec is treated as
/// pathological rather than attempting unbounded allocation.
pub const MAX_STORIES: u32 = 200;

/// Upper bound on any linear dimension, in meters.
pub const MAX_DIMENSION_METERS: f64 = 10_000.0;

/// Upper bound on a single object's requested count.
pub const MAX_OBJECT_COUNT: u32 = 10_000;

/// Fully validated specification with all linear dimensions in meters.
///
/// Invariant: `width`, `depth` and `height` are strictly positive and
/// finite, `stories >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSpec {
    pub design_type: String,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub stories: u32,
    /// Unit system the caller declared, kept for diagnostics only.
    pub units_original: UnitSystem,
    pub objects: Vec<NormalizedObject>,
}

impl NormalizedSpec {
    /// Height of one story in meters.
    #[inline]
    pub fn per_story_height(&self) -> f64 {
        self.height / self.stories as f64
    }
}

/// A validated object request.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedObject {
    pub kind: String,
    pub id: String,
    pub subtype: String,
    pub count: u32,
    pub dimensions: Option<ObjectDimensions>,
}

/// Per-object dimensions in meters. Absent fields fall back to the
/// primitive generator's defaults downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObjectDimensions {
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub height: Option<f64>,
    pub thickness: Option<f64>,
}

/// Normalize a raw specification.
///
/// Pure function: no I/O, and logging here never affects behavior.
pub fn normalize(raw: &RawBuildingSpec) -> Result<NormalizedSpec, SpecValidationError> {
    let mut issues = Vec::new();

    let design_type = match raw.design_type.as_deref() {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        Some(s) => {
            issues.push(ValidationIssue::InvalidDimension {
                key: "design_type".to_string(),
                value: format!("{:?}", s),
            });
            String::new()
        }
        None => {
            issues.push(ValidationIssue::MissingKey("design_type".to_string()));
            String::new()
        }
    };

    let units_original = match raw.units.as_deref() {
        None => UnitSystem::default(),
        Some(label) => UnitSystem::parse(label).unwrap_or_else(|| {
            issues.push(ValidationIssue::InvalidDimension {
                key: "units".to_string(),
                value: label.to_string(),
            });
            UnitSystem::default()
        }),
    };
    // The only place the unit conversion happens; everything downstream is meters.
    let scale = units_original.to_meters_scale();

    let (width, depth, height) = match &raw.dimensions {
        Some(dims) => (
            require_dimension(&mut issues, "width", dims.width.as_ref(), scale),
            require_dimension(&mut issues, "depth", dims.depth.as_ref(), scale),
            require_dimension(&mut issues, "height", dims.height.as_ref(), scale),
        ),
        None => {
            issues.push(ValidationIssue::MissingKey("dimensions".to_string()));
            (0.0, 0.0, 0.0)
        }
    };

    let stories = normalize_stories(&mut issues, raw.stories.as_ref());

    let objects = raw
        .objects
        .iter()
        .enumerate()
        .map(|(i, obj)| normalize_object(&mut issues, i, obj, scale))
        .collect();

    if !issues.is_empty() {
        return Err(SpecValidationError::new(issues));
    }

    debug!(
        design_type = %design_type,
        width, depth, height, stories,
        "spec normalized"
    );

    Ok(NormalizedSpec {
        design_type,
        width,
        depth,
        height,
        stories,
        units_original,
        objects,
    })
}

/// Resolve one required dimension to meters, recording issues instead of
/// short-circuiting. Returns 0.0 as a placeholder on failure; the caller
/// never constructs a `NormalizedSpec` when any issue was recorded.
fn require_dimension(
    issues: &mut Vec<ValidationIssue>,
    key: &str,
    value: Option<&Value>,
    scale: f64,
) -> f64 {
    let Some(value) = value else {
        issues.push(ValidationIssue::MissingKey(key.to_string()));
        return 0.0;
    };

    let Some(number) = value.as_f64() else {
        issues.push(ValidationIssue::InvalidDimension {
            key: key.to_string(),
            value: value.to_string(),
        });
        return 0.0;
    };

    if !number.is_finite() || number <= 0.0 {
        issues.push(ValidationIssue::InvalidDimension {
            key: key.to_string(),
            value: number.to_string(),
        });
        return 0.0;
    }

    let meters = number * scale;
    if meters > MAX_DIMENSION_METERS {
        issues.push(ValidationIssue::DimensionOutOfBounds {
            key: key.to_string(),
            value: meters,
            limit: MAX_DIMENSION_METERS,
        });
        return 0.0;
    }

    meters
}

/// `stories` defaults to 1 only when entirely absent. A value the caller
/// attempted to supply is validated, never silently substituted.
fn normalize_stories(issues: &mut Vec<ValidationIssue>, value: Option<&Value>) -> u32 {
    let Some(value) = value else {
        return 1;
    };

    let Some(stories) = value.as_u64() else {
        issues.push(ValidationIssue::InvalidDimension {
            key: "stories".to_string(),
            value: value.to_string(),
        });
        return 1;
    };

    if stories == 0 {
        issues.push(ValidationIssue::InvalidDimension {
            key: "stories".to_string(),
            value: "0".to_string(),
        });
        return 1;
    }

    if stories > MAX_STORIES as u64 {
        issues.push(ValidationIssue::DimensionOutOfBounds {
            key: "stories".to_string(),
            value: stories as f64,
            limit: MAX_STORIES as f64,
        });
        return 1;
    }

    stories as u32
}

fn normalize_object(
    issues: &mut Vec<ValidationIssue>,
    index: usize,
    obj: &RawObject,
    scale: f64,
) -> NormalizedObject {
    let count = obj.count.unwrap_or(1);
    if count > MAX_OBJECT_COUNT {
        issues.push(ValidationIssue::DimensionOutOfBounds {
            key: format!("objects[{}].count", index),
            value: count as f64,
            limit: MAX_OBJECT_COUNT as f64,
        });
    }

    let dimensions = obj.dimensions.map(|d| ObjectDimensions {
        width: d.width.map(|v| v * scale),
        depth: d.depth.map(|v| v * scale),
        height: d.height.map(|v| v * scale),
        thickness: d.thickness.map(|v| v * scale),
    });

    NormalizedObject {
        kind: obj.kind.clone(),
        id: obj.id.clone(),
        subtype: obj.subtype.clone(),
        count,
        dimensions,
    }
}
