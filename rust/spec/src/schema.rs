// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw specification schema
//!
//! JSON-facing types for design specifications as emitted by the prompt
//! translator. Field aliases (`floors` for `stories`, `length`/`d` for
//! `depth`, `w`/`h` short forms) are resolved here, once, by serde; the
//! rest of the pipeline only ever sees the normalized field names.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize helper that keeps `null` distinct from an absent field.
///
/// `Option<T>` folds JSON `null` into `None`, which would make a null
/// dimension indistinguishable from a missing one. Routing through `Value`
/// preserves the difference: absent -> `None`, null -> `Some(Value::Null)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Raw design specification, straight off the wire.
///
/// Every field is optional at this layer; the normalizer decides which are
/// required and reports all violations in one pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBuildingSpec {
    pub design_type: Option<String>,
    pub dimensions: Option<RawDimensions>,
    #[serde(default, deserialize_with = "present", alias = "floors")]
    pub stories: Option<Value>,
    pub units: Option<String>,
    #[serde(default)]
    pub objects: Vec<RawObject>,
}

/// Raw building dimensions in the caller's declared units.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDimensions {
    #[serde(default, deserialize_with = "present", alias = "w")]
    pub width: Option<Value>,
    #[serde(default, deserialize_with = "present", alias = "length", alias = "d")]
    pub depth: Option<Value>,
    #[serde(default, deserialize_with = "present", alias = "h")]
    pub height: Option<Value>,
}

/// A requested object: an opening or furnishing in or on the structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawObject {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub subtype: String,
    pub count: Option<u32>,
    pub dimensions: Option<RawObjectDimensions>,
}

/// Optional per-object dimensions, in the spec's declared units.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawObjectDimensions {
    #[serde(alias = "w")]
    pub width: Option<f64>,
    #[serde(default, alias = "length", alias = "d")]
    pub depth: Option<f64>,
    #[serde(alias = "h")]
    pub height: Option<f64>,
    pub thickness: Option<f64>,
}
