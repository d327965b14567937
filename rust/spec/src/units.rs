// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit systems and conversion to meters
//!
//! All geometry downstream of the normalizer works in meters. The scale
//! factor is applied exactly once, during normalization.

use serde::{Deserialize, Serialize};

/// Meters per foot.
pub const FEET_TO_METERS: f64 = 0.3048;

/// Unit system a raw specification declares its linear dimensions in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Meters,
    Feet,
}

impl UnitSystem {
    /// Parse a unit label. Accepts the common short forms.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "meters" | "metres" | "m" => Some(Self::Meters),
            "feet" | "ft" => Some(Self::Feet),
            _ => None,
        }
    }

    /// Scale factor converting a linear dimension in this system to meters.
    #[inline]
    pub fn to_meters_scale(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Feet => FEET_TO_METERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_labels() {
        assert_eq!(UnitSystem::parse("meters"), Some(UnitSystem::Meters));
        assert_eq!(UnitSystem::parse("Feet"), Some(UnitSystem::Feet));
        assert_eq!(UnitSystem::parse(" ft "), Some(UnitSystem::Feet));
        assert_eq!(UnitSystem::parse("furlongs"), None);
    }

    #[test]
    fn test_feet_scale() {
        assert_relative_eq!(30.0 * UnitSystem::Feet.to_meters_scale(), 9.144, epsilon = 1e-12);
        assert_relative_eq!(UnitSystem::Meters.to_meters_scale(), 1.0);
    }
}
