// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property-based tests over randomly generated valid specs.
//!
//! The central invariant: for every mesh the builder can produce, every
//! index the encoder packs is in range, and the index accessor count is
//! exactly three times the face count.

use archmesh_export::encode;
use archmesh_geometry::{build, BuilderConfig};
use archmesh_spec::{NormalizedObject, NormalizedSpec, UnitSystem};
use proptest::prelude::*;

fn arb_object() -> impl Strategy<Value = NormalizedObject> {
    (
        prop::sample::select(vec![
            "window",
            "door",
            "exterior_wall",
            "column",
            "beam",
            "staircase",
            "balcony",
            "sofa",
            "cabinet",
        ]),
        0..=20u32,
    )
        .prop_map(|(kind, count)| NormalizedObject {
            kind: kind.to_string(),
            id: String::new(),
            subtype: String::new(),
            count,
            dimensions: None,
        })
}

fn arb_spec() -> impl Strategy<Value = NormalizedSpec> {
    (
        prop::sample::select(vec![
            "house",
            "row_house",
            "apartment",
            "villa",
            "flat_house",
            "townhouse",
            "kitchen",
            "spaceship",
        ]),
        3.0..60.0f64,
        3.0..60.0f64,
        2.5..40.0f64,
        1..=10u32,
        prop::collection::vec(arb_object(), 0..=4),
    )
        .prop_map(
            |(design_type, width, depth, height, stories, objects)| NormalizedSpec {
                design_type: design_type.to_string(),
                width,
                depth,
                height,
                stories,
                units_original: UnitSystem::Meters,
                objects,
            },
        )
}

proptest! {
    #[test]
    fn every_packed_index_is_in_range(spec in arb_spec()) {
        let mesh = build(&spec, &BuilderConfig::default());
        let asset = encode(&mesh).unwrap();

        prop_assert_eq!(asset.layout.vertex_count as usize, mesh.vertex_count());
        prop_assert_eq!(asset.layout.index_count as usize, 3 * mesh.face_count());

        // decode the index buffer straight out of the binary chunk
        let glb = &asset.glb;
        let json_len = u32::from_le_bytes(glb[12..16].try_into().unwrap()) as usize;
        let bin_start = 20 + json_len + 8;
        let index_start = bin_start + asset.layout.vertex_count as usize * 12;

        for i in 0..asset.layout.index_count as usize {
            let offset = index_start + i * 2;
            let index = u16::from_le_bytes([glb[offset], glb[offset + 1]]);
            prop_assert!((index as usize) < mesh.vertex_count());
        }
    }

    #[test]
    fn per_story_height_identity(spec in arb_spec()) {
        let reassembled = spec.per_story_height() * spec.stories as f64;
        prop_assert!((reassembled - spec.height).abs() < 1e-9 * spec.height.max(1.0));
    }

    #[test]
    fn builder_always_emits_geometry(spec in arb_spec()) {
        let mesh = build(&spec, &BuilderConfig::default());
        prop_assert!(!mesh.is_empty());
        prop_assert!(mesh.face_count() > 0);
    }
}
