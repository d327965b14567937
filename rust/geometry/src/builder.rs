// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building assembly
//!
//! Stacks stories, emits foundation, floor slabs and roof, distributes
//! openings across walls, and routes non-structural design types through
//! the object classifier. Building never fails: unrecognized design types
//! degrade to per-object routing and, when that yields nothing, to a single
//! default box over the footprint, logged rather than silent.

use crate::mesh::Mesh;
use crate::primitives::{box_mesh, gable_mesh, slab_mesh, wall_mesh};
use crate::router::{classify, primitive_mesh, PrimitiveKind};
use archmesh_spec::NormalizedSpec;
use nalgebra::Vector3;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::{debug, warn};

/// Keywords that mark a design type as a full building. Matching is by
/// substring, like object routing: `"row_house"` and `"beach house"` both
/// get the structural assembly.
const STRUCTURAL_KEYWORDS: [&str; 9] = [
    "house",
    "building",
    "apartment",
    "villa",
    "bungalow",
    "row_house",
    "townhouse",
    "duplex",
    "penthouse",
];

/// Structural constants and heuristics for building assembly.
///
/// The roof-type markers are configurable because the substring signals are
/// ambiguous for mixed design-type labels; the defaults reproduce the
/// observed upstream behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub wall_thickness: f64,
    pub floor_slab_thickness: f64,
    pub foundation_thickness: f64,
    /// Thickness of a flat roof slab.
    pub roof_thickness: f64,
    /// Gable peak height as a fraction of the per-story height.
    pub roof_pitch_ratio: f64,
    /// Margin from a wall's origin corner before the first opening.
    pub wall_margin: f64,
    /// How far an opening panel sits in from the wall face.
    pub opening_inset: f64,
    /// Substrings of `design_type` that select a flat roof.
    pub flat_markers: Vec<String>,
    /// Substrings of object subtypes that select a flat roof.
    pub flat_roof_subtype_markers: Vec<String>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            wall_thickness: 0.2,
            floor_slab_thickness: 0.15,
            foundation_thickness: 0.5,
            roof_thickness: 0.2,
            roof_pitch_ratio: 0.3,
            wall_margin: 1.0,
            opening_inset: 0.1,
            flat_markers: vec!["flat".to_string()],
            flat_roof_subtype_markers: vec!["flat_roof".to_string()],
        }
    }
}

/// Which wall an opening lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Front,
    Back,
    Left,
    Right,
}

/// Transient placement for one opening. Computed by the distribution rule,
/// consumed immediately when the opening geometry is appended.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OpeningPlacement {
    wall: WallSide,
    /// Offset along the wall from its origin corner.
    along: f64,
    /// Z of the opening's vertical center.
    center_z: f64,
}

/// Assemble the mesh for a normalized specification.
pub fn build(spec: &NormalizedSpec, config: &BuilderConfig) -> Mesh {
    let mut mesh = Mesh::new();

    if is_structural(&spec.design_type) {
        build_structure(spec, config, &mut mesh);
        place_openings(spec, config, &mut mesh);
    } else {
        for obj in &spec.objects {
            if obj.count == 0 {
                continue;
            }
            let kind = classify(&obj.kind, &obj.id);
            mesh.append(&primitive_mesh(kind, obj));
        }
    }

    if mesh.is_empty() {
        // The one sanctioned structural default: fallback for unrecognized
        // classification, not for missing required data.
        warn!(
            design_type = %spec.design_type,
            "no geometry matched spec; emitting default footprint box"
        );
        mesh.append(&box_mesh(spec.width, spec.depth, spec.height));
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        stories = spec.stories,
        "building mesh assembled"
    );

    mesh
}

fn is_structural(design_type: &str) -> bool {
    let key = design_type.to_lowercase();
    STRUCTURAL_KEYWORDS.iter().any(|k| key.contains(k))
}

fn wants_flat_roof(spec: &NormalizedSpec, config: &BuilderConfig) -> bool {
    let design_type = spec.design_type.to_lowercase();
    if config.flat_markers.iter().any(|m| design_type.contains(m)) {
        return true;
    }

    spec.objects.iter().any(|obj| {
        let subtype = obj.subtype.to_lowercase();
        config
            .flat_roof_subtype_markers
            .iter()
            .any(|m| subtype.contains(m))
    })
}

/// Foundation, per-story walls, inter-story floor slabs, and the roof.
fn build_structure(spec: &NormalizedSpec, config: &BuilderConfig, mesh: &mut Mesh) {
    let psh = spec.per_story_height();
    let t = config.wall_thickness;
    let (w, d) = (spec.width, spec.depth);

    // Foundation, once, below story 0
    mesh.append(&slab_mesh(w, d, config.foundation_thickness));

    let front_wall = wall_mesh(w, psh, t);
    let side_wall = box_mesh(t, d, psh);
    let floor_slab = slab_mesh(w, d, config.floor_slab_thickness);

    for story in 0..spec.stories {
        let z = story as f64 * psh + config.foundation_thickness;

        mesh.append_translated(&front_wall, Vector3::new(0.0, 0.0, z));
        mesh.append_translated(&front_wall, Vector3::new(0.0, d - t, z));
        mesh.append_translated(&side_wall, Vector3::new(0.0, 0.0, z));
        mesh.append_translated(&side_wall, Vector3::new(w - t, 0.0, z));

        // slab between this story and the one below
        if story > 0 {
            mesh.append_translated(&floor_slab, Vector3::new(0.0, 0.0, z));
        }
    }

    let roof_z = spec.stories as f64 * psh + config.foundation_thickness;
    if wants_flat_roof(spec, config) {
        let roof = slab_mesh(w, d, config.roof_thickness);
        mesh.append_translated(&roof, Vector3::new(0.0, 0.0, roof_z));
    } else {
        let peak = config.roof_pitch_ratio * psh;
        mesh.append_translated(&gable_mesh(w, d, peak), Vector3::new(0.0, 0.0, roof_z));
    }
}

/// Window distribution rule: alternate front/side wall by parity of the
/// running placement index, step `span / (count + 1)` along the wall, so
/// openings spread across at least two walls instead of clustering.
fn window_placement(
    index: usize,
    count: u32,
    spec: &NormalizedSpec,
    config: &BuilderConfig,
) -> OpeningPlacement {
    let rank = (index / 2) as f64;
    let center_z = config.foundation_thickness + spec.per_story_height() / 2.0;

    let (wall, span) = if index % 2 == 0 {
        (WallSide::Front, spec.width)
    } else {
        (WallSide::Right, spec.depth)
    };

    OpeningPlacement {
        wall,
        along: rank * (span / (count as f64 + 1.0)) + config.wall_margin,
        center_z,
    }
}

fn place_openings(spec: &NormalizedSpec, config: &BuilderConfig, mesh: &mut Mesh) {
    // Running index across all window objects, so a second window batch
    // continues the alternation instead of restarting on the front wall.
    let mut window_index = 0usize;
    let mut per_wall: FxHashMap<WallSide, u32> = FxHashMap::default();

    for obj in &spec.objects {
        match classify(&obj.kind, &obj.id) {
            PrimitiveKind::Door => {
                if obj.count == 0 {
                    continue;
                }
                let dims = obj.dimensions.unwrap_or_default();
                let dw = dims.width.unwrap_or(0.9);
                let dh = dims.height.unwrap_or(2.1);
                let dt = dims.thickness.unwrap_or(0.05);

                // Front wall center regardless of count, base at the
                // foundation top.
                let door = box_mesh(dw, dt, dh);
                mesh.append_translated(
                    &door,
                    Vector3::new(
                        spec.width / 2.0 - dw / 2.0,
                        config.opening_inset,
                        config.foundation_thickness,
                    ),
                );
                *per_wall.entry(WallSide::Front).or_default() += 1;
            }
            PrimitiveKind::Window => {
                let dims = obj.dimensions.unwrap_or_default();
                let ww = dims.width.unwrap_or(1.2);
                let wh = dims.height.unwrap_or(1.0);
                let wt = dims.thickness.unwrap_or(0.1);

                for _ in 0..obj.count {
                    let placement = window_placement(window_index, obj.count, spec, config);
                    let sill = placement.center_z - wh / 2.0;

                    match placement.wall {
                        WallSide::Front => mesh.append_translated(
                            &box_mesh(ww, wt, wh),
                            Vector3::new(placement.along, config.opening_inset, sill),
                        ),
                        // Side windows run along Y on the right wall's
                        // inner face.
                        _ => mesh.append_translated(
                            &box_mesh(wt, ww, wh),
                            Vector3::new(
                                spec.width - config.wall_thickness - config.opening_inset,
                                placement.along,
                                sill,
                            ),
                        ),
                    }

                    *per_wall.entry(placement.wall).or_default() += 1;
                    window_index += 1;
                }
            }
            _ => {}
        }
    }

    if !per_wall.is_empty() {
        debug!(?per_wall, "openings placed");
    }
}
