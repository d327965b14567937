// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object classification and primitive dispatch
//!
//! Upstream object labels come from a language model, so exact enumeration
//! values are not guaranteed. Classification is a substring match over the
//! object's `type` and `id` combined, kept in one function so the heuristic
//! is testable in isolation.

use crate::mesh::Mesh;
use crate::primitives::{box_mesh, gable_mesh, slab_mesh, staircase_mesh, wall_mesh};
use archmesh_spec::NormalizedObject;

/// The closed set of primitive generators an object can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Wall,
    Door,
    Window,
    Roof,
    FloorSlab,
    Foundation,
    Column,
    Beam,
    Staircase,
    Balcony,
    GenericBox,
}

/// Classify an object by case-insensitive substring match over
/// `type + " " + id`. `"exterior_wall_1"` routes to `Wall`.
///
/// Unmatched objects are not an error; they degrade to `GenericBox`.
pub fn classify(kind: &str, id: &str) -> PrimitiveKind {
    let key = format!("{} {}", kind, id).to_lowercase();

    if key.contains("wall") {
        PrimitiveKind::Wall
    } else if key.contains("door") {
        PrimitiveKind::Door
    } else if key.contains("window") {
        PrimitiveKind::Window
    } else if key.contains("roof") {
        PrimitiveKind::Roof
    } else if key.contains("foundation") {
        PrimitiveKind::Foundation
    } else if key.contains("column") || key.contains("pillar") {
        PrimitiveKind::Column
    } else if key.contains("beam") {
        PrimitiveKind::Beam
    } else if key.contains("slab") || key.contains("floor") {
        PrimitiveKind::FloorSlab
    } else if key.contains("stair") {
        PrimitiveKind::Staircase
    } else if key.contains("balcony") {
        PrimitiveKind::Balcony
    } else {
        PrimitiveKind::GenericBox
    }
}

/// Generate the primitive mesh for a classified object, falling back to
/// per-kind default dimensions where the object carries none.
pub fn primitive_mesh(kind: PrimitiveKind, obj: &NormalizedObject) -> Mesh {
    let dims = obj.dimensions.unwrap_or_default();
    let w = dims.width;
    let d = dims.depth;
    let h = dims.height;
    let t = dims.thickness;

    match kind {
        PrimitiveKind::Wall => {
            wall_mesh(w.unwrap_or(3.0), h.unwrap_or(2.7), t.unwrap_or(0.2))
        }
        PrimitiveKind::Door => {
            wall_mesh(w.unwrap_or(0.9), h.unwrap_or(2.1), t.unwrap_or(0.05))
        }
        PrimitiveKind::Window => {
            wall_mesh(w.unwrap_or(1.2), h.unwrap_or(1.0), t.unwrap_or(0.1))
        }
        PrimitiveKind::Roof => {
            gable_mesh(w.unwrap_or(10.0), d.unwrap_or(8.0), h.unwrap_or(2.0))
        }
        PrimitiveKind::FloorSlab => {
            slab_mesh(w.unwrap_or(10.0), d.unwrap_or(8.0), t.unwrap_or(0.15))
        }
        PrimitiveKind::Foundation => {
            slab_mesh(w.unwrap_or(10.0), d.unwrap_or(8.0), h.unwrap_or(0.5))
        }
        PrimitiveKind::Column => {
            box_mesh(w.unwrap_or(0.3), d.unwrap_or(0.3), h.unwrap_or(3.0))
        }
        PrimitiveKind::Beam => {
            box_mesh(w.unwrap_or(0.3), d.unwrap_or(5.0), h.unwrap_or(0.4))
        }
        PrimitiveKind::Staircase => {
            staircase_mesh(w.unwrap_or(1.2), d.unwrap_or(3.0), h.unwrap_or(2.7), 15)
        }
        PrimitiveKind::Balcony => {
            box_mesh(w.unwrap_or(3.0), d.unwrap_or(1.5), h.unwrap_or(0.1))
        }
        PrimitiveKind::GenericBox => {
            box_mesh(w.unwrap_or(1.0), d.unwrap_or(1.0), h.unwrap_or(1.0))
        }
    }
}
