// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Primitive generators for structural elements
//!
//! Each generator returns a self-contained mesh with a corner at the origin;
//! the builder positions primitives by translating them during append.

use crate::mesh::Mesh;
use nalgebra::Point3;

/// Face table for an axis-aligned box whose vertices are ordered
/// bottom ring (0..4) then top ring (4..8), counter-clockwise from origin.
const BOX_FACES: [[u32; 3]; 12] = [
    [0, 1, 2],
    [0, 2, 3], // bottom
    [4, 7, 6],
    [4, 6, 5], // top
    [0, 4, 5],
    [0, 5, 1], // front
    [2, 6, 7],
    [2, 7, 3], // back
    [0, 3, 7],
    [0, 7, 4], // left
    [1, 5, 6],
    [1, 6, 2], // right
];

/// Axis-aligned box with one corner at the origin: `width` along X,
/// `depth` along Y, `height` along Z.
pub fn box_mesh(width: f64, depth: f64, height: f64) -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 12);

    mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(Point3::new(width, 0.0, 0.0));
    mesh.add_vertex(Point3::new(width, depth, 0.0));
    mesh.add_vertex(Point3::new(0.0, depth, 0.0));
    mesh.add_vertex(Point3::new(0.0, 0.0, height));
    mesh.add_vertex(Point3::new(width, 0.0, height));
    mesh.add_vertex(Point3::new(width, depth, height));
    mesh.add_vertex(Point3::new(0.0, depth, height));

    for face in BOX_FACES {
        mesh.add_face(face);
    }

    mesh
}

/// Wall slab running along the X axis: `span` long, `thickness` deep.
pub fn wall_mesh(span: f64, height: f64, thickness: f64) -> Mesh {
    box_mesh(span, thickness, height)
}

/// Horizontal slab covering a footprint.
pub fn slab_mesh(width: f64, depth: f64, thickness: f64) -> Mesh {
    box_mesh(width, depth, thickness)
}

/// Gable prism: rectangular base plus two ridge peaks.
///
/// The ridge runs along the longer span, at the horizontal midline of the
/// shorter span. 6 vertices, 8 triangles: two pitched quads, two triangular
/// end-gables, and the base.
pub fn gable_mesh(width: f64, depth: f64, peak_height: f64) -> Mesh {
    let mut mesh = Mesh::with_capacity(6, 8);

    mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(Point3::new(width, 0.0, 0.0));
    mesh.add_vertex(Point3::new(width, depth, 0.0));
    mesh.add_vertex(Point3::new(0.0, depth, 0.0));

    let faces: [[u32; 3]; 8] = if width >= depth {
        // ridge along X at y = depth/2
        mesh.add_vertex(Point3::new(0.0, depth / 2.0, peak_height));
        mesh.add_vertex(Point3::new(width, depth / 2.0, peak_height));
        [
            [0, 1, 5],
            [0, 5, 4], // front slope
            [2, 3, 4],
            [2, 4, 5], // back slope
            [3, 0, 4], // left gable
            [1, 2, 5], // right gable
            [0, 3, 2],
            [0, 2, 1], // base
        ]
    } else {
        // ridge along Y at x = width/2
        mesh.add_vertex(Point3::new(width / 2.0, 0.0, peak_height));
        mesh.add_vertex(Point3::new(width / 2.0, depth, peak_height));
        [
            [1, 2, 5],
            [1, 5, 4], // right slope
            [3, 0, 4],
            [3, 4, 5], // left slope
            [0, 1, 4], // front gable
            [2, 3, 5], // back gable
            [0, 3, 2],
            [0, 2, 1], // base
        ]
    };

    for face in faces {
        mesh.add_face(face);
    }

    mesh
}

/// Staircase: a run of box steps climbing along Y.
pub fn staircase_mesh(width: f64, length: f64, height: f64, steps: u32) -> Mesh {
    let steps = steps.max(1);
    let step_height = height / steps as f64;
    let step_length = length / steps as f64;

    let mut mesh = Mesh::with_capacity(steps as usize * 8, steps as usize * 12);
    let step = box_mesh(width, step_length, step_height);

    for i in 0..steps {
        let y = i as f64 * step_length;
        let z = i as f64 * step_height;
        mesh.append_translated(&step, nalgebra::Vector3::new(0.0, y, z));
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_counts() {
        let mesh = box_mesh(2.0, 3.0, 4.0);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);

        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_gable_counts() {
        let mesh = gable_mesh(10.0, 8.0, 1.5);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.face_count(), 8);
    }

    #[test]
    fn test_gable_ridge_along_longer_span() {
        // wider than deep: ridge parallel to X at the midline of Y
        let wide = gable_mesh(10.0, 4.0, 2.0);
        let peaks: Vec<_> = wide.vertices.iter().filter(|v| v.z > 0.0).collect();
        assert_eq!(peaks.len(), 2);
        for p in &peaks {
            assert_relative_eq!(p.y, 2.0);
        }

        // deeper than wide: ridge parallel to Y at the midline of X
        let deep = gable_mesh(4.0, 10.0, 2.0);
        let peaks: Vec<_> = deep.vertices.iter().filter(|v| v.z > 0.0).collect();
        assert_eq!(peaks.len(), 2);
        for p in &peaks {
            assert_relative_eq!(p.x, 2.0);
        }
    }

    #[test]
    fn test_gable_faces_in_range() {
        for mesh in [gable_mesh(10.0, 4.0, 2.0), gable_mesh(4.0, 10.0, 2.0)] {
            let n = mesh.vertex_count() as u32;
            assert!(mesh.faces.iter().all(|f| f.iter().all(|&i| i < n)));
        }
    }

    #[test]
    fn test_staircase_counts() {
        let mesh = staircase_mesh(1.2, 3.0, 2.7, 15);
        assert_eq!(mesh.vertex_count(), 15 * 8);
        assert_eq!(mesh.face_count(), 15 * 12);

        let (_, max) = mesh.bounds();
        assert_relative_eq!(max.z, 2.7, epsilon = 1e-9);
        assert_relative_eq!(max.y, 3.0, epsilon = 1e-9);
    }
}
