// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertex normal computation

use crate::mesh::Mesh;
use nalgebra::Vector3;

/// Calculate area-weighted vertex normals from faces.
///
/// Each face contributes its unnormalized cross-product normal to all three
/// corners, so larger faces weigh more. Vertices referenced by no face (or
/// only degenerate ones) get +Z.
pub fn calculate_normals(mesh: &Mesh) -> Vec<Vector3<f64>> {
    let mut normals = vec![Vector3::zeros(); mesh.vertex_count()];

    for face in &mesh.faces {
        let v0 = mesh.vertices[face[0] as usize];
        let v1 = mesh.vertices[face[1] as usize];
        let v2 = mesh.vertices[face[2] as usize];

        let normal = (v1 - v0).cross(&(v2 - v0));

        for &i in face {
            normals[i as usize] += normal;
        }
    }

    normals
        .into_iter()
        .map(|n| {
            if n.norm_squared() > 1e-24 {
                n.normalize()
            } else {
                Vector3::z()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::box_mesh;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_normals_are_unit_length() {
        let mesh = box_mesh(2.0, 3.0, 1.0);
        let normals = calculate_normals(&mesh);

        assert_eq!(normals.len(), mesh.vertex_count());
        for n in &normals {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_flat_triangle_normal() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_face([0, 1, 2]);

        let normals = calculate_normals(&mesh);
        for n in &normals {
            assert_relative_eq!(*n, Vector3::z(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_unreferenced_vertex_defaults_up() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));

        let normals = calculate_normals(&mesh);
        assert_eq!(normals, vec![Vector3::z()]);
    }
}
