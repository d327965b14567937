// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use nalgebra::{Point3, Vector3};

/// Triangle mesh: a vertex list plus nested face triples.
///
/// Faces index into `vertices`. The face list is deliberately NOT a flat
/// index buffer; flattening to one happens exactly once, in the encoder,
/// where every index is bounds-checked. Keeping the two representations as
/// distinct types is what makes the confusion between them a compile error
/// instead of a corrupt asset.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions, append-only during assembly.
    pub vertices: Vec<Point3<f64>>,
    /// Triangles as index triples into `vertices`.
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Add a vertex
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>) {
        self.vertices.push(position);
    }

    /// Add a triangle. Indices must refer to vertices already appended.
    #[inline]
    pub fn add_face(&mut self, face: [u32; 3]) {
        debug_assert!(face.iter().all(|&i| (i as usize) < self.vertices.len()));
        self.faces.push(face);
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append another mesh, offsetting its face indices by the current
    /// vertex count. Earlier entries are never renumbered.
    #[inline]
    pub fn append(&mut self, other: &Mesh) {
        self.append_translated(other, Vector3::zeros());
    }

    /// Append a translated copy of another mesh.
    #[inline]
    pub fn append_translated(&mut self, other: &Mesh, offset: Vector3<f64>) {
        if other.is_empty() {
            return;
        }

        let base = self.vertices.len() as u32;

        self.vertices.reserve(other.vertices.len());
        self.faces.reserve(other.faces.len());

        self.vertices.extend(other.vertices.iter().map(|v| *v + offset));
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|f| [f[0] + base, f[1] + base, f[2] + base]),
        );
    }

    /// Calculate bounds (min, max)
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        if self.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);

        for v in &self.vertices {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        (min, max)
    }
}
