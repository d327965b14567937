// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh encoding
//!
//! Packs an assembled mesh into a GLB asset: little-endian f32 positions,
//! a uint16 index buffer, then f32 normals, described by a typed glTF
//! document. The face list is flattened to the index buffer in exactly one
//! place, with every index bounds-checked before it is packed; a violation
//! aborts the whole encode so a corrupt partial asset is never returned.

use crate::error::{Error, Result};
use crate::glb::write_glb;
use crate::gltf::{
    Accessor, Asset, Attributes, Buffer, BufferView, GltfDocument, MeshEntry, Node, Primitive,
    Scene, COMPONENT_FLOAT, COMPONENT_UNSIGNED_SHORT,
};
use archmesh_geometry::{calculate_normals, Mesh};
use bytes::{BufMut, Bytes, BytesMut};
use tracing::error;

/// Byte size of one packed vertex position (3 x f32).
const VERTEX_STRIDE: u32 = 12;
/// Byte size of one packed index (u16).
const INDEX_STRIDE: u32 = 2;

/// Layout of the packed binary buffer, recomputed from the buffers
/// actually written, never preset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BufferLayout {
    pub vertex_count: u32,
    pub index_count: u32,
    pub normal_count: u32,
    pub position_component_type: u32,
    pub index_component_type: u32,
    pub vertex_byte_stride: u32,
    pub index_byte_stride: u32,
    /// Total length of the binary chunk payload before padding.
    pub binary_byte_length: u32,
}

/// An encoded GLB asset: the immutable blob plus its layout description.
///
/// The encoder retains no reference to the buffer after returning it.
#[derive(Debug, Clone)]
pub struct EncodedAsset {
    pub glb: Bytes,
    pub layout: BufferLayout,
}

impl EncodedAsset {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.glb
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glb.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glb.is_empty()
    }
}

/// Flatten nested face triples into a flat index list.
///
/// The face list and the index buffer are distinct representations; this is
/// the only place one becomes the other. Every index is checked against the
/// vertex count before it is emitted.
pub fn flatten_faces(faces: &[[u32; 3]], vertex_count: usize) -> Result<Vec<u16>> {
    let mut indices = Vec::with_capacity(faces.len() * 3);

    for face in faces {
        for &index in face {
            if index as usize >= vertex_count {
                return Err(Error::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
            indices.push(index as u16);
        }
    }

    Ok(indices)
}

/// Encode a mesh into a GLB asset. Stateless: every call is independent.
pub fn encode(mesh: &Mesh) -> Result<EncodedAsset> {
    let vertex_count = mesh.vertex_count();
    if vertex_count > u16::MAX as usize + 1 {
        error!(
            vertex_count,
            limit = u16::MAX as usize + 1,
            "mesh exceeds 16-bit index range"
        );
        return Err(Error::MeshTooLarge { vertex_count });
    }

    let indices = flatten_faces(&mesh.faces, vertex_count).map_err(|e| {
        error!(
            vertex_count,
            face_count = mesh.face_count(),
            %e,
            "geometry assembly produced an out-of-range face index"
        );
        e
    })?;
    let normals = calculate_normals(mesh);

    let vertex_bytes = vertex_count as u32 * VERTEX_STRIDE;
    let index_bytes = indices.len() as u32 * INDEX_STRIDE;
    let normal_bytes = normals.len() as u32 * VERTEX_STRIDE;
    let binary_byte_length = vertex_bytes + index_bytes + normal_bytes;

    let mut bin = BytesMut::with_capacity(binary_byte_length as usize);
    for v in &mesh.vertices {
        bin.put_f32_le(v.x as f32);
        bin.put_f32_le(v.y as f32);
        bin.put_f32_le(v.z as f32);
    }
    for &index in &indices {
        bin.put_u16_le(index);
    }
    for n in &normals {
        bin.put_f32_le(n.x as f32);
        bin.put_f32_le(n.y as f32);
        bin.put_f32_le(n.z as f32);
    }

    // Accessor counts come from the packed buffers, not the face list.
    let index_count = indices.len() as u32;

    let document = GltfDocument {
        asset: Asset {
            version: "2.0".to_string(),
        },
        scenes: vec![Scene { nodes: vec![0] }],
        nodes: vec![Node { mesh: 0 }],
        meshes: vec![MeshEntry {
            primitives: vec![Primitive {
                attributes: Attributes {
                    position: 0,
                    normal: 2,
                },
                indices: 1,
            }],
        }],
        accessors: vec![
            Accessor {
                buffer_view: 0,
                component_type: COMPONENT_FLOAT,
                count: vertex_count as u32,
                accessor_type: "VEC3".to_string(),
            },
            Accessor {
                buffer_view: 1,
                component_type: COMPONENT_UNSIGNED_SHORT,
                count: index_count,
                accessor_type: "SCALAR".to_string(),
            },
            Accessor {
                buffer_view: 2,
                component_type: COMPONENT_FLOAT,
                count: normals.len() as u32,
                accessor_type: "VEC3".to_string(),
            },
        ],
        buffer_views: vec![
            BufferView {
                buffer: 0,
                byte_offset: 0,
                byte_length: vertex_bytes,
            },
            BufferView {
                buffer: 0,
                byte_offset: vertex_bytes,
                byte_length: index_bytes,
            },
            BufferView {
                buffer: 0,
                byte_offset: vertex_bytes + index_bytes,
                byte_length: normal_bytes,
            },
        ],
        buffers: vec![Buffer {
            byte_length: binary_byte_length,
        }],
    };

    let json = serde_json::to_vec(&document)?;
    let glb = write_glb(&json, &bin);

    Ok(EncodedAsset {
        glb,
        layout: BufferLayout {
            vertex_count: vertex_count as u32,
            index_count,
            normal_count: normals.len() as u32,
            position_component_type: COMPONENT_FLOAT,
            index_component_type: COMPONENT_UNSIGNED_SHORT,
            vertex_byte_stride: VERTEX_STRIDE,
            index_byte_stride: INDEX_STRIDE,
            binary_byte_length,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use archmesh_geometry::Point3;

    fn triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_face([0, 1, 2]);
        mesh
    }

    #[test]
    fn test_flatten_iterates_faces_then_indices() {
        let flat = flatten_faces(&[[0, 1, 2], [2, 1, 0]], 3).unwrap();
        assert_eq!(flat, vec![0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn test_flatten_rejects_out_of_range() {
        let err = flatten_faces(&[[0, 1, 7]], 3).unwrap_err();
        match err {
            Error::IndexOutOfRange {
                index,
                vertex_count,
            } => {
                assert_eq!(index, 7);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_index_count_is_three_times_face_count() {
        let asset = encode(&triangle()).unwrap();
        assert_eq!(asset.layout.index_count, 3);
        assert_eq!(asset.layout.vertex_count, 3);
        assert_eq!(asset.layout.normal_count, 3);
        assert_eq!(asset.layout.binary_byte_length, 3 * 12 + 3 * 2 + 3 * 12);
    }

    #[test]
    fn test_corrupt_mesh_never_encodes() {
        let mut mesh = triangle();
        mesh.faces.push([0, 1, 99]);

        assert!(matches!(
            encode(&mesh),
            Err(Error::IndexOutOfRange { index: 99, .. })
        ));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let mesh = triangle();
        let a = encode(&mesh).unwrap();
        let b = encode(&mesh).unwrap();
        assert_eq!(a.glb, b.glb);
        assert_eq!(a.layout, b.layout);
    }

    #[test]
    fn test_oversized_mesh_rejected() {
        let mut mesh = Mesh::new();
        for i in 0..(u16::MAX as usize + 2) {
            mesh.add_vertex(Point3::new(i as f64, 0.0, 0.0));
        }

        assert!(matches!(encode(&mesh), Err(Error::MeshTooLarge { .. })));
    }
}
