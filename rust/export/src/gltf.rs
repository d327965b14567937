// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed glTF 2.0 document
//!
//! The subset of glTF needed to describe one mesh with positions, indices
//! and normals in a single buffer. Serialized into the JSON chunk of the
//! GLB container.

use serde::{Deserialize, Serialize};

/// glTF component type for 32-bit floats.
pub const COMPONENT_FLOAT: u32 = 5126;
/// glTF component type for unsigned 16-bit integers.
pub const COMPONENT_UNSIGNED_SHORT: u32 = 5123;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GltfDocument {
    pub asset: Asset,
    pub scenes: Vec<Scene>,
    pub nodes: Vec<Node>,
    pub meshes: Vec<MeshEntry>,
    pub accessors: Vec<Accessor>,
    #[serde(rename = "bufferViews")]
    pub buffer_views: Vec<BufferView>,
    pub buffers: Vec<Buffer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub nodes: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub mesh: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshEntry {
    pub primitives: Vec<Primitive>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Primitive {
    pub attributes: Attributes,
    pub indices: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "POSITION")]
    pub position: u32,
    #[serde(rename = "NORMAL")]
    pub normal: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accessor {
    #[serde(rename = "bufferView")]
    pub buffer_view: u32,
    #[serde(rename = "componentType")]
    pub component_type: u32,
    pub count: u32,
    #[serde(rename = "type")]
    pub accessor_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BufferView {
    pub buffer: u32,
    #[serde(rename = "byteOffset")]
    pub byte_offset: u32,
    #[serde(rename = "byteLength")]
    pub byte_length: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buffer {
    #[serde(rename = "byteLength")]
    pub byte_length: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_serializes_gltf_names() {
        let doc = GltfDocument {
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
            accessors: vec![],
            buffer_views: vec![BufferView {
                buffer: 0,
                byte_offset: 0,
                byte_length: 96,
            }],
            buffers: vec![Buffer { byte_length: 96 }],
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["asset"]["version"], "2.0");
        assert_eq!(json["meshes"][0]["primitives"][0]["attributes"]["POSITION"], 0);
        assert_eq!(json["bufferViews"][0]["byteLength"], 96);
    }
}
