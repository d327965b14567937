//! ArchMesh GLB export
//!
//! Serializes an assembled mesh into a binary glTF container: a JSON scene
//! description plus one binary buffer holding vertex positions, a uint16
//! index buffer, and vertex normals. Stateless; each encode call is
//! independent and the returned blob is immutable.

pub mod encoder;
pub mod error;
pub mod glb;
pub mod gltf;

pub use encoder::{encode, BufferLayout, EncodedAsset};
pub use error::{Error, Result};
pub use glb::write_glb;
pub use gltf::GltfDocument;
