use thiserror::Error;

/// Result type for encoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Encoder failures.
///
/// These indicate a defect in geometry assembly, not a problem with user
/// input: by the time a mesh reaches the encoder its spec has already
/// passed validation. Callers should surface them as internal errors,
/// distinct from spec validation failures.
#[derive(Error, Debug)]
pub enum Error {
    #[error("face index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("mesh has {vertex_count} vertices, beyond what a 16-bit index buffer can address")]
    MeshTooLarge { vertex_count: usize },

    #[error("glTF document serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
