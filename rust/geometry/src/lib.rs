//! ArchMesh geometry builder
//!
//! Turns a normalized building specification into a single triangle mesh:
//! story stacking, foundation and roof selection, opening distribution, and
//! routing of requested objects to primitive generators. Pure computation
//! over in-memory structures; safe to run concurrently per request.

pub mod builder;
pub mod mesh;
pub mod normals;
pub mod primitives;
pub mod router;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use builder::{build, BuilderConfig};
pub use mesh::Mesh;
pub use normals::calculate_normals;
pub use router::{classify, PrimitiveKind};
