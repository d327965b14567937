//! ArchMesh specification layer
//!
//! Parses raw design specifications produced by the upstream prompt
//! translator and normalizes them into a validated, meters-only form
//! consumed by the geometry builder. This crate is the sole contract
//! boundary on the input side: nothing downstream applies defaults for
//! structural dimensions.

pub mod error;
pub mod normalize;
pub mod schema;
pub mod units;

pub use error::{SpecValidationError, ValidationIssue};
pub use normalize::{
    normalize, NormalizedObject, NormalizedSpec, ObjectDimensions, MAX_DIMENSION_METERS,
    MAX_OBJECT_COUNT, MAX_STORIES,
};
pub use schema::{RawBuildingSpec, RawDimensions, RawObject, RawObjectDimensions};
pub use units::UnitSystem;
