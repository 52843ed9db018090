//! Composable procedures: the contracts shape generators implement and the
//! geometry values they exchange.
//!
//! Generators never write into a shared buffer. Each one returns an owned
//! [`MeshBatch`] and callers merge batches explicitly with [`MeshBatch::append`].

pub mod color;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod noise;

pub use color::gradient::{ColorGradient, GradientStop};
pub use error::{GeneratorError, MeshBatchError};
pub use geometry::generator::{
	CylinderGenerator, FromMeshContext, IcoSphereGenerator, ShapeGenerator,
};
pub use mesh::{
	batch::MeshBatch,
	context::{MeshContext, MeshStyle},
};
