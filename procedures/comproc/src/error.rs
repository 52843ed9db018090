use thiserror::Error;

/// Errors raised while assembling a [`crate::MeshBatch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshBatchError {
	/// The batch would address more vertices than a `u32` index can reach.
	#[error("mesh batch would hold {vertices} vertices, beyond the u32 index range")]
	IndexOverflow { vertices: usize },
	/// A triangle referred to a vertex the batch does not hold.
	#[error("index {index} refers past the {vertices} vertices of the batch")]
	IndexOutOfRange { index: u32, vertices: usize },
}

/// Errors a shape generator reports from `generate`.
///
/// Callers composing several generators pass these through untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
	#[error("degenerate {shape} geometry: {reason}")]
	DegenerateGeometry { shape: &'static str, reason: String },
	#[error(transparent)]
	Capacity(#[from] MeshBatchError),
	#[error("{0}")]
	Other(String),
}

impl GeneratorError {
	pub fn degenerate(shape: &'static str, reason: impl Into<String>) -> Self {
		Self::DegenerateGeometry { shape, reason: reason.into() }
	}
}
