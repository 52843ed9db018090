use comproc::{GeneratorError, MeshBatchError};
use thiserror::Error;

/// Failure while composing a tree, tagged with the part that failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
	#[error("trunk generation failed")]
	Trunk(#[source] GeneratorError),
	#[error("foliage generation failed")]
	Foliage(#[source] GeneratorError),
	#[error("merging tree geometry failed")]
	Merge(#[from] MeshBatchError),
}
