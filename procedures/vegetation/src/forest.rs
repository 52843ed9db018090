use crate::error::TreeError;
use crate::tree::{composer::TreeComposer, config::TreeConfig};
use comproc::{
	ColorGradient, CylinderGenerator, FromMeshContext, IcoSphereGenerator, MeshBatch, MeshContext,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A set of trees composed into a single batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forest {
	trees: Vec<TreeConfig>,
}

impl FromIterator<TreeConfig> for Forest {
	fn from_iter<I: IntoIterator<Item = TreeConfig>>(iter: I) -> Self {
		Self { trees: iter.into_iter().collect() }
	}
}

impl Forest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_tree(mut self, tree: TreeConfig) -> Self {
		self.trees.push(tree);
		self
	}

	pub fn trees(&self) -> &[TreeConfig] {
		&self.trees
	}

	pub fn len(&self) -> usize {
		self.trees.len()
	}

	pub fn is_empty(&self) -> bool {
		self.trees.is_empty()
	}

	/// Composes every tree with freshly built generators.
	///
	/// Trees are composed in parallel, each into its own batch. The batches are then
	/// concatenated in the order the trees were added, so the output does not depend
	/// on scheduling. The error of the earliest failing tree in input order is returned.
	pub fn generate<'a, T, F>(
		&self,
		context: &MeshContext<'a>,
		trunk_gradient: &'a ColorGradient,
		foliage_gradient: &'a ColorGradient,
	) -> Result<MeshBatch, TreeError>
	where
		T: CylinderGenerator + FromMeshContext<'a>,
		F: IcoSphereGenerator + FromMeshContext<'a>,
	{
		log::info!("composing forest of {} trees", self.trees.len());

		// every tree runs to completion; the ordered pass below picks the earliest error
		let results: Vec<Result<MeshBatch, TreeError>> = self
			.trees
			.par_iter()
			.map(|tree| {
				TreeComposer::<T, F>::new(context, trunk_gradient, foliage_gradient)
					.with_config(tree)
					.generate()
			})
			.collect();
		let batches = results.into_iter().collect::<Result<Vec<MeshBatch>, TreeError>>()?;

		let batch = MeshBatch::concat(batches)?;
		log::info!(
			"forest emitted {} vertices / {} triangles",
			batch.vertex_count(),
			batch.triangle_count()
		);

		Ok(batch)
	}
}
