use crate::error::MeshBatchError;
use bevy::asset::RenderAssetUsages;
use bevy::color::LinearRgba;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

/// Owned triangle-list geometry emitted by a single generator run.
///
/// Each vertex has exactly one color. Every index refers to a vertex of this batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBatch {
	positions: Vec<Vec3>,
	colors: Vec<[f32; 4]>,
	indices: Vec<u32>,
}

/// A vertex count as a `u32` index; fails once indices could no longer address it.
fn index_capacity(vertices: usize) -> Result<u32, MeshBatchError> {
	u32::try_from(vertices).map_err(|_| MeshBatchError::IndexOverflow { vertices })
}

impl MeshBatch {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(vertices: usize, indices: usize) -> Self {
		Self {
			positions: Vec::with_capacity(vertices),
			colors: Vec::with_capacity(vertices),
			indices: Vec::with_capacity(indices),
		}
	}

	pub fn positions(&self) -> &[Vec3] {
		&self.positions
	}

	pub fn colors(&self) -> &[[f32; 4]] {
		&self.colors
	}

	pub fn indices(&self) -> &[u32] {
		&self.indices
	}

	pub fn vertex_count(&self) -> usize {
		self.positions.len()
	}

	pub fn triangle_count(&self) -> usize {
		self.indices.len() / 3
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	/// Adds a vertex and returns its index.
	pub fn push_vertex(&mut self, position: Vec3, color: LinearRgba) -> Result<u32, MeshBatchError> {
		let index = index_capacity(self.positions.len())?;
		self.positions.push(position);
		self.colors.push([color.red, color.green, color.blue, color.alpha]);
		Ok(index)
	}

	/// Adds a triangle over three vertices already in the batch.
	pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) -> Result<(), MeshBatchError> {
		let vertices = self.positions.len();
		if let Some(&index) = [a, b, c].iter().find(|&&i| i as usize >= vertices) {
			return Err(MeshBatchError::IndexOutOfRange { index, vertices });
		}
		self.indices.extend([a, b, c]);
		Ok(())
	}

	/// Moves `other` onto the end of this batch.
	///
	/// `other`'s indices are shifted by the current vertex count so they keep pointing
	/// at their own vertices.
	pub fn append(&mut self, other: MeshBatch) -> Result<(), MeshBatchError> {
		let offset = index_capacity(self.positions.len())?;
		index_capacity(self.positions.len() + other.positions.len())?;

		log::trace!(
			"appending {} vertices / {} triangles at offset {}",
			other.vertex_count(),
			other.triangle_count(),
			offset
		);

		self.positions.extend(other.positions);
		self.colors.extend(other.colors);
		self.indices.extend(other.indices.into_iter().map(|index| index + offset));
		Ok(())
	}

	/// Concatenates batches in iteration order.
	pub fn concat(
		batches: impl IntoIterator<Item = MeshBatch>,
	) -> Result<MeshBatch, MeshBatchError> {
		batches.into_iter().try_fold(MeshBatch::new(), |mut acc, batch| {
			acc.append(batch)?;
			Ok(acc)
		})
	}

	/// Axis-aligned bounds as (min, max), or `None` for an empty batch.
	pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
		let first = *self.positions.first()?;
		Some(
			self.positions
				.iter()
				.fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
		)
	}

	/// Converts the batch into a bevy triangle-list mesh with vertex colors.
	pub fn into_mesh(self) -> Mesh {
		let mut mesh =
			Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
		mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
		mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, self.colors);
		mesh.insert_indices(Indices::U32(self.indices));
		mesh
	}
}
