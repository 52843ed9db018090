//! Contracts for the primitive shape generators composed by higher level procedures.
//!
//! Setters return `&mut Self` so a generator can be configured in one chain and
//! finished with [`ShapeGenerator::generate`]. What the parameters mean (units of a
//! noise frequency, how a non-positive radius is handled) is up to the implementor.

use crate::error::GeneratorError;
use crate::mesh::{batch::MeshBatch, context::MeshContext};
use bevy::prelude::*;

/// Capabilities every shape generator has.
pub trait ShapeGenerator {
	fn set_center(&mut self, center: Vec3) -> &mut Self;

	/// Frequency of the noise displacing vertex positions.
	fn set_vertex_noise_freq(&mut self, freq: f32) -> &mut Self;

	/// Frequency of the noise perturbing vertex colors along the gradient.
	fn set_color_noise_freq(&mut self, freq: f32) -> &mut Self;

	/// Emits the configured shape.
	fn generate(&mut self) -> Result<MeshBatch, GeneratorError>;
}

/// A vertical cylinder rising from its center point.
pub trait CylinderGenerator: ShapeGenerator {
	fn set_height(&mut self, height: f32) -> &mut Self;

	fn set_radius(&mut self, radius: f32) -> &mut Self;

	/// Upper bound on the height of one ring-to-ring segment along the axis.
	fn set_max_segment_height(&mut self, height: f32) -> &mut Self;

	/// Number of sides of the cross-section.
	fn set_radial_segments(&mut self, segments: u32) -> &mut Self;
}

/// A recursively subdivided icosahedron, optionally stretched vertically.
pub trait IcoSphereGenerator: ShapeGenerator {
	/// `height_multiplier` scales the vertical extent; 1 is a sphere.
	fn set_radius(&mut self, radius: f32, height_multiplier: f32) -> &mut Self;

	fn set_recursion_level(&mut self, level: u32) -> &mut Self;
}

/// Generators that can be built from a [`MeshContext`].
pub trait FromMeshContext<'a>: Sized {
	fn from_context(context: MeshContext<'a>) -> Self;
}
