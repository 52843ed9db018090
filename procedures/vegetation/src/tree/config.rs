use crate::tree::placement::foliage_center;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Vertical extent of a canopy when none is given: a sphere.
pub const DEFAULT_FOLIAGE_HEIGHT: f32 = 1.0;

/// A vertical cylinder rooted at the tree position.
///
/// Both dimensions should be positive; they are forwarded without checks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrunkSpec {
	pub height: f32,
	pub radius: f32,
}

impl TrunkSpec {
	pub fn new(height: f32, radius: f32) -> Self {
		Self { height, radius }
	}
}

/// The canopy blob on top of the trunk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoliageSpec {
	pub radius: f32,
	/// Vertical stretch of the canopy; 1 keeps it spherical
	pub height: f32,
}

impl Default for FoliageSpec {
	fn default() -> Self {
		Self { radius: 0.0, height: DEFAULT_FOLIAGE_HEIGHT }
	}
}

impl FoliageSpec {
	pub fn new(radius: f32, height: f32) -> Self {
		Self { radius, height }
	}

	pub fn spherical(radius: f32) -> Self {
		Self::new(radius, DEFAULT_FOLIAGE_HEIGHT)
	}
}

/// Color noise frequencies for each part.
///
/// An unset frequency is not forwarded, so that generator keeps its own default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSpec {
	pub trunk_color_noise_freq: Option<f32>,
	pub foliage_color_noise_freq: Option<f32>,
}

/// Everything needed to compose one tree.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
	/// Center of the trunk root
	pub position: Vec3,
	pub trunk: TrunkSpec,
	pub foliage: FoliageSpec,
	pub noise: NoiseSpec,
}

impl TreeConfig {
	pub fn new(position: Vec3) -> Self {
		Self { position, ..Self::default() }
	}

	pub fn with_position(mut self, position: Vec3) -> Self {
		self.position = position;
		self
	}

	pub fn with_trunk(mut self, trunk: TrunkSpec) -> Self {
		self.trunk = trunk;
		self
	}

	pub fn with_foliage(mut self, foliage: FoliageSpec) -> Self {
		self.foliage = foliage;
		self
	}

	pub fn with_noise(mut self, noise: NoiseSpec) -> Self {
		self.noise = noise;
		self
	}

	pub fn foliage_center(&self) -> Vec3 {
		foliage_center(self.position, self.trunk.height, self.foliage.radius)
	}
}
