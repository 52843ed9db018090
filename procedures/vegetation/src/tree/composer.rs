use crate::error::TreeError;
use crate::tree::config::{FoliageSpec, TreeConfig, DEFAULT_FOLIAGE_HEIGHT};
use bevy::prelude::*;
use comproc::{
	ColorGradient, CylinderGenerator, FromMeshContext, IcoSphereGenerator, MeshBatch, MeshContext,
};

/// Upper bound on the height of one trunk segment along the trunk axis.
pub const TRUNK_MAX_SEGMENT_HEIGHT: f32 = 5.0;

/// Sides of the trunk cross-section.
pub const TRUNK_RADIAL_SEGMENTS: u32 = 7;

/// Subdivision depth of the canopy icosphere.
pub const FOLIAGE_RECURSION_LEVEL: u32 = 1;

/// Vertex noise frequency, shared by trunk and canopy.
pub const VERTEX_NOISE_FREQ: f32 = 0.1;

/// Composes the trunk and canopy of one tree.
///
/// The composer only derives parameters; `T` and `F` produce the geometry.
/// It is not `Clone` and [`TreeComposer::generate`] consumes it, so a composer
/// generates at most once:
///
/// ```compile_fail
/// use comproc::{CylinderGenerator, IcoSphereGenerator};
/// use vegetation::TreeComposer;
///
/// fn assert_clone<C: Clone>() {}
///
/// fn composer_is_clone<T: CylinderGenerator + Clone, F: IcoSphereGenerator + Clone>() {
/// 	assert_clone::<TreeComposer<T, F>>();
/// }
/// ```
///
/// ```compile_fail
/// use comproc::{CylinderGenerator, IcoSphereGenerator};
/// use vegetation::TreeComposer;
///
/// fn generate_twice<T: CylinderGenerator, F: IcoSphereGenerator>(composer: TreeComposer<T, F>) {
/// 	let _ = composer.generate();
/// 	let _ = composer.generate();
/// }
/// ```
pub struct TreeComposer<T: CylinderGenerator, F: IcoSphereGenerator> {
	trunk_generator: T,
	foliage_generator: F,
	config: TreeConfig,
}

impl<T: CylinderGenerator, F: IcoSphereGenerator> TreeComposer<T, F> {
	/// Builds both generators from `context`, each with its own gradient.
	pub fn new<'a>(
		context: &MeshContext<'a>,
		trunk_gradient: &'a ColorGradient,
		foliage_gradient: &'a ColorGradient,
	) -> Self
	where
		T: FromMeshContext<'a>,
		F: FromMeshContext<'a>,
	{
		let trunk_generator = T::from_context(context.with_gradient(trunk_gradient));
		let foliage_generator = F::from_context(context.with_gradient(foliage_gradient));
		Self::from_generators(trunk_generator, foliage_generator)
	}

	pub fn from_generators(trunk_generator: T, foliage_generator: F) -> Self {
		Self { trunk_generator, foliage_generator, config: TreeConfig::default() }
	}

	/// Replaces every parameter with those of `config`.
	pub fn with_config(mut self, config: &TreeConfig) -> Self {
		self.config = *config;
		self
	}

	pub fn with_position(mut self, position: Vec3) -> Self {
		self.config.position = position;
		self
	}

	pub fn with_trunk_height(mut self, height: f32) -> Self {
		self.config.trunk.height = height;
		self
	}

	pub fn with_trunk_radius(mut self, radius: f32) -> Self {
		self.config.trunk.radius = radius;
		self
	}

	/// Spherical canopy of `radius`.
	pub fn with_foliage_radius(self, radius: f32) -> Self {
		self.with_foliage_radius_and_height(radius, DEFAULT_FOLIAGE_HEIGHT)
	}

	pub fn with_foliage_radius_and_height(mut self, radius: f32, height: f32) -> Self {
		self.config.foliage = FoliageSpec::new(radius, height);
		self
	}

	pub fn with_trunk_color_noise_freq(mut self, freq: f32) -> Self {
		self.config.noise.trunk_color_noise_freq = Some(freq);
		self
	}

	pub fn with_foliage_color_noise_freq(mut self, freq: f32) -> Self {
		self.config.noise.foliage_color_noise_freq = Some(freq);
		self
	}

	pub fn config(&self) -> &TreeConfig {
		&self.config
	}

	pub fn foliage_center(&self) -> Vec3 {
		self.config.foliage_center()
	}

	/// Generates the trunk, then the canopy, and returns them as one batch.
	pub fn generate(self) -> Result<MeshBatch, TreeError> {
		generate_tree(&self.config, self.trunk_generator, self.foliage_generator)
	}
}

/// Generates the tree described by `config` with the given generators.
///
/// The trunk is generated first and its geometry leads the returned batch; the
/// canopy follows with its indices shifted past the trunk's vertices. A generator
/// error stops composition and is returned tagged with its part.
pub fn generate_tree<T: CylinderGenerator, F: IcoSphereGenerator>(
	config: &TreeConfig,
	mut trunk_generator: T,
	mut foliage_generator: F,
) -> Result<MeshBatch, TreeError> {
	log::debug!(
		"generating trunk at {} (height {}, radius {})",
		config.position,
		config.trunk.height,
		config.trunk.radius
	);

	if let Some(freq) = config.noise.trunk_color_noise_freq {
		trunk_generator.set_color_noise_freq(freq);
	}
	let mut batch = trunk_generator
		.set_center(config.position)
		.set_height(config.trunk.height)
		.set_radius(config.trunk.radius)
		.set_max_segment_height(TRUNK_MAX_SEGMENT_HEIGHT)
		.set_radial_segments(TRUNK_RADIAL_SEGMENTS)
		.set_vertex_noise_freq(VERTEX_NOISE_FREQ)
		.generate()
		.map_err(TreeError::Trunk)?;

	let center = config.foliage_center();
	log::debug!(
		"generating foliage at {} (radius {}, height {})",
		center,
		config.foliage.radius,
		config.foliage.height
	);

	if let Some(freq) = config.noise.foliage_color_noise_freq {
		foliage_generator.set_color_noise_freq(freq);
	}
	let foliage = foliage_generator
		.set_center(center)
		.set_radius(config.foliage.radius, config.foliage.height)
		.set_recursion_level(FOLIAGE_RECURSION_LEVEL)
		.set_vertex_noise_freq(VERTEX_NOISE_FREQ)
		.generate()
		.map_err(TreeError::Foliage)?;

	batch.append(foliage)?;
	log::trace!("tree emitted {} vertices", batch.vertex_count());

	Ok(batch)
}
