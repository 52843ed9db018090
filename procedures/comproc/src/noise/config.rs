use bevy::prelude::*;
use noise::{NoiseFn, Perlin, Seedable};
use std::fmt::Debug;

/// A seeded 3D noise source scaled by a frequency and an amplitude.
///
/// Generators use it for color noise: the sample on the unit interval picks a
/// position on a [`crate::ColorGradient`].
#[derive(Clone)]
pub struct NoiseConfig<N: NoiseFn<f64, 3> + Seedable = Perlin> {
	pub noise: N,
	pub frequency: f32,
	pub amplitude: f32,
}

impl<N: NoiseFn<f64, 3> + Seedable> Debug for NoiseConfig<N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"NoiseConfig<{}> {{ seed: {}, frequency: {}, amplitude: {} }}",
			std::any::type_name::<N>(),
			self.noise.seed(),
			self.frequency,
			self.amplitude
		)
	}
}

impl<N: NoiseFn<f64, 3> + Seedable + Default> Default for NoiseConfig<N> {
	fn default() -> Self {
		Self { noise: N::default(), frequency: 0.1, amplitude: 1.0 }
	}
}

impl<N: NoiseFn<f64, 3> + Seedable> PartialEq for NoiseConfig<N> {
	fn eq(&self, other: &Self) -> bool {
		self.frequency == other.frequency
			&& self.amplitude == other.amplitude
			&& self.noise.seed() == other.noise.seed()
	}
}

impl<N: NoiseFn<f64, 3> + Seedable> NoiseConfig<N> {
	pub fn new(noise: N) -> Self {
		Self { noise, frequency: 0.1, amplitude: 1.0 }
	}

	pub fn with_frequency(mut self, frequency: f32) -> Self {
		self.frequency = frequency;
		self
	}

	pub fn with_amplitude(mut self, amplitude: f32) -> Self {
		self.amplitude = amplitude;
		self
	}

	pub fn with_seed(mut self, seed: u32) -> Self {
		self.noise = self.noise.set_seed(seed);
		self
	}

	/// Raw sample at `position` scaled by the frequency, roughly in [-1, 1].
	pub fn sample(&self, position: Vec3) -> f64 {
		let frequency = self.frequency as f64;
		self.noise.get([
			position.x as f64 * frequency,
			position.y as f64 * frequency,
			position.z as f64 * frequency,
		])
	}

	/// Sample remapped onto [0, 1].
	pub fn sample_unit(&self, position: Vec3) -> f64 {
		(self.sample(position) * 0.5 + 0.5).clamp(0.0, 1.0)
	}

	/// Sample scaled by the amplitude.
	pub fn sample_amp(&self, position: Vec3) -> f64 {
		self.sample(position) * self.amplitude as f64
	}
}
