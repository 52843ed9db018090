use crate::noise::config::NoiseConfig;
use bevy::color::LinearRgba;
use bevy::prelude::*;
use noise::{NoiseFn, Seedable};
use serde::{Deserialize, Serialize};

/// A color pinned at a position on the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
	pub key: f32,
	pub color: LinearRgba,
}

impl GradientStop {
	pub fn new(key: f32, color: LinearRgba) -> Self {
		Self { key, color }
	}
}

/// Maps a scalar sample (a normalized height, a noise value) to a color.
///
/// Stops are kept sorted by key. Samples between two stops are interpolated
/// linearly in linear RGB; samples outside the stops take the nearest end color.
/// An empty gradient is opaque white.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<GradientStop>", into = "Vec<GradientStop>")]
pub struct ColorGradient {
	stops: Vec<GradientStop>,
}

impl From<Vec<GradientStop>> for ColorGradient {
	fn from(stops: Vec<GradientStop>) -> Self {
		Self::new(stops)
	}
}

impl From<ColorGradient> for Vec<GradientStop> {
	fn from(gradient: ColorGradient) -> Self {
		gradient.stops
	}
}

impl ColorGradient {
	pub fn new(mut stops: Vec<GradientStop>) -> Self {
		stops.sort_by(|a, b| a.key.total_cmp(&b.key));
		Self { stops }
	}

	/// Spreads the colors evenly over [0, 1], first color at 0.
	pub fn from_colors(colors: impl IntoIterator<Item = LinearRgba>) -> Self {
		let colors: Vec<LinearRgba> = colors.into_iter().collect();
		let last = colors.len().saturating_sub(1).max(1) as f32;
		let stops = colors
			.into_iter()
			.enumerate()
			.map(|(i, color)| GradientStop::new(i as f32 / last, color))
			.collect();
		Self::new(stops)
	}

	pub fn with_stop(mut self, key: f32, color: LinearRgba) -> Self {
		let at = self.stops.partition_point(|stop| stop.key <= key);
		self.stops.insert(at, GradientStop::new(key, color));
		self
	}

	pub fn stops(&self) -> &[GradientStop] {
		&self.stops
	}

	pub fn evaluate(&self, t: f32) -> LinearRgba {
		let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
			return LinearRgba::WHITE;
		};

		// a NaN sample (0 / 0 on a flat shape) takes the lower end
		if t.is_nan() || t <= first.key {
			return first.color;
		}
		if t >= last.key {
			return last.color;
		}

		// first.key < t < last.key, so there are at least two stops
		let upper = self.stops.partition_point(|stop| stop.key <= t);
		let a = self.stops[upper - 1];
		let b = self.stops[upper];

		let span = b.key - a.key;
		if span <= f32::EPSILON {
			return b.color;
		}

		lerp(a.color, b.color, (t - a.key) / span)
	}

	/// Evaluates the gradient at the color noise sampled at `position`.
	pub fn evaluate_noisy<N: NoiseFn<f64, 3> + Seedable>(
		&self,
		position: Vec3,
		noise: &NoiseConfig<N>,
	) -> LinearRgba {
		self.evaluate(noise.sample_unit(position) as f32)
	}
}

fn lerp(a: LinearRgba, b: LinearRgba, f: f32) -> LinearRgba {
	LinearRgba::new(
		a.red + (b.red - a.red) * f,
		a.green + (b.green - a.green) * f,
		a.blue + (b.blue - a.blue) * f,
		a.alpha + (b.alpha - a.alpha) * f,
	)
}
