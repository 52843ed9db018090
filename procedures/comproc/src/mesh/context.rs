use crate::color::gradient::ColorGradient;
use serde::{Deserialize, Serialize};

/// Style parameters shared by every part of a composed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshStyle {
	/// Name the emitted mesh is registered under
	pub name: String,
	/// How far vertex noise may displace a vertex, in world units
	pub vertex_noise_amplitude: f32,
	/// How far color noise may move a sample along the gradient
	pub color_noise_amplitude: f32,
}

impl Default for MeshStyle {
	fn default() -> Self {
		Self { name: String::new(), vertex_noise_amplitude: 0.05, color_noise_amplitude: 0.1 }
	}
}

impl MeshStyle {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), ..Self::default() }
	}

	pub fn with_vertex_noise_amplitude(mut self, amplitude: f32) -> Self {
		self.vertex_noise_amplitude = amplitude;
		self
	}

	pub fn with_color_noise_amplitude(mut self, amplitude: f32) -> Self {
		self.color_noise_amplitude = amplitude;
		self
	}
}

/// What a generator draws with: the style and the gradient coloring its vertices.
///
/// Both are borrowed; the caller owns them and they must outlive every generator
/// built from this context.
#[derive(Debug, Clone, Copy)]
pub struct MeshContext<'a> {
	pub style: &'a MeshStyle,
	pub gradient: &'a ColorGradient,
}

impl<'a> MeshContext<'a> {
	pub fn new(style: &'a MeshStyle, gradient: &'a ColorGradient) -> Self {
		Self { style, gradient }
	}

	/// Same style, different gradient.
	pub fn with_gradient(&self, gradient: &'a ColorGradient) -> Self {
		Self { style: self.style, gradient }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bevy::color::LinearRgba;

	#[test]
	fn test_with_gradient_shares_style() {
		let style = MeshStyle::new("tree");
		let bark = ColorGradient::from_colors([LinearRgba::BLACK]);
		let leaves = ColorGradient::from_colors([LinearRgba::GREEN]);

		let context = MeshContext::new(&style, &bark);
		let foliage = context.with_gradient(&leaves);

		assert!(std::ptr::eq(context.style, foliage.style));
		assert_eq!(foliage.gradient, &leaves);
		assert_eq!(context.gradient, &bark);
	}

	#[test]
	fn test_style_deserializes_with_defaults() {
		let style: MeshStyle = serde_json::from_str(r#"{ "name": "oak" }"#).unwrap();
		assert_eq!(style.name, "oak");
		assert_eq!(style.vertex_noise_amplitude, MeshStyle::default().vertex_noise_amplitude);
	}
}
