//! Stub generators that record every call into a shared log and emit one marker
//! triangle per shape.

use bevy::color::LinearRgba;
use bevy::prelude::*;
use comproc::{
	ColorGradient, CylinderGenerator, FromMeshContext, GeneratorError, IcoSphereGenerator,
	MeshBatch, MeshContext, ShapeGenerator,
};
use std::sync::{Arc, Mutex};

pub const TRUNK_VERTICES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
	Trunk,
	Foliage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
	Center(Vec3),
	VertexNoiseFreq(f32),
	ColorNoiseFreq(f32),
	Height(f32),
	Radius(f32),
	MaxSegmentHeight(f32),
	RadialSegments(u32),
	SphereRadius(f32, f32),
	RecursionLevel(u32),
	Generate,
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<(Part, Call)>>>);

impl CallLog {
	fn record(&self, part: Part, call: Call) {
		self.0.lock().unwrap().push((part, call));
	}

	pub fn entries(&self) -> Vec<(Part, Call)> {
		self.0.lock().unwrap().clone()
	}

	pub fn calls(&self, part: Part) -> Vec<Call> {
		self.entries()
			.into_iter()
			.filter(|(p, _)| *p == part)
			.map(|(_, call)| call)
			.collect()
	}
}

/// Records calls and emits the triangle (root, top, rim point).
pub struct RecordingCylinder {
	log: CallLog,
	gradient: ColorGradient,
	center: Vec3,
	height: f32,
	radius: f32,
}

impl RecordingCylinder {
	pub fn with_log(log: CallLog) -> Self {
		Self { log, gradient: ColorGradient::default(), center: Vec3::ZERO, height: 0.0, radius: 0.0 }
	}
}

impl<'a> FromMeshContext<'a> for RecordingCylinder {
	fn from_context(context: MeshContext<'a>) -> Self {
		Self { gradient: context.gradient.clone(), ..Self::with_log(CallLog::default()) }
	}
}

impl ShapeGenerator for RecordingCylinder {
	fn set_center(&mut self, center: Vec3) -> &mut Self {
		self.log.record(Part::Trunk, Call::Center(center));
		self.center = center;
		self
	}

	fn set_vertex_noise_freq(&mut self, freq: f32) -> &mut Self {
		self.log.record(Part::Trunk, Call::VertexNoiseFreq(freq));
		self
	}

	fn set_color_noise_freq(&mut self, freq: f32) -> &mut Self {
		self.log.record(Part::Trunk, Call::ColorNoiseFreq(freq));
		self
	}

	fn generate(&mut self) -> Result<MeshBatch, GeneratorError> {
		self.log.record(Part::Trunk, Call::Generate);
		if self.radius <= 0.0 {
			return Err(GeneratorError::degenerate("cylinder", "radius must be positive"));
		}

		let color = self.gradient.evaluate(0.0);
		let mut batch = MeshBatch::new();
		let root = batch.push_vertex(self.center, color)?;
		let top = batch.push_vertex(self.center + Vec3::Y * self.height, color)?;
		let rim = batch.push_vertex(self.center + Vec3::X * self.radius, color)?;
		batch.push_triangle(root, top, rim)?;
		Ok(batch)
	}
}

impl CylinderGenerator for RecordingCylinder {
	fn set_height(&mut self, height: f32) -> &mut Self {
		self.log.record(Part::Trunk, Call::Height(height));
		self.height = height;
		self
	}

	fn set_radius(&mut self, radius: f32) -> &mut Self {
		self.log.record(Part::Trunk, Call::Radius(radius));
		self.radius = radius;
		self
	}

	fn set_max_segment_height(&mut self, height: f32) -> &mut Self {
		self.log.record(Part::Trunk, Call::MaxSegmentHeight(height));
		self
	}

	fn set_radial_segments(&mut self, segments: u32) -> &mut Self {
		self.log.record(Part::Trunk, Call::RadialSegments(segments));
		self
	}
}

/// Records calls and emits the triangle (bottom pole, top pole, rim point).
pub struct RecordingIcoSphere {
	log: CallLog,
	gradient: ColorGradient,
	center: Vec3,
	radius: f32,
	height_multiplier: f32,
}

impl RecordingIcoSphere {
	pub fn with_log(log: CallLog) -> Self {
		Self {
			log,
			gradient: ColorGradient::default(),
			center: Vec3::ZERO,
			radius: 0.0,
			height_multiplier: 1.0,
		}
	}
}

impl<'a> FromMeshContext<'a> for RecordingIcoSphere {
	fn from_context(context: MeshContext<'a>) -> Self {
		Self { gradient: context.gradient.clone(), ..Self::with_log(CallLog::default()) }
	}
}

impl ShapeGenerator for RecordingIcoSphere {
	fn set_center(&mut self, center: Vec3) -> &mut Self {
		self.log.record(Part::Foliage, Call::Center(center));
		self.center = center;
		self
	}

	fn set_vertex_noise_freq(&mut self, freq: f32) -> &mut Self {
		self.log.record(Part::Foliage, Call::VertexNoiseFreq(freq));
		self
	}

	fn set_color_noise_freq(&mut self, freq: f32) -> &mut Self {
		self.log.record(Part::Foliage, Call::ColorNoiseFreq(freq));
		self
	}

	fn generate(&mut self) -> Result<MeshBatch, GeneratorError> {
		self.log.record(Part::Foliage, Call::Generate);
		if self.radius <= 0.0 {
			return Err(GeneratorError::degenerate("icosphere", "radius must be positive"));
		}

		let color: LinearRgba = self.gradient.evaluate(1.0);
		let half_height = Vec3::Y * self.radius * self.height_multiplier;
		let mut batch = MeshBatch::new();
		let bottom = batch.push_vertex(self.center - half_height, color)?;
		let top = batch.push_vertex(self.center + half_height, color)?;
		let rim = batch.push_vertex(self.center + Vec3::X * self.radius, color)?;
		batch.push_triangle(bottom, top, rim)?;
		Ok(batch)
	}
}

impl IcoSphereGenerator for RecordingIcoSphere {
	fn set_radius(&mut self, radius: f32, height_multiplier: f32) -> &mut Self {
		self.log.record(Part::Foliage, Call::SphereRadius(radius, height_multiplier));
		self.radius = radius;
		self.height_multiplier = height_multiplier;
		self
	}

	fn set_recursion_level(&mut self, level: u32) -> &mut Self {
		self.log.record(Part::Foliage, Call::RecursionLevel(level));
		self
	}
}
