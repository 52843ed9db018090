use bevy::prelude::*;

/// Center of the canopy of a tree rooted at `position`.
///
/// The canopy's bottom pole touches the trunk top, so the center sits one trunk
/// height plus one canopy radius above the root. There is no lateral offset.
pub fn foliage_center(position: Vec3, trunk_height: f32, foliage_radius: f32) -> Vec3 {
	Vec3::new(position.x, position.y + trunk_height + foliage_radius, position.z)
}
