//! Stylized tree composition.
//!
//! A tree is a trunk cylinder with a canopy icosphere resting on top of it. The
//! shapes themselves come from [`comproc`] generators; this crate decides what each
//! generator is asked for and merges what they emit.

pub mod error;
pub mod forest;
pub mod tree;

pub use error::TreeError;
pub use forest::Forest;
pub use tree::{
	composer::{generate_tree, TreeComposer},
	config::{FoliageSpec, NoiseSpec, TreeConfig, TrunkSpec},
	placement::foliage_center,
};
