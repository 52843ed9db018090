pub mod composer;
pub mod config;
pub mod placement;

#[cfg(test)]
pub(crate) mod recording;
